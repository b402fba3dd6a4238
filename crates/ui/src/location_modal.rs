//! Location detail overlay.
//!
//! Marker activations open it; the close button, a backdrop click, or Escape
//! dismiss it. Purely a display of a location's fields; the overlay holds
//! no state of its own beyond the selected index.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use journey::commands::MarkerActivated;
use journey::locations::{LocationList, SelectedLocation};

/// Map marker activations onto the selected-location state.
pub fn open_on_marker(
    mut activations: EventReader<MarkerActivated>,
    locations: Res<LocationList>,
    mut selected: ResMut<SelectedLocation>,
) {
    for MarkerActivated(id) in activations.read() {
        match locations.iter().position(|loc| loc.id == *id) {
            Some(index) => selected.0 = Some(index),
            None => warn!("marker activation for unknown location id {id}"),
        }
    }
}

/// Renders the modal while a location is selected.
pub fn location_modal_ui(
    mut contexts: EguiContexts,
    locations: Res<LocationList>,
    mut selected: ResMut<SelectedLocation>,
) {
    let Some(index) = selected.0 else {
        return;
    };
    let Some(location) = locations.get(index) else {
        selected.0 = None;
        return;
    };

    let ctx = contexts.ctx_mut();
    let mut should_close = ctx.input(|i| i.key_pressed(egui::Key::Escape));

    // Dimmed backdrop; clicking it dismisses.
    let screen_rect = ctx.screen_rect();
    egui::Area::new(egui::Id::new("location_modal_backdrop"))
        .fixed_pos(screen_rect.min)
        .order(egui::Order::Middle)
        .show(ctx, |ui| {
            let painter = ui.painter();
            painter.rect_filled(
                screen_rect,
                egui::CornerRadius::ZERO,
                egui::Color32::from_black_alpha(120),
            );
            if ui.allocate_rect(screen_rect, egui::Sense::click()).clicked() {
                should_close = true;
            }
        });

    egui::Window::new("location_detail")
        .id(egui::Id::new("location_modal"))
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(380.0)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(&location.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    if ui.button("✕").clicked() {
                        should_close = true;
                    }
                });
            });
            ui.label(egui::RichText::new(&location.dates).weak());

            if let Some(description) = &location.description {
                ui.add_space(8.0);
                ui.label(description);
            }

            if !location.photos.is_empty() {
                ui.add_space(12.0);
                ui.strong("Photos");
                for photo in &location.photos {
                    let caption = photo.caption.as_deref().unwrap_or(&photo.url);
                    let line = match &photo.taken_at {
                        Some(taken) => format!("{caption} ({taken})"),
                        None => caption.to_string(),
                    };
                    ui.label(line);
                }
            }

            ui.add_space(8.0);
        });

    if should_close {
        selected.0 = None;
    }
}
