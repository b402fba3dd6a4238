//! The single journey control.
//!
//! One button whose label is a pure function of the sequencer phase, plus a
//! small progress line naming the last stop reached. Disabled while a
//! transition is in flight; the sequencer additionally ignores advances then,
//! so the guard holds even if a click slips through a frame boundary.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use journey::commands::AdvanceJourney;
use journey::locations::LocationList;
use journey::sequencer::JourneyState;

pub fn journey_button_ui(
    mut contexts: EguiContexts,
    journey: Res<JourneyState>,
    locations: Res<LocationList>,
    mut advances: EventWriter<AdvanceJourney>,
) {
    let ctx = contexts.ctx_mut();

    egui::Area::new(egui::Id::new("journey_button"))
        .anchor(egui::Align2::CENTER_TOP, egui::Vec2::new(0.0, 16.0))
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let button = egui::Button::new(
                    egui::RichText::new(journey.button_label()).size(16.0),
                )
                .min_size(egui::Vec2::new(220.0, 36.0));

                if ui.add_enabled(!journey.is_transitioning(), button).clicked() {
                    advances.send(AdvanceJourney);
                }

                let visited = journey.visited_count(locations.len());
                if visited > 0 {
                    let stop = &locations[visited - 1];
                    ui.label(
                        egui::RichText::new(format!(
                            "Stop {} of {} · {}",
                            visited,
                            locations.len(),
                            stop.name
                        ))
                        .size(12.0)
                        .weak(),
                    );
                }
            });
        });
}
