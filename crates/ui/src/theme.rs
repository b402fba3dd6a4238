use bevy_egui::{egui, EguiContexts};

/// Warm journal theme for all egui chrome: dark paper tones with a torii-red
/// accent.
pub fn apply_journal_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    let panel = egui::Color32::from_rgb(40, 36, 33);
    let inactive = egui::Color32::from_rgb(58, 52, 47);
    let hover = egui::Color32::from_rgb(84, 72, 63);
    let accent = egui::Color32::from_rgb(176, 58, 46);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = accent;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = accent;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(32, 29, 27);
    style.visuals.faint_bg_color = egui::Color32::from_rgb(46, 42, 38);

    style.visuals.selection.bg_fill = accent;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, accent);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
