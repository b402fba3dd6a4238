//! Credentials-missing error screen.
//!
//! Shown instead of the map when no display token resolved at boot; names
//! both configuration channels so the launch can be fixed without reading
//! source.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use journey::config::{MapConfig, TOKEN_ENV_VAR, TOKEN_QUERY_PARAM};

pub fn error_screen_ui(mut contexts: EguiContexts, config: Res<MapConfig>) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.3);
            ui.heading("Missing map access token");
            ui.add_space(8.0);
            ui.label(format!(
                "The journal map cannot render the \"{}\" style without display credentials.",
                config.style
            ));
            ui.add_space(4.0);
            ui.label(format!(
                "Set the {TOKEN_ENV_VAR} environment variable, or pass \
                 ?{TOKEN_QUERY_PARAM}=... in the URL on web builds, and restart."
            ));
        });
    });
}
