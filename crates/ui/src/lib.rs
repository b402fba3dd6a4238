use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod error_screen;
pub mod journey_button;
pub mod location_modal;
pub mod theme;

use journey::app_state::AppState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_journal_theme)
            .add_systems(
                Update,
                (
                    journey_button::journey_button_ui,
                    location_modal::open_on_marker,
                    location_modal::location_modal_ui,
                )
                    .run_if(in_state(AppState::Map)),
            )
            .add_systems(
                Update,
                error_screen::error_screen_ui.run_if(in_state(AppState::ConfigError)),
            );
    }
}
