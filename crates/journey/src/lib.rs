use bevy::prelude::*;

pub mod app_state;
pub mod commands;
pub mod config;
pub mod locations;
pub mod route;
pub mod sequencer;

use app_state::AppState;
use commands::{AdvanceJourney, FlyTo, MarkerActivated};
use config::MapConfig;
use locations::{LocationList, SelectedLocation};
use route::RouteState;
use sequencer::{JourneySettings, JourneyState};

pub struct JourneyPlugin;

impl Plugin for JourneyPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_event::<AdvanceJourney>()
            .add_event::<FlyTo>()
            .add_event::<MarkerActivated>()
            .init_resource::<MapConfig>()
            .init_resource::<JourneySettings>()
            .init_resource::<JourneyState>()
            .init_resource::<RouteState>()
            .init_resource::<SelectedLocation>()
            .insert_resource(LocationList::load_embedded())
            .add_systems(
                Update,
                app_state::decide_boot.run_if(in_state(AppState::Boot)),
            )
            .add_systems(
                Update,
                (
                    sequencer::auto_replay,
                    sequencer::handle_advance,
                    sequencer::drive_transition,
                )
                    .chain()
                    .run_if(in_state(AppState::Map)),
            );
    }
}
