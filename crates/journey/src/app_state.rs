//! Top-level application state machine.
//!
//! Defines [`AppState`], a Bevy [`States`] enum that governs top-level flow:
//! boot check, the map view, and the credentials-missing error screen. Map
//! and UI systems only run in [`AppState::Map`].
//!
//! The state lives here (in the `journey` crate) rather than in `app` or
//! `ui` so that all crates can gate systems on it without circular
//! dependencies.

use bevy::prelude::*;

use crate::config::MapConfig;

/// Top-level application state.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Checking configuration; no map entity exists yet.
    #[default]
    Boot,
    /// The interactive journal map.
    Map,
    /// Required display credentials are missing; only the error screen runs.
    ConfigError,
}

/// Runs while in [`AppState::Boot`]: route to the map or the error screen
/// depending on whether display credentials resolved.
pub fn decide_boot(config: Res<MapConfig>, mut next: ResMut<NextState<AppState>>) {
    if config.has_credentials() {
        info!("map credentials resolved, entering map view");
        next.set(AppState::Map);
    } else {
        warn!("no map access token; showing configuration error screen");
        next.set(AppState::ConfigError);
    }
}
