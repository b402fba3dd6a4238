use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

use journey::config::MapConfig;
use journey::sequencer::{JourneySettings, RelivePolicy, TransitionStyle};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Travelogue".to_string(),
            resolution: (1280.0, 720.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .add_plugins((
        journey::JourneyPlugin,
        rendering::RenderingPlugin,
        ui::UiPlugin,
    ))
    .insert_resource(MapConfig {
        access_token: access_token(),
        ..Default::default()
    })
    .insert_resource(journey_settings());

    app.run();
}

/// Sequencer policy overrides, e.g. `TRAVELOGUE_TRANSITION=sweep` to animate
/// the connecting line and `TRAVELOGUE_RELIVE=replay` to replay the whole
/// journey automatically.
fn journey_settings() -> JourneySettings {
    let mut settings = JourneySettings::default();
    if std::env::var("TRAVELOGUE_TRANSITION").is_ok_and(|v| v == "sweep") {
        settings.transition_style = TransitionStyle::RouteSweep;
    }
    if std::env::var("TRAVELOGUE_RELIVE").is_ok_and(|v| v == "replay") {
        settings.relive = RelivePolicy::AutoReplay;
    }
    settings
}

/// Resolve the map display credential from the environment.
#[cfg(not(target_arch = "wasm32"))]
fn access_token() -> Option<String> {
    std::env::var(journey::config::TOKEN_ENV_VAR).ok()
}

/// On web builds the token comes from the page URL, e.g. `index.html?token=pk.xxx`.
#[cfg(target_arch = "wasm32")]
fn access_token() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(journey::config::TOKEN_QUERY_PARAM)
}
