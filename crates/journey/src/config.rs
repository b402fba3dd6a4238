//! Map configuration: view defaults, flight durations, and the display
//! credential.
//!
//! Everything except the access token is a compiled default mirroring the
//! journal's dataset. The token is resolved by the app crate (env var on
//! native, URL query parameter on WASM) and checked once at boot; a missing
//! token short-circuits into the error screen instead of a partial render.

use bevy::prelude::*;

/// Env var consulted for the map access token on native builds.
pub const TOKEN_ENV_VAR: &str = "TRAVELOGUE_MAPBOX_TOKEN";
/// URL query parameter consulted for the token on WASM builds.
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Duration of the begin / zoom-out / relive camera flights.
pub const TRANSITION_MS: u64 = 2400;
/// Duration of the fly-in to a location after the overview bridge.
pub const ARRIVAL_MS: u64 = 3000;
/// Zoom level when settled on a location.
pub const ARRIVAL_ZOOM: f32 = 12.0;

/// Map-display configuration, inserted by the app crate before startup.
#[derive(Resource, Debug, Clone)]
pub struct MapConfig {
    /// Map-display credential. `None` or blank fails the boot check.
    pub access_token: Option<String>,
    /// Basemap style name, shown in the window chrome.
    pub style: String,
    /// Overview center, `[lon, lat]` degrees.
    pub center: Vec2,
    /// Overview zoom level.
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    /// South-west corner of the pannable area, `[lon, lat]` degrees.
    pub bounds_sw: Vec2,
    /// North-east corner of the pannable area, `[lon, lat]` degrees.
    pub bounds_ne: Vec2,
    /// Duration of begin / zoom-out / relive flights, milliseconds.
    pub transition_ms: u64,
    /// Zoom used when settled on a location.
    pub arrival_zoom: f32,
    /// Duration of the fly-in after the overview bridge, milliseconds.
    pub arrival_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: None,
            style: "outdoors-v11".to_string(),
            center: Vec2::new(137.5, 36.5),
            zoom: 5.5,
            min_zoom: 5.0,
            max_zoom: 15.0,
            // Tight around the archipelago: Kyushu to Hokkaido.
            bounds_sw: Vec2::new(125.619_324, 27.839_037),
            bounds_ne: Vec2::new(149.744_277, 43.934_476),
            transition_ms: TRANSITION_MS,
            arrival_zoom: ARRIVAL_ZOOM,
            arrival_ms: ARRIVAL_MS,
        }
    }
}

impl MapConfig {
    /// Whether a usable display credential is present.
    pub fn has_credentials(&self) -> bool {
        self.access_token
            .as_deref()
            .is_some_and(|token| !token.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_fails_credential_check() {
        let config = MapConfig::default();
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_blank_token_fails_credential_check() {
        let config = MapConfig {
            access_token: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_token_passes_credential_check() {
        let config = MapConfig {
            access_token: Some("pk.example".to_string()),
            ..Default::default()
        };
        assert!(config.has_credentials());
    }

    #[test]
    fn test_bounds_contain_overview_center() {
        let config = MapConfig::default();
        assert!(config.center.x > config.bounds_sw.x && config.center.x < config.bounds_ne.x);
        assert!(config.center.y > config.bounds_sw.y && config.center.y < config.bounds_ne.y);
    }
}
