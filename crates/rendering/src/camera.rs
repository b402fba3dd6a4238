use bevy::prelude::*;

use journey::config::MapConfig;

/// World units per degree of longitude/latitude.
pub const DEG_SCALE: f32 = 100.0;
/// Logical tile edge for the zoom-to-pixel relation: at zoom `z` the full
/// 360° of longitude spans `TILE_SIZE * 2^z` screen pixels.
const TILE_SIZE: f32 = 512.0;

/// Flat-map camera model: a view center in degrees plus a zoom level.
///
/// This is the *actual* view state applied to the Bevy camera each frame.
/// Flights and pointer input write to it; nothing else does.
#[derive(Resource, Debug, Clone, Copy)]
pub struct MapCamera {
    /// View center, `[lon, lat]` degrees.
    pub center: Vec2,
    /// Zoom level (doubles the pixel density per +1).
    pub zoom: f32,
}

impl MapCamera {
    pub fn from_config(config: &MapConfig) -> Self {
        Self {
            center: config.center,
            zoom: config.zoom,
        }
    }

    /// Clamp center and zoom to the configured view limits.
    pub fn clamp_to(&mut self, config: &MapConfig) {
        self.center.x = self.center.x.clamp(config.bounds_sw.x, config.bounds_ne.x);
        self.center.y = self.center.y.clamp(config.bounds_sw.y, config.bounds_ne.y);
        self.zoom = self.zoom.clamp(config.min_zoom, config.max_zoom);
    }
}

/// Equirectangular projection: degrees → world units. The journal map is a
/// flat stand-in, so no mercator latitude stretch.
pub fn project(lon_lat: Vec2) -> Vec2 {
    lon_lat * DEG_SCALE
}

/// World units covered by one screen pixel at `zoom`.
pub fn world_units_per_pixel(zoom: f32) -> f32 {
    DEG_SCALE * 360.0 / (TILE_SIZE * 2.0_f32.powf(zoom))
}

pub fn setup_camera(mut commands: Commands, config: Res<MapConfig>) {
    let map = MapCamera::from_config(&config);

    commands.spawn((
        Camera2d,
        OrthographicProjection {
            scale: world_units_per_pixel(map.zoom),
            ..OrthographicProjection::default_2d()
        },
        Transform::from_translation(project(map.center).extend(0.0)),
    ));
    commands.insert_resource(map);
}

/// System: apply [`MapCamera`] state to the actual camera each frame.
pub fn apply_map_camera(
    map: Res<MapCamera>,
    mut query: Query<(&mut Transform, &mut OrthographicProjection), With<Camera2d>>,
) {
    if !map.is_changed() {
        return;
    }
    let Ok((mut transform, mut projection)) = query.get_single_mut() else {
        return;
    };
    transform.translation = project(map.center).extend(transform.translation.z);
    projection.scale = world_units_per_pixel(map.zoom);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_doubles_pixel_density() {
        let coarse = world_units_per_pixel(5.0);
        let fine = world_units_per_pixel(6.0);
        assert!((coarse / fine - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_is_linear_in_degrees() {
        let a = project(Vec2::new(137.0, 36.0));
        let b = project(Vec2::new(138.0, 37.0));
        assert!((b.x - a.x - DEG_SCALE).abs() < 1e-3);
        assert!((b.y - a.y - DEG_SCALE).abs() < 1e-3);
    }

    #[test]
    fn test_clamp_keeps_view_inside_bounds() {
        let config = MapConfig::default();
        let mut camera = MapCamera {
            center: Vec2::new(0.0, 90.0),
            zoom: 99.0,
        };
        camera.clamp_to(&config);
        assert_eq!(camera.center.x, config.bounds_sw.x);
        assert_eq!(camera.center.y, config.bounds_ne.y);
        assert_eq!(camera.zoom, config.max_zoom);
    }
}
