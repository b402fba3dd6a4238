//! The thin basemap: a flat backdrop and graticule standing in for tiles.
//!
//! Real tile rendering belongs to an external map library and stays out of
//! scope; the journal only needs enough of a surface for routes and markers
//! to read against.

use bevy::prelude::*;

use journey::config::MapConfig;

use crate::camera::project;

const SEA: Color = Color::srgb(0.13, 0.18, 0.24);
const LAND_HINT: Color = Color::srgb(0.17, 0.22, 0.26);
const GRATICULE: Color = Color::srgba(0.55, 0.62, 0.70, 0.12);
const FRAME: Color = Color::srgba(0.75, 0.70, 0.55, 0.45);

/// Backdrop margin around the pannable bounds, in degrees.
const MARGIN_DEG: f32 = 8.0;

#[derive(Component)]
pub struct Basemap;

/// Spawn the backdrop quads once on entering the map.
pub fn spawn_basemap(mut commands: Commands, config: Res<MapConfig>) {
    let sw = project(config.bounds_sw - Vec2::splat(MARGIN_DEG));
    let ne = project(config.bounds_ne + Vec2::splat(MARGIN_DEG));
    let center = (sw + ne) / 2.0;

    commands.spawn((
        Basemap,
        Sprite {
            color: SEA,
            custom_size: Some(ne - sw),
            ..default()
        },
        Transform::from_translation(center.extend(-2.0)),
    ));

    // A faint inner panel over the bounds proper, so the pannable area reads
    // against the margin.
    let inner_sw = project(config.bounds_sw);
    let inner_ne = project(config.bounds_ne);
    commands.spawn((
        Basemap,
        Sprite {
            color: LAND_HINT,
            custom_size: Some(inner_ne - inner_sw),
            ..default()
        },
        Transform::from_translation(((inner_sw + inner_ne) / 2.0).extend(-1.0)),
    ));
}

/// Redraw the graticule and bounds frame each frame (gizmos are immediate
/// mode).
pub fn draw_graticule(config: Res<MapConfig>, mut gizmos: Gizmos) {
    let sw = config.bounds_sw;
    let ne = config.bounds_ne;

    for lon in (sw.x.ceil() as i32)..=(ne.x.floor() as i32) {
        gizmos.line_2d(
            project(Vec2::new(lon as f32, sw.y)),
            project(Vec2::new(lon as f32, ne.y)),
            GRATICULE,
        );
    }
    for lat in (sw.y.ceil() as i32)..=(ne.y.floor() as i32) {
        gizmos.line_2d(
            project(Vec2::new(sw.x, lat as f32)),
            project(Vec2::new(ne.x, lat as f32)),
            GRATICULE,
        );
    }

    gizmos.linestrip_2d(
        [
            sw,
            Vec2::new(ne.x, sw.y),
            ne,
            Vec2::new(sw.x, ne.y),
            sw,
        ]
        .map(project),
        FRAME,
    );
}
