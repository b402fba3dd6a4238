//! Location markers: one pin and name label per stop.
//!
//! Pins keep a constant on-screen size by rescaling with the camera zoom;
//! their tint tracks journey progress (unvisited, visited, current), and the
//! current stop gets a pulsing halo.

use bevy::prelude::*;
use bevy::sprite::Anchor;

use journey::locations::LocationList;
use journey::sequencer::JourneyState;

use crate::camera::{project, world_units_per_pixel, MapCamera};
use crate::camera_flight::CameraFlight;

/// Torii red, the route/marker accent of the journal.
const PIN_CURRENT: Color = Color::srgb(0.93, 0.33, 0.25);
const PIN_VISITED: Color = Color::srgb(0.69, 0.23, 0.18);
const PIN_UNVISITED: Color = Color::srgb(0.42, 0.45, 0.50);
const LABEL: Color = Color::srgb(0.92, 0.90, 0.84);

/// Pin footprint in screen pixels (the transform scale converts to world
/// units per frame).
const PIN_SIZE_PX: Vec2 = Vec2::new(14.0, 20.0);
const LABEL_OFFSET_PX: f32 = -14.0;

#[derive(Component)]
pub struct MarkerPin {
    pub index: usize,
}

/// Spawn one pin per stop on entering the map.
pub fn spawn_markers(mut commands: Commands, locations: Res<LocationList>) {
    for (index, loc) in locations.iter().enumerate() {
        commands
            .spawn((
                MarkerPin { index },
                Sprite {
                    color: PIN_UNVISITED,
                    custom_size: Some(PIN_SIZE_PX),
                    anchor: Anchor::BottomCenter,
                    ..default()
                },
                Transform::from_translation(project(loc.lon_lat()).extend(1.0)),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(loc.name.clone()),
                    TextFont {
                        font_size: 13.0,
                        ..default()
                    },
                    TextColor(LABEL),
                    Transform::from_translation(Vec3::new(0.0, LABEL_OFFSET_PX, 0.1)),
                ));
            });
    }
}

/// Keep pins a constant screen size as the camera zooms.
pub fn scale_markers(map: Res<MapCamera>, mut pins: Query<&mut Transform, With<MarkerPin>>) {
    if !map.is_changed() {
        return;
    }
    let scale = world_units_per_pixel(map.zoom);
    for mut transform in &mut pins {
        transform.scale = Vec3::splat(scale);
    }
}

/// Tint pins by journey progress.
pub fn tint_markers(
    journey: Res<JourneyState>,
    locations: Res<LocationList>,
    mut pins: Query<(&MarkerPin, &mut Sprite)>,
) {
    if !journey.is_changed() {
        return;
    }
    let visited = journey.visited_count(locations.len());
    let current = journey.current_index(locations.len());
    for (pin, mut sprite) in &mut pins {
        sprite.color = if current == Some(pin.index) {
            PIN_CURRENT
        } else if pin.index < visited {
            PIN_VISITED
        } else {
            PIN_UNVISITED
        };
    }
}

/// Pulsing halo around the current stop while the journey is settled there.
///
/// Held back while a camera flight is still in progress so the ring appears
/// once the view lands.
pub fn pulse_current_marker(
    time: Res<Time>,
    journey: Res<JourneyState>,
    locations: Res<LocationList>,
    map: Res<MapCamera>,
    flight: Res<CameraFlight>,
    mut gizmos: Gizmos,
) {
    if journey.is_transitioning() || flight.in_flight() {
        return;
    }
    let Some(current) = journey.current_index(locations.len()) else {
        return;
    };

    // Oscillate radius and alpha in opposition, a soft breathing ring.
    let pulse = (time.elapsed_secs() * 2.0).sin() * 0.5 + 0.5;
    let radius = (18.0 + pulse * 10.0) * world_units_per_pixel(map.zoom);
    let alpha = 0.45 - pulse * 0.3;
    gizmos.circle_2d(
        project(locations[current].lon_lat()),
        radius,
        PIN_CURRENT.with_alpha(alpha),
    );
}
