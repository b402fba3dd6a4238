//! Pointer input on the map surface: pan, zoom, and marker picking.

use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use journey::commands::MarkerActivated;
use journey::config::MapConfig;
use journey::locations::LocationList;

use crate::camera::{project, world_units_per_pixel, MapCamera, DEG_SCALE};
use crate::camera_flight::CameraFlight;
use crate::egui_input_guard::egui_wants_pointer;

/// Zoom change per scroll line.
const ZOOM_STEP: f32 = 0.25;
/// Pixels of movement before a press becomes a pan instead of a click.
const DRAG_THRESHOLD: f32 = 5.0;
/// Picking radius around a marker, in screen pixels.
const PICK_RADIUS_PX: f32 = 24.0;

/// Tracks left-button drag state: differentiates click from drag.
///
/// `is_dragging` survives the release so the picking system (which runs
/// after the pan system) can tell a completed drag from a click; it resets
/// on the next press.
#[derive(Resource, Default)]
pub struct PointerDrag {
    pressed: bool,
    start_pos: Vec2,
    last_pos: Vec2,
    is_dragging: bool,
}

impl PointerDrag {
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }
}

/// Left-mouse drag: pan the view center (with threshold to distinguish
/// clicks).
pub fn pointer_pan(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    config: Res<MapConfig>,
    mut drag: ResMut<PointerDrag>,
    mut camera: ResMut<MapCamera>,
    mut flight: ResMut<CameraFlight>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    if buttons.just_pressed(MouseButton::Left) && !egui_wants_pointer(&mut contexts) {
        if let Some(pos) = window.cursor_position() {
            drag.pressed = true;
            drag.start_pos = pos;
            drag.last_pos = pos;
            drag.is_dragging = false;
        }
    }

    if buttons.just_released(MouseButton::Left) {
        drag.pressed = false;
    }

    if drag.pressed {
        if let Some(pos) = window.cursor_position() {
            if !drag.is_dragging && (pos - drag.start_pos).length() > DRAG_THRESHOLD {
                drag.is_dragging = true;
                drag.last_pos = pos;
                // The user takes the camera; abandon any scripted flight.
                flight.cancel();
            }

            if drag.is_dragging {
                let delta = pos - drag.last_pos;
                let degrees_per_pixel = world_units_per_pixel(camera.zoom) / DEG_SCALE;
                // Screen y grows downward; latitude grows upward.
                camera.center.x -= delta.x * degrees_per_pixel;
                camera.center.y += delta.y * degrees_per_pixel;
                camera.clamp_to(&config);
                drag.last_pos = pos;
            }
        }
    }
}

/// Scroll wheel: zoom the view.
pub fn wheel_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    config: Res<MapConfig>,
    mut camera: ResMut<MapCamera>,
    mut flight: ResMut<CameraFlight>,
) {
    let mut dy = 0.0;
    for evt in scroll_evts.read() {
        dy += match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
    }
    if dy == 0.0 || egui_wants_pointer(&mut contexts) {
        return;
    }
    flight.cancel();
    camera.zoom += dy * ZOOM_STEP;
    camera.clamp_to(&config);
}

/// Left click (not drag): activate the nearest marker within picking range.
#[allow(clippy::too_many_arguments)]
pub fn pick_marker(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    mut contexts: EguiContexts,
    drag: Res<PointerDrag>,
    map: Res<MapCamera>,
    locations: Res<LocationList>,
    mut activations: EventWriter<MarkerActivated>,
) {
    if !buttons.just_released(MouseButton::Left) || drag.is_dragging() {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        return;
    }
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };
    let Some(screen_pos) = window.cursor_position() else {
        return;
    };
    let Ok(world) = camera.viewport_to_world_2d(cam_transform, screen_pos) else {
        return;
    };

    let pick_radius = PICK_RADIUS_PX * world_units_per_pixel(map.zoom);
    let mut best: Option<(u32, f32)> = None;
    for loc in locations.iter() {
        let dist = project(loc.lon_lat()).distance(world);
        if dist <= pick_radius && best.map_or(true, |(_, d)| dist < d) {
            best = Some((loc.id, dist));
        }
    }
    if let Some((id, _)) = best {
        activations.send(MarkerActivated(id));
    }
}
