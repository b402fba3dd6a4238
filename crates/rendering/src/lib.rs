use bevy::prelude::*;

pub mod basemap;
pub mod camera;
pub mod camera_flight;
pub mod egui_input_guard;
pub mod input;
pub mod markers;
pub mod route_draw;

use journey::app_state::AppState;

use camera_flight::CameraFlight;
use input::PointerDrag;
use route_draw::RouteGizmos;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraFlight>()
            .init_resource::<PointerDrag>()
            .init_gizmo_group::<RouteGizmos>()
            .add_systems(
                Startup,
                (camera::setup_camera, route_draw::configure_route_gizmos),
            )
            .add_systems(
                OnEnter(AppState::Map),
                (basemap::spawn_basemap, markers::spawn_markers),
            )
            .add_systems(
                Update,
                (
                    input::pointer_pan,
                    input::wheel_zoom,
                    input::pick_marker,
                    camera_flight::begin_flights,
                    camera_flight::tick_flights,
                    camera::apply_map_camera,
                )
                    .chain()
                    .run_if(in_state(AppState::Map)),
            )
            .add_systems(
                Update,
                (
                    markers::scale_markers,
                    markers::tint_markers,
                    markers::pulse_current_marker,
                    basemap::draw_graticule,
                    route_draw::draw_route,
                )
                    .run_if(in_state(AppState::Map)),
            );
    }
}
