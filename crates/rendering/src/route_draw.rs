//! Draws the journey's route arcs from the shared [`RouteState`].
//!
//! Travelled legs render in full; the in-flight leg renders up to the
//! current sweep fraction (the fixed-delay bridge pins that fraction to 1,
//! so the whole connecting line appears the moment the transition starts).

use bevy::prelude::*;

use journey::route::{swept_prefix, RouteState};

use crate::camera::project;

/// Route line color: torii red at 0.8 opacity.
const ROUTE: Color = Color::srgba(0.69, 0.23, 0.18, 0.8);
const ROUTE_WIDTH_PX: f32 = 4.0;

/// Route lines draw thicker than the default gizmo group.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct RouteGizmos;

pub fn configure_route_gizmos(mut store: ResMut<GizmoConfigStore>) {
    let (config, _) = store.config_mut::<RouteGizmos>();
    config.line_width = ROUTE_WIDTH_PX;
}

pub fn draw_route(route: Res<RouteState>, mut gizmos: Gizmos<RouteGizmos>) {
    for leg in route.travelled() {
        gizmos.linestrip_2d(leg.iter().map(|p| project(*p)), ROUTE);
    }

    if let Some(active) = route.active() {
        let shown = swept_prefix(active, route.progress());
        if shown.len() > 1 {
            gizmos.linestrip_2d(shown.iter().map(|p| project(*p)), ROUTE);
        }
    }
}
