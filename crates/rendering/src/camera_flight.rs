//! Duration-based camera flights.
//!
//! The sequencer commands the camera with [`FlyTo`] events; this module owns
//! the tween that carries them out. A new command preempts the one in
//! flight, and pointer input cancels it outright; the user always wins the
//! camera.

use bevy::prelude::*;

use journey::commands::FlyTo;

use crate::camera::MapCamera;

#[derive(Debug, Clone, Copy)]
struct Flight {
    from_center: Vec2,
    from_zoom: f32,
    to_center: Vec2,
    to_zoom: f32,
    elapsed: f32,
    duration: f32,
}

/// The in-flight camera tween, if any.
#[derive(Resource, Default)]
pub struct CameraFlight(Option<Flight>);

impl CameraFlight {
    pub fn in_flight(&self) -> bool {
        self.0.is_some()
    }

    /// Abandon the current flight, leaving the camera where it is.
    pub fn cancel(&mut self) {
        self.0 = None;
    }
}

/// Cubic ease-in-out: the accelerate-then-settle feel of a map fly-to.
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// System: capture [`FlyTo`] commands into the flight tween.
pub fn begin_flights(
    mut commands_in: EventReader<FlyTo>,
    camera: Res<MapCamera>,
    mut flight: ResMut<CameraFlight>,
) {
    // Last command in a frame wins.
    let Some(cmd) = commands_in.read().last() else {
        return;
    };
    flight.0 = Some(Flight {
        from_center: camera.center,
        from_zoom: camera.zoom,
        to_center: cmd.center,
        to_zoom: cmd.zoom,
        elapsed: 0.0,
        duration: (cmd.duration_ms as f32 / 1000.0).max(f32::EPSILON),
    });
}

/// System: advance the tween, landing exactly on the target at the end.
pub fn tick_flights(
    time: Res<Time>,
    mut flight: ResMut<CameraFlight>,
    mut camera: ResMut<MapCamera>,
) {
    let Some(f) = flight.0.as_mut() else {
        return;
    };
    f.elapsed += time.delta_secs();
    let t = (f.elapsed / f.duration).min(1.0);
    let eased = ease_in_out_cubic(t);
    camera.center = f.from_center.lerp(f.to_center, eased);
    camera.zoom = f.from_zoom + (f.to_zoom - f.from_zoom) * eased;

    if t >= 1.0 {
        camera.center = f.to_center;
        camera.zoom = f.to_zoom;
        flight.0 = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_hits_the_endpoints() {
        assert!(ease_in_out_cubic(0.0).abs() < 1e-6);
        assert!((ease_in_out_cubic(1.0) - 1.0).abs() < 1e-6);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = ease_in_out_cubic(i as f32 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_cancel_clears_flight() {
        let mut flight = CameraFlight(Some(Flight {
            from_center: Vec2::ZERO,
            from_zoom: 5.0,
            to_center: Vec2::ONE,
            to_zoom: 12.0,
            elapsed: 0.0,
            duration: 2.4,
        }));
        assert!(flight.in_flight());
        flight.cancel();
        assert!(!flight.in_flight());
    }
}
