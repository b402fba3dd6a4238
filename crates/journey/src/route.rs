//! Route geometry: the curved line drawn between consecutive stops.
//!
//! [`curve`] is a pure function producing a quadratic Bézier arc between two
//! coordinate pairs; [`RouteState`] is the shared geometry the sequencer
//! writes and the rendering surface reads, the same data/draw split the rest
//! of the map uses.

use bevy::prelude::*;

/// Offset of the Bézier control point, as a fraction of the chord length.
pub const CURVE_OFFSET: f32 = 0.3;
/// Number of sample steps per arc (the polyline has `CURVE_SAMPLES + 1`
/// points, inclusive of both endpoints).
pub const CURVE_SAMPLES: usize = 100;

/// Quadratic Bézier arc from `from` to `to`, in raw coordinate-degree space.
///
/// The control point is the chord midpoint pushed perpendicular to the chord
/// by [`CURVE_OFFSET`] times the chord length, so the line bows outward
/// instead of cutting straight across. Distances are Euclidean in degrees,
/// not geodesic; the arc is display geometry, not a flight path.
///
/// `curve(a, a)` degenerates to a zero-length arc whose points all equal
/// `a`; callers must tolerate this.
pub fn curve(from: Vec2, to: Vec2) -> Vec<Vec2> {
    let mid = (from + to) / 2.0;
    let control = mid + (to - from).perp() * CURVE_OFFSET;

    (0..=CURVE_SAMPLES)
        .map(|i| {
            let t = i as f32 / CURVE_SAMPLES as f32;
            let a = from.lerp(control, t);
            let b = control.lerp(to, t);
            a.lerp(b, t)
        })
        .collect()
}

/// The prefix of `points` revealed at sweep fraction `progress` in [0, 1].
///
/// Always yields at least one point so a zero-progress leg still anchors at
/// its start.
pub fn swept_prefix(points: &[Vec2], progress: f32) -> &[Vec2] {
    if points.is_empty() {
        return points;
    }
    let last = points.len() - 1;
    let shown = (progress.clamp(0.0, 1.0) * last as f32).round() as usize;
    &points[..=shown.min(last)]
}

/// Shared route geometry: travelled legs plus the leg currently in flight.
///
/// Written only by the sequencer; the rendering crate draws it verbatim.
#[derive(Resource, Debug, Default)]
pub struct RouteState {
    travelled: Vec<Vec<Vec2>>,
    active: Option<Vec<Vec2>>,
    progress: f32,
}

impl RouteState {
    /// Drop all geometry (journey begin or relive reset).
    pub fn clear(&mut self) {
        self.travelled.clear();
        self.active = None;
        self.progress = 0.0;
    }

    /// Install the arc for a new in-flight leg. With `show_full` the whole
    /// connecting line appears immediately (the fixed-delay bridge);
    /// otherwise the sweep starts from zero.
    pub fn begin_leg(&mut self, arc: Vec<Vec2>, show_full: bool) {
        self.active = Some(arc);
        self.progress = if show_full { 1.0 } else { 0.0 };
    }

    /// Advance the sweep fraction. Returns true once the full leg is shown.
    pub fn sweep(&mut self, step: f32) -> bool {
        self.progress = (self.progress + step).min(1.0);
        self.progress >= 1.0
    }

    /// Move the in-flight leg into the travelled set (arrival committed).
    pub fn settle_leg(&mut self) {
        if let Some(leg) = self.active.take() {
            self.travelled.push(leg);
        }
        self.progress = 0.0;
    }

    pub fn travelled(&self) -> &[Vec<Vec2>] {
        &self.travelled
    }

    pub fn active(&self) -> Option<&[Vec2]> {
        self.active.as_deref()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKYO: Vec2 = Vec2::new(139.769, 35.6804);
    const KANAZAWA: Vec2 = Vec2::new(136.6503, 36.5611);

    /// Distance from `p` to the infinite line through `a` and `b`.
    fn chord_distance(a: Vec2, b: Vec2, p: Vec2) -> f32 {
        let chord = b - a;
        (chord.perp_dot(p - a)).abs() / chord.length()
    }

    #[test]
    fn test_curve_endpoints_are_exact() {
        let arc = curve(TOKYO, KANAZAWA);
        assert_eq!(arc.len(), CURVE_SAMPLES + 1);
        assert_eq!(arc[0], TOKYO);
        assert_eq!(*arc.last().unwrap(), KANAZAWA);
    }

    #[test]
    fn test_curve_bows_off_the_chord() {
        let arc = curve(TOKYO, KANAZAWA);
        for p in &arc[1..arc.len() - 1] {
            assert!(
                chord_distance(TOKYO, KANAZAWA, *p) > 1e-4,
                "interior point {p:?} sits on the chord"
            );
        }
    }

    #[test]
    fn test_curve_apex_offset_matches_constant() {
        let arc = curve(TOKYO, KANAZAWA);
        let apex = arc[CURVE_SAMPLES / 2];
        // At t = 0.5 a quadratic Bézier sits half way between the chord
        // midpoint and the control point.
        let expected = CURVE_OFFSET / 2.0 * (KANAZAWA - TOKYO).length();
        let actual = chord_distance(TOKYO, KANAZAWA, apex);
        assert!((actual - expected).abs() < 1e-3);
    }

    #[test]
    fn test_degenerate_curve_is_all_start_point() {
        let arc = curve(TOKYO, TOKYO);
        assert!(!arc.is_empty());
        assert!(arc.iter().all(|p| *p == TOKYO));
    }

    #[test]
    fn test_swept_prefix_bounds() {
        let arc = curve(TOKYO, KANAZAWA);
        assert_eq!(swept_prefix(&arc, 0.0).len(), 1);
        assert_eq!(swept_prefix(&arc, 1.0).len(), arc.len());
        assert_eq!(swept_prefix(&arc, 2.0).len(), arc.len());
        let half = swept_prefix(&arc, 0.5).len();
        assert!(half > 1 && half < arc.len());
    }

    #[test]
    fn test_route_state_leg_lifecycle() {
        let mut route = RouteState::default();
        route.begin_leg(curve(TOKYO, KANAZAWA), false);
        assert!(route.active().is_some());
        assert!(route.progress() < f32::EPSILON);

        assert!(!route.sweep(0.4));
        assert!(route.sweep(0.7));
        assert!((route.progress() - 1.0).abs() < f32::EPSILON);

        route.settle_leg();
        assert!(route.active().is_none());
        assert_eq!(route.travelled().len(), 1);

        route.clear();
        assert!(route.travelled().is_empty());
    }

    #[test]
    fn test_fixed_delay_leg_shows_full_line() {
        let mut route = RouteState::default();
        route.begin_leg(curve(TOKYO, KANAZAWA), true);
        assert!((route.progress() - 1.0).abs() < f32::EPSILON);
    }
}
