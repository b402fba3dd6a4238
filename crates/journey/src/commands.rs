//! The small command protocol between the sequencer and its surroundings.
//!
//! The sequencer never touches the rendering surface directly: it emits
//! [`FlyTo`] events and updates [`crate::route::RouteState`], and the
//! rendering crate consumes both. In the other direction the surface reports
//! marker clicks as [`MarkerActivated`] events. Substituting a different map
//! renderer means reimplementing the consumers of these two channels and
//! nothing else.

use bevy::prelude::*;

/// User request to advance the journey (the single control button).
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct AdvanceJourney;

/// Camera-movement command: ease the view to `center`/`zoom` over
/// `duration_ms`.
#[derive(Event, Debug, Clone, Copy)]
pub struct FlyTo {
    /// Target view center, `[lon, lat]` degrees.
    pub center: Vec2,
    /// Target zoom level.
    pub zoom: f32,
    pub duration_ms: u64,
}

/// A location marker was clicked; carries the location id (not its index).
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerActivated(pub u32);
