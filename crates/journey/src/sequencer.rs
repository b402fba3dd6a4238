//! Journey sequencer: the state machine that walks the itinerary.
//!
//! [`JourneyState`] owns a [`JourneyPhase`] and is its only writer. The UI
//! emits [`AdvanceJourney`]; [`handle_advance`] runs the single transition
//! function and emits the resulting camera commands; [`drive_transition`]
//! bridges the zoomed-out interval (fixed delay or route sweep, per
//! [`TransitionStyle`]) and commits the arrival. Illegal transitions are
//! unrepresentable: an advance while a transition is in flight simply
//! returns [`AdvanceOutcome::Ignored`].

use bevy::prelude::*;

use crate::commands::{AdvanceJourney, FlyTo};
use crate::config::MapConfig;
use crate::locations::LocationList;
use crate::route::{curve, RouteState};

/// Pause at each stop between auto-replay hops, on top of the flight time.
const AUTO_REPLAY_DWELL_SECS: f32 = 2.0;

// =============================================================================
// Phase machine
// =============================================================================

/// Where the journey currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JourneyPhase {
    /// Nothing visited yet (index −1 in the journal's terms).
    NotStarted,
    /// Settled at stop `i`, with at least one stop still ahead.
    AtLocation(usize),
    /// Camera is out at the overview, between `from` and `to`.
    Transitioning { from: usize, to: usize },
    /// Settled at the final stop.
    Complete,
}

/// What the driving system must do after an accepted advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Fly to the first stop.
    Begin,
    /// Fly to the overview; the bridge commits `to` later.
    ZoomOut { from: usize, to: usize },
    /// Reset happened; fly back to the overview.
    Relive,
    /// Advance while transitioning, or an empty itinerary: nothing to do.
    Ignored,
}

/// How the zoomed-out interval between stops is bridged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// Show the full connecting line immediately and wait out a fixed delay.
    #[default]
    FixedDelay,
    /// Sweep the connecting line 0→1 across frames, then commit.
    RouteSweep,
}

/// What "Relive Journey" does after resetting to the overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelivePolicy {
    /// Rearm the button only; the user walks the journey again by hand.
    #[default]
    RearmOnly,
    /// Replay the whole journey automatically, dwelling at each stop.
    AutoReplay,
}

/// Sequencer policy knobs.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct JourneySettings {
    pub transition_style: TransitionStyle,
    pub relive: RelivePolicy,
}

/// The sequencer's state. Mutated only by the systems in this module.
#[derive(Resource, Debug)]
pub struct JourneyState {
    phase: JourneyPhase,
    /// Clock for the fixed-delay bridge; meaningful only while transitioning.
    bridge: Timer,
    /// True while an automatic replay is walking the itinerary.
    auto_replay: bool,
    /// Countdown to the next automatic hop while auto-replaying.
    dwell: Timer,
}

impl Default for JourneyState {
    fn default() -> Self {
        Self {
            phase: JourneyPhase::NotStarted,
            bridge: Timer::from_seconds(0.0, TimerMode::Once),
            auto_replay: false,
            dwell: Timer::from_seconds(0.0, TimerMode::Once),
        }
    }
}

impl JourneyState {
    pub fn phase(&self) -> JourneyPhase {
        self.phase
    }

    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, JourneyPhase::Transitioning { .. })
    }

    /// The single transition function: mutates the phase and reports what
    /// the caller must do. Advancing while a transition is in flight is a
    /// no-op.
    pub fn advance(&mut self, location_count: usize) -> AdvanceOutcome {
        if location_count == 0 {
            return AdvanceOutcome::Ignored;
        }
        match self.phase {
            JourneyPhase::Transitioning { .. } => AdvanceOutcome::Ignored,
            JourneyPhase::NotStarted => {
                self.phase = Self::settled(0, location_count);
                AdvanceOutcome::Begin
            }
            JourneyPhase::AtLocation(i) => {
                self.phase = JourneyPhase::Transitioning { from: i, to: i + 1 };
                AdvanceOutcome::ZoomOut { from: i, to: i + 1 }
            }
            JourneyPhase::Complete => {
                self.phase = JourneyPhase::NotStarted;
                AdvanceOutcome::Relive
            }
        }
    }

    /// Commit the pending arrival, settling at its target stop (or
    /// [`JourneyPhase::Complete`] on the last one). Returns the committed
    /// index; `None` when no transition is in flight.
    pub fn commit_arrival(&mut self, location_count: usize) -> Option<usize> {
        let JourneyPhase::Transitioning { to, .. } = self.phase else {
            return None;
        };
        self.phase = Self::settled(to, location_count);
        Some(to)
    }

    /// Index of the last visited stop, if any.
    pub fn current_index(&self, location_count: usize) -> Option<usize> {
        match self.phase {
            JourneyPhase::NotStarted => None,
            JourneyPhase::AtLocation(i) => Some(i),
            JourneyPhase::Transitioning { from, .. } => Some(from),
            JourneyPhase::Complete => location_count.checked_sub(1),
        }
    }

    /// Number of stops already reached.
    pub fn visited_count(&self, location_count: usize) -> usize {
        self.current_index(location_count).map_or(0, |i| i + 1)
    }

    /// Label for the journey control button. A pure function of the phase.
    pub fn button_label(&self) -> &'static str {
        match self.phase {
            JourneyPhase::NotStarted => "Begin Journey",
            JourneyPhase::Transitioning { .. } => "Going to next location...",
            JourneyPhase::Complete => "Relive Journey",
            JourneyPhase::AtLocation(_) => "Continue Journey",
        }
    }

    fn settled(index: usize, location_count: usize) -> JourneyPhase {
        if index + 1 >= location_count {
            JourneyPhase::Complete
        } else {
            JourneyPhase::AtLocation(index)
        }
    }

    fn arm_dwell(&mut self, flight_secs: f32) {
        self.dwell = Timer::from_seconds(flight_secs + AUTO_REPLAY_DWELL_SECS, TimerMode::Once);
    }
}

fn secs(ms: u64) -> f32 {
    ms as f32 / 1000.0
}

// =============================================================================
// Systems
// =============================================================================

/// Consume [`AdvanceJourney`] requests and emit the resulting commands.
pub fn handle_advance(
    mut advances: EventReader<AdvanceJourney>,
    settings: Res<JourneySettings>,
    config: Res<MapConfig>,
    locations: Res<LocationList>,
    mut journey: ResMut<JourneyState>,
    mut route: ResMut<RouteState>,
    mut fly: EventWriter<FlyTo>,
) {
    for _ in advances.read() {
        match journey.advance(locations.len()) {
            AdvanceOutcome::Begin => {
                route.clear();
                let first = &locations[0];
                fly.send(FlyTo {
                    center: first.lon_lat(),
                    zoom: config.arrival_zoom,
                    duration_ms: config.transition_ms,
                });
                if journey.auto_replay {
                    journey.arm_dwell(secs(config.transition_ms));
                }
                info!("journey: begin, flying to {}", first.name);
            }
            AdvanceOutcome::ZoomOut { from, to } => {
                fly.send(FlyTo {
                    center: config.center,
                    zoom: config.zoom,
                    duration_ms: config.transition_ms,
                });
                let arc = curve(locations[from].lon_lat(), locations[to].lon_lat());
                route.begin_leg(arc, settings.transition_style == TransitionStyle::FixedDelay);
                journey.bridge =
                    Timer::from_seconds(secs(config.transition_ms), TimerMode::Once);
                info!(
                    "journey: leaving {} for {}",
                    locations[from].name, locations[to].name
                );
            }
            AdvanceOutcome::Relive => {
                route.clear();
                fly.send(FlyTo {
                    center: config.center,
                    zoom: config.zoom,
                    duration_ms: config.transition_ms,
                });
                if settings.relive == RelivePolicy::AutoReplay {
                    journey.auto_replay = true;
                    journey.arm_dwell(secs(config.transition_ms));
                }
                info!("journey: reset to overview");
            }
            AdvanceOutcome::Ignored => {}
        }
    }
}

/// While a transition is in flight, wait out the bridge (delay or sweep) and
/// commit the arrival: fly in to the next stop and settle the phase.
pub fn drive_transition(
    time: Res<Time>,
    settings: Res<JourneySettings>,
    config: Res<MapConfig>,
    locations: Res<LocationList>,
    mut journey: ResMut<JourneyState>,
    mut route: ResMut<RouteState>,
    mut fly: EventWriter<FlyTo>,
) {
    if !journey.is_transitioning() {
        return;
    }

    let bridged = match settings.transition_style {
        TransitionStyle::FixedDelay => {
            journey.bridge.tick(time.delta());
            journey.bridge.finished()
        }
        TransitionStyle::RouteSweep => {
            let step = time.delta_secs() / secs(config.transition_ms).max(f32::EPSILON);
            route.sweep(step)
        }
    };
    if !bridged {
        return;
    }

    let Some(arrived) = journey.commit_arrival(locations.len()) else {
        return;
    };
    route.settle_leg();
    let stop = &locations[arrived];
    fly.send(FlyTo {
        center: stop.lon_lat(),
        zoom: config.arrival_zoom,
        duration_ms: config.arrival_ms,
    });
    if journey.auto_replay {
        journey.arm_dwell(secs(config.arrival_ms));
    }
    info!("journey: arrived at {}", stop.name);
}

/// Drive automatic replays: once the dwell at a stop runs out, request the
/// next hop exactly as a button click would.
pub fn auto_replay(
    time: Res<Time>,
    mut journey: ResMut<JourneyState>,
    mut advances: EventWriter<AdvanceJourney>,
) {
    if !journey.auto_replay {
        return;
    }
    match journey.phase {
        JourneyPhase::Complete => {
            journey.auto_replay = false;
            info!("journey: auto replay finished");
        }
        JourneyPhase::Transitioning { .. } => {}
        JourneyPhase::NotStarted | JourneyPhase::AtLocation(_) => {
            journey.dwell.tick(time.delta());
            if journey.dwell.just_finished() {
                advances.send(AdvanceJourney);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_walks_every_step_in_order() {
        let n = 5;
        let mut journey = JourneyState::default();
        assert_eq!(journey.advance(n), AdvanceOutcome::Begin);
        assert_eq!(journey.phase(), JourneyPhase::AtLocation(0));

        for i in 0..n - 1 {
            assert_eq!(journey.advance(n), AdvanceOutcome::ZoomOut { from: i, to: i + 1 });
            assert_eq!(journey.phase(), JourneyPhase::Transitioning { from: i, to: i + 1 });
            assert_eq!(journey.commit_arrival(n), Some(i + 1));
            // The index never skips or decreases.
            assert_eq!(journey.current_index(n), Some(i + 1));
        }
        assert_eq!(journey.phase(), JourneyPhase::Complete);
    }

    #[test]
    fn test_advance_while_transitioning_is_a_no_op() {
        let mut journey = JourneyState::default();
        journey.advance(3);
        journey.advance(3);
        let in_flight = journey.phase();
        assert!(journey.is_transitioning());

        assert_eq!(journey.advance(3), AdvanceOutcome::Ignored);
        assert_eq!(journey.phase(), in_flight);
    }

    #[test]
    fn test_commit_without_transition_is_none() {
        let mut journey = JourneyState::default();
        assert_eq!(journey.commit_arrival(3), None);
        journey.advance(3);
        assert_eq!(journey.commit_arrival(3), None);
    }

    #[test]
    fn test_relive_resets_to_not_started() {
        let mut journey = JourneyState::default();
        journey.advance(2);
        journey.advance(2);
        journey.commit_arrival(2);
        assert_eq!(journey.phase(), JourneyPhase::Complete);

        assert_eq!(journey.advance(2), AdvanceOutcome::Relive);
        assert_eq!(journey.phase(), JourneyPhase::NotStarted);
        assert_eq!(journey.current_index(2), None);
    }

    #[test]
    fn test_three_location_walk_and_labels() {
        let n = 3;
        let mut journey = JourneyState::default();
        let mut labels = vec![journey.button_label()];

        // Three advances, settling each transition, then one more to reset.
        journey.advance(n);
        labels.push(journey.button_label());
        journey.advance(n);
        assert_eq!(journey.button_label(), "Going to next location...");
        journey.commit_arrival(n);
        labels.push(journey.button_label());
        journey.advance(n);
        journey.commit_arrival(n);
        assert_eq!(journey.current_index(n), Some(2));
        labels.push(journey.button_label());
        journey.advance(n);
        labels.push(journey.button_label());

        assert_eq!(
            labels,
            vec![
                "Begin Journey",
                "Continue Journey",
                "Continue Journey",
                "Relive Journey",
                "Begin Journey",
            ]
        );
    }

    #[test]
    fn test_single_location_journey_completes_immediately() {
        let mut journey = JourneyState::default();
        assert_eq!(journey.advance(1), AdvanceOutcome::Begin);
        assert_eq!(journey.phase(), JourneyPhase::Complete);
    }

    #[test]
    fn test_empty_itinerary_never_starts() {
        let mut journey = JourneyState::default();
        assert_eq!(journey.advance(0), AdvanceOutcome::Ignored);
        assert_eq!(journey.phase(), JourneyPhase::NotStarted);
    }

    #[test]
    fn test_visited_count_tracks_progress() {
        let n = 3;
        let mut journey = JourneyState::default();
        assert_eq!(journey.visited_count(n), 0);
        journey.advance(n);
        assert_eq!(journey.visited_count(n), 1);
        journey.advance(n);
        // Mid-transition, the destination is not yet visited.
        assert_eq!(journey.visited_count(n), 1);
        journey.commit_arrival(n);
        assert_eq!(journey.visited_count(n), 2);
    }
}
