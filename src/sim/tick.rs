//! Frame-driven game loop tick
//!
//! One call per incoming video/animation frame, sequenced spawn → collide →
//! expire → frame. The caller guarantees serialized, non-overlapping
//! invocations; the tick itself never blocks and never fails.

use glam::Vec2;

use super::collision;
use super::spawn;
use super::state::{Frame, GamePhase, GameState, HitEvent};
use crate::tuning::Tuning;

/// Inputs for a single tick, sampled by the caller each frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tracked fingertip in surface pixel coordinates, if detected this frame
    pub pointer: Option<Vec2>,
    /// Latest surface dimensions (may change between ticks on resize)
    pub surface_w: f32,
    pub surface_h: f32,
    /// Frame timestamp (milliseconds, same clock as target timestamps)
    pub now_ms: f64,
}

/// Outputs of a single tick
#[derive(Debug, Clone)]
pub struct TickOutput {
    /// Score credits earned this tick, one per hit target
    pub hits: Vec<HitEvent>,
    /// Render snapshot, produced every tick regardless of hits
    pub frame: Frame,
}

/// Advance the game by one frame.
///
/// While Playing: run the spawn step, resolve collisions against the
/// pre-expiry live set, remove hit targets, then remove expired ones.
/// Collision runs first, so a target at its expiry boundary that is under
/// the pointer still counts as a hit that tick.
///
/// While Idle/GameOver no lifecycle work happens; the frame passes the
/// pointer through over an empty field.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) -> TickOutput {
    if state.phase != GamePhase::Playing {
        return TickOutput {
            hits: Vec::new(),
            frame: Frame::empty(input.pointer),
        };
    }

    state.time_ticks += 1;

    spawn::maybe_spawn(
        state,
        input.now_ms,
        input.surface_w,
        input.surface_h,
        tuning,
    );

    let hits = collision::resolve(input.pointer, &state.targets, tuning.hit_tolerance);
    if !hits.is_empty() {
        state
            .targets
            .retain(|t| !hits.iter().any(|h| h.id == t.id));
        log::debug!(
            "Tick {}: {} hit(s), {} point(s)",
            state.time_ticks,
            hits.len(),
            hits.iter().map(|h| u64::from(h.points)).sum::<u64>()
        );
    }

    spawn::remove_expired(state, input.now_ms);

    let frame = Frame::capture(&state.targets, input.pointer, input.now_ms);
    TickOutput { hits, frame }
}
