//! Target lifecycle: spawn cadence, placement, and expiry
//!
//! Spawns at most one target per tick when the spawn interval has elapsed —
//! deliberately no catch-up for skipped frames. Placement keeps the full
//! circle inside the surface; degraded surface dimensions skip the spawn
//! for that tick instead of failing it.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Target, TargetKind};
use crate::consts::PALETTE;
use crate::tuning::Tuning;

/// Spawn step: create one target if the cadence allows and the surface fits.
///
/// Draw order is fixed (kind, radius, lifetime, color, x, y) so a seed fully
/// determines the target stream.
pub fn maybe_spawn(state: &mut GameState, now_ms: f64, width: f32, height: f32, tuning: &Tuning) {
    if now_ms - state.last_spawn_ms <= tuning.spawn_interval_ms {
        return;
    }
    if width <= 0.0 || height <= 0.0 {
        log::debug!("Skipping spawn: degraded surface {width}x{height}");
        return;
    }

    // Largest radius that still fits the surface; clamp the draw range to it.
    let fit = width.min(height) / 2.0;
    if fit < tuning.radius_min {
        log::debug!("Skipping spawn: surface {width}x{height} too small for any target");
        return;
    }
    let radius_max = tuning.radius_max.min(fit);

    let kind = if state.rng.random_bool(tuning.bonus_chance.clamp(0.0, 1.0)) {
        TargetKind::Bonus
    } else {
        TargetKind::Normal
    };
    let radius = state.rng.random_range(tuning.radius_min..=radius_max);
    let lifetime_ms = state
        .rng
        .random_range(tuning.lifetime_min_ms..=tuning.lifetime_max_ms);
    let color = PALETTE[state.rng.random_range(0..PALETTE.len())];
    let x = state.rng.random_range(radius..=width - radius);
    let y = state.rng.random_range(radius..=height - radius);

    let id = state.next_entity_id();
    state.targets.push(Target {
        id,
        pos: Vec2::new(x, y),
        radius,
        kind,
        points: radius.floor() as u32,
        color,
        created_at_ms: now_ms,
        lifetime_ms,
    });
    state.last_spawn_ms = now_ms;

    log::debug!("Spawned target {id} ({kind:?}, r={radius:.1}) at ({x:.0}, {y:.0})");
}

/// Expiry step: drop every target past its time-to-live.
///
/// Runs after collision resolution, so a target at its expiry boundary that
/// is under the pointer in the same tick is removed as a hit, never here.
pub fn remove_expired(state: &mut GameState, now_ms: f64) {
    state.targets.retain(|t| !t.is_expired(now_ms));
}
