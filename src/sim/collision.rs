//! Pointer-to-target collision resolution
//!
//! Each tick the current pointer position is tested against every live
//! target. The pointer is a tracked fingertip, so the hit radius carries a
//! fixed tolerance on top of the target's own radius.

use glam::Vec2;

use super::state::{HitEvent, Target};

/// Resolve one tick of collisions.
///
/// Returns one [`HitEvent`] per target whose center is within
/// `radius + hit_tolerance` of the pointer (strictly). An absent pointer
/// hits nothing. A pointer inside several targets at once registers them
/// all in the same tick, so a single frame can clear a cluster.
pub fn resolve(pointer: Option<Vec2>, targets: &[Target], hit_tolerance: f32) -> Vec<HitEvent> {
    let Some(p) = pointer else {
        return Vec::new();
    };

    targets
        .iter()
        .filter(|t| p.distance(t.pos) < t.radius + hit_tolerance)
        .map(|t| HitEvent {
            id: t.id,
            points: t.points,
            kind: t.kind,
        })
        .collect()
}
