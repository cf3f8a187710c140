//! Game state and core simulation types
//!
//! All state the game loop mutates lives here, owned by [`GameState`] so the
//! core is instantiable multiple times (no process-wide mutable state).

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// No round running, nothing spawns
    #[default]
    Idle,
    /// Active round: targets spawn, age, and can be hit
    Playing,
    /// Round finished, waiting on a restart
    GameOver,
}

/// Target flavor; bonus targets are rarer but otherwise score the same
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetKind {
    Normal,
    Bonus,
}

/// A transient hittable entity
///
/// Immutable after spawn; only its age (relative to `now`) changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Target {
    pub id: u32,
    /// Center, in surface pixel coordinates
    pub pos: Vec2,
    pub radius: f32,
    pub kind: TargetKind,
    /// Score credit on hit; larger targets are easier and worth more
    pub points: u32,
    /// Palette color (RGB), cosmetic only
    pub color: [u8; 3],
    pub created_at_ms: f64,
    pub lifetime_ms: f64,
}

impl Target {
    /// Age at `now_ms`, clamped so a stale clock never yields a negative age
    pub fn age_ms(&self, now_ms: f64) -> f64 {
        (now_ms - self.created_at_ms).max(0.0)
    }

    /// Past its time-to-live (strictly; boundary age is still live)
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.age_ms(now_ms) > self.lifetime_ms
    }

    /// Render opacity: fades linearly from 1 at spawn to 0 at expiry
    pub fn opacity(&self, now_ms: f64) -> f32 {
        (1.0 - self.age_ms(now_ms) / self.lifetime_ms).clamp(0.0, 1.0) as f32
    }
}

/// One score credit, emitted the tick the pointer lands on a target.
/// Each hit is delivered exactly once; expiry emits nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HitEvent {
    pub id: u32,
    pub points: u32,
    pub kind: TargetKind,
}

/// Per-tick render snapshot handed to the render surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    pub targets: Vec<TargetSprite>,
    pub pointer: Option<Vec2>,
}

impl Frame {
    /// Empty field (idle/game-over screens), pointer passed through
    pub fn empty(pointer: Option<Vec2>) -> Self {
        Self {
            targets: Vec::new(),
            pointer,
        }
    }

    /// Snapshot the live set with per-target opacity computed at `now_ms`
    pub fn capture(targets: &[Target], pointer: Option<Vec2>, now_ms: f64) -> Self {
        Self {
            targets: targets
                .iter()
                .map(|t| TargetSprite {
                    id: t.id,
                    pos: t.pos,
                    radius: t.radius,
                    kind: t.kind,
                    color: t.color,
                    opacity: t.opacity(now_ms),
                })
                .collect(),
            pointer,
        }
    }
}

/// What the render surface needs to draw one target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetSprite {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub kind: TargetKind,
    pub color: [u8; 3],
    pub opacity: f32,
}

/// Spawn-clock sentinel: guarantees the first Playing tick spawns
/// regardless of the caller's clock origin.
const SPAWN_CLOCK_RESET: f64 = f64::NEG_INFINITY;

/// Complete game-loop state (deterministic given a seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Live targets, exclusively owned here
    pub targets: Vec<Target>,
    /// Timestamp of the most recent spawn
    pub last_spawn_ms: f64,
    /// Tick counter (diagnostics only, not gameplay-affecting)
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl GameState {
    /// Create an idle game state with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            targets: Vec::new(),
            last_spawn_ms: SPAWN_CLOCK_RESET,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Begin a round: clear the field, reset the spawn clock, go Playing.
    /// No targets or spawn cadence carry over from a previous round.
    pub fn begin_round(&mut self) {
        self.targets.clear();
        self.last_spawn_ms = SPAWN_CLOCK_RESET;
        self.phase = GamePhase::Playing;
        log::info!("Round started (seed {})", self.seed);
    }

    /// End the round; targets do not persist into the game-over screen
    pub fn end_round(&mut self) {
        self.targets.clear();
        self.phase = GamePhase::GameOver;
        log::info!("Round over after {} ticks", self.time_ticks);
    }

    /// Back to idle (also clears the field)
    pub fn go_idle(&mut self) {
        self.targets.clear();
        self.phase = GamePhase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_is_strict_at_boundary() {
        let t = Target {
            id: 1,
            pos: Vec2::new(50.0, 50.0),
            radius: 20.0,
            kind: TargetKind::Normal,
            points: 20,
            color: crate::consts::PALETTE[0],
            created_at_ms: 1000.0,
            lifetime_ms: 2000.0,
        };
        assert!(!t.is_expired(3000.0)); // age == lifetime: still live
        assert!(t.is_expired(3000.1));
    }

    #[test]
    fn test_opacity_fades_and_clamps() {
        let t = Target {
            id: 1,
            pos: Vec2::ZERO,
            radius: 20.0,
            kind: TargetKind::Normal,
            points: 20,
            color: crate::consts::PALETTE[1],
            created_at_ms: 0.0,
            lifetime_ms: 2000.0,
        };
        assert_eq!(t.opacity(0.0), 1.0);
        assert!((t.opacity(1000.0) - 0.5).abs() < 1e-6);
        assert_eq!(t.opacity(5000.0), 0.0);
    }

    #[test]
    fn test_round_transitions_clear_field() {
        let mut state = GameState::new(7);
        state.begin_round();
        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: Vec2::new(10.0, 10.0),
            radius: 20.0,
            kind: TargetKind::Normal,
            points: 20,
            color: crate::consts::PALETTE[0],
            created_at_ms: 0.0,
            lifetime_ms: 2000.0,
        });

        state.end_round();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.targets.is_empty());

        state.begin_round();
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.targets.is_empty());

        let id = state.next_entity_id();
        state.targets.push(Target {
            id,
            pos: Vec2::new(20.0, 20.0),
            radius: 20.0,
            kind: TargetKind::Bonus,
            points: 20,
            color: crate::consts::PALETTE[2],
            created_at_ms: 0.0,
            lifetime_ms: 2000.0,
        });
        state.go_idle();
        assert_eq!(state.phase, GamePhase::Idle);
        assert!(state.targets.is_empty());
    }
}
