//! Deterministic game loop module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven only by the caller's frame clock (no internal timers)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::resolve;
pub use spawn::{maybe_spawn, remove_expired};
pub use state::{Frame, GamePhase, GameState, HitEvent, Target, TargetKind, TargetSprite};
pub use tick::{TickInput, TickOutput, tick};
