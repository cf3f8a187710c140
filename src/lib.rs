//! Air Swat - a camera-pointer reflex arcade game
//!
//! Core modules:
//! - `sim`: Deterministic game loop (target lifecycle, collisions, scoring events)
//! - `session`: Round state machine (countdown, score, session high score)
//! - `pointer`: Pointer source abstraction (tracked fingertip or scripted playback)
//! - `commentary`: Post-game commentary generation
//! - `tuning`: Data-driven game balance

pub mod commentary;
pub mod pointer;
pub mod session;
pub mod sim;
pub mod tuning;

pub use pointer::PointerSource;
pub use session::Session;
pub use tuning::Tuning;

/// Game configuration constants (defaults; see [`tuning::Tuning`] for overrides)
pub mod consts {
    /// Minimum gap between two spawns (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 600.0;

    /// Target radius range (pixels)
    pub const RADIUS_MIN: f32 = 20.0;
    pub const RADIUS_MAX: f32 = 40.0;

    /// Target time-to-live range (milliseconds)
    pub const LIFETIME_MIN_MS: f64 = 2000.0;
    pub const LIFETIME_MAX_MS: f64 = 4000.0;

    /// Extra hit slack around a target's radius (pixels).
    /// Generous because the tracked fingertip itself jitters.
    pub const HIT_TOLERANCE: f32 = 10.0;

    /// Chance a spawned target is a bonus target
    pub const BONUS_CHANCE: f64 = 0.2;

    /// Round length (seconds)
    pub const ROUND_SECS: u32 = 30;

    /// Target palette (RGB), cosmetic only
    pub const PALETTE: [[u8; 3]; 5] = [
        [0xff, 0x00, 0x00], // bug red
        [0x00, 0xff, 0x00], // lint green
        [0x00, 0xff, 0xff], // sync cyan
        [0xff, 0xff, 0x00], // warning yellow
        [0xff, 0x00, 0xff], // exception magenta
    ];
}
