//! Data-driven game balance
//!
//! Every gameplay knob in one serde struct, overridable from a JSON file so
//! balance passes don't need a recompile. Defaults live in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts;

/// Gameplay balance knobs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Minimum gap between two spawns (milliseconds)
    pub spawn_interval_ms: f64,
    /// Target radius range (pixels)
    pub radius_min: f32,
    pub radius_max: f32,
    /// Target time-to-live range (milliseconds)
    pub lifetime_min_ms: f64,
    pub lifetime_max_ms: f64,
    /// Extra hit slack around a target's radius (pixels)
    pub hit_tolerance: f32,
    /// Chance a spawned target is a bonus target (0.0 - 1.0)
    pub bonus_chance: f64,
    /// Round length (seconds)
    pub round_secs: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_interval_ms: consts::SPAWN_INTERVAL_MS,
            radius_min: consts::RADIUS_MIN,
            radius_max: consts::RADIUS_MAX,
            lifetime_min_ms: consts::LIFETIME_MIN_MS,
            lifetime_max_ms: consts::LIFETIME_MAX_MS,
            hit_tolerance: consts::HIT_TOLERANCE,
            bonus_chance: consts::BONUS_CHANCE,
            round_secs: consts::ROUND_SECS,
        }
    }
}

impl Tuning {
    /// Ranges well-formed and strictly positive where they must be
    pub fn is_valid(&self) -> bool {
        self.spawn_interval_ms > 0.0
            && self.radius_min > 0.0
            && self.radius_min <= self.radius_max
            && self.lifetime_min_ms > 0.0
            && self.lifetime_min_ms <= self.lifetime_max_ms
            && self.hit_tolerance >= 0.0
            && (0.0..=1.0).contains(&self.bonus_chance)
            && self.round_secs > 0
    }

    /// Load tuning from a JSON file, falling back to defaults if the file is
    /// missing, unparsable, or out of range. Never fails the process.
    pub fn load_or_default(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Tuning>(&json) {
            Ok(tuning) if tuning.is_valid() => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(_) => {
                log::warn!("Tuning in {} is out of range, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().is_valid());
    }

    #[test]
    fn test_invalid_ranges_rejected() {
        let mut t = Tuning::default();
        t.radius_min = 50.0; // above radius_max
        assert!(!t.is_valid());

        let mut t = Tuning::default();
        t.spawn_interval_ms = 0.0;
        assert!(!t.is_valid());

        let mut t = Tuning::default();
        t.bonus_chance = 1.5;
        assert!(!t.is_valid());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let t: Tuning = serde_json::from_str(r#"{"spawn_interval_ms": 250.0}"#).unwrap();
        assert_eq!(t.spawn_interval_ms, 250.0);
        assert_eq!(t.round_secs, Tuning::default().round_secs);
        assert!(t.is_valid());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Tuning::load_or_default(std::path::Path::new("/nonexistent/tuning.json"));
        assert!(t.is_valid());
    }
}
