//! Post-game commentary
//!
//! The game-over screen shows a short "code review" of the player's round.
//! The trait keeps the text generator pluggable (a hosted model, a local
//! one); the built-in implementation is offline and canned.

/// Produces a one-liner review of a finished round
pub trait Commentary {
    fn review(&self, score: u64, high_score: u64) -> String;
}

/// Offline commentary: snarky-but-encouraging dev-speak picked by score band
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedCommentary;

impl Commentary for CannedCommentary {
    fn review(&self, score: u64, high_score: u64) -> String {
        if score > 0 && score >= high_score {
            return format!(
                "New personal best: {score}. Shipped to main with zero review comments."
            );
        }

        match score {
            0 => "Zero hits. It compiles, but nothing runs — check your input latency.".to_string(),
            1..=199 => "The linter found some errors in your coordination.".to_string(),
            200..=499 => {
                "Solid mid-sprint pace. A little refactoring and those bugs won't stand a chance."
                    .to_string()
            }
            _ => "Reflexes merged without conflicts. Keep coding, you'll get there.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bands_produce_distinct_lines() {
        let c = CannedCommentary;
        let zero = c.review(0, 500);
        let low = c.review(100, 500);
        let mid = c.review(300, 500);
        let high = c.review(600, 700);
        assert_ne!(zero, low);
        assert_ne!(low, mid);
        assert_ne!(mid, high);
    }

    #[test]
    fn test_new_best_wins_over_bands() {
        let c = CannedCommentary;
        let line = c.review(42, 42);
        assert!(line.contains("42"));
        assert!(line.contains("best"));
    }

    #[test]
    fn test_zero_score_never_claims_a_best() {
        let c = CannedCommentary;
        let line = c.review(0, 0);
        assert!(!line.contains("best"));
    }
}
