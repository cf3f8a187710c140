//! Round state machine: countdown timer, score, session high score
//!
//! Owns everything outside the per-frame game loop: when a round starts and
//! ends, the running score (fed by hit events), and the best score of this
//! process. Nothing here is persisted.

use crate::sim::{GamePhase, GameState, HitEvent};

/// One player's session across rounds
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Running score of the current round; never decreases while playing
    pub score: u64,
    /// Best round score this process
    pub high_score: u64,
    /// Wall-clock deadline of the current round (ms), if one is running
    deadline_ms: Option<f64>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a round: zero the score, arm the countdown, put the loop in
    /// Playing. The high score carries across rounds.
    pub fn start(&mut self, state: &mut GameState, now_ms: f64, round_secs: u32) {
        self.score = 0;
        self.deadline_ms = Some(now_ms + f64::from(round_secs) * 1000.0);
        state.begin_round();
    }

    /// Credit this tick's hits to the score
    pub fn apply_hits(&mut self, hits: &[HitEvent]) {
        for hit in hits {
            self.score += u64::from(hit.points);
        }
    }

    /// Whole seconds left in the current round (0 when none is running)
    pub fn remaining_secs(&self, now_ms: f64) -> u32 {
        match self.deadline_ms {
            Some(deadline) => ((deadline - now_ms).max(0.0) / 1000.0).ceil() as u32,
            None => 0,
        }
    }

    /// Advance the countdown. Ends the round (and updates the high score)
    /// when the deadline passes; returns true in exactly that call.
    pub fn update(&mut self, state: &mut GameState, now_ms: f64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }

        self.deadline_ms = None;
        self.high_score = self.high_score.max(self.score);
        state.end_round();
        log::info!(
            "Final score {} (session best {})",
            self.score,
            self.high_score
        );
        true
    }

    /// A round is running (the loop should be ticking in Playing)
    pub fn is_playing(&self, state: &GameState) -> bool {
        self.deadline_ms.is_some() && state.phase == GamePhase::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TargetKind;

    fn hit(points: u32) -> HitEvent {
        HitEvent {
            id: 1,
            points,
            kind: TargetKind::Normal,
        }
    }

    #[test]
    fn test_round_lifecycle() {
        let mut session = Session::new();
        let mut state = GameState::new(3);
        assert!(!session.is_playing(&state));

        session.start(&mut state, 1000.0, 30);
        assert!(session.is_playing(&state));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(session.score, 0);
        assert_eq!(session.remaining_secs(1000.0), 30);
        assert_eq!(session.remaining_secs(16_000.0), 15);

        assert!(!session.update(&mut state, 30_999.0));
        assert!(session.update(&mut state, 31_000.0));
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(!session.is_playing(&state));
        assert!(!session.update(&mut state, 32_000.0)); // fires once
    }

    #[test]
    fn test_full_round_with_scripted_pointer() {
        use crate::pointer::{PointerSource, ScriptedPointer};
        use crate::sim::{TickInput, tick};
        use crate::tuning::Tuning;
        use glam::Vec2;

        let tuning = Tuning::default();
        let mut session = Session::new();
        let mut state = GameState::new(0xFACE);

        // Sweep the whole surface twice with a mid-round tracking dropout.
        let mut pointer = ScriptedPointer::new(vec![
            (0.0, Some(Vec2::new(0.0, 0.0))),
            (1500.0, Some(Vec2::new(640.0, 480.0))),
            (1600.0, None),
            (2000.0, Some(Vec2::new(640.0, 0.0))),
            (3500.0, Some(Vec2::new(0.0, 480.0))),
        ]);

        session.start(&mut state, 0.0, 4);
        let mut now_ms = 0.0;
        let mut last_score = 0;

        while !session.update(&mut state, now_ms) {
            let out = tick(
                &mut state,
                &TickInput {
                    pointer: pointer.sample(now_ms),
                    surface_w: 640.0,
                    surface_h: 480.0,
                    now_ms,
                },
                &tuning,
            );
            session.apply_hits(&out.hits);

            // Running score never decreases while playing.
            assert!(session.score >= last_score);
            last_score = session.score;
            now_ms += 1000.0 / 60.0;
        }

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.targets.is_empty());
        assert_eq!(session.high_score, session.score);
    }

    #[test]
    fn test_score_accumulates_monotonically() {
        let mut session = Session::new();
        let mut state = GameState::new(3);
        session.start(&mut state, 0.0, 30);

        let mut last = 0;
        for points in [20, 0, 35, 27] {
            session.apply_hits(&[hit(points)]);
            assert!(session.score >= last);
            last = session.score;
        }
        assert_eq!(session.score, 82);
    }

    #[test]
    fn test_high_score_carries_across_rounds() {
        let mut session = Session::new();
        let mut state = GameState::new(3);

        session.start(&mut state, 0.0, 30);
        session.apply_hits(&[hit(50)]);
        session.update(&mut state, 31_000.0);
        assert_eq!(session.high_score, 50);

        session.start(&mut state, 40_000.0, 30);
        assert_eq!(session.score, 0);
        session.apply_hits(&[hit(20)]);
        session.update(&mut state, 71_000.0);
        assert_eq!(session.high_score, 50); // lower round does not regress it
    }
}
