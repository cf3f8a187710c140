//! Air Swat entry point
//!
//! Headless demo driver: plays one full round on a simulated 60 Hz frame
//! clock with a scripted pointer sweep standing in for the camera pipeline.
//! Wire a real pointer source and render surface on top of the library to
//! make it playable.

use std::path::Path;

use air_swat::commentary::{CannedCommentary, Commentary};
use air_swat::pointer::SweepPointer;
use air_swat::sim::{GameState, TickInput, tick};
use air_swat::{PointerSource, Session, Tuning};

/// Camera capture dimensions (typical 720p webcam feed)
const SURFACE_W: f32 = 1280.0;
const SURFACE_H: f32 = 720.0;

/// Simulated frame cadence (60 fps)
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Air Swat starting...");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let tuning = Tuning::load_or_default(Path::new("tuning.json"));

    let mut state = GameState::new(seed);
    let mut session = Session::new();
    let mut pointer = SweepPointer::new(SURFACE_W, SURFACE_H, 4000.0);

    let mut now_ms = 0.0;
    session.start(&mut state, now_ms, tuning.round_secs);

    let mut targets_hit = 0usize;
    let mut last_countdown = u32::MAX;

    while !session.update(&mut state, now_ms) {
        let input = TickInput {
            pointer: pointer.sample(now_ms),
            surface_w: SURFACE_W,
            surface_h: SURFACE_H,
            now_ms,
        };
        let out = tick(&mut state, &input, &tuning);

        session.apply_hits(&out.hits);
        targets_hit += out.hits.len();
        for hit in &out.hits {
            log::debug!("Hit {:?} target {} for {} points", hit.kind, hit.id, hit.points);
        }

        let remaining = session.remaining_secs(now_ms);
        if remaining != last_countdown && remaining % 10 == 0 {
            log::info!(
                "{remaining}s left, score {}, {} live target(s)",
                session.score,
                out.frame.targets.len()
            );
            last_countdown = remaining;
        }

        now_ms += FRAME_MS;
    }

    println!("Score:      {}", session.score);
    println!("High score: {}", session.high_score);
    println!("Targets hit: {targets_hit}");
    println!("{}", CannedCommentary.review(session.score, session.high_score));
}
