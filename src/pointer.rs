//! Pointer source abstraction
//!
//! The game loop consumes one `Option<Vec2>` per frame: the tracked
//! fingertip in surface pixel coordinates, or absent when tracking drops.
//! The camera/hand-tracking pipeline lives outside this crate; what ships
//! here are scripted sources for the demo driver and tests. Mirroring and
//! coordinate mapping are the source's responsibility, not the loop's.

use glam::Vec2;

/// Per-frame pointer supplier
pub trait PointerSource {
    /// Pointer position at `now_ms`, or None when not detected this frame
    fn sample(&mut self, now_ms: f64) -> Option<Vec2>;
}

/// Keyframed pointer playback, linearly interpolated between samples.
///
/// A gap in the keyframes (`None` position) models a tracking dropout:
/// the pointer is absent until the next present keyframe is reached.
pub struct ScriptedPointer {
    /// (timestamp ms, position) pairs, ascending by timestamp
    keyframes: Vec<(f64, Option<Vec2>)>,
}

impl ScriptedPointer {
    pub fn new(mut keyframes: Vec<(f64, Option<Vec2>)>) -> Self {
        keyframes.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keyframes }
    }
}

impl PointerSource for ScriptedPointer {
    fn sample(&mut self, now_ms: f64) -> Option<Vec2> {
        if self.keyframes.is_empty() {
            return None;
        }

        match self.keyframes.iter().position(|(at, _)| *at > now_ms) {
            Some(0) => None, // before the first keyframe
            None => self.keyframes.last().and_then(|(_, p)| *p),
            Some(i) => {
                let (t0, p0) = self.keyframes[i - 1];
                let (t1, p1) = self.keyframes[i];
                match (p0, p1) {
                    (Some(a), Some(b)) => {
                        let s = ((now_ms - t0) / (t1 - t0)) as f32;
                        Some(a.lerp(b, s))
                    }
                    // Heading into or out of a dropout: hold the last
                    // sample, absent once the dropout keyframe is reached.
                    _ => p0,
                }
            }
        }
    }
}

/// Parametric sweep covering the surface on a Lissajous path.
///
/// Stands in for a real hand during headless demo runs: fast enough to
/// cross most of the field within a target's lifetime.
pub struct SweepPointer {
    width: f32,
    height: f32,
    period_ms: f64,
}

impl SweepPointer {
    pub fn new(width: f32, height: f32, period_ms: f64) -> Self {
        Self {
            width,
            height,
            period_ms,
        }
    }
}

impl PointerSource for SweepPointer {
    fn sample(&mut self, now_ms: f64) -> Option<Vec2> {
        let t = now_ms / self.period_ms * std::f64::consts::TAU;
        // 3:2 frequency ratio traces a dense figure over the whole surface.
        let x = (0.5 + 0.45 * (3.0 * t).sin()) as f32 * self.width;
        let y = (0.5 + 0.45 * (2.0 * t).cos()) as f32 * self.height;
        Some(Vec2::new(x, y))
    }
}
