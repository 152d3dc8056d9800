//! Slide Transition - Time-based easing of the display offset.
//!
//! The target offset is always `-(slide_width * index)` and changes in
//! discrete jumps. To move between slides smoothly, the rendered position
//! eases toward the target each event-loop tick with an exponential
//! approach, then snaps once it is within half a column.
//!
//! A zero duration disables easing entirely (the position snaps on every
//! step); tests use this to read exact offsets.

use std::time::Duration;

/// Snap distance in columns: closer than this counts as arrived.
const SETTLE_THRESHOLD: f32 = 0.5;

/// Eased position that follows a moving target over a fixed duration.
#[derive(Debug, Clone)]
pub struct Transition {
    duration: Duration,
    position: f32,
}

impl Transition {
    /// Create a transition with the given easing duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            position: 0.0,
        }
    }

    /// The current eased position.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Jump directly to `target` without easing.
    pub fn snap(&mut self, target: f32) {
        self.position = target;
    }

    /// Whether the position has arrived at `target`.
    pub fn is_settled(&self, target: f32) -> bool {
        (target - self.position).abs() < SETTLE_THRESHOLD
    }

    /// Advance the position toward `target` by `dt` of wall time.
    ///
    /// Exponential approach: each step covers a fraction of the remaining
    /// distance proportional to `dt` over the easing time constant, so the
    /// movement is fast at first and settles gently. Returns the new
    /// position.
    pub fn step(&mut self, target: f32, dt: Duration) -> f32 {
        if self.duration.is_zero() {
            self.position = target;
            return self.position;
        }

        let delta = target - self.position;
        if delta.abs() < SETTLE_THRESHOLD {
            self.position = target;
            return self.position;
        }

        // Time constant at one third of the duration: ~95% of the distance
        // is covered within the configured duration.
        let tau = self.duration.as_secs_f32() / 3.0;
        let alpha = (dt.as_secs_f32() / tau).min(1.0);
        self.position += delta * alpha;
        self.position
    }
}

// =============================================================================
// Tests
// =============================================================================
