//! Slide Index - The current slide position.
//!
//! A signal-backed integer over `[0, len-1]` with three transitions:
//!
//! - `advance` - move forward, clamped at the last slide (manual navigation)
//! - `retreat` - move backward, clamped at the first slide (manual navigation)
//! - `wrap_advance` - move forward, wrapping to 0 after the last slide
//!   (the autoplay path)
//!
//! Manual navigation never wraps; autoplay always does. The asymmetry is
//! intentional: autoplay tours the slides cyclically while the user browses
//! a bounded sequence.
//!
//! All transitions write the signal only when the value actually changes,
//! so boundary no-ops never wake downstream effects.

use spark_signals::{Signal, signal};

/// The current slide position, shared reactively with the render pipeline.
#[derive(Clone)]
pub struct SlideIndex {
    current: Signal<usize>,
}

impl SlideIndex {
    /// Create a new index starting at slide 0.
    pub fn new() -> Self {
        Self { current: signal(0) }
    }

    /// Current index value.
    pub fn get(&self) -> usize {
        self.current.get()
    }

    /// The underlying signal, for reactive reads in deriveds and effects.
    pub fn signal(&self) -> Signal<usize> {
        self.current.clone()
    }

    /// Advance by one slide, clamped at the last slide.
    ///
    /// Returns `true` if the index moved, `false` at the upper boundary
    /// (idempotent there) or when the list is empty.
    pub fn advance(&self, len: usize) -> bool {
        let i = self.current.get();
        if i + 1 < len {
            self.current.set(i + 1);
            true
        } else {
            false
        }
    }

    /// Retreat by one slide, clamped at the first slide.
    ///
    /// Returns `true` if the index moved, `false` at the lower boundary.
    pub fn retreat(&self) -> bool {
        let i = self.current.get();
        if i > 0 {
            self.current.set(i - 1);
            true
        } else {
            false
        }
    }

    /// Advance by one slide, wrapping to 0 after the last slide.
    ///
    /// This is the autoplay transition: it never halts at the end. With an
    /// empty list it is a no-op. Returns `true` if the index changed (a
    /// single-slide list wraps onto itself without a visible change).
    pub fn wrap_advance(&self, len: usize) -> bool {
        if len == 0 {
            return false;
        }
        let i = self.current.get();
        let next = if i + 1 < len { i + 1 } else { 0 };
        if next != i {
            self.current.set(next);
            true
        } else {
            false
        }
    }
}

impl Default for SlideIndex {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
