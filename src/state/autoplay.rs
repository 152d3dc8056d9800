//! Autoplay Timer - Repeating advance on a fixed interval.
//!
//! A single repeating timer per widget instance. A background sleeper
//! thread records firings in an atomic pending counter; the UI thread
//! drains the counter during its event loop and applies each firing as a
//! wrapping advance. The thread never touches signals.
//!
//! # Pattern
//!
//! - `start` spawns the sleeper and returns the owning handle
//! - `cancel` clears the running flag; the thread exits after its current
//!   sleep without recording further ticks
//! - Re-arming is cancel-then-start: the old pending counter is abandoned
//!   with the old handle, so stale firings can never leak into a fresh timer
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use carousel_tui::state::AutoplayTimer;
//!
//! let timer = AutoplayTimer::start(Duration::from_millis(3000));
//!
//! // Event loop, each iteration:
//! for _ in 0..timer.drain() {
//!     // apply one wrapping advance
//! }
//!
//! drop(timer); // cancels
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Owning handle for the repeating autoplay timer.
///
/// At most one is live per widget; dropping it cancels the timer.
pub struct AutoplayTimer {
    /// Firings recorded by the sleeper, not yet applied on the UI thread.
    pending: Arc<AtomicU32>,
    /// Flag to signal the sleeper thread to stop.
    running: Arc<AtomicBool>,
    /// Background sleeper thread handle.
    handle: Option<JoinHandle<()>>,
    /// The firing interval.
    interval: Duration,
}

impl AutoplayTimer {
    /// Start a repeating timer that fires every `interval`.
    pub fn start(interval: Duration) -> Self {
        let pending = Arc::new(AtomicU32::new(0));
        let running = Arc::new(AtomicBool::new(true));

        let pending_clone = pending.clone();
        let running_clone = running.clone();

        let handle = thread::spawn(move || {
            while running_clone.load(Ordering::SeqCst) {
                thread::sleep(interval);
                if running_clone.load(Ordering::SeqCst) {
                    pending_clone.fetch_add(1, Ordering::SeqCst);
                }
            }
        });

        Self {
            pending,
            running,
            handle: Some(handle),
            interval,
        }
    }

    /// Take all pending firings, resetting the counter to zero.
    pub fn drain(&self) -> u32 {
        self.pending.swap(0, Ordering::SeqCst)
    }

    /// Cancel the timer.
    ///
    /// Pending firings are discarded. The sleeper thread exits on its next
    /// wakeup; it is not joined to avoid blocking the UI thread.
    pub fn cancel(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        self.pending.store(0, Ordering::SeqCst);
        self.handle.take();
    }

    /// Whether the timer is still armed.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// The firing interval this timer was armed with.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Drop for AutoplayTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_running() {
        let timer = AutoplayTimer::start(Duration::from_millis(50));
        assert!(timer.is_running());
        assert_eq!(timer.interval(), Duration::from_millis(50));
    }

    #[test]
    fn test_drain_empty_before_first_firing() {
        let timer = AutoplayTimer::start(Duration::from_secs(60));
        assert_eq!(timer.drain(), 0);
    }

    #[test]
    fn test_pending_ticks_accumulate() {
        let timer = AutoplayTimer::start(Duration::from_millis(10));

        thread::sleep(Duration::from_millis(60));

        // At least one firing must have been recorded by now
        assert!(timer.drain() >= 1);
        // Drain resets the counter
        let immediately_after = timer.drain();
        assert!(immediately_after <= 1);
    }

    #[test]
    fn test_cancel_stops_accumulation() {
        let mut timer = AutoplayTimer::start(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(30));

        timer.cancel();
        assert!(!timer.is_running());
        // Cancel discards anything pending
        assert_eq!(timer.drain(), 0);

        // Give a straggling wakeup a chance, then verify nothing new arrives
        thread::sleep(Duration::from_millis(40));
        assert_eq!(timer.drain(), 0);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = AutoplayTimer::start(Duration::from_millis(10));
        timer.cancel();
        timer.cancel();
        assert!(!timer.is_running());
    }

    #[test]
    fn test_rearm_abandons_stale_pending() {
        let timer = AutoplayTimer::start(Duration::from_millis(10));
        thread::sleep(Duration::from_millis(30));

        // Cancel-then-start: the fresh timer has its own counter
        drop(timer);
        let fresh = AutoplayTimer::start(Duration::from_secs(60));
        assert_eq!(fresh.drain(), 0);
    }
}
