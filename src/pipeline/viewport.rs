//! Viewport signals - The rendering surface's dimensions.
//!
//! Thread-local signals holding the terminal's column/row extent. Resize
//! notifications from the input module write here; the width observer and
//! the frame derived read reactively, so a resize flows through measurement
//! and rendering automatically.

use spark_signals::{Signal, signal};

thread_local! {
    static VIEWPORT_WIDTH: Signal<u16> = signal(80);
    static VIEWPORT_HEIGHT: Signal<u16> = signal(24);
}

/// The viewport width signal (for reactive reads in deriveds/effects).
pub fn viewport_width_signal() -> Signal<u16> {
    VIEWPORT_WIDTH.with(|s| s.clone())
}

/// The viewport height signal (for reactive reads in deriveds/effects).
pub fn viewport_height_signal() -> Signal<u16> {
    VIEWPORT_HEIGHT.with(|s| s.clone())
}

/// Current viewport width in columns.
pub fn viewport_width() -> u16 {
    VIEWPORT_WIDTH.with(|s| s.get())
}

/// Current viewport height in rows.
pub fn viewport_height() -> u16 {
    VIEWPORT_HEIGHT.with(|s| s.get())
}

/// Update the viewport size (called from resize routing).
///
/// Writes only on actual change so redundant resize notifications don't
/// wake the pipeline.
pub fn set_viewport_size(width: u16, height: u16) {
    VIEWPORT_WIDTH.with(|s| {
        if s.get() != width {
            s.set(width);
        }
    });
    VIEWPORT_HEIGHT.with(|s| {
        if s.get() != height {
            s.set(height);
        }
    });
}

/// Query the terminal for its current size and seed the signals.
///
/// Falls back to 80x24 when the size cannot be determined (e.g. output is
/// not a terminal).
pub fn detect_viewport_size() {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    set_viewport_size(w, h);
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::effect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_set_and_read() {
        set_viewport_size(100, 30);
        assert_eq!(viewport_width(), 100);
        assert_eq!(viewport_height(), 30);
    }

    #[test]
    fn test_signals_are_reactive() {
        set_viewport_size(80, 24);

        let seen = Rc::new(Cell::new(0u16));
        let seen_clone = seen.clone();
        let width = viewport_width_signal();

        let stop = effect(move || {
            seen_clone.set(width.get());
        });

        set_viewport_size(132, 50);
        assert_eq!(seen.get(), 132);

        stop();
    }

    #[test]
    fn test_redundant_set_is_quiet() {
        set_viewport_size(90, 25);

        let runs = Rc::new(Cell::new(0u32));
        let runs_clone = runs.clone();
        let width = viewport_width_signal();

        let stop = effect(move || {
            let _ = width.get();
            runs_clone.set(runs_clone.get() + 1);
        });
        assert_eq!(runs.get(), 1);

        // Same size again: no effect run
        set_viewport_size(90, 25);
        assert_eq!(runs.get(), 1);

        stop();
    }
}
