//! Carousel widget - Reactive slide deck over an image list.
//!
//! `carousel` wires up the full state graph:
//!
//! - a [`SlideIndex`] signal driven by manual navigation and autoplay
//! - a width observer effect that re-measures the slide width whenever the
//!   viewport or the image list changes
//! - a re-arm effect that restarts the autoplay timer whenever the index
//!   or the image count changes (so a manual move resets the timer phase)
//! - a [`Transition`] easing the displayed offset toward
//!   `-(slide_width * index)`
//!
//! The returned [`Carousel`] owns every effect and the timer; `unmount`
//! (or dropping it) stops the effects and cancels the timer.
//!
//! The autoplay timer thread only increments an atomic counter. Its
//! firings are applied to the index signal on the UI thread inside
//! [`Carousel::pump`], which the event loop calls every iteration.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use spark_signals::{Signal, effect, signal};

use super::types::{CarouselProps, Cleanup, PropValue};
use crate::layout::measure;
use crate::pipeline::viewport::viewport_width_signal;
use crate::state::{AutoplayTimer, SlideIndex, Transition};
use crate::types::{AUTOPLAY_INTERVAL, TRANSITION_DURATION};

// =============================================================================
// Carousel
// =============================================================================

/// A mounted carousel's state graph.
///
/// Headless by itself; the render pipeline subscribes to the exposed
/// signals. All methods take `&self` because the state lives in signals
/// and interior-mutable cells.
pub struct Carousel {
    images: PropValue<Vec<String>>,
    index: SlideIndex,
    slide_width: Signal<u16>,
    display_offset: Signal<i32>,
    transition: Rc<RefCell<Transition>>,
    timer: Rc<RefCell<Option<AutoplayTimer>>>,
    stop_width: Option<Cleanup>,
    stop_rearm: Option<Cleanup>,
}

/// Create a carousel from props, starting its effects (and the autoplay
/// timer, unless disabled).
pub fn carousel(props: CarouselProps) -> Carousel {
    let images = props.images;
    let index = SlideIndex::new();
    let slide_width = signal(0u16);
    let display_offset = signal(0i32);
    let transition = Rc::new(RefCell::new(Transition::new(
        props.transition.unwrap_or(TRANSITION_DURATION),
    )));
    let timer: Rc<RefCell<Option<AutoplayTimer>>> = Rc::new(RefCell::new(None));

    // Width observer: re-measure when the viewport or the image list
    // changes. An empty list keeps the previous measurement.
    let stop_width = {
        let images = images.clone();
        let slide_width = slide_width.clone();
        let viewport_width = viewport_width_signal();
        Box::new(effect(move || {
            let vw = viewport_width.get();
            let count = images.get().len();
            if count == 0 || vw == 0 {
                return;
            }
            slide_width.set(measure::slide_width(vw, count));
        })) as Cleanup
    };

    // Autoplay re-arm: cancel-then-start whenever the index or the image
    // count changes, so every move (manual or timed) resets the phase.
    // Matches re-creating the timer each time its inputs change.
    let stop_rearm = if props.autoplay {
        let images = images.clone();
        let index_signal = index.signal();
        let timer = timer.clone();
        let interval = props.interval.unwrap_or(AUTOPLAY_INTERVAL);
        Some(Box::new(effect(move || {
            let _ = index_signal.get();
            let count = images.get().len();

            if let Some(mut old) = timer.borrow_mut().take() {
                old.cancel();
            }
            if count > 0 {
                *timer.borrow_mut() = Some(AutoplayTimer::start(interval));
            }
        })) as Cleanup)
    } else {
        None
    };

    Carousel {
        images,
        index,
        slide_width,
        display_offset,
        transition,
        timer,
        stop_width: Some(stop_width),
        stop_rearm,
    }
}

impl Carousel {
    /// Move to the next slide. Clamped: at the last slide this is a no-op.
    /// Returns `true` if the index moved.
    pub fn advance(&self) -> bool {
        self.index.advance(self.images.get().len())
    }

    /// Move to the previous slide. Clamped: at the first slide this is a
    /// no-op. Returns `true` if the index moved.
    pub fn retreat(&self) -> bool {
        self.index.retreat()
    }

    /// The current slide index.
    pub fn current_index(&self) -> usize {
        self.index.get()
    }

    /// Number of images in the list right now.
    pub fn image_count(&self) -> usize {
        self.images.get().len()
    }

    /// The measured slide width in columns.
    pub fn slide_width(&self) -> u16 {
        self.slide_width.get()
    }

    /// The target horizontal offset: `-(slide_width * index)`.
    ///
    /// The index is read clamped to the list so a shrunken list never
    /// produces an offset past the last slide.
    pub fn target_offset(&self) -> i32 {
        let count = self.images.get().len();
        if count == 0 {
            return 0;
        }
        let shown = self.index.get().min(count - 1);
        -(self.slide_width.get() as i32 * shown as i32)
    }

    /// The currently displayed (eased) offset.
    pub fn display_offset(&self) -> i32 {
        self.display_offset.get()
    }

    /// Whether the first slide is showing (previous control inert).
    pub fn is_at_start(&self) -> bool {
        self.index.get() == 0
    }

    /// Whether the last slide is showing or the list is empty (next
    /// control inert).
    pub fn is_at_end(&self) -> bool {
        let count = self.images.get().len();
        count == 0 || self.index.get() + 1 >= count
    }

    /// Signals for the render pipeline.
    pub fn images(&self) -> PropValue<Vec<String>> {
        self.images.clone()
    }

    pub fn index_signal(&self) -> Signal<usize> {
        self.index.signal()
    }

    pub fn width_signal(&self) -> Signal<u16> {
        self.slide_width.clone()
    }

    pub fn offset_signal(&self) -> Signal<i32> {
        self.display_offset.clone()
    }

    /// Apply pending autoplay firings and advance the offset easing.
    ///
    /// Called once per event-loop iteration with the elapsed time since
    /// the previous call. Timer firings become wrapping advances here, on
    /// the UI thread, where touching signals is safe.
    pub fn pump(&self, dt: Duration) {
        let fired = self
            .timer
            .borrow()
            .as_ref()
            .map(|t| t.drain())
            .unwrap_or(0);

        if fired > 0 {
            let count = self.images.get().len();
            for _ in 0..fired {
                self.index.wrap_advance(count);
            }
        }

        let target = self.target_offset() as f32;
        let position = self.transition.borrow_mut().step(target, dt);
        let rounded = position.round() as i32;
        if self.display_offset.get() != rounded {
            self.display_offset.set(rounded);
        }
    }

    /// Whether the autoplay timer is currently armed.
    pub fn autoplay_armed(&self) -> bool {
        self.timer
            .borrow()
            .as_ref()
            .map(|t| t.is_running())
            .unwrap_or(false)
    }

    /// Stop all effects and cancel the timer.
    ///
    /// Dropping the carousel does the same; this form just makes the
    /// teardown point explicit.
    pub fn unmount(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if let Some(stop) = self.stop_width.take() {
            stop();
        }
        if let Some(stop) = self.stop_rearm.take() {
            stop();
        }
        if let Some(mut timer) = self.timer.borrow_mut().take() {
            timer.cancel();
        }
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        self.teardown();
    }
}

// =============================================================================
// Tests
// =============================================================================
