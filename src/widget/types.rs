//! Widget types - Props and cleanup.
//!
//! Props support static values, signals, and getters for reactivity.
//! The key is to pass props directly - don't extract values before binding:
//! a `PropValue::Signal` read inside an effect stays connected, an
//! extracted value does not.

use std::rc::Rc;
use std::time::Duration;

use spark_signals::Signal;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by reactive setup code.
///
/// Call this to release the associated effects and resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reads inside an effect or derived establish a reactive dependency for
/// the signal and getter variants; static values never change.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value.
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

// =============================================================================
// Carousel Props
// =============================================================================

/// Properties for the carousel widget.
///
/// # Example
///
/// ```ignore
/// use carousel_tui::{carousel, CarouselProps};
/// use spark_signals::signal;
///
/// // Static image list
/// let widget = carousel(CarouselProps::new(vec![
///     "https://example.com/a.png".to_string(),
///     "https://example.com/b.png".to_string(),
/// ]));
///
/// // Live image list: updating the signal re-measures and re-renders
/// let images = signal(vec!["a.png".to_string()]);
/// let widget = carousel(CarouselProps::new(images.clone()));
/// images.set(vec!["a.png".to_string(), "b.png".to_string()]);
/// ```
pub struct CarouselProps {
    /// The ordered image references to show. Render order = list order;
    /// duplicates are allowed; an empty list renders no slides.
    pub images: PropValue<Vec<String>>,

    /// Autoplay interval (default: 3000 ms).
    pub interval: Option<Duration>,

    /// Whether the autoplay timer runs (default: true).
    pub autoplay: bool,

    /// Duration of the slide transition easing (default: 500 ms).
    /// `Duration::ZERO` snaps immediately.
    pub transition: Option<Duration>,
}

impl CarouselProps {
    /// Create props with the given image list and defaults for the rest.
    ///
    /// This is the recommended constructor since the image list is the one
    /// required input.
    pub fn new(images: impl Into<PropValue<Vec<String>>>) -> Self {
        Self {
            images: images.into(),
            interval: None,
            autoplay: true,
            transition: None,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
