//! Widget Module - The carousel component.
//!
//! [`carousel`] builds the reactive state graph (index, width observer,
//! autoplay re-arm, offset transition) and returns a [`Carousel`] handle
//! that owns every effect and the timer. The handle is headless: rendering
//! is wired up separately by [`crate::pipeline::mount`], which keeps the
//! widget's logic fully testable without a terminal.

mod carousel;
mod types;

pub use carousel::{Carousel, carousel};
pub use types::{CarouselProps, Cleanup, PropValue};
