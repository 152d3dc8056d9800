//! Layout Module - Slide width measurement.
//!
//! The widget does not assume a slide width; it measures one.
//! [`measure::slide_width`] lays the slide strip out with the Taffy
//! flexbox engine at the viewport's definite width and reads the first
//! slide's computed width back.

pub mod measure;

pub use measure::slide_width;
