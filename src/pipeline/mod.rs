//! Pipeline Module - From state to terminal.
//!
//! The reactive render pipeline:
//!
//! ```text
//! viewport signals ─┐
//! image list ───────┤
//! slide index ──────┼─> frame derived ─> render effect ─> terminal diff
//! slide width ──────┤
//! display offset ───┘
//! ```
//!
//! - [`viewport`] - thread-local terminal size signals
//! - [`frame`] - pure frame computation as a derived
//! - [`mount`] - fullscreen setup, render effect, event loop

pub mod frame;
pub mod mount;
pub mod viewport;

pub use frame::create_frame_derived;
pub use mount::{CarouselHandle, mount};
pub use viewport::{
    detect_viewport_size, set_viewport_size, viewport_height, viewport_height_signal,
    viewport_width, viewport_width_signal,
};
