//! # carousel-tui
//!
//! A reactive terminal image carousel built on fine-grained signals.
//!
//! An ordered list of image references becomes a horizontal strip of
//! slide cards, one viewport wide each. The strip is translated by
//! `-(slide_width * index)` so exactly one slide fills the viewport;
//! navigation eases the strip to its new position.
//!
//! - **Autoplay** advances every 3 seconds and wraps past the last slide.
//! - **Manual navigation** (arrow keys) clamps at both ends and never
//!   wraps. Any change resets the autoplay phase.
//! - **Resize** re-measures the slide width; the current slide stays put.
//!
//! State lives in signals; measurement, autoplay re-arming, and rendering
//! are effects over them, so every update path is just a signal write.
//!
//! # Quick Start
//!
//! ```ignore
//! use carousel_tui::{CarouselProps, mount};
//!
//! fn main() -> std::io::Result<()> {
//!     let mut handle = mount(CarouselProps::new(vec![
//!         "photos/alpha.png".to_string(),
//!         "photos/beta.png".to_string(),
//!         "photos/gamma.png".to_string(),
//!     ]))?;
//!     handle.run()?;
//!     handle.unmount()
//! }
//! ```
//!
//! # Architecture
//!
//! - [`state`] - slide index, autoplay timer, transition easing, input
//! - [`layout`] - slide width measurement via taffy
//! - [`pipeline`] - viewport signals, frame derived, mount/event loop
//! - [`renderer`] - frame buffer and diff-based terminal output
//! - [`widget`] - the carousel component tying it all together

pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod state;
pub mod types;
pub mod widget;

// Core types
pub use types::{AUTOPLAY_INTERVAL, Attr, Cell, TRANSITION_DURATION};

// State systems
pub use state::{
    AutoplayTimer, InputEvent, KeyboardEvent, Modifiers, Routed, SlideIndex, Transition,
    convert_key_event, poll_event, read_event, route_event,
};

// Layout
pub use layout::slide_width;

// Pipeline
pub use pipeline::{
    CarouselHandle, create_frame_derived, detect_viewport_size, mount, set_viewport_size,
    viewport_height, viewport_width,
};

// Rendering
pub use renderer::{FrameBuffer, TerminalRenderer};

// Widget
pub use widget::{Carousel, CarouselProps, Cleanup, PropValue, carousel};
