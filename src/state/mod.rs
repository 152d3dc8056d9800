//! State Module - Reactive widget state systems
//!
//! This module contains the state systems that power the carousel:
//!
//! - **Index** - Current slide position with clamped and wrapping transitions
//! - **Autoplay** - Repeating timer with pending-tick draining
//! - **Transition** - Time-based easing of the display offset
//! - **Input** - Crossterm event conversion and routing

pub mod autoplay;
pub mod index;
pub mod input;
pub mod transition;

pub use autoplay::*;
pub use index::*;
pub use input::*;
pub use transition::*;
