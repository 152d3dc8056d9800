//! Renderer Module - Frame buffer and terminal output.
//!
//! - [`FrameBuffer`] - 2D grid of cells with clipped drawing primitives
//! - [`TerminalRenderer`] - diff-based crossterm output (only changed cells
//!   are written each frame)

mod buffer;
mod output;

pub use buffer::FrameBuffer;
pub use output::TerminalRenderer;
