//! Differential terminal output via crossterm.
//!
//! The TerminalRenderer compares the current frame to the previous frame
//! and only writes cells that have changed, wrapped in a synchronized
//! update block for flicker-free output.
//!
//! # Algorithm
//!
//! 1. Begin synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists, sizes match, and the cell is unchanged: skip
//!    - Otherwise: move, set attributes, print, reset
//! 3. End synchronized update and flush (single syscall)
//! 4. Store current frame as previous for the next comparison

use std::io::{self, Stdout, Write, stdout};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate, EnterAlternateScreen,
    LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};

use super::buffer::FrameBuffer;
use crate::types::{Attr, Cell};

/// Differential renderer writing to stdout.
///
/// Keeps the previous frame to enable diff-based rendering; a size change
/// or an explicit `invalidate` forces a full redraw.
pub struct TerminalRenderer {
    out: Stdout,
    previous: Option<FrameBuffer>,
}

impl TerminalRenderer {
    /// Create a new renderer. Does not touch the terminal yet.
    pub fn new() -> Self {
        Self {
            out: stdout(),
            previous: None,
        }
    }

    /// Enter fullscreen mode: raw mode, alternate screen, hidden cursor.
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode and restore the terminal.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        execute!(self.out, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }

    /// Render a frame, outputting only changed cells.
    ///
    /// Returns true if any cells were written.
    pub fn render(&mut self, buffer: &FrameBuffer) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.out, BeginSynchronizedUpdate)?;

        let width = buffer.width();
        let height = buffer.height();

        for y in 0..height {
            for x in 0..width {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };

                let changed = match &self.previous {
                    Some(prev) if prev.width() == width && prev.height() == height => {
                        prev.get(x, y) != Some(cell)
                    }
                    // No previous frame or size changed: full redraw
                    _ => true,
                };

                if changed {
                    has_changes = true;
                    self.write_cell(x, y, cell)?;
                }
            }
        }

        queue!(self.out, EndSynchronizedUpdate)?;
        self.out.flush()?;

        self.previous = Some(buffer.clone());
        Ok(has_changes)
    }

    /// Invalidate the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if there is a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    fn write_cell(&mut self, x: u16, y: u16, cell: &Cell) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;

        if cell.attrs.contains(Attr::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if cell.attrs.contains(Attr::DIM) {
            queue!(self.out, SetAttribute(Attribute::Dim))?;
        }
        if cell.attrs.contains(Attr::ITALIC) {
            queue!(self.out, SetAttribute(Attribute::Italic))?;
        }
        if cell.attrs.contains(Attr::UNDERLINE) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        if cell.attrs.contains(Attr::INVERSE) {
            queue!(self.out, SetAttribute(Attribute::Reverse))?;
        }

        queue!(self.out, Print(cell.ch))?;

        if cell.attrs != Attr::NONE {
            queue!(self.out, SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
