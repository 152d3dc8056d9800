//! FrameBuffer and drawing primitives.
//!
//! The FrameBuffer is a 2D grid of Cells that represents what should be
//! displayed on the terminal. All drawing operations work on this buffer.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing for cache
//!   efficiency.
//! - **Signed x**: drawing functions take `i32` x coordinates because the
//!   translated slide strip extends past both viewport edges; out-of-bounds
//!   cells are silently clipped.

use crate::types::{Attr, Cell};

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    /// Get buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Get buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Convert (x, y) to flat index.
    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Check if coordinates are in bounds.
    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Set a single cell. Coordinates outside the buffer are clipped.
    pub fn set_cell(&mut self, x: i32, y: i32, ch: char, attrs: Attr) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.cells[idx] = Cell::styled(ch, attrs);
        }
    }

    /// Draw a text run starting at (x, y). Clipped at both edges.
    pub fn draw_text(&mut self, x: i32, y: i32, text: &str, attrs: Attr) {
        for (i, ch) in text.chars().enumerate() {
            self.set_cell(x + i as i32, y, ch, attrs);
        }
    }

    /// Draw a single-line box border. Degenerate boxes (width or height
    /// below 2) are skipped.
    pub fn draw_border(&mut self, x: i32, y: i32, width: u16, height: u16, attrs: Attr) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width as i32 - 1;
        let bottom = y + height as i32 - 1;

        self.set_cell(x, y, '┌', attrs);
        self.set_cell(right, y, '┐', attrs);
        self.set_cell(x, bottom, '└', attrs);
        self.set_cell(right, bottom, '┘', attrs);

        for cx in (x + 1)..right {
            self.set_cell(cx, y, '─', attrs);
            self.set_cell(cx, bottom, '─', attrs);
        }
        for cy in (y + 1)..bottom {
            self.set_cell(x, cy, '│', attrs);
            self.set_cell(right, cy, '│', attrs);
        }
    }

    /// The text content of one row, without attributes. Test helper and
    /// debugging aid.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|cell| cell.ch)
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_blank() {
        let buffer = FrameBuffer::new(10, 4);
        assert_eq!(buffer.width(), 10);
        assert_eq!(buffer.height(), 4);
        assert_eq!(buffer.row_text(0), "          ");
    }

    #[test]
    fn test_set_cell_in_bounds() {
        let mut buffer = FrameBuffer::new(10, 4);
        buffer.set_cell(3, 1, 'X', Attr::BOLD);

        let cell = buffer.get(3, 1).unwrap();
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.attrs, Attr::BOLD);
    }

    #[test]
    fn test_set_cell_clips_out_of_bounds() {
        let mut buffer = FrameBuffer::new(10, 4);
        // None of these panic or wrap around
        buffer.set_cell(-1, 0, 'X', Attr::NONE);
        buffer.set_cell(0, -1, 'X', Attr::NONE);
        buffer.set_cell(10, 0, 'X', Attr::NONE);
        buffer.set_cell(0, 4, 'X', Attr::NONE);

        assert_eq!(buffer.row_text(0), "          ");
    }

    #[test]
    fn test_draw_text_clipped_left() {
        let mut buffer = FrameBuffer::new(5, 1);
        buffer.draw_text(-2, 0, "hello", Attr::NONE);
        // First two chars fall off the left edge
        assert_eq!(buffer.row_text(0), "llo  ");
    }

    #[test]
    fn test_draw_text_clipped_right() {
        let mut buffer = FrameBuffer::new(5, 1);
        buffer.draw_text(3, 0, "hello", Attr::NONE);
        assert_eq!(buffer.row_text(0), "   he");
    }

    #[test]
    fn test_draw_border() {
        let mut buffer = FrameBuffer::new(5, 3);
        buffer.draw_border(0, 0, 5, 3, Attr::NONE);

        assert_eq!(buffer.row_text(0), "┌───┐");
        assert_eq!(buffer.row_text(1), "│   │");
        assert_eq!(buffer.row_text(2), "└───┘");
    }

    #[test]
    fn test_draw_border_partially_offscreen() {
        let mut buffer = FrameBuffer::new(4, 3);
        // Box hangs off the left edge, as a translated slide would
        buffer.draw_border(-3, 0, 6, 3, Attr::NONE);

        assert_eq!(buffer.row_text(0), "──┐ ");
        assert_eq!(buffer.row_text(2), "──┘ ");
    }

    #[test]
    fn test_degenerate_border_skipped() {
        let mut buffer = FrameBuffer::new(5, 3);
        buffer.draw_border(0, 0, 1, 3, Attr::NONE);
        buffer.draw_border(0, 0, 5, 1, Attr::NONE);
        assert_eq!(buffer.row_text(0), "     ");
    }
}
