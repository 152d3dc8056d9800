//! Core types - cells, attributes, timing constants.
//!
//! Shared building blocks of the widget: the terminal cell model used by
//! the frame buffer and renderer, and the timing defaults for autoplay and
//! the slide transition.

use std::time::Duration;

// =============================================================================
// Timing Constants
// =============================================================================

/// Default autoplay interval: advance every 3 seconds.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3000);

/// Default duration of the slide transition (easing of the display offset).
pub const TRANSITION_DURATION: Duration = Duration::from_millis(500);

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield for efficient storage and comparison.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One terminal cell: a character plus its attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The character displayed in this cell.
    pub ch: char,
    /// Attribute flags (bold, dim, etc.).
    pub attrs: Attr,
}

impl Cell {
    /// Create a cell with the given character and no attributes.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            attrs: Attr::NONE,
        }
    }

    /// Create a cell with the given character and attributes.
    pub fn styled(ch: char, attrs: Attr) -> Self {
        Self { ch, attrs }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            attrs: Attr::NONE,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert_eq!(cell.attrs, Attr::NONE);
    }

    #[test]
    fn test_attr_combination() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(attrs.contains(Attr::UNDERLINE));
        assert!(!attrs.contains(Attr::DIM));
    }

    #[test]
    fn test_styled_cell() {
        let cell = Cell::styled('X', Attr::DIM);
        assert_eq!(cell.ch, 'X');
        assert_eq!(cell.attrs, Attr::DIM);
    }
}
