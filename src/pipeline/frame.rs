//! Frame derived - Pure frame computation from carousel state.
//!
//! A derived that rebuilds the [`FrameBuffer`] whenever any of its inputs
//! change: the viewport size, the image list, the slide index, the slide
//! width, or the eased display offset. The render effect in the mount
//! pipeline subscribes to it and pushes changed frames to the terminal.
//!
//! # Layout
//!
//! ```text
//! ┌──────────────────────────────┐   <- slide card, one per image,
//! │ ‹       photo-01.png       › │      translated by the display offset
//! │          Slide 1 / 3         │   <- controls on the middle row
//! └──────────────────────────────┘
//!              1 / 3                <- status line, bottom row
//! ```
//!
//! Slides outside the viewport are culled; partially visible neighbors
//! are clipped by the buffer's drawing primitives.

use spark_signals::{Derived, Signal, derived};

use super::viewport::{viewport_height_signal, viewport_width_signal};
use crate::renderer::FrameBuffer;
use crate::types::Attr;
use crate::widget::PropValue;

/// Rows reserved below the slide cards for the status line.
const STATUS_ROWS: u16 = 1;

/// Build the reactive frame computation for a carousel.
pub fn create_frame_derived(
    images: PropValue<Vec<String>>,
    index: Signal<usize>,
    slide_width: Signal<u16>,
    display_offset: Signal<i32>,
) -> Derived<FrameBuffer> {
    let viewport_width = viewport_width_signal();
    let viewport_height = viewport_height_signal();

    derived(move || {
        let vw = viewport_width.get();
        let vh = viewport_height.get();
        let images = images.get();
        let count = images.len();
        let width = slide_width.get();
        let offset = display_offset.get();
        // Clamped read: a shrunken list shows its last slide until the
        // next advance restores the invariant
        let shown = if count == 0 {
            0
        } else {
            index.get().min(count - 1)
        };

        let mut frame = FrameBuffer::new(vw, vh);
        if vw == 0 || vh == 0 {
            return frame;
        }

        let card_height = vh.saturating_sub(STATUS_ROWS);

        for (i, image) in images.iter().enumerate() {
            let x = i as i32 * width as i32 + offset;
            // Cull slides entirely outside the viewport
            if x + width as i32 <= 0 || x >= vw as i32 {
                continue;
            }
            draw_slide(&mut frame, x, width, card_height, image, i + 1, count);
        }

        draw_controls(&mut frame, vw, card_height, count, shown);
        draw_status(&mut frame, vw, vh, count, shown);

        frame
    })
}

/// One slide card: border, centered image reference, slide label.
fn draw_slide(
    frame: &mut FrameBuffer,
    x: i32,
    width: u16,
    height: u16,
    image: &str,
    number: usize,
    count: usize,
) {
    frame.draw_border(x, 0, width, height, Attr::NONE);

    // Interior text needs room inside the border
    if width < 5 || height < 3 {
        return;
    }
    let inner = width as usize - 4;
    let mid_y = (height / 2) as i32;

    let reference: String = image.chars().take(inner).collect();
    frame.draw_text(centered(x, width, &reference), mid_y, &reference, Attr::BOLD);

    if height >= 5 {
        let label = format!("Slide {} / {}", number, count);
        if label.len() <= inner {
            frame.draw_text(centered(x, width, &label), mid_y + 1, &label, Attr::DIM);
        }
    }
}

/// Previous/next chevrons at the viewport edges, dimmed when inert.
fn draw_controls(frame: &mut FrameBuffer, vw: u16, card_height: u16, count: usize, shown: usize) {
    if vw < 4 {
        return;
    }
    let mid_y = (card_height / 2) as i32;

    let prev_inert = count == 0 || shown == 0;
    let next_inert = count == 0 || shown + 1 >= count;

    frame.set_cell(1, mid_y, '‹', if prev_inert { Attr::DIM } else { Attr::BOLD });
    frame.set_cell(
        vw as i32 - 2,
        mid_y,
        '›',
        if next_inert { Attr::DIM } else { Attr::BOLD },
    );
}

/// Position indicator on the bottom row.
fn draw_status(frame: &mut FrameBuffer, vw: u16, vh: u16, count: usize, shown: usize) {
    let status = if count == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", shown + 1, count)
    };
    let x = (vw as i32 - status.len() as i32) / 2;
    frame.draw_text(x, vh as i32 - 1, &status, Attr::DIM);
}

/// The x coordinate that centers `text` within a card starting at `x`.
fn centered(x: i32, width: u16, text: &str) -> i32 {
    x + (width as i32 - text.chars().count() as i32) / 2
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::viewport::set_viewport_size;
    use spark_signals::signal;

    fn fixture(
        images: Vec<&str>,
        index: usize,
        width: u16,
        offset: i32,
    ) -> Derived<FrameBuffer> {
        let images: Vec<String> = images.into_iter().map(String::from).collect();
        create_frame_derived(
            images.into(),
            signal(index),
            signal(width),
            signal(offset),
        )
    }

    #[test]
    fn test_first_slide_fills_viewport() {
        set_viewport_size(20, 7);
        let frame = fixture(vec!["a.png", "b.png"], 0, 20, 0).get();

        assert_eq!(frame.width(), 20);
        assert_eq!(frame.height(), 7);
        // Card border spans the full width on the top row
        assert!(frame.row_text(0).starts_with('┌'));
        assert!(frame.row_text(0).ends_with('┐'));
        // Image reference centered mid-card
        assert!(frame.row_text(3).contains("a.png"));
    }

    #[test]
    fn test_offset_translates_strip() {
        set_viewport_size(20, 7);
        // Second slide showing: strip shifted left by one slide width
        let frame = fixture(vec!["a.png", "b.png"], 1, 20, -20).get();

        assert!(frame.row_text(3).contains("b.png"));
        assert!(!frame.row_text(3).contains("a.png"));
    }

    #[test]
    fn test_mid_transition_shows_both_neighbors() {
        set_viewport_size(20, 7);
        // Halfway between slide 0 and slide 1
        let frame = fixture(vec!["aaaa.png", "bbbb.png"], 1, 20, -10).get();

        let row = frame.row_text(3);
        // Right half of slide 0 and left half of slide 1 are both visible
        assert!(row.contains("png"), "tail of the first slide: {row}");
        assert!(row.contains("bbb"), "head of the second slide: {row}");
    }

    #[test]
    fn test_status_line() {
        set_viewport_size(20, 7);
        let frame = fixture(vec!["a.png", "b.png", "c.png"], 1, 20, -20).get();
        assert!(frame.row_text(6).contains("2 / 3"));
    }

    #[test]
    fn test_controls_dim_at_boundaries() {
        set_viewport_size(20, 7);

        let first = fixture(vec!["a.png", "b.png"], 0, 20, 0).get();
        assert_eq!(first.get(1, 3).unwrap().attrs, Attr::DIM);
        assert_eq!(first.get(18, 3).unwrap().attrs, Attr::BOLD);

        let last = fixture(vec!["a.png", "b.png"], 1, 20, -20).get();
        assert_eq!(last.get(1, 3).unwrap().attrs, Attr::BOLD);
        assert_eq!(last.get(18, 3).unwrap().attrs, Attr::DIM);
    }

    #[test]
    fn test_empty_list_renders_no_slides() {
        set_viewport_size(20, 7);
        let frame = fixture(vec![], 0, 20, 0).get();

        // No card border anywhere, both controls inert, zero status
        assert!(!frame.row_text(0).contains('┌'));
        assert_eq!(frame.get(1, 3).unwrap().attrs, Attr::DIM);
        assert_eq!(frame.get(18, 3).unwrap().attrs, Attr::DIM);
        assert!(frame.row_text(6).contains("0 / 0"));
    }

    #[test]
    fn test_index_read_is_clamped_to_list() {
        set_viewport_size(20, 7);
        // Index 5 with only two images: the last slide is shown
        let frame = fixture(vec!["a.png", "b.png"], 5, 20, -20).get();
        assert!(frame.row_text(6).contains("2 / 2"));
    }

    #[test]
    fn test_reacts_to_viewport_change() {
        set_viewport_size(20, 7);
        let derived = fixture(vec!["a.png"], 0, 20, 0);
        assert_eq!(derived.get().width(), 20);

        set_viewport_size(40, 10);
        assert_eq!(derived.get().width(), 40);
    }

    #[test]
    fn test_offscreen_slides_are_culled() {
        set_viewport_size(20, 7);
        // Ten slides, showing the fifth: only neighbors can appear
        let images = vec![
            "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9",
        ];
        let frame = fixture(images, 4, 20, -80).get();

        let row = frame.row_text(3);
        assert!(row.contains("s4"));
        assert!(!row.contains("s0"));
        assert!(!row.contains("s9"));
    }
}
