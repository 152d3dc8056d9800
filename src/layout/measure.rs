//! Slide width measurement via Taffy.
//!
//! Models the slide strip as a flex row: the strip is as wide as the
//! viewport, every slide has `flex-basis: 100%` and `flex-shrink: 0` so
//! each one spans the full viewport width and the strip overflows
//! horizontally. The measurement is the computed width of the first slide
//! node after layout.

use taffy::{
    AvailableSpace, Dimension as TaffyDimension, Display, FlexDirection, NodeId, Size, Style,
    TaffyTree,
};

/// Measure the rendered width of one slide at the given viewport width.
///
/// Returns 0 when there is nothing to measure (empty list or collapsed
/// viewport); callers treat that as "skip", not as an error.
pub fn slide_width(viewport: u16, slide_count: usize) -> u16 {
    if slide_count == 0 || viewport == 0 {
        return 0;
    }

    let mut tree: TaffyTree<()> = TaffyTree::new();

    // Each slide: full viewport width, never shrinks
    let slide_style = Style {
        flex_grow: 0.0,
        flex_shrink: 0.0,
        flex_basis: TaffyDimension::Percent(1.0),
        ..Default::default()
    };

    let slides: Vec<NodeId> = (0..slide_count)
        .map(|_| tree.new_leaf(slide_style.clone()).unwrap())
        .collect();

    // The strip: a flex row pinned to the viewport width
    let strip_style = Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        size: Size {
            width: TaffyDimension::Length(viewport as f32),
            height: TaffyDimension::Auto,
        },
        ..Default::default()
    };

    let strip = tree.new_with_children(strip_style, &slides).unwrap();

    let available = Size {
        width: AvailableSpace::Definite(viewport as f32),
        height: AvailableSpace::MaxContent,
    };
    let _ = tree.compute_layout(strip, available);

    tree.layout(slides[0])
        .map(|layout| layout.size.width.round() as u16)
        .unwrap_or(0)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_spans_viewport() {
        assert_eq!(slide_width(80, 3), 80);
        assert_eq!(slide_width(132, 3), 132);
        assert_eq!(slide_width(20, 1), 20);
    }

    #[test]
    fn test_width_independent_of_slide_count() {
        let w = slide_width(100, 1);
        assert_eq!(slide_width(100, 2), w);
        assert_eq!(slide_width(100, 10), w);
    }

    #[test]
    fn test_empty_list_measures_zero() {
        assert_eq!(slide_width(80, 0), 0);
    }

    #[test]
    fn test_collapsed_viewport_measures_zero() {
        assert_eq!(slide_width(0, 3), 0);
    }
}
