//! Fullscreen carousel demo.
//!
//! Run with: cargo run --example carousel
//!
//! Controls:
//! - Left/Right arrows: previous/next slide (clamped at the ends)
//! - q / Escape / Ctrl+C: quit
//!
//! The carousel also advances on its own every 3 seconds, wrapping back
//! to the first slide after the last one.

use carousel_tui::{CarouselProps, mount};

fn main() -> std::io::Result<()> {
    let images = vec![
        "photos/sunrise-over-harbor.png".to_string(),
        "photos/market-street.png".to_string(),
        "photos/cliffside-lighthouse.png".to_string(),
        "photos/autumn-forest-trail.png".to_string(),
        "photos/night-skyline.png".to_string(),
    ];

    let mut handle = mount(CarouselProps::new(images))?;
    handle.run()?;
    handle.unmount()
}
