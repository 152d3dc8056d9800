//! Mount pipeline - Wire the carousel to a real terminal.
//!
//! `mount` builds the widget, subscribes a render effect to the frame
//! derived, and puts the terminal into fullscreen mode. The returned
//! [`CarouselHandle`] drives everything through [`CarouselHandle::tick`]
//! (one event-loop iteration) or [`CarouselHandle::run`] (loop until
//! quit), and restores the terminal on `unmount` or drop.
//!
//! # Example
//!
//! ```ignore
//! use carousel_tui::{CarouselProps, mount};
//!
//! let props = CarouselProps::new(vec!["a.png".to_string(), "b.png".to_string()]);
//! let mut handle = mount(props)?;
//! handle.run()?;
//! handle.unmount()?;
//! ```

use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use spark_signals::effect;

use super::frame::create_frame_derived;
use super::viewport::detect_viewport_size;
use crate::renderer::TerminalRenderer;
use crate::state::input::{Routed, poll_event, route_event};
use crate::widget::{Carousel, CarouselProps, Cleanup, carousel};

/// Event poll timeout per iteration; also the frame pacing (~60fps).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// A carousel mounted on the terminal.
pub struct CarouselHandle {
    widget: Carousel,
    renderer: Rc<RefCell<TerminalRenderer>>,
    stop_render: Option<Cleanup>,
    /// Cleared on unmount so a queued effect run cannot write to a
    /// restored terminal.
    running: Arc<AtomicBool>,
    last_tick: Instant,
}

/// Mount a carousel: build the state graph, enter fullscreen, start
/// rendering reactively.
pub fn mount(props: CarouselProps) -> io::Result<CarouselHandle> {
    detect_viewport_size();

    let widget = carousel(props);
    let frame = create_frame_derived(
        widget.images(),
        widget.index_signal(),
        widget.width_signal(),
        widget.offset_signal(),
    );

    let renderer = Rc::new(RefCell::new(TerminalRenderer::new()));
    renderer.borrow_mut().enter_fullscreen()?;

    let running = Arc::new(AtomicBool::new(true));

    let stop_render = {
        let renderer = renderer.clone();
        let running = running.clone();
        Box::new(effect(move || {
            // Read first so the dependency is tracked even while gated
            let buffer = frame.get();
            if running.load(Ordering::SeqCst) {
                let _ = renderer.borrow_mut().render(&buffer);
            }
        })) as Cleanup
    };

    Ok(CarouselHandle {
        widget,
        renderer,
        stop_render: Some(stop_render),
        running,
        last_tick: Instant::now(),
    })
}

impl CarouselHandle {
    /// The widget, for direct navigation or inspection.
    pub fn widget(&self) -> &Carousel {
        &self.widget
    }

    /// One event-loop iteration: poll input, route it, pump the widget.
    ///
    /// Returns `Ok(false)` when the user asked to quit.
    pub fn tick(&mut self) -> io::Result<bool> {
        if let Some(event) = poll_event(TICK_INTERVAL)? {
            match route_event(event) {
                Routed::Prev => {
                    self.widget.retreat();
                }
                Routed::Next => {
                    self.widget.advance();
                }
                Routed::Quit => return Ok(false),
                // Size change invalidates the diff baseline
                Routed::Resized => self.renderer.borrow_mut().invalidate(),
                Routed::Ignored => {}
            }
        }

        let now = Instant::now();
        let dt = now - self.last_tick;
        self.last_tick = now;
        self.widget.pump(dt);

        Ok(true)
    }

    /// Run the event loop until the user quits.
    pub fn run(&mut self) -> io::Result<()> {
        while self.tick()? {}
        Ok(())
    }

    /// Unmount: stop rendering, tear down the widget's effects and timer,
    /// restore the terminal.
    pub fn unmount(mut self) -> io::Result<()> {
        self.teardown();
        self.renderer.borrow_mut().exit_fullscreen()
        // widget effects and timer are released when self drops
    }

    fn teardown(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(stop) = self.stop_render.take() {
            stop();
        }
    }
}

impl Drop for CarouselHandle {
    fn drop(&mut self) {
        // Best-effort restore when unmount was never called
        if self.stop_render.is_some() {
            self.teardown();
            let _ = self.renderer.borrow_mut().exit_fullscreen();
        }
    }
}
