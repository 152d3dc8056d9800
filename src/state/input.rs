//! Input Module - Event conversion and routing
//!
//! Bridges crossterm's event system with the carousel's controls. Provides
//! event polling, conversion, and routing.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `read_event` - Blocking event read
//! - `route_event` - Dispatch an event; resize feeds the viewport signals,
//!   keys map to navigation/quit commands for the caller
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use carousel_tui::state::input::{poll_event, route_event, Routed};
//!
//! // Event loop
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         match route_event(event) {
//!             Routed::Next => { /* advance */ }
//!             Routed::Prev => { /* retreat */ }
//!             Routed::Quit => break,
//!             _ => {}
//!         }
//!     }
//! }
//! ```

use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers,
    poll, read,
};
use std::time::Duration;

use crate::pipeline::viewport::set_viewport_size;

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Escape", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }
}

/// Unified event type for the widget
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// Keyboard event (key press or repeat)
    Key(KeyboardEvent),
    /// Terminal resize event (new width, height)
    Resize(u16, u16),
    /// No event or unhandled event type
    None,
}

/// Result of routing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Move to the previous slide (ArrowLeft).
    Prev,
    /// Move to the next slide (ArrowRight).
    Next,
    /// Stop the event loop (q, Escape, Ctrl+C).
    Quit,
    /// Viewport signals were updated from a resize notification.
    Resized,
    /// Nothing the widget cares about.
    Ignored,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent.
///
/// Key releases are dropped (returns None); controls fire on press and
/// repeat only.
pub fn convert_key_event(event: CrosstermKeyEvent) -> Option<KeyboardEvent> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        _ => return None,
    };

    Some(KeyboardEvent {
        key,
        modifiers: convert_modifiers(event.modifiers),
    })
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(convert_key_event(key)
            .map(InputEvent::Key)
            .unwrap_or(InputEvent::None)),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Route an event.
///
/// Resize notifications update the viewport signals directly (the width
/// observer reacts from there); key events are translated into commands
/// for the caller to apply to the widget.
pub fn route_event(event: InputEvent) -> Routed {
    match event {
        InputEvent::Key(key) => route_key(&key),
        InputEvent::Resize(w, h) => {
            set_viewport_size(w, h);
            Routed::Resized
        }
        InputEvent::None => Routed::Ignored,
    }
}

fn route_key(event: &KeyboardEvent) -> Routed {
    match event.key.as_str() {
        "ArrowLeft" => Routed::Prev,
        "ArrowRight" => Routed::Next,
        "q" | "Escape" => Routed::Quit,
        "c" if event.modifiers.ctrl => Routed::Quit,
        _ => Routed::Ignored,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::viewport::{set_viewport_size, viewport_width};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers, kind: KeyEventKind) -> CrosstermKeyEvent {
        CrosstermKeyEvent {
            code,
            modifiers,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_convert_key_char() {
        let event = convert_key_event(key(
            KeyCode::Char('q'),
            KeyModifiers::empty(),
            KeyEventKind::Press,
        ))
        .unwrap();

        assert_eq!(event.key, "q");
        assert!(!event.modifiers.ctrl);
    }

    #[test]
    fn test_convert_key_arrows() {
        let arrows = [
            (KeyCode::Left, "ArrowLeft"),
            (KeyCode::Right, "ArrowRight"),
            (KeyCode::Up, "ArrowUp"),
            (KeyCode::Down, "ArrowDown"),
        ];

        for (code, expected) in arrows {
            let event =
                convert_key_event(key(code, KeyModifiers::empty(), KeyEventKind::Press)).unwrap();
            assert_eq!(event.key, expected);
        }
    }

    #[test]
    fn test_convert_key_release_dropped() {
        let converted = convert_key_event(key(
            KeyCode::Char('a'),
            KeyModifiers::empty(),
            KeyEventKind::Release,
        ));
        assert!(converted.is_none());
    }

    #[test]
    fn test_convert_key_with_ctrl() {
        let event = convert_key_event(key(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            KeyEventKind::Press,
        ))
        .unwrap();

        assert_eq!(event.key, "c");
        assert!(event.modifiers.ctrl);
    }

    #[test]
    fn test_route_navigation_keys() {
        assert_eq!(
            route_event(InputEvent::Key(KeyboardEvent::new("ArrowLeft"))),
            Routed::Prev
        );
        assert_eq!(
            route_event(InputEvent::Key(KeyboardEvent::new("ArrowRight"))),
            Routed::Next
        );
    }

    #[test]
    fn test_route_quit_keys() {
        assert_eq!(
            route_event(InputEvent::Key(KeyboardEvent::new("q"))),
            Routed::Quit
        );
        assert_eq!(
            route_event(InputEvent::Key(KeyboardEvent::new("Escape"))),
            Routed::Quit
        );

        let ctrl_c = KeyboardEvent {
            key: "c".to_string(),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert_eq!(route_event(InputEvent::Key(ctrl_c)), Routed::Quit);

        // Plain 'c' is not quit
        assert_eq!(
            route_event(InputEvent::Key(KeyboardEvent::new("c"))),
            Routed::Ignored
        );
    }

    #[test]
    fn test_route_resize_updates_viewport() {
        set_viewport_size(80, 24);

        let routed = route_event(InputEvent::Resize(120, 40));
        assert_eq!(routed, Routed::Resized);
        assert_eq!(viewport_width(), 120);
    }

    #[test]
    fn test_route_none_ignored() {
        assert_eq!(route_event(InputEvent::None), Routed::Ignored);
    }
}
