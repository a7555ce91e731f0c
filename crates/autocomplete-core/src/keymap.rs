//! Key press model and binding resolution.
//!
//! The core is headless: it defines its own small key model rather than
//! importing any UI framework's event types. The host maps its native key
//! events into [`KeyPress`] values and asks the session to resolve them.

/// A key identifier delivered by the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Tab key.
    Tab,
    /// Enter / Return.
    Enter,
    /// Escape key.
    Escape,
    /// A printable character.
    Char(char),
    /// Any other key.
    Other,
}

/// A raw key-press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The pressed key.
    pub key: Key,
}

impl KeyPress {
    /// Create a key press for the given key.
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

/// The resolved autocomplete command for a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Accept the highlighted suggestion (or the literal partial text).
    Autocomplete,
    /// Move the highlight to the previous suggestion.
    PrevSuggestion,
    /// Move the highlight to the next suggestion.
    NextSuggestion,
    /// Not an autocomplete key; the host's default binding applies.
    NotHandled,
}

/// Resolve `press` given whether a trigger match is currently active.
///
/// Without an active match every key falls through to the host's default
/// binding. With one, Tab and Enter accept, and the arrow keys navigate the
/// suggestion list.
pub fn resolve_key(press: &KeyPress, match_active: bool) -> KeyCommand {
    if !match_active {
        return KeyCommand::NotHandled;
    }

    match press.key {
        Key::Tab | Key::Enter => KeyCommand::Autocomplete,
        Key::Up => KeyCommand::PrevSuggestion,
        Key::Down => KeyCommand::NextSuggestion,
        _ => KeyCommand::NotHandled,
    }
}
