//! Global keyboard shortcuts of the design surface.

/// A key as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Enter,
    Escape,
    Char(char),
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyChord {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
    pub shift: bool,
}

impl KeyChord {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Ctrl or Cmd is held.
    pub fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Editor command bound to a shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    DeleteSelected,
    Undo,
    Redo,
}

/// Maps a chord to an action.
///
/// Nothing resolves while the text overlay is open so typing never
/// deletes items or walks the history.
pub fn resolve_shortcut(chord: &KeyChord, text_editing: bool) -> Option<EditorAction> {
    if text_editing {
        return None;
    }

    match chord.key {
        Key::Delete | Key::Backspace => Some(EditorAction::DeleteSelected),
        Key::Char(c) if chord.command() => match c.to_ascii_lowercase() {
            'z' if chord.shift => Some(EditorAction::Redo),
            'z' => Some(EditorAction::Undo),
            'y' => Some(EditorAction::Redo),
            _ => None,
        },
        _ => None,
    }
}
