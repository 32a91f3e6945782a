//! Key bindings for frame navigation.

use crossterm::event::KeyCode;

/// Navigation action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Show the previous frame.
    Previous,
    /// Show the next frame.
    Next,
    /// Jump to the first frame.
    First,
    /// Jump to the last frame.
    Last,
    /// Show or hide the frame-number label.
    ToggleNumbering,
}

impl Action {
    /// Short description for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            Action::Previous => "Previous frame",
            Action::Next => "Next frame",
            Action::First => "First frame",
            Action::Last => "Last frame",
            Action::ToggleNumbering => "Toggle numbering",
        }
    }
}

/// Keys understood by a frame sequence.
pub const KEYMAP: &[(KeyCode, Action)] = &[
    (KeyCode::Left, Action::Previous),
    (KeyCode::Right, Action::Next),
    (KeyCode::Home, Action::First),
    (KeyCode::End, Action::Last),
    (KeyCode::Delete, Action::ToggleNumbering),
];

/// Look up the action for a key, if any.
pub fn action_for(code: KeyCode) -> Option<Action> {
    KEYMAP
        .iter()
        .find(|(key, _)| *key == code)
        .map(|&(_, action)| action)
}
