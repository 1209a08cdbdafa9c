//! Message types for the omnibox.
//!
//! Every host event becomes one of these and flows through
//! [`update`](super::update::update).

use super::classify::InputType;
use super::selection::SelectionRange;

/// Keys the omnibox reacts to on keydown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Backspace,
    Enter,
    /// Any other key (ignored, but lets hosts forward everything)
    Other,
}

/// Host field events
#[derive(Debug, Clone, PartialEq)]
pub enum OmniboxMsg {
    /// The field's text changed
    Change {
        /// Full text now in the field
        value: String,
        /// Caret position after the edit (chars)
        caret: usize,
        /// Native input type, when the host knows it
        input_type: Option<InputType>,
        /// Host says an IME composition is in progress
        composing: bool,
    },
    /// A key went down, before the field applied it
    KeyDown {
        key: Key,
        /// Selection in the field before the key is applied
        selection: SelectionRange,
    },
    /// IME composition started
    CompositionStart,
    /// IME composition ended (committed or cancelled)
    CompositionEnd,
    /// Explicit submit (e.g. a button)
    Submit,
    /// Programmatic clear
    Clear,
}

impl OmniboxMsg {
    /// Change event for typed text
    pub fn typed(value: impl Into<String>, caret: usize) -> Self {
        OmniboxMsg::Change {
            value: value.into(),
            caret,
            input_type: Some(InputType::InsertText),
            composing: false,
        }
    }

    /// Change event for a backward deletion
    pub fn deleted(value: impl Into<String>, caret: usize) -> Self {
        OmniboxMsg::Change {
            value: value.into(),
            caret,
            input_type: Some(InputType::DeleteBackward),
            composing: false,
        }
    }

    /// Keydown with the field's current selection
    pub fn key(key: Key, selection: SelectionRange) -> Self {
        OmniboxMsg::KeyDown { key, selection }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            OmniboxMsg::Change { .. } => "change",
            OmniboxMsg::KeyDown { key: Key::Backspace, .. } => "backspace",
            OmniboxMsg::KeyDown { key: Key::Enter, .. } => "enter",
            OmniboxMsg::KeyDown { .. } => "keydown",
            OmniboxMsg::CompositionStart => "composition-start",
            OmniboxMsg::CompositionEnd => "composition-end",
            OmniboxMsg::Submit => "submit",
            OmniboxMsg::Clear => "clear",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_constructor() {
        let msg = OmniboxMsg::typed("Ap", 2);
        assert_eq!(
            msg,
            OmniboxMsg::Change {
                value: "Ap".to_string(),
                caret: 2,
                input_type: Some(InputType::InsertText),
                composing: false,
            }
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(OmniboxMsg::deleted("A", 1).kind(), "change");
        assert_eq!(
            OmniboxMsg::key(Key::Backspace, SelectionRange::collapsed(0)).kind(),
            "backspace"
        );
        assert_eq!(OmniboxMsg::CompositionEnd.kind(), "composition-end");
    }
}
