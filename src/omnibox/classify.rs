//! Edit classification for change events.
//!
//! Hosts report the DOM-style `inputType` of each change where they can
//! ("insertText", "deleteContentBackward", ...). Anything we cannot label with
//! confidence is treated as an insertion.

/// What kind of native edit produced a change event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    /// Typed character(s)
    InsertText,
    /// Pasted or dropped text
    InsertFromPaste,
    /// IME pre-edit update
    InsertComposition,
    /// Backspace
    DeleteBackward,
    /// Delete key
    DeleteForward,
    /// Word or line deletion (Ctrl/Option+Backspace, etc.)
    DeleteWord,
    /// Cut to clipboard
    DeleteByCut,
    /// Anything else (undo, spellcheck replacement, unknown)
    Other,
}

impl InputType {
    pub fn is_insert(self) -> bool {
        matches!(
            self,
            InputType::InsertText | InputType::InsertFromPaste | InputType::InsertComposition
        )
    }

    pub fn is_delete(self) -> bool {
        matches!(
            self,
            InputType::DeleteBackward
                | InputType::DeleteForward
                | InputType::DeleteWord
                | InputType::DeleteByCut
        )
    }

    pub fn is_composition(self) -> bool {
        self == InputType::InsertComposition
    }
}

impl From<&str> for InputType {
    fn from(value: &str) -> Self {
        match value {
            "insertCompositionText" => InputType::InsertComposition,
            "insertFromPaste" | "insertFromDrop" | "insertFromPasteAsQuotation" => {
                InputType::InsertFromPaste
            }
            "deleteContentBackward" => InputType::DeleteBackward,
            "deleteContentForward" => InputType::DeleteForward,
            "deleteByCut" => InputType::DeleteByCut,
            s if s.starts_with("deleteWord")
                || s.starts_with("deleteSoftLine")
                || s.starts_with("deleteHardLine")
                || s == "deleteEntireSoftLine" =>
            {
                InputType::DeleteWord
            }
            s if s.starts_with("insert") => InputType::InsertText,
            _ => InputType::Other,
        }
    }
}

/// Classified edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    Insert,
    Delete,
}

/// Classify a change event.
///
/// An explicit input type wins. Without one, a Backspace keydown that the
/// field let through marks the change as a deletion. Everything else is an
/// insertion.
pub fn classify(input_type: Option<InputType>, backspace_pending: bool) -> EditKind {
    match input_type {
        Some(t) if t.is_delete() => EditKind::Delete,
        Some(t) if t.is_insert() => EditKind::Insert,
        _ if backspace_pending => EditKind::Delete,
        _ => EditKind::Insert,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dom_input_types() {
        assert_eq!(InputType::from("insertText"), InputType::InsertText);
        assert_eq!(InputType::from("insertReplacementText"), InputType::InsertText);
        assert_eq!(InputType::from("insertFromPaste"), InputType::InsertFromPaste);
        assert_eq!(
            InputType::from("insertCompositionText"),
            InputType::InsertComposition
        );
        assert_eq!(
            InputType::from("deleteContentBackward"),
            InputType::DeleteBackward
        );
        assert_eq!(InputType::from("deleteWordBackward"), InputType::DeleteWord);
        assert_eq!(InputType::from("deleteByCut"), InputType::DeleteByCut);
        assert_eq!(InputType::from("historyUndo"), InputType::Other);
    }

    #[test]
    fn test_explicit_type_wins() {
        assert_eq!(classify(Some(InputType::InsertText), true), EditKind::Insert);
        assert_eq!(
            classify(Some(InputType::DeleteBackward), false),
            EditKind::Delete
        );
    }

    #[test]
    fn test_pending_backspace_marks_untyped_change_as_delete() {
        assert_eq!(classify(None, true), EditKind::Delete);
        assert_eq!(classify(Some(InputType::Other), true), EditKind::Delete);
    }

    #[test]
    fn test_ambiguous_change_is_insert() {
        assert_eq!(classify(None, false), EditKind::Insert);
        assert_eq!(classify(Some(InputType::Other), false), EditKind::Insert);
    }
}
