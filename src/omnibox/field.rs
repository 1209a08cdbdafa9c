//! Host field adapter.
//!
//! The field is the actual text widget. The omnibox never touches it directly:
//! after each update the adapter paints `value` and then applies the pending
//! selection, once.

use crate::util::{char_len, remove_chars, replace_chars};

use super::classify::InputType;
use super::messages::{Key, OmniboxMsg};
use super::selection::SelectionRange;
use super::state::OmniboxState;

/// A text input the omnibox can drive
pub trait HostField {
    /// Current text
    fn text(&self) -> &str;

    /// Current selection (chars)
    fn selection(&self) -> SelectionRange;

    /// Replace the whole text. Fields put the caret at the end, as a browser
    /// input does when its value is assigned.
    fn paint(&mut self, text: &str);

    /// Select a range of the current text
    fn set_selection_range(&mut self, range: SelectionRange);
}

/// Paint the state's value, then apply and clear its pending selection.
///
/// Returns true if the text had to be repainted.
pub fn apply_frame<F: HostField + ?Sized>(state: &mut OmniboxState, field: &mut F) -> bool {
    let painted = field.text() != state.value;
    if painted {
        field.paint(&state.value);
    }
    if let Some(range) = state.take_pending_selection() {
        field.set_selection_range(range);
    }
    painted
}

/// Something the omnibox did to a [`VirtualField`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEvent {
    Painted(String),
    Selected(SelectionRange),
}

/// In-memory text field with browser-like editing.
///
/// The editing helpers mutate the field the way a native input would and
/// return the event the host would deliver for that edit.
#[derive(Debug, Clone, Default)]
pub struct VirtualField {
    text: String,
    selection: SelectionRange,
    /// Range of the in-progress IME pre-edit text
    composition: Option<SelectionRange>,
    /// Hosts that don't report `inputType` send `None` on every change
    report_input_types: bool,
    events: Vec<FieldEvent>,
}

impl VirtualField {
    pub fn new() -> Self {
        Self {
            report_input_types: true,
            ..Self::default()
        }
    }

    /// A field whose change events carry no input type
    pub fn without_input_types() -> Self {
        Self::default()
    }

    pub fn is_composing(&self) -> bool {
        self.composition.is_some()
    }

    /// Everything the omnibox did to this field so far
    pub fn events(&self) -> &[FieldEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<FieldEvent> {
        std::mem::take(&mut self.events)
    }

    /// Text rendered with the selection in brackets, e.g. `A[pple]` or `Ap|`
    pub fn render(&self) -> String {
        let sel = self.selection.clamped(char_len(&self.text));
        let before: String = self.text.chars().take(sel.start).collect();
        let inside: String = self.text.chars().skip(sel.start).take(sel.len()).collect();
        let after: String = self.text.chars().skip(sel.end).collect();
        if sel.is_empty() {
            format!("{}|{}", before, after)
        } else {
            format!("{}[{}]{}", before, inside, after)
        }
    }

    /// User moves the caret
    pub fn set_caret(&mut self, pos: usize) {
        self.selection = SelectionRange::collapsed(pos).clamped(char_len(&self.text));
    }

    /// User selects a range
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = SelectionRange::new(start, end).clamped(char_len(&self.text));
    }

    /// Keydown for `key`, carrying the pre-edit selection
    pub fn key_down(&self, key: Key) -> OmniboxMsg {
        OmniboxMsg::key(key, self.selection)
    }

    /// Typed text replaces the selection
    pub fn insert(&mut self, text: &str) -> OmniboxMsg {
        self.replace_selection(text, InputType::InsertText)
    }

    pub fn paste(&mut self, text: &str) -> OmniboxMsg {
        self.replace_selection(text, InputType::InsertFromPaste)
    }

    /// Native Backspace. `None` when there is nothing to delete.
    pub fn delete_backward(&mut self) -> Option<OmniboxMsg> {
        let sel = self.selection;
        let range = if !sel.is_empty() {
            sel
        } else if sel.start > 0 {
            SelectionRange::new(sel.start - 1, sel.start)
        } else {
            return None;
        };
        self.text = remove_chars(&self.text, range.start, range.end);
        self.selection = SelectionRange::collapsed(range.start);
        Some(self.change(InputType::DeleteBackward, false))
    }

    /// Native Delete. `None` when there is nothing to delete.
    pub fn delete_forward(&mut self) -> Option<OmniboxMsg> {
        let sel = self.selection;
        let range = if !sel.is_empty() {
            sel
        } else if sel.end < char_len(&self.text) {
            SelectionRange::new(sel.start, sel.start + 1)
        } else {
            return None;
        };
        self.text = remove_chars(&self.text, range.start, range.end);
        self.selection = SelectionRange::collapsed(range.start);
        Some(self.change(InputType::DeleteForward, false))
    }

    /// Arbitrary native edit (autocorrect, drag and drop, a test driving the
    /// DOM directly): the field ends up holding `text` with the caret at `caret`
    pub fn edit(&mut self, text: &str, caret: usize, input_type: Option<InputType>) -> OmniboxMsg {
        self.text = text.to_string();
        self.set_caret(caret);
        OmniboxMsg::Change {
            value: self.text.clone(),
            caret: self.selection.end,
            input_type: input_type.filter(|_| self.report_input_types),
            composing: false,
        }
    }

    /// Update the IME pre-edit text, starting a composition if needed
    pub fn compose(&mut self, preedit: &str) -> OmniboxMsg {
        let range = self.composition.unwrap_or(self.selection);
        self.text = replace_chars(&self.text, range.start, range.end, preedit);
        let end = range.start + char_len(preedit);
        self.composition = Some(SelectionRange::new(range.start, end));
        self.selection = SelectionRange::collapsed(end);
        self.change(InputType::InsertComposition, true)
    }

    /// Commit the pre-edit text as-is
    pub fn end_composition(&mut self) -> OmniboxMsg {
        self.composition = None;
        OmniboxMsg::CompositionEnd
    }

    fn replace_selection(&mut self, text: &str, input_type: InputType) -> OmniboxMsg {
        let sel = self.selection.clamped(char_len(&self.text));
        self.text = replace_chars(&self.text, sel.start, sel.end, text);
        self.selection = SelectionRange::collapsed(sel.start + char_len(text));
        self.change(input_type, false)
    }

    fn change(&self, input_type: InputType, composing: bool) -> OmniboxMsg {
        OmniboxMsg::Change {
            value: self.text.clone(),
            caret: self.selection.end,
            input_type: self.report_input_types.then_some(input_type),
            composing,
        }
    }
}

impl HostField for VirtualField {
    fn text(&self) -> &str {
        &self.text
    }

    fn selection(&self) -> SelectionRange {
        self.selection
    }

    fn paint(&mut self, text: &str) {
        self.text = text.to_string();
        self.selection = SelectionRange::collapsed(char_len(text));
        self.events.push(FieldEvent::Painted(self.text.clone()));
    }

    fn set_selection_range(&mut self, range: SelectionRange) {
        self.selection = range.clamped(char_len(&self.text));
        self.events.push(FieldEvent::Selected(self.selection));
    }
}
