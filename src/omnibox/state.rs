//! Omnibox state: everything the field needs to remember between events.

use std::fmt;
use std::rc::Rc;

use crate::catalog::CatalogEntry;
use crate::util::{byte_offset, char_len, starts_with_ignore_case};

use super::selection::SelectionRange;

/// Caller-supplied test for which entries count as already active for a field.
///
/// Cheap to clone; the closure may capture whatever state it needs.
#[derive(Clone)]
pub struct ActivePredicate(Rc<dyn Fn(&CatalogEntry) -> bool>);

impl ActivePredicate {
    pub fn new(test: impl Fn(&CatalogEntry) -> bool + 'static) -> Self {
        Self(Rc::new(test))
    }

    pub fn matches(&self, entry: &CatalogEntry) -> bool {
        (self.0)(entry)
    }
}

impl fmt::Debug for ActivePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActivePredicate(..)")
    }
}

/// Autocomplete mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// An IME composition is in progress; text passes through untouched
    Composing,
    /// A deletion just happened; suggestions wait for the next insertion
    Paused,
    /// Normal operation; insertions may be completed
    #[default]
    Active,
}

/// Per-field omnibox state.
///
/// Invariants (outside `Composing`): `base_query` is a case-insensitive prefix
/// of `value` (a completion shows the catalog's spelling, "a" -> "Apple"), and
/// `pending_selection` fits inside `value`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OmniboxState {
    /// Exactly what the field displays, including any completed tail
    pub value: String,
    /// What the user actually typed
    pub base_query: String,
    /// One-shot selection for the host to apply after painting `value`
    pub pending_selection: Option<SelectionRange>,
    pub mode: Mode,
    /// Treat the next insertion as paused (after composition end or a handled Backspace)
    pub(crate) skip_next_insert: bool,
    /// The last step showed a completed tail
    pub(crate) offered_suggestion: bool,
    /// Backspace went to the field natively; the next change is a deletion
    pub(crate) backspace_pending: bool,
}

impl OmniboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to an empty field with the caret at 0
    pub fn reset(&mut self) {
        *self = Self {
            pending_selection: Some(SelectionRange::collapsed(0)),
            ..Self::default()
        };
    }

    /// Take the pending selection (exactly-once)
    pub fn take_pending_selection(&mut self) -> Option<SelectionRange> {
        self.pending_selection.take()
    }

    /// The completed tail, if any
    pub fn suggestion_tail(&self) -> &str {
        if !starts_with_ignore_case(&self.value, &self.base_query) {
            return "";
        }
        &self.value[byte_offset(&self.value, char_len(&self.base_query))..]
    }

    pub fn is_composing(&self) -> bool {
        self.mode == Mode::Composing
    }

    /// Show `text` as both value and typed query, caret at `caret`
    pub(crate) fn show_typed(&mut self, text: String, caret: usize) {
        self.value = text.clone();
        self.base_query = text;
        self.pending_selection = Some(SelectionRange::collapsed(caret));
    }

    /// Check the documented invariants
    pub fn invariants_hold(&self) -> bool {
        let len = char_len(&self.value);
        let selection_ok = self.pending_selection.map_or(true, |sel| sel.fits(len));
        if self.mode == Mode::Composing {
            return selection_ok;
        }
        selection_ok
            && starts_with_ignore_case(&self.value, &self.base_query)
            && len >= char_len(&self.base_query)
    }
}

/// An omnibox instance: its state plus the caller's notion of "active"
#[derive(Debug, Clone)]
pub struct Omnibox {
    pub state: OmniboxState,
    pub is_active: ActivePredicate,
}

impl Omnibox {
    pub fn new(is_active: ActivePredicate) -> Self {
        Self {
            state: OmniboxState::new(),
            is_active,
        }
    }

    /// Displayed value
    pub fn value(&self) -> &str {
        &self.state.value
    }

    /// What the user typed, without any completed tail
    pub fn base_query(&self) -> &str {
        &self.state.base_query
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicate_can_capture_state() {
        let pinned = vec!["2".to_string()];
        let is_active = ActivePredicate::new(move |entry| pinned.contains(&entry.id.0));
        let copy = is_active.clone();

        assert!(copy.matches(&CatalogEntry::new("2", "Tea")));
        assert!(!is_active.matches(&CatalogEntry::new("3", "Tea")));
    }

    #[test]
    fn test_new_state_is_empty_and_active() {
        let state = OmniboxState::new();
        assert_eq!(state.value, "");
        assert_eq!(state.base_query, "");
        assert_eq!(state.mode, Mode::Active);
        assert!(state.pending_selection.is_none());
        assert!(state.invariants_hold());
    }

    #[test]
    fn test_reset_clears_flags() {
        let mut state = OmniboxState {
            value: "Apple".to_string(),
            base_query: "A".to_string(),
            pending_selection: Some(SelectionRange::new(1, 5)),
            mode: Mode::Paused,
            skip_next_insert: true,
            offered_suggestion: true,
            backspace_pending: true,
        };
        state.reset();
        assert_eq!(state.value, "");
        assert_eq!(state.mode, Mode::Active);
        assert!(!state.skip_next_insert);
        assert!(!state.offered_suggestion);
        assert!(!state.backspace_pending);
        assert_eq!(state.pending_selection, Some(SelectionRange::collapsed(0)));
    }

    #[test]
    fn test_take_pending_selection_is_one_shot() {
        let mut state = OmniboxState::new();
        state.show_typed("Ap".to_string(), 2);
        assert_eq!(
            state.take_pending_selection(),
            Some(SelectionRange::collapsed(2))
        );
        assert_eq!(state.take_pending_selection(), None);
    }

    #[test]
    fn test_suggestion_tail() {
        let state = OmniboxState {
            value: "Crème".to_string(),
            base_query: "Cr".to_string(),
            ..OmniboxState::default()
        };
        assert_eq!(state.suggestion_tail(), "ème");

        let recased = OmniboxState {
            value: "Apple".to_string(),
            base_query: "a".to_string(),
            ..OmniboxState::default()
        };
        assert_eq!(recased.suggestion_tail(), "pple");
        assert!(recased.invariants_hold());
    }

    #[test]
    fn test_invariants_detect_foreign_base_query() {
        let state = OmniboxState {
            value: "Apple".to_string(),
            base_query: "Ar".to_string(),
            ..OmniboxState::default()
        };
        assert!(!state.invariants_hold());

        let composing = OmniboxState {
            mode: Mode::Composing,
            ..state
        };
        assert!(composing.invariants_hold());
    }

    #[test]
    fn test_invariants_detect_out_of_range_selection() {
        let state = OmniboxState {
            value: "Ap".to_string(),
            base_query: "Ap".to_string(),
            pending_selection: Some(SelectionRange::new(1, 3)),
            ..OmniboxState::default()
        };
        assert!(!state.invariants_hold());
    }
}
