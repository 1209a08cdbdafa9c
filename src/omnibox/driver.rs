//! Runs omnibox commands against a field and a catalog collaborator.

use super::classify::InputType;
use super::commands::Cmd;
use super::field::{apply_frame, HostField, VirtualField};
use super::messages::{Key, OmniboxMsg};
use super::state::{ActivePredicate, Omnibox};
use super::submit::{CatalogHost, SubmitOutcome};
use super::update::update;

/// What happened while dispatching one or more events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// The field's native handling of the key was suppressed
    pub default_prevented: bool,
    /// At least one frame was applied to the field
    pub repainted: bool,
    /// Result of a submission, if one happened
    pub outcome: Option<SubmitOutcome>,
}

impl Dispatch {
    /// Combine with a later dispatch
    pub fn merge(self, later: Dispatch) -> Dispatch {
        Dispatch {
            default_prevented: self.default_prevented || later.default_prevented,
            repainted: self.repainted || later.repainted,
            outcome: later.outcome.or(self.outcome),
        }
    }
}

/// An omnibox wired to one host field
#[derive(Debug, Clone)]
pub struct OmniboxDriver<F: HostField> {
    pub omnibox: Omnibox,
    pub field: F,
}

impl<F: HostField> OmniboxDriver<F> {
    pub fn new(is_active: ActivePredicate, field: F) -> Self {
        Self {
            omnibox: Omnibox::new(is_active),
            field,
        }
    }

    /// Feed one host event through `update` and execute the resulting commands
    pub fn dispatch<H: CatalogHost + ?Sized>(&mut self, msg: OmniboxMsg, host: &mut H) -> Dispatch {
        let cmd = update(&mut self.omnibox, msg, host.entries()).unwrap_or_default();

        let mut dispatch = Dispatch {
            default_prevented: cmd.prevents_default(),
            ..Dispatch::default()
        };
        for cmd in cmd.flatten() {
            match cmd {
                Cmd::Repaint => {
                    apply_frame(&mut self.omnibox.state, &mut self.field);
                    dispatch.repainted = true;
                }
                Cmd::QueryChanged(query) => host.on_query_change(&query),
                Cmd::Submit(resolution) => dispatch.outcome = Some(resolution.apply(host)),
                Cmd::None | Cmd::PreventDefault | Cmd::Batch(_) => {}
            }
        }
        dispatch
    }
}

/// User-level gestures against a [`VirtualField`]
impl OmniboxDriver<VirtualField> {
    /// Type `text` one character at a time
    pub fn type_text<H: CatalogHost + ?Sized>(&mut self, text: &str, host: &mut H) -> Dispatch {
        let mut buf = [0u8; 4];
        text.chars().fold(Dispatch::default(), |acc, ch| {
            let typed = self.type_str(ch.encode_utf8(&mut buf), host);
            acc.merge(typed)
        })
    }

    /// Insert `text` as a single edit
    pub fn type_str<H: CatalogHost + ?Sized>(&mut self, text: &str, host: &mut H) -> Dispatch {
        let key = self.field.key_down(Key::Other);
        let pressed = self.dispatch(key, host);
        let msg = self.field.insert(text);
        pressed.merge(self.dispatch(msg, host))
    }

    /// Native edit leaving `text` in the field, see [`VirtualField::edit`]
    pub fn edit<H: CatalogHost + ?Sized>(
        &mut self,
        text: &str,
        caret: usize,
        input_type: Option<InputType>,
        host: &mut H,
    ) -> Dispatch {
        let msg = self.field.edit(text, caret, input_type);
        self.dispatch(msg, host)
    }

    pub fn paste<H: CatalogHost + ?Sized>(&mut self, text: &str, host: &mut H) -> Dispatch {
        let msg = self.field.paste(text);
        self.dispatch(msg, host)
    }

    /// Press Backspace; the field deletes natively unless the omnibox
    /// prevented it
    pub fn backspace<H: CatalogHost + ?Sized>(&mut self, host: &mut H) -> Dispatch {
        let key = self.field.key_down(Key::Backspace);
        let pressed = self.dispatch(key, host);
        if pressed.default_prevented {
            return pressed;
        }
        match self.field.delete_backward() {
            Some(msg) => pressed.merge(self.dispatch(msg, host)),
            None => pressed,
        }
    }

    /// Press Delete (forward); always native
    pub fn delete_forward<H: CatalogHost + ?Sized>(&mut self, host: &mut H) -> Dispatch {
        match self.field.delete_forward() {
            Some(msg) => self.dispatch(msg, host),
            None => Dispatch::default(),
        }
    }

    pub fn enter<H: CatalogHost + ?Sized>(&mut self, host: &mut H) -> Dispatch {
        let key = self.field.key_down(Key::Enter);
        self.dispatch(key, host)
    }

    /// Type `text` in one edit and submit it as typed, dismissing any
    /// completion first
    pub fn submit_text<H: CatalogHost + ?Sized>(&mut self, text: &str, host: &mut H) -> Dispatch {
        let typed = self.type_str(text, host);
        let dismissed = if self.omnibox.state.suggestion_tail().is_empty() {
            Dispatch::default()
        } else {
            self.backspace(host)
        };
        let submitted = self.enter(host);
        typed.merge(dismissed).merge(submitted)
    }

    /// Update the IME pre-edit text, starting a composition if needed
    pub fn compose<H: CatalogHost + ?Sized>(&mut self, preedit: &str, host: &mut H) -> Dispatch {
        let started = if self.field.is_composing() {
            Dispatch::default()
        } else {
            self.dispatch(OmniboxMsg::CompositionStart, host)
        };
        let msg = self.field.compose(preedit);
        started.merge(self.dispatch(msg, host))
    }

    pub fn commit_composition<H: CatalogHost + ?Sized>(&mut self, host: &mut H) -> Dispatch {
        let msg = self.field.end_composition();
        self.dispatch(msg, host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ActivationFlag, CatalogEntry};

    #[derive(Default)]
    struct Host {
        entries: Vec<CatalogEntry>,
        queries: Vec<String>,
    }

    impl CatalogHost for Host {
        fn entries(&self) -> &[CatalogEntry] {
            &self.entries
        }

        fn activate_item(&mut self, _entry: &CatalogEntry) {}

        fn create_item(&mut self, _name: &str) -> Option<CatalogEntry> {
            None
        }

        fn on_query_change(&mut self, query: &str) {
            self.queries.push(query.to_string());
        }
    }

    fn driver() -> OmniboxDriver<VirtualField> {
        OmniboxDriver::new(
            ActivationFlag::OnShoppingList.predicate(),
            VirtualField::new(),
        )
    }

    #[test]
    fn test_typing_paints_completion() {
        let mut host = Host {
            entries: vec![CatalogEntry::new("1", "Apple")],
            ..Host::default()
        };
        let mut d = driver();

        let dispatch = d.type_text("A", &mut host);

        assert!(dispatch.repainted);
        assert!(!dispatch.default_prevented);
        assert_eq!(d.field.render(), "A[pple]");
        assert_eq!(host.queries, vec!["A"]);
        assert_eq!(d.omnibox.state.pending_selection, None);
    }

    #[test]
    fn test_handled_backspace_is_prevented() {
        let mut host = Host {
            entries: vec![CatalogEntry::new("1", "Apple")],
            ..Host::default()
        };
        let mut d = driver();
        d.type_text("A", &mut host);

        let dispatch = d.backspace(&mut host);

        assert!(dispatch.default_prevented);
        assert_eq!(d.field.render(), "A|");
    }

    #[test]
    fn test_native_backspace_reaches_field() {
        let mut host = Host::default();
        let mut d = driver();
        d.type_text("ab", &mut host);

        let dispatch = d.backspace(&mut host);

        assert!(!dispatch.default_prevented);
        assert_eq!(d.field.render(), "a|");
        assert_eq!(host.queries, vec!["a", "ab", "a"]);
    }

    #[test]
    fn test_merge_keeps_latest_outcome() {
        let first = Dispatch {
            outcome: Some(SubmitOutcome::Noop),
            ..Dispatch::default()
        };
        let merged = first.merge(Dispatch {
            repainted: true,
            ..Dispatch::default()
        });
        assert_eq!(merged.outcome, Some(SubmitOutcome::Noop));
        assert!(merged.repainted);
    }
}
