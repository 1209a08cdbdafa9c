//! Omnibox transitions.
//!
//! One function, `(state, event) -> (state, commands)`. The catalog is read
//! fresh on every call and never cached in the state.

use crate::catalog::CatalogEntry;
use crate::util::{char_len, remove_chars, take_chars};

use super::classify::{classify, EditKind, InputType};
use super::commands::Cmd;
use super::matcher::{best_suggestion, completes};
use super::messages::{Key, OmniboxMsg};
use super::selection::SelectionRange;
use super::state::{ActivePredicate, Mode, Omnibox, OmniboxState};
use super::submit::resolve;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

/// Main omnibox update function
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(omnibox: &mut Omnibox, msg: OmniboxMsg, catalog: &[CatalogEntry]) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(omnibox, msg, catalog)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(omnibox, msg, catalog)
    }
}

#[cfg(debug_assertions)]
fn update_traced(omnibox: &mut Omnibox, msg: OmniboxMsg, catalog: &[CatalogEntry]) -> Option<Cmd> {
    let kind = msg.kind();
    let _span = span!(Level::DEBUG, "omnibox", msg = %kind).entered();

    let before = StateSnapshot::from_state(&omnibox.state);
    let result = update_inner(omnibox, msg, catalog);
    let after = StateSnapshot::from_state(&omnibox.state);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "omnibox", %diff, "state changed");
    }
    debug_assert!(
        omnibox.state.invariants_hold(),
        "omnibox invariants broken after {}: {:?}",
        kind,
        omnibox.state
    );

    result
}

fn update_inner(omnibox: &mut Omnibox, msg: OmniboxMsg, catalog: &[CatalogEntry]) -> Option<Cmd> {
    let is_active = &omnibox.is_active;
    let state = &mut omnibox.state;
    let base_before = state.base_query.clone();

    let cmd = match msg {
        OmniboxMsg::Change {
            value,
            caret,
            input_type,
            composing,
        } => on_change(state, value, caret, input_type, composing, catalog),
        OmniboxMsg::KeyDown {
            key: Key::Backspace,
            selection,
        } => on_backspace(state, selection),
        OmniboxMsg::KeyDown {
            key: Key::Enter, ..
        } => {
            if state.is_composing() {
                // Enter commits the composition, not the field
                Cmd::None
            } else {
                Cmd::PreventDefault.then(submit(state, catalog, is_active))
            }
        }
        OmniboxMsg::KeyDown { .. } => {
            // Any other key means the next change is not that Backspace's
            state.backspace_pending = false;
            Cmd::None
        }
        OmniboxMsg::Submit => submit(state, catalog, is_active),
        OmniboxMsg::CompositionStart => {
            state.mode = Mode::Composing;
            state.backspace_pending = false;
            Cmd::None
        }
        OmniboxMsg::CompositionEnd => {
            state.mode = Mode::Active;
            state.skip_next_insert = true;
            Cmd::None
        }
        OmniboxMsg::Clear => {
            state.reset();
            Cmd::Repaint
        }
    };

    let cmd = if state.base_query != base_before {
        cmd.then(Cmd::QueryChanged(state.base_query.trim().to_string()))
    } else {
        cmd
    };

    match cmd {
        Cmd::None => None,
        cmd => Some(cmd),
    }
}

fn on_change(
    state: &mut OmniboxState,
    raw: String,
    caret: usize,
    input_type: Option<InputType>,
    composing: bool,
    catalog: &[CatalogEntry],
) -> Cmd {
    let caret = caret.min(char_len(&raw));

    if composing || state.is_composing() || input_type.is_some_and(InputType::is_composition) {
        state.mode = Mode::Composing;
        state.backspace_pending = false;
        state.show_typed(raw, caret);
        return Cmd::Repaint;
    }

    let kind = classify(input_type, state.backspace_pending);
    state.backspace_pending = false;

    if raw.is_empty() {
        state.reset();
        return Cmd::Repaint;
    }

    let manual = take_chars(&raw, caret);

    match kind {
        EditKind::Delete => {
            // Keep whatever is past the caret on screen; only the typed part counts
            state.value = raw;
            state.base_query = manual;
            state.pending_selection = Some(SelectionRange::collapsed(caret));
            state.mode = Mode::Paused;
            state.offered_suggestion = false;
            state.skip_next_insert = false;
        }
        EditKind::Insert => {
            let skip =
                state.skip_next_insert || state.offered_suggestion || state.mode == Mode::Paused;
            state.skip_next_insert = false;
            state.offered_suggestion = false;
            state.mode = Mode::Active;

            if manual.is_empty() {
                state.reset();
                return Cmd::Repaint;
            }

            let typed_len = char_len(&manual);
            let suggestion = if skip {
                None
            } else {
                best_suggestion(catalog, &manual).filter(|entry| completes(&entry.name, &manual))
            };

            match suggestion {
                Some(entry) => {
                    state.value = entry.name.clone();
                    state.base_query = manual;
                    state.pending_selection =
                        Some(SelectionRange::new(typed_len, char_len(&entry.name)));
                    state.offered_suggestion = true;
                }
                None => state.show_typed(manual, typed_len),
            }
        }
    }

    Cmd::Repaint
}

/// Backspace before the field applies it. Returns `Cmd::None` when the
/// field should delete natively.
fn on_backspace(state: &mut OmniboxState, selection: SelectionRange) -> Cmd {
    if state.is_composing() {
        return Cmd::None;
    }

    let len = char_len(&state.value);
    let sel = selection.clamped(len);

    let remaining = if !sel.is_empty() {
        remove_chars(&state.value, sel.start, sel.end)
    } else if len > char_len(&state.base_query) {
        // Unselected completed tail: drop everything past the caret
        take_chars(&state.value, sel.start)
    } else {
        // Caret at 0 deletes nothing, so no change event will follow
        state.backspace_pending = sel.start > 0;
        return Cmd::None;
    };

    if remaining.is_empty() {
        state.reset();
    } else {
        state.show_typed(remaining, sel.start);
        state.mode = Mode::Paused;
        state.skip_next_insert = true;
        state.offered_suggestion = false;
        state.backspace_pending = false;
    }

    Cmd::PreventDefault.then(Cmd::Repaint)
}

fn submit(state: &mut OmniboxState, catalog: &[CatalogEntry], is_active: &ActivePredicate) -> Cmd {
    let resolution = resolve(&state.value, catalog, is_active);
    state.reset();
    Cmd::Submit(resolution).then(Cmd::Repaint)
}
