//! Command types for the omnibox.
//!
//! Commands represent side effects the host performs after an update.

use super::submit::Resolution;

/// Side effects requested by [`update`](super::update::update)
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Paint `value` into the field, then apply the pending selection
    Repaint,
    /// Suppress the field's native handling of the current key
    PreventDefault,
    /// The typed query changed (trimmed); list consumers refilter on this
    QueryChanged(String),
    /// Carry out a submission against the catalog collaborator
    Submit(Resolution),
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Append `next` after this command
    pub fn then(self, next: Cmd) -> Self {
        match (self, next) {
            (Cmd::None, next) => next,
            (cmd, Cmd::None) => cmd,
            (Cmd::Batch(mut cmds), next) => {
                cmds.push(next);
                Cmd::Batch(cmds)
            }
            (cmd, next) => Cmd::Batch(vec![cmd, next]),
        }
    }

    /// Flatten nested batches into execution order, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// Check if this command suppresses the native key action
    pub fn prevents_default(&self) -> bool {
        match self {
            Cmd::PreventDefault => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.prevents_default()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_then_skips_none() {
        assert_eq!(Cmd::None.then(Cmd::Repaint), Cmd::Repaint);
        assert_eq!(Cmd::Repaint.then(Cmd::None), Cmd::Repaint);
    }

    #[test]
    fn test_then_builds_batch() {
        let cmd = Cmd::PreventDefault
            .then(Cmd::Repaint)
            .then(Cmd::QueryChanged("a".to_string()));
        assert_eq!(
            cmd,
            Cmd::Batch(vec![
                Cmd::PreventDefault,
                Cmd::Repaint,
                Cmd::QueryChanged("a".to_string()),
            ])
        );
    }

    #[test]
    fn test_flatten_nested() {
        let cmd = Cmd::Batch(vec![
            Cmd::None,
            Cmd::Batch(vec![Cmd::PreventDefault, Cmd::Repaint]),
            Cmd::QueryChanged(String::new()),
        ]);
        assert_eq!(
            cmd.flatten(),
            vec![
                Cmd::PreventDefault,
                Cmd::Repaint,
                Cmd::QueryChanged(String::new())
            ]
        );
    }

    #[test]
    fn test_prevents_default_looks_inside_batches() {
        let cmd = Cmd::Repaint.then(Cmd::Batch(vec![Cmd::PreventDefault]));
        assert!(cmd.prevents_default());
        assert!(!Cmd::Repaint.then(Cmd::QueryChanged(String::new())).prevents_default());
        assert!(!Cmd::None.prevents_default());
    }
}
