//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging omnibox
//! transitions and catalog mutations.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=omnibox=debug` - one line per omnibox state change
//! - `RUST_LOG=pantry::catalog=info` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/pantry/logs/pantry.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::omnibox::{Mode, OmniboxState, SelectionRange};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). File logging writes
/// to `~/.config/pantry/logs/pantry.log` with daily rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG, stderr so command output stays clean
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "pantry.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of omnibox state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    pub value: String,
    pub base_query: String,
    pub selection: Option<SelectionRange>,
    pub mode: Mode,
}

impl StateSnapshot {
    pub fn from_state(state: &OmniboxState) -> Self {
        Self {
            value: state.value.clone(),
            base_query: state.base_query.clone(),
            selection: state.pending_selection,
            mode: state.mode,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.value != other.value {
            changes.push(format!("value: {:?} → {:?}", self.value, other.value));
        }
        if self.base_query != other.base_query {
            changes.push(format!(
                "base: {:?} → {:?}",
                self.base_query, other.base_query
            ));
        }
        if self.mode != other.mode {
            changes.push(format!("mode: {:?} → {:?}", self.mode, other.mode));
        }
        if self.selection != other.selection {
            match other.selection {
                Some(sel) => changes.push(format!("select [{},{}]", sel.start, sel.end)),
                None => changes.push("selection applied".to_string()),
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
