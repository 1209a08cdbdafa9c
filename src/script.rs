//! Keystroke scripts for replaying omnibox sessions.
//!
//! A script is a comma-separated list of tokens. Plain tokens are typed as a
//! single edit; bracketed tokens are special keys:
//!
//! ```text
//! A,p,<bs>,r,<enter>
//! <ime:に>,<ime:日本>,<commit>,<enter>
//! ```

use std::fmt;

use crate::omnibox::{
    CatalogHost, HostField, Mode, OmniboxDriver, SubmitOutcome, VirtualField,
};
use crate::util::char_len;

/// One step of a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keystroke {
    /// Type text as one edit
    Text(String),
    /// Paste text
    Paste(String),
    Backspace,
    Delete,
    Enter,
    Left,
    Right,
    Home,
    End,
    SelectAll,
    /// Update the IME pre-edit text
    Compose(String),
    /// Commit the IME composition
    Commit,
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keystroke::Text(text) => write!(f, "{}", text),
            Keystroke::Paste(text) => write!(f, "<paste:{}>", text),
            Keystroke::Backspace => write!(f, "<bs>"),
            Keystroke::Delete => write!(f, "<del>"),
            Keystroke::Enter => write!(f, "<enter>"),
            Keystroke::Left => write!(f, "<left>"),
            Keystroke::Right => write!(f, "<right>"),
            Keystroke::Home => write!(f, "<home>"),
            Keystroke::End => write!(f, "<end>"),
            Keystroke::SelectAll => write!(f, "<all>"),
            Keystroke::Compose(text) => write!(f, "<ime:{}>", text),
            Keystroke::Commit => write!(f, "<commit>"),
        }
    }
}

/// Error parsing a keystroke script
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Empty token between commas
    EmptyToken(usize),
    /// `<...>` that isn't a known key
    UnknownKey(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::EmptyToken(idx) => write!(f, "Empty keystroke at position {}", idx + 1),
            ScriptError::UnknownKey(key) => write!(f, "Unknown key: {}", key),
        }
    }
}

impl std::error::Error for ScriptError {}

/// Parse a comma-separated keystroke script. `<comma>` types a literal comma.
pub fn parse_script(script: &str) -> Result<Vec<Keystroke>, ScriptError> {
    script
        .split(',')
        .enumerate()
        .map(|(idx, token)| parse_token(idx, token))
        .collect()
}

fn parse_token(idx: usize, token: &str) -> Result<Keystroke, ScriptError> {
    if token.is_empty() {
        return Err(ScriptError::EmptyToken(idx));
    }

    let Some(key) = token.strip_prefix('<').and_then(|t| t.strip_suffix('>')) else {
        return Ok(Keystroke::Text(token.to_string()));
    };

    let keystroke = match key {
        "bs" | "backspace" => Keystroke::Backspace,
        "del" | "delete" => Keystroke::Delete,
        "enter" => Keystroke::Enter,
        "left" => Keystroke::Left,
        "right" => Keystroke::Right,
        "home" => Keystroke::Home,
        "end" => Keystroke::End,
        "all" => Keystroke::SelectAll,
        "commit" => Keystroke::Commit,
        "comma" => Keystroke::Text(",".to_string()),
        "space" => Keystroke::Text(" ".to_string()),
        _ => {
            if let Some(text) = key.strip_prefix("ime:") {
                Keystroke::Compose(text.to_string())
            } else if let Some(text) = key.strip_prefix("paste:") {
                Keystroke::Paste(text.to_string())
            } else {
                return Err(ScriptError::UnknownKey(token.to_string()));
            }
        }
    };
    Ok(keystroke)
}

/// The field after one keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub keystroke: Keystroke,
    /// Field text with the selection marked, see [`VirtualField::render`]
    pub field: String,
    pub mode: Mode,
    pub outcome: Option<SubmitOutcome>,
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} {:<24} {:?}",
            self.keystroke.to_string(),
            self.field,
            self.mode
        )?;
        if let Some(outcome) = &self.outcome {
            write!(f, "  -> {}", outcome.label())?;
            if let Some(entry) = outcome.entry() {
                write!(f, " '{}'", entry.name)?;
            }
        }
        Ok(())
    }
}

/// Play `script` against a driver, recording a frame per keystroke
pub fn replay<H: CatalogHost + ?Sized>(
    driver: &mut OmniboxDriver<VirtualField>,
    host: &mut H,
    script: &[Keystroke],
) -> Vec<Frame> {
    script
        .iter()
        .map(|keystroke| {
            let outcome = press(driver, host, keystroke);
            Frame {
                keystroke: keystroke.clone(),
                field: driver.field.render(),
                mode: driver.omnibox.mode(),
                outcome,
            }
        })
        .collect()
}

fn press<H: CatalogHost + ?Sized>(
    driver: &mut OmniboxDriver<VirtualField>,
    host: &mut H,
    keystroke: &Keystroke,
) -> Option<SubmitOutcome> {
    let len = char_len(driver.field.text());
    let sel = driver.field.selection();

    let dispatch = match keystroke {
        Keystroke::Text(text) => driver.type_str(text, host),
        Keystroke::Paste(text) => driver.paste(text, host),
        Keystroke::Backspace => driver.backspace(host),
        Keystroke::Delete => driver.delete_forward(host),
        Keystroke::Enter => driver.enter(host),
        Keystroke::Compose(text) => driver.compose(text, host),
        Keystroke::Commit => driver.commit_composition(host),
        Keystroke::Left => {
            let pos = if sel.is_empty() {
                sel.start.saturating_sub(1)
            } else {
                sel.start
            };
            driver.field.set_caret(pos);
            return None;
        }
        Keystroke::Right => {
            let pos = if sel.is_empty() {
                (sel.end + 1).min(len)
            } else {
                sel.end
            };
            driver.field.set_caret(pos);
            return None;
        }
        Keystroke::Home => {
            driver.field.set_caret(0);
            return None;
        }
        Keystroke::End => {
            driver.field.set_caret(len);
            return None;
        }
        Keystroke::SelectAll => {
            driver.field.select(0, len);
            return None;
        }
    };
    dispatch.outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let keys = parse_script("A,p,<bs>,<comma>,<ime:日本>,<commit>,<enter>").unwrap();
        assert_eq!(
            keys,
            vec![
                Keystroke::Text("A".to_string()),
                Keystroke::Text("p".to_string()),
                Keystroke::Backspace,
                Keystroke::Text(",".to_string()),
                Keystroke::Compose("日本".to_string()),
                Keystroke::Commit,
                Keystroke::Enter,
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_script("a,,b"), Err(ScriptError::EmptyToken(1)));
        assert_eq!(
            parse_script("<tab>"),
            Err(ScriptError::UnknownKey("<tab>".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_special_keys() {
        let keys = parse_script("<bs>,<paste:Ice Cream>,<all>").unwrap();
        let shown: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(shown, vec!["<bs>", "<paste:Ice Cream>", "<all>"]);
    }
}
