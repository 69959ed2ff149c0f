//! Structured error types shared across overlay crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload carried by every [`OverlayError`].
///
/// `code` is a stable kebab-case identifier such as `degree-exceeds-population`
/// that tests and callers match on; `context` records the offending values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable identifier of the failure.
    pub code: String,
    /// Explanation for humans.
    pub message: String,
    /// Offending values keyed by parameter name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested fix, when one is obvious.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload without context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `key = value`, replacing an earlier value for `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a suggested fix.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Error returned by every fallible overlay operation, grouped by family.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum OverlayError {
    /// Parameters no generator or driver can honour; raised before any mutation.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Edge endpoints or registry indices outside the valid range.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Operations a node's fail state forbids.
    #[error("transition error: {0}")]
    Transition(ErrorInfo),
    /// Values outside an enumerated domain, such as fail-state codes.
    #[error("argument error: {0}")]
    Argument(ErrorInfo),
    /// Reading or writing driver files failed.
    #[error("io error: {0}")]
    Io(ErrorInfo),
    /// Encoding or decoding JSON and YAML failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl OverlayError {
    /// Payload of whichever family the error belongs to.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            OverlayError::Config(info)
            | OverlayError::Graph(info)
            | OverlayError::Transition(info)
            | OverlayError::Argument(info)
            | OverlayError::Io(info)
            | OverlayError::Serde(info) => info,
        }
    }

    /// `Config` error without context.
    pub fn config(code: &str, message: impl Into<String>) -> Self {
        OverlayError::Config(ErrorInfo::new(code, message))
    }
}
