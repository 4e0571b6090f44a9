//! Errors raised while validating an energy profile or building its span table.
//!
//! Every failure carries a stable `code` (for example `even-length` or
//! `no-transition-states`) that callers can match on instead of the message.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`TofError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending quantities, e.g. `energies=4` or `path=profile.txt`.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to fix the profile, when there is an obvious fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records an offending quantity under `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a fix-it hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Failure families of the TOF pipeline, serialised as `{"family", "detail"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum TofError {
    /// Even-length energies or a label list of the wrong length.
    #[error("input error: {0}")]
    Input(ErrorInfo),
    /// Cycle with no states or no transition states.
    #[error("cycle error: {0}")]
    Cycle(ErrorInfo),
    /// Report or profile could not be (de)serialised.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Profile file unreadable, wrong extension, or malformed energy list.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl TofError {
    /// Payload of whichever family the error belongs to.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            TofError::Input(info)
            | TofError::Cycle(info)
            | TofError::Serde(info)
            | TofError::Config(info) => info,
        }
    }

    /// Shorthand for the stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
