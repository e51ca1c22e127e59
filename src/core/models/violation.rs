//! Violation model
//!
//! A violation is one reported configuration defect. Validators return them
//! as data; printing or logging them is up to the caller.

use serde::{Deserialize, Serialize};

/// What kind of rule a field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Value fails a syntactic constraint (URL, path, email, port)
    Format,
    /// Required value is empty while its block is enabled
    MissingField,
    /// Value breaks a cross-field or business rule (channel prefix)
    Rule,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Format => write!(f, "format"),
            Self::MissingField => write!(f, "missing"),
            Self::Rule => write!(f, "rule"),
        }
    }
}

/// A single configuration defect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation category
    pub kind: ViolationKind,

    /// Offending field, as spelled in the settings file (e.g. `mail.smtp_port`)
    pub field: String,

    /// Human-readable message naming the field and, where relevant, the value
    pub message: String,
}

impl Violation {
    /// Create a format violation
    #[must_use]
    pub fn format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Format,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a missing-required-field violation
    #[must_use]
    pub fn missing(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::MissingField,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a structural rule violation
    #[must_use]
    pub fn rule(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ViolationKind::Rule,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}
