//! Declarative format rules
//!
//! Each settings block lists its format-tagged fields as [`FieldRule`]s and
//! one generic pass, [`check_structure`], evaluates them all. Empty values
//! are treated as unset and skipped; required-ness is checked separately by
//! the validators.

use std::path::Path;

use url::Url;
use validator::ValidateEmail;

use crate::core::models::{ChatConfig, MailConfig, Settings, Violation};

/// Format a field value must satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// URL with a host; the scheme may be omitted
    Url,
    /// Decimal network port in `1..=65535`
    Port,
    /// Mailbox address
    Email,
    /// Absolute filesystem path on this platform
    AbsolutePath,
}

impl Constraint {
    /// Name used in violation messages
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Port => "port",
            Self::Email => "email",
            Self::AbsolutePath => "absolute path",
        }
    }

    /// Whether `value` satisfies this constraint
    #[must_use]
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Url => is_url(value),
            Self::Port => is_port(value),
            Self::Email => value.validate_email(),
            Self::AbsolutePath => Path::new(value).is_absolute(),
        }
    }
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schemes a URL field may use. A value without `://` is read as `http`.
const URL_SCHEMES: &[&str] = &["http", "https", "ftp", "tcp", "udp", "ws", "wss"];

const MAX_URL_LEN: usize = 2083;

fn is_url(value: &str) -> bool {
    if value.len() >= MAX_URL_LEN
        || value.starts_with('.')
        || value.chars().any(char::is_whitespace)
    {
        return false;
    }

    let parsed = if value.contains("://") {
        Url::parse(value)
    } else {
        Url::parse(&format!("http://{value}"))
    };

    parsed.is_ok_and(|url| {
        URL_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|h| !h.is_empty())
    })
}

// A sign is tolerated (`+25`); the value must still land in 1..=65535.
fn is_port(value: &str) -> bool {
    value.parse::<u16>().is_ok_and(|p| p > 0)
}

/// One `(field, constraint)` entry of a rule table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule<'a> {
    /// Field name as spelled in the settings file
    pub field: &'static str,
    /// Current value
    pub value: &'a str,
    /// Constraint the value must satisfy when non-empty
    pub constraint: Constraint,
}

impl<'a> FieldRule<'a> {
    /// Create a rule
    #[must_use]
    pub const fn new(field: &'static str, value: &'a str, constraint: Constraint) -> Self {
        Self {
            field,
            value,
            constraint,
        }
    }

    /// Whether the rule holds (empty values always hold)
    #[must_use]
    pub fn holds(&self) -> bool {
        self.value.is_empty() || self.constraint.accepts(self.value)
    }
}

/// Evaluate every rule and fold the failures into a single violation.
///
/// Returns `None` when all rules hold.
#[must_use]
pub fn check_structure(rules: &[FieldRule<'_>]) -> Option<Violation> {
    let failed: Vec<&FieldRule<'_>> = rules.iter().filter(|r| !r.holds()).collect();
    if failed.is_empty() {
        return None;
    }

    let fields = failed.iter().map(|r| r.field).collect::<Vec<_>>().join(", ");
    let message = failed
        .iter()
        .map(|r| format!("{}: {} does not validate as {}", r.field, r.value, r.constraint))
        .collect::<Vec<_>>()
        .join("; ");

    Some(Violation::format(fields, message))
}

impl Settings {
    /// Format-tagged fields of the root settings
    #[must_use]
    pub fn format_rules(&self) -> Vec<FieldRule<'_>> {
        vec![
            FieldRule::new("cve_dictionary_url", &self.cve_dictionary_url, Constraint::Url),
            FieldRule::new("http_proxy", &self.http_proxy, Constraint::Url),
        ]
    }
}

impl MailConfig {
    /// Format-tagged fields of the mail block
    #[must_use]
    pub fn format_rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new("mail.smtp_port", &self.smtp_port, Constraint::Port)]
    }
}

impl ChatConfig {
    /// Format-tagged fields of the chat block
    #[must_use]
    pub fn format_rules(&self) -> Vec<FieldRule<'_>> {
        vec![FieldRule::new("slack.hook_url", &self.hook_url, Constraint::Url)]
    }
}
