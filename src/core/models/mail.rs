//! Mail delivery settings

use serde::{Deserialize, Serialize};

/// SMTP settings for e-mailing scan reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// SMTP server address
    pub smtp_addr: String,

    /// SMTP server port, kept as written in the file
    pub smtp_port: String,

    /// SMTP user
    pub user: String,

    /// SMTP password
    pub password: String,

    /// Sender address
    pub from: String,

    /// Recipient addresses
    pub to: Vec<String>,

    /// Carbon-copy addresses
    pub cc: Vec<String>,

    /// Prefix prepended to every subject line
    pub subject_prefix: String,

    /// Whether mail delivery is used for this run.
    ///
    /// A disabled block is never validated.
    #[serde(skip)]
    pub use_this_time: bool,
}

impl MailConfig {
    /// Sender, recipients and carbon copies, in that order
    #[must_use]
    pub fn addresses(&self) -> Vec<&str> {
        std::iter::once(self.from.as_str())
            .chain(self.to.iter().map(String::as_str))
            .chain(self.cc.iter().map(String::as_str))
            .collect()
    }
}
