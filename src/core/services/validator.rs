//! Settings validation
//!
//! Walks the settings and every nested block and collects *all* violations
//! instead of stopping at the first. Nothing here logs or mutates; callers
//! decide how to report the returned list.

use crate::core::models::{ChatConfig, MailConfig, Settings, Violation};

use super::rules::{self, Constraint};

/// Validate the root settings and both notification blocks.
///
/// Violations come back in check order: `json_base_dir`, `cve_db_path`,
/// the format-rule pass, then mail and chat.
#[must_use]
pub fn validate_settings(settings: &Settings) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !settings.json_base_dir.is_empty()
        && !Constraint::AbsolutePath.accepts(&settings.json_base_dir)
    {
        violations.push(Violation::format(
            "json_base_dir",
            format!(
                "JSON base directory must be a *Absolute* file path. json_base_dir: {}",
                settings.json_base_dir
            ),
        ));
    }

    if !settings.cve_db_path.is_empty()
        && !Constraint::AbsolutePath.accepts(&settings.cve_db_path)
    {
        violations.push(Violation::format(
            "cve_db_path",
            format!(
                "SQLite3 DB(Cve Dictionary) path must be a *Absolute* file path. cve_db_path: {}",
                settings.cve_db_path
            ),
        ));
    }

    violations.extend(rules::check_structure(&settings.format_rules()));
    violations.extend(validate_mail(&settings.mail));
    violations.extend(validate_chat(&settings.chat));

    violations
}

/// Check mail addresses, stopping at the first empty one.
///
/// An empty slot ends the pass: addresses after it are not checked.
#[must_use]
pub fn check_emails(addresses: &[&str]) -> Vec<Violation> {
    addresses
        .iter()
        .take_while(|addr| !addr.is_empty())
        .filter(|addr| !Constraint::Email.accepts(addr))
        .map(|addr| Violation::format("mail.address", format!("Invalid email address. email: {addr}")))
        .collect()
}

/// Validate the mail block. A disabled block yields nothing.
#[must_use]
pub fn validate_mail(mail: &MailConfig) -> Vec<Violation> {
    if !mail.use_this_time {
        return Vec::new();
    }

    let mut violations = check_emails(&mail.addresses());

    if mail.smtp_addr.is_empty() {
        violations.push(Violation::missing("mail.smtp_addr", "smtp_addr must not be empty"));
    }
    if mail.smtp_port.is_empty() {
        violations.push(Violation::missing("mail.smtp_port", "smtp_port must not be empty"));
    }
    if mail.to.is_empty() {
        violations.push(Violation::missing("mail.to", "To required at least one address"));
    }
    if mail.from.is_empty() {
        violations.push(Violation::missing("mail.from", "From required at least one address"));
    }

    violations.extend(rules::check_structure(&mail.format_rules()));
    violations
}

/// Validate the chat block. A disabled block yields nothing.
#[must_use]
pub fn validate_chat(chat: &ChatConfig) -> Vec<Violation> {
    if !chat.use_this_time {
        return Vec::new();
    }

    let mut violations = Vec::new();

    if chat.hook_url.is_empty() {
        violations.push(Violation::missing("slack.hook_url", "hook_url must not be empty"));
    }

    if chat.channel.is_empty() {
        violations.push(Violation::missing("slack.channel", "channel must not be empty"));
    } else if !chat.has_valid_channel_prefix() {
        violations.push(Violation::rule(
            "slack.channel",
            format!("channel's prefix must be '#', channel: {}", chat.channel),
        ));
    }

    if chat.auth_user.is_empty() {
        violations.push(Violation::missing("slack.auth_user", "auth_user must not be empty"));
    }

    violations.extend(rules::check_structure(&chat.format_rules()));
    violations
}

impl Settings {
    /// Every violation in these settings, see [`validate_settings`]
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        validate_settings(self)
    }

    /// Whether validation finds nothing
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl MailConfig {
    /// Every violation in this block, see [`validate_mail`]
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        validate_mail(self)
    }
}

impl ChatConfig {
    /// Every violation in this block, see [`validate_chat`]
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        validate_chat(self)
    }
}
