//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use test_case::test_case;
use vulsconf::core::services::{Constraint, FieldRule, check_structure};

use crate::common::valid_chat;

// =============================================================================
// Constraint Tests
// =============================================================================

#[test_case("http://127.0.0.1:1323", true ; "http with port")]
#[test_case("https://hooks.slack.com/services/a/b", true ; "https with path")]
#[test_case("127.0.0.1:3128", true ; "bare ip and port")]
#[test_case("proxy.example.com:8080", true ; "bare host and port")]
#[test_case("hooks.slack.com/services", true ; "missing scheme")]
#[test_case("localhost", true ; "bare host")]
#[test_case("foo:bar", false ; "non numeric port")]
#[test_case("proxy.example.com:99999", false ; "port out of range")]
#[test_case("not-a-proxy:x y", false ; "embedded space after colon")]
#[test_case("not a url", false ; "plain words")]
#[test_case("http://", false ; "scheme only")]
#[test_case("file:///etc/passwd", false ; "unsupported scheme")]
#[test_case("mailto://a@b.com", false ; "mailto scheme")]
#[test_case(".example.com", false ; "leading dot")]
fn test_url_constraint(value: &str, expected: bool) {
    assert_eq!(Constraint::Url.accepts(value), expected, "value={value:?}");
}

#[test_case("25", true ; "smtp")]
#[test_case("587", true ; "submission")]
#[test_case("65535", true ; "max port")]
#[test_case("+25", true ; "leading plus")]
#[test_case("0", false ; "zero")]
#[test_case("65536", false ; "above range")]
#[test_case("-1", false ; "negative")]
#[test_case("2 5", false ; "embedded space")]
#[test_case("smtp", false ; "name")]
fn test_port_constraint(value: &str, expected: bool) {
    assert_eq!(Constraint::Port.accepts(value), expected, "value={value:?}");
}

#[test_case("a@b.com", true ; "simple")]
#[test_case("first.last+tag@sub.example.org", true ; "dotted with tag")]
#[test_case("no-at-sign", false ; "no at")]
#[test_case("user@", false ; "no domain")]
#[test_case("@example.com", false ; "no user")]
fn test_email_constraint(value: &str, expected: bool) {
    assert_eq!(Constraint::Email.accepts(value), expected, "value={value:?}");
}

#[cfg(unix)]
#[test_case("/var/lib/vuls", true ; "absolute")]
#[test_case("var/lib/vuls", false ; "relative")]
#[test_case("./results", false ; "dot relative")]
#[test_case("~/results", false ; "tilde is not expanded")]
fn test_absolute_path_constraint(value: &str, expected: bool) {
    assert_eq!(Constraint::AbsolutePath.accepts(value), expected, "value={value:?}");
}

// =============================================================================
// Rule Table Tests
// =============================================================================

#[test_case(Constraint::Url ; "url")]
#[test_case(Constraint::Port ; "port")]
#[test_case(Constraint::Email ; "email")]
#[test_case(Constraint::AbsolutePath ; "absolute path")]
fn test_empty_value_always_holds(constraint: Constraint) {
    assert!(FieldRule::new("field", "", constraint).holds());
    assert!(check_structure(&[FieldRule::new("field", "", constraint)]).is_none());
}

// =============================================================================
// Channel Tests
// =============================================================================

#[test_case("#general", true ; "hash prefix")]
#[test_case("#", true ; "bare hash")]
#[test_case("${servername}", true ; "placeholder")]
#[test_case("general", false ; "no prefix")]
#[test_case("@user", false ; "direct message")]
#[test_case(" #general", false ; "leading space")]
fn test_channel_prefix(channel: &str, expected: bool) {
    let mut chat = valid_chat();
    chat.channel = channel.to_string();
    assert_eq!(chat.has_valid_channel_prefix(), expected);
    assert_eq!(chat.validate().is_empty(), expected);
}
