//! Tests for output structures

use vulsconf::Violation;
use vulsconf::output::{OutputMode, ServerListResult, ValidateResult};

use crate::common::valid_settings;

#[test]
fn test_output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_validate_result_valid() {
    let settings = valid_settings();
    let result = ValidateResult::new("config.toml", &settings, settings.validate());

    assert!(result.valid);
    assert_eq!(result.servers, 1);
    assert!(result.violations.is_empty());
}

#[test]
fn test_validate_result_serialization() {
    let settings = valid_settings();
    let result = ValidateResult::new(
        "config.toml",
        &settings,
        vec![Violation::missing("mail.to", "To required at least one address")],
    );

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"valid\":false"));
    assert!(json.contains("\"kind\":\"missing_field\""));
    assert!(json.contains("\"field\":\"mail.to\""));
}

#[test]
fn test_server_list_flags() {
    let mut settings = valid_settings();
    let mut local = settings.servers["web01"].clone();
    local.server_name = "self".to_string();
    local.host = "localhost".to_string();
    settings.servers.insert("self".to_string(), local);

    let result = ServerListResult::new(&settings);
    assert_eq!(result.servers.len(), 2);

    // BTreeMap order
    assert_eq!(result.servers[0].name, "self");
    assert!(result.servers[0].local);
    assert!(!result.servers[1].local);
    assert!(!result.servers[1].container);
}

#[test]
fn test_server_list_serialization() {
    let result = ServerListResult::new(&valid_settings());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"name\":\"web01\""));
    assert!(json.contains("\"local\":false"));
}
