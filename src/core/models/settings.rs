//! Root settings model
//!
//! Built once at startup by the loader, then passed by reference to whatever
//! needs it. Nothing here is validated on construction; see
//! [`crate::core::services::validator`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{ChatConfig, MailConfig, ServerProfile};

/// All scanner configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Debug logging
    pub debug: bool,

    /// Log SQL issued against the CVE dictionary
    pub debug_sql: bool,

    /// Report language tag (e.g. `en`, `ja`)
    pub lang: String,

    /// Mail delivery block
    pub mail: MailConfig,

    /// Chat notification block
    #[serde(rename = "slack", alias = "chat")]
    pub chat: ChatConfig,

    /// Profile every server inherits unset values from
    pub default: ServerProfile,

    /// Named server profiles
    pub servers: BTreeMap<String, ServerProfile>,

    /// CVE dictionary server URL
    pub cve_dictionary_url: String,

    /// Only report CVEs whose CVSS score is above this value
    pub cvss_score_over: f64,

    /// Drop CVEs without a CVSS score from reports
    pub ignore_unscored_cves: bool,

    /// Use the external `ssh` command instead of the built-in client
    pub ssh_external: bool,

    /// HTTP proxy URL
    pub http_proxy: String,

    /// Directory JSON results are written under
    pub json_base_dir: String,

    /// SQLite3 CVE dictionary path
    pub cve_db_path: String,

    /// AWS profile name for S3 uploads
    pub aws_profile: String,

    /// AWS region for S3 uploads
    pub aws_region: String,

    /// S3 bucket for S3 uploads
    pub s3_bucket: String,

    /// Azure storage account
    pub azure_account: String,

    /// Azure storage key
    pub azure_key: String,

    /// Azure blob container
    pub azure_container: String,
}
