//! Server profile model
//!
//! One profile per scan target. The `[default]` table and every
//! `[servers.<name>]` table deserialize into a [`ServerProfile`].

use serde::{Deserialize, Serialize};

/// Connection and scan-scope description for one scan target
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerProfile {
    /// Profile name (the `[servers.<name>]` key)
    pub server_name: String,

    /// SSH user
    pub user: String,

    /// SSH host
    pub host: String,

    /// SSH port, kept as written in the file
    pub port: String,

    /// Path to the SSH private key
    pub key_path: String,

    /// Passphrase for the SSH private key
    pub key_password: String,

    /// Additional CPE package-name patterns to scan
    pub cpe_names: Vec<String>,

    /// Container names or IDs to scan inside
    pub containers: Vec<String>,

    /// Free-form entries copied into reports, conventionally `[key, value]`
    pub optional: Vec<Vec<toml::Value>>,

    /// Colour used for this server's debug log lines
    #[serde(skip)]
    pub log_msg_ansi_color: String,

    /// Container this profile currently points at
    #[serde(skip)]
    pub container: Container,

    /// OS family, filled in once the target has been detected
    #[serde(skip)]
    pub family: String,
}

impl ServerProfile {
    /// Whether this profile targets a container
    #[must_use]
    pub fn is_container(&self) -> bool {
        !self.container.container_id.is_empty()
    }

    /// Whether this profile targets the local machine
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.host == "localhost" || self.host == "127.0.0.1"
    }

    /// Attach a container, replacing any previous one
    pub fn set_container(&mut self, container: Container) {
        self.container = container;
    }
}

/// A container runtime target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Container {
    /// Container ID
    pub container_id: String,

    /// Container name
    pub name: String,

    /// Runtime type (e.g. `docker`)
    #[serde(rename = "type")]
    pub kind: String,
}
