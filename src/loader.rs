//! Settings file loading
//!
//! Reads a TOML settings file into [`Settings`]. Loading never validates;
//! call [`Settings::validate`] on the result.
//!
//! ```toml
//! cve_dictionary_url = "http://127.0.0.1:1323"
//!
//! [default]
//! user = "vuls"
//! port = "22"
//!
//! [servers.web01]
//! host = "192.168.0.10"
//!
//! [slack]
//! hook_url = "https://hooks.slack.com/services/xxx"
//! channel = "#scan"
//! auth_user = "vuls"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::models::{ServerProfile, Settings};

/// Port used when neither the server nor `[default]` sets one
pub const DEFAULT_SSH_PORT: &str = "22";

/// Errors that can occur when loading a settings file
#[derive(Debug, Error)]
pub enum LoadError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// File is not valid settings TOML
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load settings from a TOML file
pub fn load_settings(path: &Path) -> Result<Settings, LoadError> {
    log::debug!("loading settings from {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content)
}

/// Parse settings from TOML text and resolve every server profile
/// against `[default]`
pub fn parse_settings(content: &str) -> Result<Settings, LoadError> {
    let mut settings: Settings = toml::from_str(content)?;

    let default = settings.default.clone();
    for (name, server) in &mut settings.servers {
        inherit_defaults(name, server, &default);
        log::debug!("resolved server {name} ({}:{})", server.host, server.port);
    }

    Ok(settings)
}

fn inherit_defaults(name: &str, server: &mut ServerProfile, default: &ServerProfile) {
    server.server_name = name.to_string();

    fill_string(&mut server.user, &default.user);
    fill_string(&mut server.port, &default.port);
    fill_string(&mut server.port, DEFAULT_SSH_PORT);
    fill_string(&mut server.key_path, &default.key_path);
    fill_string(&mut server.key_password, &default.key_password);

    if server.cpe_names.is_empty() {
        server.cpe_names.clone_from(&default.cpe_names);
    }
    if server.containers.is_empty() {
        server.containers.clone_from(&default.containers);
    }
    if server.optional.is_empty() {
        server.optional.clone_from(&default.optional);
    }
}

fn fill_string(value: &mut String, fallback: &str) {
    if value.is_empty() {
        *value = fallback.to_string();
    }
}
