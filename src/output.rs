//! Output formatting for human and JSON modes
//!
//! Command results are rendered either as human-readable text or as
//! machine-parseable JSON.

use serde::Serialize;

use crate::core::models::{ServerProfile, Settings, Violation};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a validate run
#[derive(Debug, Serialize)]
pub struct ValidateResult {
    /// Whether no violations were found
    pub valid: bool,
    /// Settings file that was validated
    pub config: String,
    /// Number of named server profiles
    pub servers: usize,
    /// Every violation, in check order
    pub violations: Vec<Violation>,
}

impl ValidateResult {
    /// Build a result from loaded settings and their violations
    #[must_use]
    pub fn new(config: impl Into<String>, settings: &Settings, violations: Vec<Violation>) -> Self {
        Self {
            valid: violations.is_empty(),
            config: config.into(),
            servers: settings.servers.len(),
            violations,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Validating {} ({} server(s))...\n", self.config, self.servers);

        if self.valid {
            println!("Settings are valid.");
            return;
        }

        for v in &self.violations {
            println!("  [{}] {}", v.kind, v.field);
            println!("          {}\n", v.message);
        }
        println!("INVALID: {} violation(s)", self.violations.len());
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

/// Result of listing server profiles
#[derive(Debug, Serialize)]
pub struct ServerListResult {
    /// Resolved profiles, sorted by name
    pub servers: Vec<ServerInfo>,
}

/// Summary of one server profile
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    /// Profile name
    pub name: String,
    /// SSH host
    pub host: String,
    /// SSH port
    pub port: String,
    /// SSH user
    pub user: String,
    /// Whether the target is this machine
    pub local: bool,
    /// Whether the target is a container
    pub container: bool,
}

impl From<&ServerProfile> for ServerInfo {
    fn from(server: &ServerProfile) -> Self {
        Self {
            name: server.server_name.clone(),
            host: server.host.clone(),
            port: server.port.clone(),
            user: server.user.clone(),
            local: server.is_local(),
            container: server.is_container(),
        }
    }
}

impl ServerListResult {
    /// Collect every named profile from the settings
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            servers: settings.servers.values().map(ServerInfo::from).collect(),
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.servers.is_empty() {
            println!("No servers configured.");
            return;
        }

        println!("Servers:\n");
        for s in &self.servers {
            let location = if s.local { " (local)" } else { "" };
            println!("  {}{location}", s.name);
            println!("  {}@{}:{}\n", s.user, s.host, s.port);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
