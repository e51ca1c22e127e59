//! vulsconf - Settings model and validation engine for a vulnerability scanner
//!
//! This library holds the scanner's configuration (global scan options,
//! server profiles, mail and chat notification blocks) and checks that it is
//! well-formed before a scan runs, reporting every violation at once.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod core;
pub mod loader;
pub mod output;

pub use crate::core::models::{
    ChatConfig, Container, MailConfig, ServerProfile, Settings, Violation, ViolationKind,
};
pub use loader::{LoadError, load_settings, parse_settings};
