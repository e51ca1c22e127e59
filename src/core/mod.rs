//! Core settings logic for vulsconf
//!
//! Pure data and validation with no I/O dependencies.
//!
//! ## Architecture
//!
//! - `models/` - Settings, server profiles, notification blocks, violations
//! - `services/` - Format rules and validators

pub mod models;
pub mod services;
