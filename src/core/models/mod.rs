//! Settings models
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Settings`] - root configuration
//! - [`ServerProfile`] / [`Container`] - scan targets
//! - [`MailConfig`] / [`ChatConfig`] - notification blocks
//! - [`Violation`] - one reported configuration defect

mod chat;
mod mail;
mod server;
mod settings;
mod violation;

pub use chat::{ChatConfig, SERVER_NAME_PLACEHOLDER};
pub use mail::MailConfig;
pub use server::{Container, ServerProfile};
pub use settings::Settings;
pub use violation::{Violation, ViolationKind};
