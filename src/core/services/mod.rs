//! Validation services
//!
//! Pure logic over the settings models. No I/O, no logging: every function
//! takes data in and returns violations.
//!
//! - [`rules`] - declarative `(field, constraint)` tables and the generic format pass
//! - [`validator`] - the settings, mail and chat validators

pub mod rules;
pub mod validator;

pub use rules::{Constraint, FieldRule, check_structure};
pub use self::validator::{check_emails, validate_chat, validate_mail, validate_settings};
