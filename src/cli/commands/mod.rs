//! Command implementations

mod servers;
mod validate;

pub use servers::servers;
pub use validate::validate;
