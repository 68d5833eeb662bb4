//! Access

pub mod errors;
pub mod guard;

pub use errors::AccessError;
pub use guard::AccessGuard;
