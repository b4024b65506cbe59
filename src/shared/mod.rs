//! Shared utilities: error types, result alias and file security checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
