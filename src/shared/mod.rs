//! Shared utilities used across layers: the crate-wide `Result` alias,
//! application errors and exit codes, and file validation helpers.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
