//! System utilities
//!
//! Error types and input validation shared by the views and the CLI.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult};
