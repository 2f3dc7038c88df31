//! Project configuration
//!
//! Environment variables and HTTP client settings.

pub mod environment;

pub use environment::*;
