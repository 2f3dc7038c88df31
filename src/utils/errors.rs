//! Error handling for the fleet admin client
//!
//! Every failure a view can run into (network, HTTP status, local validation,
//! the advisory capacity guard) is one variant of [`AppError`].

use thiserror::Error;

/// Main application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Garage {garage_id} is at capacity ({capacity})")]
    CapacityReached { garage_id: String, capacity: i64 },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Api { status, .. } => Some(*status),
            AppError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for failures detected locally, before any request was sent.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::BadRequest(_)
                | AppError::NotFound(_)
                | AppError::CapacityReached { .. }
        )
    }
}

/// Typed result for operations that can fail
pub type AppResult<T> = Result<T, AppError>;

/// Helper to build a single-field validation error
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("custom");
    error.add_param("field".into(), &field);
    error.add_param("message".into(), &message);
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}

/// Helper for missing resources
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Helper for bad requests
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
