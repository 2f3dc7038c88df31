//! Operator interaction
//!
//! The views never talk to a terminal directly: confirmations and alerts go
//! through [`Operator`], so the CLI can prompt on stdin and tests can script
//! the answers.

use tracing::{error, warn};

use crate::utils::errors::AppError;

pub trait Operator: Send + Sync {
    /// Ask a yes/no question. Destructive actions only proceed on `true`.
    fn confirm(&self, question: &str) -> bool;

    /// Show a blocking, user-facing message.
    fn alert(&self, message: &str);
}

/// Log a failure, alert the operator and hand the error back.
///
/// Input rejected before any request went out is logged as a warning.
pub(crate) fn report_failure(operator: &dyn Operator, context: &str, alert: &str, err: AppError) -> AppError {
    if err.is_local() {
        warn!("⚠️ {}: {}", context, err);
    } else {
        match err.status() {
            Some(status) => error!("❌ {} (HTTP {}): {}", context, status, err),
            None => error!("❌ {}: {}", context, err),
        }
    }
    operator.alert(alert);
    err
}
