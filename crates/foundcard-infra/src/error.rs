//! Error logging
//!
//! Every [`AppError`] carries its own log level through [`ErrorMetadata`].
//! Sensitive errors are logged with their full detail but only ever shown to
//! the user through `client_message`.

use foundcard_core::{AppError, ErrorMetadata, LogLevel};

/// Log an error at the level its metadata asks for
pub fn log_error(error: &AppError) {
    let error_type = error.error_type();
    let code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_type = error_type, code = code, "Error occurred");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_type = error_type, code = code, "Error occurred");
        }
        LogLevel::Error => {
            tracing::error!(
                error = %error,
                error_type = error_type,
                code = code,
                detail = %error.detailed_message(),
                "Error occurred"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_without_subscriber() {
        log_error(&AppError::InvalidInput("bad".to_string()));
        log_error(&AppError::Internal("boom".to_string()));
    }
}
