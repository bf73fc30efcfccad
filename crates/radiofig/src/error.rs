//! Application-wide error types using thiserror.

use radiofig_common::FigureError;

/// Errors that stop the application before any diagram runs.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Style, logging or path setup error.
    #[error(transparent)]
    Figure(#[from] FigureError),

    /// Malformed command line value.
    #[error("Invalid argument {argument}: {message}")]
    InvalidArgument { argument: String, message: String },
}

impl AppError {
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}

/// Result type for the application.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_figure_errors_pass_through() {
        let err = AppError::from(FigureError::config("unknown style option 'x'"));
        assert_eq!(err.to_string(), "Configuration error: unknown style option 'x'");
    }

    #[test]
    fn test_invalid_argument_display() {
        let err = AppError::invalid_argument("--set", "expected KEY=VALUE");
        assert_eq!(err.to_string(), "Invalid argument --set: expected KEY=VALUE");
    }
}
