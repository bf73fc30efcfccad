//! Error types and utilities for radiofig

use thiserror::Error;

/// Result type alias for radiofig operations
pub type Result<T> = std::result::Result<T, FigureError>;

/// Main error type for figure generation
#[derive(Error, Debug)]
pub enum FigureError {
    /// I/O related errors (directory creation, file writes)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Style or command line configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Invalid values supplied by a caller
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Drawing and plotting errors
    #[error("Render error: {message}")]
    Render {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Image encoding errors
    #[error("Encode error: {message}")]
    Encode {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Logging setup errors
    #[error("Logging error: {message}")]
    Logging { message: String },

    /// Generic error with custom message
    #[error("{message}")]
    Generic {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl FigureError {
    /// Create a new generic error with a custom message
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new generic error with a custom message and source
    pub fn with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Generic {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new render error
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new render error with source
    pub fn render_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new encode error with source
    pub fn encode_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Encode {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging {
            message: msg.into(),
        }
    }

    /// Name of the offending field, if this is a validation error that carries one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to FigureError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for FigureError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::render_with_source("Figure rendering failed", err)
    }
}

#[cfg(feature = "image")]
/// Convert from image encoding errors to FigureError
impl From<image::ImageError> for FigureError {
    fn from(err: image::ImageError) -> Self {
        Self::encode_with_source("Image encoding failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let error = FigureError::new("test message");
        assert!(error.to_string().contains("test message"));

        let config_error = FigureError::config("unknown style key");
        assert!(config_error.to_string().contains("Configuration error"));
        assert!(config_error.to_string().contains("unknown style key"));

        let validation_error = FigureError::validation_field("must be positive", "font.size");
        assert!(validation_error.to_string().contains("Validation error"));
        assert_eq!(validation_error.field(), Some("font.size"));

        let render_error = FigureError::render("empty series");
        assert_eq!(render_error.to_string(), "Render error: empty series");
        assert_eq!(render_error.field(), None);
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let wrapped = FigureError::with_source("Failed to create images root", io_error);

        assert!(wrapped.to_string().contains("Failed to create images root"));
        assert!(wrapped.source().is_some());

        let config_error = FigureError::config_with_source(
            "Bad override value",
            io::Error::new(io::ErrorKind::InvalidData, "not a number"),
        );
        assert!(config_error.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: FigureError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_display_formatting() {
        assert_eq!(FigureError::new("plain").to_string(), "plain");
        assert_eq!(
            FigureError::config("missing value").to_string(),
            "Configuration error: missing value"
        );
        assert_eq!(
            FigureError::logging("already initialized").to_string(),
            "Logging error: already initialized"
        );
    }

    #[test]
    fn test_error_chain_preservation() {
        let root = io::Error::new(io::ErrorKind::NotFound, "Root cause");
        let middle = FigureError::config_with_source("Middle layer", root);
        let top = FigureError::with_source("Top layer", middle);

        let mut current: &dyn Error = &top;
        let mut depth = 0;
        while let Some(source) = current.source() {
            current = source;
            depth += 1;
        }
        assert_eq!(depth, 2);
    }
}
