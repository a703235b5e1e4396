//! Error types for Plotpad.
//!
//! This module provides a unified error handling approach using `thiserror`.

use thiserror::Error;

/// Result type alias for Plotpad operations.
pub type Result<T> = std::result::Result<T, PlotpadError>;

/// Errors that can occur in Plotpad.
#[derive(Debug, Error)]
pub enum PlotpadError {
    /// The requested feature is a placeholder in this version.
    #[error("{feature}: not available in this version")]
    NotAvailable {
        /// Human readable name of the feature.
        feature: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotpadError {
    /// Create a NotAvailable error.
    pub fn not_available(feature: impl Into<String>) -> Self {
        Self::NotAvailable {
            feature: feature.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_available_message_names_the_feature() {
        let err = PlotpadError::not_available("Add graph from file");
        assert_eq!(
            err.to_string(),
            "Add graph from file: not available in this version"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err: PlotpadError = io.into();
        assert!(matches!(err, PlotpadError::Io(_)));
    }
}
