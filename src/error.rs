//! Error types for the udf-ruler library

use thiserror::Error;

/// Result type alias using RulerError
pub type Result<T> = std::result::Result<T, RulerError>;

/// Errors that can occur at the fallible edges of the ruler model
///
/// Marker geometry itself never fails: out-of-range positions are clamped.
#[derive(Debug, Error)]
pub enum RulerError {
    /// Error from the underlying lopdf library
    #[error("PDF operation failed: {0}")]
    PdfError(#[from] lopdf::Error),

    /// Rejected ruler configuration
    #[error("Invalid ruler configuration: {0}")]
    InvalidConfig(String),

    /// Font loading or measurement error
    #[error("Font handling failed: {0}")]
    FontError(String),

    /// Page not found
    #[error("Page with ID {0:?} not found")]
    PageNotFound(lopdf::ObjectId),
}
