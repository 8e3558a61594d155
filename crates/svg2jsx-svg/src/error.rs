//! Error types for SVG input handling.

use svg2jsx_core::ConvertError;

/// Errors that end a conversion attempt.
#[derive(Debug, thiserror::Error)]
pub enum SvgError {
    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("No <svg> root element found")]
    NoRootElement,

    #[error("Failed to fetch {uri}: {message}")]
    Fetch { uri: String, message: String },

    #[error("Invalid conversion options: {0}")]
    Options(#[from] ConvertError),
}

/// Errors from an optimizer. The pipeline recovers from these.
#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("Optimizer could not read markup: {0}")]
    Xml(String),

    #[error("Optimizer could not write markup: {0}")]
    Write(String),
}
