//! Error types for the converter and its option handling.

/// Errors raised around conversion.
///
/// [`crate::convert`] itself is total and never returns one of these; they
/// come from option parsing, option validation and the syntax check.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Invalid component name: {0:?} is not a valid identifier")]
    InvalidComponentName(String),

    #[error("Unknown output format: {0} (expected typed or untyped)")]
    UnknownFormat(String),

    #[error("Unknown prop flag: {0} (expected width, height, className or color)")]
    UnknownProp(String),

    #[error("Generated source does not parse: {0}")]
    Syntax(String),
}
