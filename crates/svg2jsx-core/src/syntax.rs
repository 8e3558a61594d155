//! Parse check for generated component source.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::ConvertError;
use crate::options::OutputFormat;

/// Parse `source` with the TSX or JSX grammar matching `format`.
///
/// Returns the parser diagnostics joined into one message on failure.
pub fn check_syntax(source: &str, format: OutputFormat) -> Result<(), ConvertError> {
    let allocator = Allocator::default();
    let source_type = match format {
        OutputFormat::Typed => SourceType::tsx(),
        OutputFormat::Untyped => SourceType::jsx(),
    };

    let ret = Parser::new(&allocator, source, source_type).parse();

    if ret.panicked || !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConvertError::Syntax(message));
    }

    Ok(())
}
