//! Resolve, optimize, parse and convert in one call.

use svg2jsx_core::{convert, ConversionOptions, OutputFormat};

use crate::error::SvgError;
use crate::optimize::{Cleanup, Optimizer};
use crate::parser::parse_svg;
use crate::source::SvgSource;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub component_name: String,
    pub format: OutputFormat,

    /// Whether the optimizer output was used (false after a fallback)
    pub optimized: bool,

    /// Generated component source
    pub source: String,
}

/// Orchestrates one conversion attempt.
///
/// Failure policy: optimizer errors fall back to the original markup, parse
/// errors end the attempt, fetch errors end the attempt carrying the URI.
/// Nothing is retried.
pub struct Pipeline {
    optimizer: Box<dyn Optimizer>,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Cleanup)
    }
}

impl Pipeline {
    pub fn new(optimizer: impl Optimizer + 'static) -> Self {
        Self {
            optimizer: Box::new(optimizer),
        }
    }

    pub fn optimizer_name(&self) -> &'static str {
        self.optimizer.name()
    }

    /// Convert markup from any source.
    pub fn run(
        &self,
        source: &SvgSource,
        options: &ConversionOptions,
    ) -> Result<Conversion, SvgError> {
        options.validate()?;

        let markup = source.resolve()?;
        tracing::debug!(
            "Converting {} as {}",
            source.describe(),
            options.component_name
        );

        self.convert_loaded(&markup, options)
    }

    fn convert_loaded(
        &self,
        markup: &str,
        options: &ConversionOptions,
    ) -> Result<Conversion, SvgError> {
        let (text, optimized) = match self.optimizer.optimize(markup) {
            Ok(text) => (text, true),
            Err(e) => {
                tracing::warn!(
                    "Optimizer {} failed, using original markup: {}",
                    self.optimizer.name(),
                    e
                );
                (markup.to_string(), false)
            }
        };

        let root = parse_svg(&text)?;

        Ok(Conversion {
            component_name: options.component_name.clone(),
            format: options.format,
            optimized,
            source: convert(&root, options),
        })
    }
}
