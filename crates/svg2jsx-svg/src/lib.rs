//! SVG input handling for svg2jsx.
//!
//! Everything around the converter lives here: reading markup from inline
//! text or a file, cleaning it up, parsing it into an element tree, and the
//! pipeline that strings those steps together with their failure policy.

pub mod error;
pub mod optimize;
pub mod parser;
pub mod pipeline;
pub mod source;

pub use error::{OptimizeError, SvgError};
pub use optimize::{Cleanup, NoopOptimizer, Optimizer};
pub use parser::parse_svg;
pub use pipeline::{Conversion, Pipeline};
pub use source::SvgSource;
