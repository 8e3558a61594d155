//! SVG to React component generator.
//!
//! This crate takes an already parsed SVG element tree plus a set of
//! conversion options and produces component source text in one of two
//! dialects: typed (TSX) or untyped (JSX). It performs no I/O and holds no
//! global state, so it can be called from any number of threads at once.

pub mod attributes;
pub mod element;
pub mod error;
pub mod generator;
pub mod normalize;
pub mod options;
pub mod props;
pub mod serializer;
pub mod syntax;
pub mod template;

pub use attributes::{is_namespace_declaration, translate_attribute, ATTRIBUTE_NAMES};
pub use element::{Attribute, Element};
pub use error::ConvertError;
pub use generator::{assemble, convert};
pub use normalize::normalize_whitespace;
pub use options::{to_component_name, ConversionOptions, OutputFormat, PropFlags};
pub use props::{PropDescriptor, PropSchema, PropType, PropUsage};
pub use serializer::serialize;
pub use syntax::check_syntax;
pub use template::apply_prop_usages;
