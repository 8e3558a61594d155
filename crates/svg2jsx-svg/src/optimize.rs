//! Markup cleanup run before parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

use crate::error::OptimizeError;

/// Turns SVG text into smaller, equivalent SVG text.
pub trait Optimizer: Send + Sync {
    /// Optimizer identifier used in logs
    fn name(&self) -> &'static str;

    /// Optimize the markup. Failure is not fatal to a conversion; the
    /// pipeline falls back to the original text.
    fn optimize(&self, svg: &str) -> Result<String, OptimizeError>;
}

/// Returns its input unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOptimizer;

impl Optimizer for NoopOptimizer {
    fn name(&self) -> &'static str {
        "noop"
    }

    fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        Ok(svg.to_string())
    }
}

/// Fixed cleanup pass.
///
/// Drops comments, the XML declaration, doctypes, processing instructions,
/// `metadata`/`title`/`desc` subtrees, editor namespaced elements and
/// attributes (Inkscape, Sodipodi, Sketch) and whitespace-only text. All
/// other markup is written back in order.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cleanup;

/// Prefixes used by drawing tools for their private data.
const EDITOR_PREFIXES: &[&str] = &["sodipodi", "inkscape", "sketch"];

/// Elements whose whole subtree is removed.
const DROPPED_ELEMENTS: &[&str] = &["metadata", "title", "desc"];

/// Namespaces only used inside `<metadata>`.
const METADATA_PREFIXES: &[&str] = &["rdf", "cc", "dc"];

impl Optimizer for Cleanup {
    fn name(&self) -> &'static str {
        "cleanup"
    }

    fn optimize(&self, svg: &str) -> Result<String, OptimizeError> {
        let mut reader = Reader::from_str(svg);
        let mut writer = Writer::new(Vec::new());

        // Depth inside a dropped subtree; 0 means we are writing.
        let mut skip_depth = 0usize;

        loop {
            let event = reader
                .read_event()
                .map_err(|e| OptimizeError::Xml(e.to_string()))?;

            let output = match event {
                Event::Eof => break,
                Event::Start(e) => {
                    if skip_depth > 0 || is_dropped_element(e.name().as_ref()) {
                        skip_depth += 1;
                        None
                    } else {
                        Some(Event::Start(strip_editor_attributes(&e)?))
                    }
                }
                Event::Empty(e) => {
                    if skip_depth > 0 || is_dropped_element(e.name().as_ref()) {
                        None
                    } else {
                        Some(Event::Empty(strip_editor_attributes(&e)?))
                    }
                }
                Event::End(e) => {
                    if skip_depth > 0 {
                        skip_depth -= 1;
                        None
                    } else {
                        Some(Event::End(e))
                    }
                }
                Event::Text(e) => {
                    if skip_depth > 0 || e.iter().all(u8::is_ascii_whitespace) {
                        None
                    } else {
                        Some(Event::Text(e))
                    }
                }
                Event::CData(e) => (skip_depth == 0).then_some(Event::CData(e)),
                Event::Comment(_) | Event::Decl(_) | Event::PI(_) | Event::DocType(_) => None,
            };

            if let Some(event) = output {
                writer
                    .write_event(event)
                    .map_err(|e| OptimizeError::Write(e.to_string()))?;
            }
        }

        String::from_utf8(writer.into_inner()).map_err(|e| OptimizeError::Write(e.to_string()))
    }
}

fn is_dropped_element(name: &[u8]) -> bool {
    DROPPED_ELEMENTS.iter().any(|d| d.as_bytes() == name) || has_editor_prefix(name)
}

/// `inkscape:label`, `sodipodi:docname`, ...
fn has_editor_prefix(name: &[u8]) -> bool {
    EDITOR_PREFIXES.iter().any(|prefix| {
        name.len() > prefix.len()
            && name.starts_with(prefix.as_bytes())
            && name[prefix.len()] == b':'
    })
}

/// `xmlns:inkscape`, `xmlns:sodipodi`, `xmlns:rdf`, ...
fn declares_editor_namespace(name: &[u8]) -> bool {
    name.strip_prefix(b"xmlns:").is_some_and(|rest| {
        EDITOR_PREFIXES
            .iter()
            .chain(METADATA_PREFIXES)
            .any(|p| p.as_bytes() == rest)
    })
}

/// Copy a start tag without editor attributes or their namespace declarations.
fn strip_editor_attributes(e: &BytesStart<'_>) -> Result<BytesStart<'static>, OptimizeError> {
    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut cleaned = BytesStart::new(name);

    for attr in e.attributes() {
        let attr = attr.map_err(|e| OptimizeError::Xml(e.to_string()))?;
        let key = attr.key.as_ref();
        if has_editor_prefix(key) || declares_editor_namespace(key) {
            continue;
        }
        cleaned.push_attribute(attr);
    }

    Ok(cleaned)
}
