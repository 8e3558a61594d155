//! SVG markup to element tree.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use svg2jsx_core::Element;

use crate::error::SvgError;

/// Parse SVG markup and return its root `svg` element.
///
/// The root is the first `svg` element in document order, so markup that
/// wraps the graphic (an HTML fragment, say) still works. Attribute names are
/// kept verbatim, prefixes included, in source order. Comments, declarations
/// and processing instructions are skipped.
///
/// # Errors
///
/// - `SvgError::Xml` when the markup is not well formed
/// - `SvgError::NoRootElement` when there is no `svg` element at all
pub fn parse_svg(content: &str) -> Result<Element, SvgError> {
    let mut reader = Reader::from_str(content);
    let mut stack: Vec<Element> = Vec::new();
    let mut top_level: Vec<Element> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                stack.push(start_element(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = start_element(&e)?;
                attach(element, &mut stack, &mut top_level);
            }
            Ok(Event::End(_)) => {
                if let Some(element) = stack.pop() {
                    attach(element, &mut stack, &mut top_level);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(current) = stack.last_mut() {
                    let text = e.unescape().map_err(|e| SvgError::Xml(e.to_string()))?;
                    push_text(current, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(current) = stack.last_mut() {
                    let bytes = e.into_inner();
                    push_text(current, &String::from_utf8_lossy(&bytes));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                tracing::debug!(
                    "XML parse error at byte {}: {}",
                    reader.buffer_position(),
                    e
                );
                return Err(SvgError::Xml(e.to_string()));
            }
            _ => {}
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(SvgError::Xml(format!(
            "unexpected end of input inside <{}>",
            unclosed.tag
        )));
    }

    top_level
        .into_iter()
        .find_map(find_svg)
        .ok_or(SvgError::NoRootElement)
}

/// Build an element from an opening or self-closing tag.
fn start_element(e: &BytesStart<'_>) -> Result<Element, SvgError> {
    let mut element = Element::new(String::from_utf8_lossy(e.name().as_ref()));

    for attr in e.attributes() {
        let attr = attr.map_err(|e| SvgError::Xml(e.to_string()))?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| SvgError::Xml(e.to_string()))?
            .into_owned();
        element = element.with_attr(name, value);
    }

    Ok(element)
}

/// Hang a finished element on its parent, or on the document if it has none.
fn attach(element: Element, stack: &mut [Element], top_level: &mut Vec<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => top_level.push(element),
    }
}

fn push_text(element: &mut Element, text: &str) {
    element.text.get_or_insert_with(String::new).push_str(text);
}

/// Pre-order search for the first `svg` element.
fn find_svg(element: Element) -> Option<Element> {
    if element.tag.eq_ignore_ascii_case("svg") {
        return Some(element);
    }
    element.children.into_iter().find_map(find_svg)
}
