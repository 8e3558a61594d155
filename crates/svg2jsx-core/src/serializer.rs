//! Recursive element tree to nested JSX tag text.

use crate::attributes::{is_namespace_declaration, translate_attribute};
use crate::element::{Attribute, Element};

/// One level of indentation.
const INDENT: &str = "  ";

/// Serialize an element and its descendants into indented JSX markup.
///
/// `depth` starts at 1 for the root. A node at depth `d` is indented by
/// `d + 1` units so that the root lines up inside `return (`. Elements with
/// children never emit their own text.
pub fn serialize(element: &Element, depth: usize) -> String {
    let pad = INDENT.repeat(depth + 1);
    let tag = element.tag.to_lowercase();
    let attrs = render_attributes(&element.attributes);

    if !element.has_children() {
        return match element.meaningful_text() {
            Some(text) => format!("{pad}<{tag}{attrs}>{}</{tag}>", escape_text(text)),
            None => format!("{pad}<{tag}{attrs} />"),
        };
    }

    let mut lines = Vec::with_capacity(element.children.len() + 2);
    lines.push(format!("{pad}<{tag}{attrs}>"));
    for child in &element.children {
        lines.push(serialize(child, depth + 1));
    }
    lines.push(format!("{pad}</{tag}>"));

    lines.join("\n")
}

/// Render all attributes, each with a leading space.
///
/// Attributes that translate to the same name collapse into one: the last
/// value wins and keeps the position of the first.
fn render_attributes(attributes: &[Attribute]) -> String {
    let mut rendered: Vec<(&str, String)> = Vec::with_capacity(attributes.len());

    for attr in attributes.iter().filter(|a| !is_namespace_declaration(&a.name)) {
        let name = translate_attribute(&attr.name);
        let text = render_attribute(name, attr);
        match rendered.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = text,
            None => rendered.push((name, text)),
        }
    }

    rendered
        .into_iter()
        .map(|(_, text)| format!(" {text}"))
        .collect()
}

fn render_attribute(name: &str, attr: &Attribute) -> String {
    // Boolean form: `<input disabled>` / `disabled="disabled"`
    if attr.value.is_empty() || attr.value == attr.name {
        return name.to_string();
    }

    format!(r#"{name}="{}""#, escape_attribute(&attr.value))
}

/// Escape a value for a double quoted JSX attribute.
fn escape_attribute(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Escape characters that JSX would read as markup or expressions.
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn self_closes_empty_elements() {
        let el = Element::new("path").with_attr("d", "M0 0L1 1");
        assert_eq!(serialize(&el, 1), r#"    <path d="M0 0L1 1" />"#);

        let blank = Element::new("rect").with_text("   \n ");
        assert_eq!(serialize(&blank, 1), "    <rect />");
    }

    #[test]
    fn inlines_trimmed_text() {
        let el = Element::new("text").with_attr("x", "4").with_text("\n  Hello  \n");
        assert_eq!(serialize(&el, 2), r#"      <text x="4">Hello</text>"#);
    }

    #[test]
    fn nests_children_one_level_deeper() {
        let el = Element::new("svg")
            .with_attr("viewBox", "0 0 24 24")
            .with_child(Element::new("g").with_child(Element::new("circle").with_attr("r", "4")));

        let expected = [
            r#"    <svg viewBox="0 0 24 24">"#,
            "      <g>",
            r#"        <circle r="4" />"#,
            "      </g>",
            "    </svg>",
        ]
        .join("\n");

        assert_eq!(serialize(&el, 1), expected);
    }

    #[test]
    fn parent_text_is_dropped() {
        let el = Element::new("text")
            .with_text("ignored")
            .with_child(Element::new("tspan").with_text("kept"));

        let out = serialize(&el, 1);
        assert!(!out.contains("ignored"));
        assert!(out.contains("<tspan>kept</tspan>"));
    }

    #[test]
    fn lowercases_tag_names() {
        let el = Element::new("SVG").with_child(Element::new("Path"));
        let out = serialize(&el, 1);
        assert!(out.contains("<svg>"));
        assert!(out.contains("<path />"));
        assert!(out.contains("</svg>"));
    }

    #[test]
    fn strips_namespace_declarations() {
        let el = Element::new("svg")
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("xmlns:svg", "http://www.w3.org/2000/svg")
            .with_attr("xmlns:xlink", "http://www.w3.org/1999/xlink");

        assert_eq!(
            serialize(&el, 1),
            r#"    <svg xmlnsXlink="http://www.w3.org/1999/xlink" />"#
        );
    }

    #[test]
    fn translates_attribute_names_in_source_order() {
        let el = Element::new("path")
            .with_attr("stroke-width", "2")
            .with_attr("class", "icon")
            .with_attr("fill-rule", "evenodd");

        assert_eq!(
            serialize(&el, 1),
            r#"    <path strokeWidth="2" className="icon" fillRule="evenodd" />"#
        );
    }

    #[test]
    fn colliding_translations_keep_last_value() {
        let el = Element::new("svg")
            .with_attr("class", "a")
            .with_attr("width", "24")
            .with_attr("className", "b");

        assert_eq!(serialize(&el, 1), r#"    <svg className="b" width="24" />"#);
    }

    #[test]
    fn renders_boolean_attributes() {
        let el = Element::new("svg")
            .with_attr("focusable", "")
            .with_attr("hidden", "hidden");

        assert_eq!(serialize(&el, 1), "    <svg focusable hidden />");
    }

    #[test]
    fn escapes_double_quotes_in_values() {
        let el = Element::new("text").with_attr("font-family", r#""Fira Code", monospace"#);

        assert_eq!(
            serialize(&el, 1),
            r#"    <text fontFamily="&quot;Fira Code&quot;, monospace" />"#
        );
    }

    #[test]
    fn escapes_markup_in_text() {
        let el = Element::new("text").with_text("a < b {c}");
        assert_eq!(
            serialize(&el, 1),
            "    <text>a &lt; b &#123;c&#125;</text>"
        );
    }

    #[test]
    fn output_is_deterministic() {
        let el = Element::new("svg")
            .with_attr("width", "24")
            .with_child(Element::new("path").with_attr("d", "M1 1"));

        assert_eq!(serialize(&el, 1), serialize(&el, 1));
    }
}
