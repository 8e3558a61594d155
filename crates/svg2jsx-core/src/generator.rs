//! Component source assembly.

use crate::element::Element;
use crate::normalize::normalize_whitespace;
use crate::options::ConversionOptions;
use crate::props::PropSchema;
use crate::serializer::serialize;
use crate::template::apply_prop_usages;

/// Convert an SVG element tree into React component source.
///
/// Never fails. The component name is used as given, so an empty or
/// otherwise invalid name produces source that will not parse; see
/// [`ConversionOptions::validate`].
pub fn convert(root: &Element, options: &ConversionOptions) -> String {
    let schema = PropSchema::from_flags(&options.add_props);

    let mut body = serialize(root, 1);
    if !schema.is_empty() {
        body = apply_prop_usages(&body, &schema.usages);
    }

    normalize_whitespace(&assemble(options, &schema, &body))
}

/// Join the props interface, function signature and body into one module.
pub fn assemble(options: &ConversionOptions, schema: &PropSchema, body: &str) -> String {
    let name = &options.component_name;
    let interface = schema.interface_text(options.format, name);
    let params = schema.params_text(options.format, name);

    let mut out = String::new();
    if !interface.is_empty() {
        out.push_str(&interface);
        out.push_str("\n\n");
    }

    out.push_str(&format!(
        r#"export function {name}({params}) {{
  return (
{body}
  );
}}
"#
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OutputFormat, PropFlags};
    use pretty_assertions::assert_eq;

    fn icon() -> Element {
        Element::new("svg")
            .with_attr("xmlns", "http://www.w3.org/2000/svg")
            .with_attr("viewBox", "0 0 16 16")
            .with_child(Element::new("path").with_attr("d", "M0 0h16v16H0z"))
    }

    #[test]
    fn no_props_gives_parameterless_function() {
        let out = convert(&icon(), &ConversionOptions::new("Square"));

        assert_eq!(
            out,
            r#"export function Square() {
  return (
    <svg viewBox="0 0 16 16">
      <path d="M0 0h16v16H0z" />
    </svg>
  );
}
"#
        );
    }

    #[test]
    fn untyped_with_props_has_no_interface() {
        let options = ConversionOptions::new("Square")
            .with_format(OutputFormat::Untyped)
            .with_props(PropFlags {
                class_name: true,
                ..PropFlags::none()
            });

        let root = icon().with_attr("class", "icon");
        let out = convert(&root, &options);

        assert_eq!(
            out,
            r#"export function Square({ className }) {
  return (
    <svg viewBox="0 0 16 16" className={className}>
      <path d="M0 0h16v16H0z" />
    </svg>
  );
}
"#
        );
    }

    #[test]
    fn typed_with_props_leads_with_interface() {
        let options = ConversionOptions::new("Square").with_props(PropFlags {
            width: true,
            ..PropFlags::none()
        });

        let out = convert(&icon().with_attr("width", "16"), &options);

        assert!(out.starts_with("interface SquareProps {\n  width?: number | string;\n}\n\n"));
        assert!(out.contains("export function Square({ width = 24 }: SquareProps) {"));
        assert!(out.contains(r#"<svg viewBox="0 0 16 16" width={width}>"#));
    }

    #[test]
    fn typed_without_props_has_no_interface() {
        let out = convert(&icon(), &ConversionOptions::new("Square"));
        assert!(!out.contains("interface"));
    }

    #[test]
    fn empty_component_name_is_not_rejected() {
        let out = convert(&icon(), &ConversionOptions::new(""));
        assert!(out.starts_with("export function () {"));
    }
}
