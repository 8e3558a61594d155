//! Prop declarations and the attribute usages they replace.

use crate::options::{OutputFormat, PropFlags};

/// Type of a generated prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropType {
    NumberOrString,
    String,
}

impl PropType {
    /// TypeScript annotation text.
    pub fn annotation(&self) -> &'static str {
        match self {
            Self::NumberOrString => "number | string",
            Self::String => "string",
        }
    }
}

/// A single generated component parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropDescriptor {
    pub name: &'static str,
    pub ty: PropType,
    /// Default value as source text (e.g. `24`, `"currentColor"`)
    pub default: Option<&'static str>,
}

impl PropDescriptor {
    /// `name` or `name = default` for a destructuring pattern.
    fn binding(&self) -> String {
        match self.default {
            Some(default) => format!("{} = {}", self.name, default),
            None => self.name.to_string(),
        }
    }
}

/// Attribute whose value gets replaced by a prop reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropUsage {
    /// Translated attribute name (e.g. `fill`)
    pub attribute: &'static str,
    /// Replacement expression (e.g. `{color}`)
    pub reference: String,
}

/// Props requested for one conversion, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropSchema {
    pub props: Vec<PropDescriptor>,

    /// Attribute usages, one entry per attribute name
    pub usages: Vec<PropUsage>,
}

impl PropSchema {
    /// Build the schema for the given flags.
    ///
    /// Order is fixed: width, height, className, color.
    pub fn from_flags(flags: &PropFlags) -> Self {
        let mut schema = Self::default();

        if flags.width {
            schema.push(
                PropDescriptor {
                    name: "width",
                    ty: PropType::NumberOrString,
                    default: Some("24"),
                },
                &["width"],
            );
        }

        if flags.height {
            schema.push(
                PropDescriptor {
                    name: "height",
                    ty: PropType::NumberOrString,
                    default: Some("24"),
                },
                &["height"],
            );
        }

        if flags.class_name {
            schema.push(
                PropDescriptor {
                    name: "className",
                    ty: PropType::String,
                    default: None,
                },
                &["className"],
            );
        }

        if flags.color {
            schema.push(
                PropDescriptor {
                    name: "color",
                    ty: PropType::String,
                    default: Some("\"currentColor\""),
                },
                &["fill", "stroke"],
            );
        }

        schema
    }

    fn push(&mut self, prop: PropDescriptor, targets: &[&'static str]) {
        let reference = format!("{{{}}}", prop.name);
        for &target in targets {
            self.insert_usage(target, reference.clone());
        }
        self.props.push(prop);
    }

    /// Insert a usage. An existing entry for the same attribute keeps its
    /// position and takes the new reference.
    fn insert_usage(&mut self, attribute: &'static str, reference: String) {
        match self.usages.iter_mut().find(|u| u.attribute == attribute) {
            Some(existing) => existing.reference = reference,
            None => self.usages.push(PropUsage {
                attribute,
                reference,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Name of the generated props interface.
    pub fn interface_name(component_name: &str) -> String {
        format!("{component_name}Props")
    }

    /// Props interface declaration; empty unless typed with at least one prop.
    pub fn interface_text(&self, format: OutputFormat, component_name: &str) -> String {
        if self.is_empty() || !format.is_typed() {
            return String::new();
        }

        let fields: String = self
            .props
            .iter()
            .map(|p| format!("  {}?: {};\n", p.name, p.ty.annotation()))
            .collect();

        format!(
            "interface {} {{\n{}}}",
            Self::interface_name(component_name),
            fields
        )
    }

    /// Function parameter list contents; empty when no props are requested.
    pub fn params_text(&self, format: OutputFormat, component_name: &str) -> String {
        if self.is_empty() {
            return String::new();
        }

        let bindings = self
            .props
            .iter()
            .map(PropDescriptor::binding)
            .collect::<Vec<_>>()
            .join(", ");

        match format {
            OutputFormat::Typed => format!(
                "{{ {} }}: {}",
                bindings,
                Self::interface_name(component_name)
            ),
            OutputFormat::Untyped => format!("{{ {} }}", bindings),
        }
    }
}
