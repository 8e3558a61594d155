//! Conversion options supplied by the caller on every call.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Output dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// TypeScript with a props interface (`.tsx`)
    #[default]
    #[serde(alias = "tsx")]
    Typed,
    /// Plain JavaScript (`.jsx`)
    #[serde(alias = "jsx")]
    Untyped,
}

impl OutputFormat {
    /// File extension for a generated component.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Typed => "tsx",
            Self::Untyped => "jsx",
        }
    }

    /// File extension for a module that only re-exports components.
    pub fn index_extension(&self) -> &'static str {
        match self {
            Self::Typed => "ts",
            Self::Untyped => "js",
        }
    }

    pub fn is_typed(&self) -> bool {
        matches!(self, Self::Typed)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Typed => f.write_str("typed"),
            Self::Untyped => f.write_str("untyped"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "typed" | "tsx" | "ts" | "typescript" => Ok(Self::Typed),
            "untyped" | "jsx" | "js" | "javascript" => Ok(Self::Untyped),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }
}

/// Which props the generated component should expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropFlags {
    pub width: bool,
    pub height: bool,
    #[serde(alias = "className")]
    pub class_name: bool,
    pub color: bool,
}

impl PropFlags {
    pub fn all() -> Self {
        Self {
            width: true,
            height: true,
            class_name: true,
            color: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    /// Whether at least one prop is requested.
    pub fn any(&self) -> bool {
        self.width || self.height || self.class_name || self.color
    }
}

impl FromStr for PropFlags {
    type Err = ConvertError;

    /// Parse a comma separated list such as `width,height,className`.
    ///
    /// `all` and `none` are accepted as shorthands.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut flags = Self::none();

        for part in s.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            match part {
                "all" => flags = Self::all(),
                "none" => flags = Self::none(),
                "width" => flags.width = true,
                "height" => flags.height = true,
                "className" | "class_name" | "class" => flags.class_name = true,
                "color" => flags.color = true,
                other => return Err(ConvertError::UnknownProp(other.to_string())),
            }
        }

        Ok(flags)
    }
}

/// Everything the converter needs besides the element tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionOptions {
    #[serde(default)]
    pub format: OutputFormat,

    /// Name of the exported function
    pub component_name: String,

    #[serde(default)]
    pub add_props: PropFlags,
}

impl ConversionOptions {
    pub fn new(component_name: impl Into<String>) -> Self {
        Self {
            format: OutputFormat::default(),
            component_name: component_name.into(),
            add_props: PropFlags::none(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_props(mut self, add_props: PropFlags) -> Self {
        self.add_props = add_props;
        self
    }

    /// Check that the component name is a usable identifier.
    ///
    /// [`crate::convert`] does not call this; an empty or odd name simply
    /// produces odd output there. Callers that own user input call it first.
    pub fn validate(&self) -> Result<(), ConvertError> {
        if IDENTIFIER_RE.is_match(&self.component_name) {
            Ok(())
        } else {
            Err(ConvertError::InvalidComponentName(
                self.component_name.clone(),
            ))
        }
    }
}

static IDENTIFIER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex")
});

/// Derive a PascalCase component name from a file stem or free text.
///
/// `arrow-left` becomes `ArrowLeft`, `2fa` becomes `Svg2fa`, and text with
/// no usable characters becomes `SvgComponent`.
pub fn to_component_name(s: &str) -> String {
    let name: String = s
        .split(|c: char| !c.is_ascii_alphanumeric())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();

    match name.chars().next() {
        None => "SvgComponent".to_string(),
        Some(c) if c.is_ascii_digit() => format!("Svg{name}"),
        Some(_) => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_output_format() {
        assert_eq!("typed".parse::<OutputFormat>().unwrap(), OutputFormat::Typed);
        assert_eq!("TSX".parse::<OutputFormat>().unwrap(), OutputFormat::Typed);
        assert_eq!("jsx".parse::<OutputFormat>().unwrap(), OutputFormat::Untyped);
        assert!(matches!(
            "vue".parse::<OutputFormat>(),
            Err(ConvertError::UnknownFormat(_))
        ));
    }

    #[test]
    fn parses_prop_list() {
        let flags: PropFlags = "width, color".parse().unwrap();
        assert!(flags.width);
        assert!(flags.color);
        assert!(!flags.height);
        assert!(!flags.class_name);

        assert_eq!("all".parse::<PropFlags>().unwrap(), PropFlags::all());
        assert_eq!("".parse::<PropFlags>().unwrap(), PropFlags::none());
        assert!(matches!(
            "width,size".parse::<PropFlags>(),
            Err(ConvertError::UnknownProp(p)) if p == "size"
        ));
    }

    #[test]
    fn validates_component_name() {
        assert!(ConversionOptions::new("MyIcon").validate().is_ok());
        assert!(ConversionOptions::new("_icon$2").validate().is_ok());
        assert!(ConversionOptions::new("").validate().is_err());
        assert!(ConversionOptions::new("2Icon").validate().is_err());
        assert!(ConversionOptions::new("my-icon").validate().is_err());
    }

    #[test]
    fn derives_component_names() {
        assert_eq!(to_component_name("arrow-left"), "ArrowLeft");
        assert_eq!(to_component_name("chevron_down.small"), "ChevronDownSmall");
        assert_eq!(to_component_name("Home"), "Home");
        assert_eq!(to_component_name("2fa"), "Svg2fa");
        assert_eq!(to_component_name("--"), "SvgComponent");
    }

    #[test]
    fn deserializes_options_from_json() {
        let options: ConversionOptions = serde_json::from_str(
            r#"{"format":"untyped","componentName":"Logo","addProps":{"className":true}}"#,
        )
        .unwrap();

        assert_eq!(options.format, OutputFormat::Untyped);
        assert_eq!(options.component_name, "Logo");
        assert!(options.add_props.class_name);
        assert!(!options.add_props.width);
    }
}
