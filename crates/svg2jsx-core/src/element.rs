//! Markup element tree consumed by the converter.

/// A single `name="value"` pair on an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node in a parsed SVG tree.
///
/// Attributes keep the order they had in the source document. The converter
/// only ever borrows an element and never changes it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Tag name as it appeared in the source (e.g. "svg", "linearGradient")
    pub tag: String,

    /// Attributes in source order
    pub attributes: Vec<Attribute>,

    /// Child elements in source order
    pub children: Vec<Element>,

    /// Direct text content, if any
    pub text: Option<String>,
}

impl Element {
    /// Create an element with no attributes, children or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Append an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    /// Append a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Look up the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Trimmed text content, or `None` when absent or blank.
    pub fn meaningful_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
