//! Where SVG markup comes from.

use std::fs;
use std::path::PathBuf;

use crate::error::SvgError;

/// SVG markup, either held inline or referenced by URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgSource {
    /// Markup text taken straight from a document
    Inline(String),
    /// A local path or `file://` URI
    External(String),
}

impl SvgSource {
    /// Short label for logs: the URI, or `<inline>`.
    pub fn describe(&self) -> &str {
        match self {
            Self::Inline(_) => "<inline>",
            Self::External(uri) => uri,
        }
    }

    /// Load the markup text.
    ///
    /// # Errors
    ///
    /// `SvgError::Fetch` carrying the URI when an external resource uses an
    /// unsupported scheme or cannot be read.
    pub fn resolve(&self) -> Result<String, SvgError> {
        match self {
            Self::Inline(text) => Ok(text.clone()),
            Self::External(uri) => fetch(uri),
        }
    }
}

fn fetch(uri: &str) -> Result<String, SvgError> {
    let path = local_path(uri).ok_or_else(|| SvgError::Fetch {
        uri: uri.to_string(),
        message: "unsupported URI scheme".to_string(),
    })?;

    tracing::debug!("Reading {}", path.display());

    fs::read_to_string(&path).map_err(|e| SvgError::Fetch {
        uri: uri.to_string(),
        message: e.to_string(),
    })
}

/// Map a URI onto a filesystem path, if it names one.
fn local_path(uri: &str) -> Option<PathBuf> {
    if let Some(rest) = uri.strip_prefix("file://") {
        return Some(PathBuf::from(rest));
    }

    if has_scheme(uri) {
        return None;
    }

    Some(PathBuf::from(uri))
}

/// `http:`, `data:` and friends. Single letters are drive names, not schemes.
fn has_scheme(uri: &str) -> bool {
    match uri.split_once(':') {
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}
