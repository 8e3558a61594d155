//! Rewrites serialized attribute values into prop references.
//!
//! This works on the rendered text, not on the tree: every `name="…"` in the
//! body is replaced, whichever element it belongs to. Nested elements that
//! share an attribute (several `fill`s, say) are all parameterized the same
//! way, and none of them can opt out.

use regex::{Captures, Regex};

use crate::props::PropUsage;

/// Replace `attr="…"` with `attr={prop}` for every usage, across the whole body.
///
/// A match needs the attribute name to start the text or follow whitespace,
/// so `data-width="…"` is left alone when `width` is mapped.
pub fn apply_prop_usages(body: &str, usages: &[PropUsage]) -> String {
    let mut out = body.to_string();

    for usage in usages {
        let pattern = attribute_pattern(usage.attribute);
        out = pattern
            .replace_all(&out, |caps: &Captures| {
                format!("{}{}={}", &caps[1], usage.attribute, usage.reference)
            })
            .into_owned();
    }

    out
}

fn attribute_pattern(attribute: &str) -> Regex {
    Regex::new(&format!(r#"(^|\s){}="[^"]*""#, regex::escape(attribute)))
        .expect("Invalid attribute pattern regex")
}
