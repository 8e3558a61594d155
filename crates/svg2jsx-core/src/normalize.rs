//! Trailing whitespace cleanup for generated source.

/// Trim trailing whitespace on every line and end the text with exactly one
/// newline. Applying it twice gives the same result as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().map(str::trim_end).collect();

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_lines_and_trailing_blank_lines() {
        assert_eq!(
            normalize_whitespace("a  \n  b\t\n\n\n"),
            "a\n  b\n"
        );
    }

    #[test]
    fn adds_missing_final_newline() {
        assert_eq!(normalize_whitespace("x"), "x\n");
        assert_eq!(normalize_whitespace(""), "\n");
    }

    #[test]
    fn handles_crlf() {
        assert_eq!(normalize_whitespace("a \r\nb\r\n"), "a\nb\n");
    }

    #[test]
    fn is_idempotent() {
        let inputs = ["", "\n\n", "a \n b \n", "x\r\n\r\n  ", "  lead\n\ttab\t"];
        for input in inputs {
            let once = normalize_whitespace(input);
            assert_eq!(normalize_whitespace(&once), once, "{input:?}");
        }
    }
}
