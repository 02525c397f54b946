//! Output side of the Apple `.strings` format.
//!
//! Only what the converter writes is modelled here: a header comment and
//! commented `"key" = "value";` pairs.

use std::fmt::{Display, Formatter};

/// Extension appended to every derived output file name.
pub const STRINGS_EXTENSION: &str = "strings";

/// Wraps text in a block comment, `/* text */`.
///
/// The text is inserted verbatim, so multi-line notes produce a multi-line
/// comment.
pub fn block_comment(text: &str) -> String {
    format!("/* {} */", text)
}

/// Escapes every literal `"` as `\"`.
pub fn escape_quotes(value: &str) -> String {
    value.replace('"', "\\\"")
}

/// A single key-value pair in a `.strings` file, with its leading comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The key for this localization entry, written as-is.
    pub key: String,
    /// The value, already escaped for the `.strings` syntax.
    pub value: String,
    /// Comment line preceding the pair, including the comment markers.
    pub comment: Option<String>,
}

impl Pair {
    /// Builds a pair from raw text: the value is quote-escaped and the note,
    /// if any, becomes a block comment.
    pub fn new(key: impl Into<String>, raw_value: &str, note: Option<&str>) -> Self {
        Pair {
            key: key.into(),
            value: escape_quotes(raw_value),
            comment: note.map(block_comment),
        }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(comment) = &self.comment {
            writeln!(f, "{}", comment)?;
        }
        write!(f, "\"{}\" = \"{}\";", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display_with_comment() {
        let pair = Pair::new("hello", "Hello, world!", Some("Greeting for the user"));
        assert_eq!(
            pair.to_string(),
            "/* Greeting for the user */\n\"hello\" = \"Hello, world!\";"
        );
    }

    #[test]
    fn test_pair_display_without_comment() {
        let pair = Pair::new("bye", "Goodbye!", None);
        assert_eq!(pair.to_string(), "\"bye\" = \"Goodbye!\";");
    }

    #[test]
    fn test_value_quotes_are_escaped() {
        let pair = Pair::new("quote", r#"Say "hi""#, None);
        assert_eq!(pair.value, r#"Say \"hi\""#);
        assert_eq!(pair.to_string(), r#""quote" = "Say \"hi\"";"#);
    }

    #[test]
    fn test_empty_comment_keeps_markers() {
        assert_eq!(block_comment(""), "/*  */");
    }

    #[test]
    fn test_multiline_comment() {
        assert_eq!(
            block_comment("Account: advanced settings\nSettings view title"),
            "/* Account: advanced settings\nSettings view title */"
        );
    }
}
