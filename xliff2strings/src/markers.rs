//! The marker grammar recognised by the scanner.
//!
//! This is deliberately not XML. A marker is an opening `<tag ...>` or a
//! closing `</tag>` for one of the fixed [`Tag`]s, matched by line-level
//! regular expressions. Every composite parser goes through this module, so
//! the matching strategy can change without touching them.

use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;

/// The closed set of element names the scanner understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    File,
    TransUnit,
    Source,
    Target,
    Note,
}

impl Tag {
    pub const ALL: [Tag; 5] = [Tag::File, Tag::TransUnit, Tag::Source, Tag::Target, Tag::Note];

    /// The element name as it appears between angle brackets.
    pub fn name(self) -> &'static str {
        match self {
            Tag::File => "file",
            Tag::TransUnit => "trans-unit",
            Tag::Source => "source",
            Tag::Target => "target",
            Tag::Note => "note",
        }
    }

    fn patterns(self) -> &'static TagPatterns {
        match self {
            Tag::File => &*FILE_PATTERNS,
            Tag::TransUnit => &*TRANS_UNIT_PATTERNS,
            Tag::Source => &*SOURCE_PATTERNS,
            Tag::Target => &*TARGET_PATTERNS,
            Tag::Note => &*NOTE_PATTERNS,
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

struct TagPatterns {
    opening: Regex,
    closing: String,
    content: Regex,
}

impl TagPatterns {
    fn new(name: &str) -> Self {
        let tag = regex::escape(name);
        // The opening marker is the tag name followed by whitespace-separated
        // attributes or directly by `>`, so `<target>` never matches `<targets>`.
        let opening_marker = format!(r"<{tag}(?:\s[^>]*)?>");
        TagPatterns {
            opening: Regex::new(&format!(r"^\s*{opening_marker}")).unwrap(),
            closing: format!("</{name}>"),
            content: Regex::new(&format!(r"^\s*(?:{opening_marker})?(.*?)(?:</{tag}>.*)?$")).unwrap(),
        }
    }
}

lazy_static! {
    static ref FILE_PATTERNS: TagPatterns = TagPatterns::new(Tag::File.name());
    static ref TRANS_UNIT_PATTERNS: TagPatterns = TagPatterns::new(Tag::TransUnit.name());
    static ref SOURCE_PATTERNS: TagPatterns = TagPatterns::new(Tag::Source.name());
    static ref TARGET_PATTERNS: TagPatterns = TagPatterns::new(Tag::Target.name());
    static ref NOTE_PATTERNS: TagPatterns = TagPatterns::new(Tag::Note.name());

    static ref UNIT_ID_REGEX: Regex =
        Regex::new(r#"<trans-unit\s(?:[^>]*\s)?id="([^"]+)""#).unwrap();

    // `datatype` must be present but its value is never inspected.
    static ref FILE_HEADER_REGEX: Regex = Regex::new(
        r#"^\s*<file original="(.*?)" datatype.* source-language="(.*?)" target-language="(.*?)">\s*$"#
    )
    .unwrap();
}

/// Returns `true` if the line, after leading whitespace, starts with an
/// opening marker for `tag`.
pub fn is_opening(tag: Tag, line: &str) -> bool {
    tag.patterns().opening.is_match(line)
}

/// Returns `true` if the line contains a closing marker for `tag` anywhere.
pub fn is_closing(tag: Tag, line: &str) -> bool {
    line.contains(&tag.patterns().closing)
}

/// Returns the text between an optional leading opening marker and an
/// optional closing marker, trimmed at both ends.
///
/// Anything after the first closing marker is dropped.
pub fn content(tag: Tag, line: &str) -> &str {
    tag.patterns()
        .content
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(line, |m| m.as_str())
        .trim()
}

/// Extracts the `id` attribute of a `<trans-unit>` opening marker.
///
/// Returns `None` when the attribute is absent or empty.
pub fn unit_id(line: &str) -> Option<&str> {
    UNIT_ID_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The attributes of a `<file>` opening marker that the converter relies on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    /// Path of the localizable source file inside the exporting project.
    pub original: String,
    pub source_language: String,
    pub target_language: String,
}

/// Matches a `<file>` opening marker of the shape
/// `<file original="P" datatype=... source-language="S" target-language="T">`.
///
/// Attributes must appear in that order; any other shape yields `None`.
pub fn file_header(line: &str) -> Option<FileHeader> {
    let caps = FILE_HEADER_REGEX.captures(line)?;
    Some(FileHeader {
        original: caps[1].to_string(),
        source_language: caps[2].to_string(),
        target_language: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_names() {
        let names: Vec<_> = Tag::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, ["file", "trans-unit", "source", "target", "note"]);
    }

    #[test]
    fn test_opening_marker_with_and_without_attributes() {
        assert!(is_opening(Tag::Source, "\t<source>Label</source>"));
        assert!(is_opening(Tag::Source, "<source xml:lang=\"en\">Label"));
        assert!(is_opening(Tag::TransUnit, "  <trans-unit id=\"a\">"));
        assert!(!is_opening(Tag::Source, "Label</source>"));
        assert!(!is_opening(Tag::Target, "<targets>"));
        assert!(!is_opening(Tag::Source, "</source>"));
    }

    #[test]
    fn test_closing_marker_anywhere_in_line() {
        assert!(is_closing(Tag::Source, "\t<source>Label</source>"));
        assert!(is_closing(Tag::Note, "trailing</note>   "));
        assert!(is_closing(Tag::TransUnit, "</trans-unit>"));
        assert!(!is_closing(Tag::Source, "<source>Label"));
        assert!(!is_closing(Tag::Target, "</source>"));
    }

    #[test]
    fn test_content_extraction() {
        assert_eq!(content(Tag::Source, "\t<source>Label</source>"), "Label");
        assert_eq!(content(Tag::Source, "\t<source>Label"), "Label");
        assert_eq!(content(Tag::Source, "Hello</source>"), "Hello");
        assert_eq!(content(Tag::Note, "   just text   "), "just text");
        assert_eq!(content(Tag::Target, "<target>  padded  </target>"), "padded");
        assert_eq!(content(Tag::Target, "<target></target>"), "");
        assert_eq!(
            content(Tag::Source, "<source xml:lang=\"en\">Hi</source>"),
            "Hi"
        );
    }

    #[test]
    fn test_content_stops_at_first_closing_marker() {
        assert_eq!(content(Tag::Target, "<target>A</target> tail"), "A");
    }

    #[test]
    fn test_unit_id() {
        assert_eq!(unit_id("\t<trans-unit id=\"MyUnit\">"), Some("MyUnit"));
        assert_eq!(
            unit_id("<trans-unit resname=\"x\" id=\"Advanced settings\" xml:space=\"preserve\">"),
            Some("Advanced settings")
        );
        assert_eq!(unit_id("<trans-unit id=\"--\">"), Some("--"));
        assert_eq!(unit_id("<trans-unit>"), None);
        assert_eq!(unit_id("<trans-unit id=\"\">"), None);
        assert_eq!(unit_id("<trans-unit xid=\"a\">"), None);
    }

    #[test]
    fn test_file_header() {
        let line = r#"<file original="MyProject/en.lproj/Localizable.strings" datatype="plaintext" xml:space="preserve" source-language="en" target-language="fr">"#;
        let header = file_header(line).unwrap();
        assert_eq!(header.original, "MyProject/en.lproj/Localizable.strings");
        assert_eq!(header.source_language, "en");
        assert_eq!(header.target_language, "fr");
    }

    #[test]
    fn test_file_header_datatype_is_opaque() {
        let line = r#"  <file original="a.strings" datatype="anything at all" source-language="en" target-language="de">  "#;
        assert_eq!(file_header(line).unwrap().target_language, "de");
    }

    #[test]
    fn test_file_header_rejects_other_shapes() {
        // no datatype
        assert!(file_header(r#"<file original="a" source-language="en" target-language="de">"#).is_none());
        // no target language
        assert!(file_header(r#"<file original="a" datatype="plaintext" source-language="en">"#).is_none());
        // different attribute order
        assert!(
            file_header(r#"<file source-language="en" original="a" datatype="plaintext" target-language="de">"#)
                .is_none()
        );
    }
}
