//! Scanning of a single named element spanning one or more lines.

use crate::markers::{self, Tag};

/// Tracks the open/close state of one element instance and accumulates its
/// text, one entry per fed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentParser {
    tag: Tag,
    open: bool,
    lines: Vec<String>,
}

impl SegmentParser {
    /// Creates a fresh, closed, empty segment for `tag`.
    pub fn new(tag: Tag) -> Self {
        SegmentParser {
            tag,
            open: false,
            lines: Vec::new(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether more lines are expected before the closing marker.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Content collected so far, markers stripped and trimmed.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    pub fn is_opening_line(&self, line: &str) -> bool {
        markers::is_opening(self.tag, line)
    }

    pub fn is_closing_line(&self, line: &str) -> bool {
        markers::is_closing(self.tag, line)
    }

    /// Records the content of `line` and returns `true` when the segment
    /// closed on it.
    ///
    /// Accepts the opening line, plain content lines, the closing line, or a
    /// line carrying both markers. Callers must not feed a closed segment a
    /// line that does not open it.
    pub fn feed_line(&mut self, line: &str) -> bool {
        self.lines.push(markers::content(self.tag, line).to_string());
        self.open = !self.is_closing_line(line);
        !self.open
    }
}
