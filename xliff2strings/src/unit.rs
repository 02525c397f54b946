//! Parsing of `<trans-unit>` elements into [`TranslationUnit`] records.

use std::io::Write;

use log::debug;

use crate::{
    error::Error,
    markers::{self, Tag},
    segment::SegmentParser,
    strings::Pair,
    traits::Render,
};

/// Which child segment of a unit should receive the next line.
///
/// Children are read in the fixed order source, target, note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Source,
    Target,
    Note,
    /// All children read; waiting for `</trans-unit>`.
    Done,
}

impl Expected {
    /// The state following this one once its segment has closed.
    pub fn next(self) -> Self {
        match self {
            Expected::Source => Expected::Target,
            Expected::Target => Expected::Note,
            Expected::Note | Expected::Done => Expected::Done,
        }
    }

    /// The element read in this state, if any.
    pub fn tag(self) -> Option<Tag> {
        match self {
            Expected::Source => Some(Tag::Source),
            Expected::Target => Some(Tag::Target),
            Expected::Note => Some(Tag::Note),
            Expected::Done => None,
        }
    }
}

/// State machine for one `<trans-unit>`, from its opening line to its
/// closing marker.
#[derive(Debug, Clone)]
pub struct UnitParser {
    id: String,
    opened_at: usize,
    open: bool,
    expected: Expected,
    source: SegmentParser,
    target: SegmentParser,
    note: SegmentParser,
}

impl UnitParser {
    pub fn is_opening_line(line: &str) -> bool {
        markers::is_opening(Tag::TransUnit, line)
    }

    /// Opens a unit from its `<trans-unit id="...">` line.
    ///
    /// `line_no` is only used for error reporting.
    pub fn open(line: &str, line_no: usize) -> Result<Self, Error> {
        let id = markers::unit_id(line)
            .ok_or_else(|| Error::missing_attribute(Tag::TransUnit, line_no))?;
        debug!("line {}: open trans-unit `{}`", line_no, id);

        Ok(UnitParser {
            id: id.to_string(),
            opened_at: line_no,
            open: true,
            expected: Expected::Source,
            source: SegmentParser::new(Tag::Source),
            target: SegmentParser::new(Tag::Target),
            note: SegmentParser::new(Tag::Note),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Line number of the opening marker.
    pub fn opened_at(&self) -> usize {
        self.opened_at
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn expected(&self) -> Expected {
        self.expected
    }

    pub fn source(&self) -> &SegmentParser {
        &self.source
    }

    pub fn target(&self) -> &SegmentParser {
        &self.target
    }

    pub fn note(&self) -> &SegmentParser {
        &self.note
    }

    fn segment(&self, state: Expected) -> Option<&SegmentParser> {
        match state {
            Expected::Source => Some(&self.source),
            Expected::Target => Some(&self.target),
            Expected::Note => Some(&self.note),
            Expected::Done => None,
        }
    }

    fn segment_mut(&mut self, state: Expected) -> Option<&mut SegmentParser> {
        match state {
            Expected::Source => Some(&mut self.source),
            Expected::Target => Some(&mut self.target),
            Expected::Note => Some(&mut self.note),
            Expected::Done => None,
        }
    }

    /// Feeds one line following the opening line. Returns `true` once the
    /// unit's closing marker has been seen.
    ///
    /// When no child is open, a line opening the expected child or any later
    /// one starts that child; skipped children stay empty. `</trans-unit>`
    /// closes the unit from any state in which no child is open. Other lines
    /// are ignored.
    pub fn feed_line(&mut self, line: &str) -> bool {
        if let Some(segment) = self.segment_mut(self.expected) {
            if segment.is_open() {
                if segment.feed_line(line) {
                    self.expected = self.expected.next();
                }
                return false;
            }
        }

        let mut state = self.expected;
        while state != Expected::Done {
            if self.segment(state).is_some_and(|s| s.is_opening_line(line)) {
                if state != self.expected {
                    debug!(
                        "trans-unit `{}`: no <{}> before <{}>",
                        self.id,
                        self.expected.tag().map_or("", Tag::name),
                        state.tag().map_or("", Tag::name),
                    );
                }
                self.expected = state;
                if self.segment_mut(state).is_some_and(|s| s.feed_line(line)) {
                    self.expected = state.next();
                }
                return false;
            }
            state = state.next();
        }

        if markers::is_closing(Tag::TransUnit, line) {
            debug!("close trans-unit `{}`", self.id);
            self.open = false;
            return true;
        }
        if !line.trim().is_empty() {
            debug!("trans-unit `{}`: ignoring `{}`", self.id, line.trim());
        }
        false
    }

    /// Consumes the parser, keeping what it collected.
    pub fn finish(self) -> TranslationUnit {
        TranslationUnit {
            id: self.id,
            source: self.source.into_lines(),
            target: self.target.into_lines(),
            note: self.note.into_lines(),
        }
    }
}

/// One completed source/target/note triple keyed by its identifier.
///
/// A child element missing from the input is an empty line list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationUnit {
    pub id: String,
    pub source: Vec<String>,
    pub target: Vec<String>,
    pub note: Vec<String>,
}

impl TranslationUnit {
    /// The translated text, lines joined by `\n`.
    pub fn value(&self) -> String {
        self.target.join("\n")
    }

    /// The translator note, lines joined by `\n`.
    pub fn comment(&self) -> String {
        self.note.join("\n")
    }

    pub fn to_pair(&self) -> Pair {
        Pair::new(self.id.clone(), &self.value(), Some(self.comment().as_str()))
    }
}

impl Render for TranslationUnit {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writeln!(writer, "{}", self.to_pair())?;
        Ok(())
    }
}
