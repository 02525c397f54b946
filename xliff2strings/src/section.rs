//! Parsing of `<file>` sections and writing them as `.strings` files.

use std::{
    io::Write,
    path::{Component, Path, PathBuf},
};

use log::debug;

use crate::{
    error::Error,
    markers::{self, FileHeader, Tag},
    strings::{STRINGS_EXTENSION, block_comment},
    traits::Render,
    unit::{TranslationUnit, UnitParser},
};

/// State machine for one `<file>` section. Holds at most one unit being
/// parsed and the units already completed, in document order.
#[derive(Debug, Clone)]
pub struct SectionParser {
    header: FileHeader,
    opened_at: usize,
    open: bool,
    current: Option<UnitParser>,
    units: Vec<TranslationUnit>,
}

impl SectionParser {
    pub fn is_opening_line(line: &str) -> bool {
        markers::is_opening(Tag::File, line)
    }

    /// Opens a section from its `<file ...>` line.
    pub fn open(line: &str, line_no: usize) -> Result<Self, Error> {
        let header =
            markers::file_header(line).ok_or_else(|| Error::missing_attribute(Tag::File, line_no))?;
        debug!(
            "line {}: open file `{}` ({} -> {})",
            line_no, header.original, header.source_language, header.target_language
        );

        Ok(SectionParser {
            header,
            opened_at: line_no,
            open: true,
            current: None,
            units: Vec::new(),
        })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    pub fn opened_at(&self) -> usize {
        self.opened_at
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Units completed so far.
    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    /// The unit currently receiving lines, if any.
    pub fn current_unit(&self) -> Option<&UnitParser> {
        self.current.as_ref()
    }

    /// Feeds one line following the opening line. Returns `Ok(true)` once the
    /// section's closing marker has been seen.
    ///
    /// Closing the section while a unit is still open is a truncation error.
    pub fn feed_line(&mut self, line: &str, line_no: usize) -> Result<bool, Error> {
        if markers::is_closing(Tag::File, line) {
            if let Some(unit) = &self.current {
                return Err(Error::truncated(Tag::TransUnit, unit.opened_at()));
            }
            debug!(
                "line {}: close file `{}` with {} units",
                line_no,
                self.header.original,
                self.units.len()
            );
            self.open = false;
            return Ok(true);
        }

        if let Some(unit) = self.current.as_mut() {
            if unit.feed_line(line) {
                if let Some(unit) = self.current.take() {
                    self.units.push(unit.finish());
                }
            }
        } else if UnitParser::is_opening_line(line) {
            self.current = Some(UnitParser::open(line, line_no)?);
        }
        Ok(false)
    }

    /// Consumes the parser into the finished section.
    pub fn finish(self) -> Section {
        let FileHeader {
            original,
            source_language,
            target_language,
        } = self.header;
        Section {
            original,
            source_language,
            target_language,
            units: self.units,
        }
    }
}

/// One completed `<file>` block and its translation units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Path of the localizable source file, as written in the document.
    pub original: String,
    pub source_language: String,
    pub target_language: String,
    pub units: Vec<TranslationUnit>,
}

impl Section {
    /// The output path relative to the output base.
    ///
    /// The `<source>.lproj` and `Base.lproj` folders are replaced by the
    /// target language folder, and the file name loses everything from its
    /// first `.` before the `.strings` extension is appended.
    pub fn relative_path(&self) -> String {
        let target_folder = format!("{}.lproj", self.target_language);
        let localized = self
            .original
            .replace(&format!("{}.lproj", self.source_language), &target_folder)
            .replace("Base.lproj", &target_folder);

        let (dir, name) = match localized.rsplit_once('/') {
            Some((dir, name)) => (Some(dir), name),
            None => (None, localized.as_str()),
        };
        let stem = name.split('.').next().unwrap_or(name);

        match dir {
            Some(dir) => format!("{}/{}.{}", dir, stem, STRINGS_EXTENSION),
            None => format!("{}.{}", stem, STRINGS_EXTENSION),
        }
    }

    /// The last segment of [`Section::relative_path`].
    pub fn file_name(&self) -> String {
        let path = self.relative_path();
        match path.rsplit_once('/') {
            Some((_, name)) => name.to_string(),
            None => path,
        }
    }

    /// Resolves [`Section::relative_path`] under `base`.
    ///
    /// Only plain components are kept: root, `.` and `..` are dropped, so
    /// the result always lies inside `base`.
    pub fn output_path(&self, base: impl AsRef<Path>) -> PathBuf {
        let relative = self.relative_path();
        let inside = Path::new(&relative)
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part),
                _ => None,
            });

        let mut path = base.as_ref().to_path_buf();
        path.extend(inside);
        path
    }

    /// The `/* original -> target */` line opening the output file.
    pub fn header_comment(&self) -> String {
        block_comment(&format!("{} -> {}", self.original, self.target_language))
    }
}

impl Render for Section {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writeln!(writer, "{}", self.header_comment())?;
        for unit in &self.units {
            unit.to_writer(&mut writer)?;
            writeln!(writer)?;
        }
        writer.flush()?;
        Ok(())
    }
}
