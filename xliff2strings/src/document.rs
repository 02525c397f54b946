//! Line-by-line driving of a whole XLIFF document.
//!
//! [`DocumentDriver`] owns at most one open [`SectionParser`]. When a section
//! closes, the finished [`Section`] is moved out to the caller before the slot
//! is reused, so sections can be written while the rest of the input is still
//! being read.

use std::{
    fs::{self, File},
    io::{BufRead, BufReader, Cursor},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use crate::{
    error::Error,
    markers::Tag,
    options::ConvertOptions,
    section::{Section, SectionParser},
    traits::Render,
    unit::UnitParser,
};

/// Feeds lines to the currently open section, opening a new one whenever a
/// `<file>` marker appears while none is open.
#[derive(Debug, Default)]
pub struct DocumentDriver {
    current: Option<SectionParser>,
    line_no: usize,
}

impl DocumentDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines fed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn current_section(&self) -> Option<&SectionParser> {
        self.current.as_ref()
    }

    /// Feeds the next line, returning the section it closed, if any.
    pub fn feed_line(&mut self, line: &str) -> Result<Option<Section>, Error> {
        self.line_no += 1;
        let line_no = self.line_no;

        match self.current.as_mut() {
            Some(section) => {
                if section.feed_line(line, line_no)? {
                    Ok(self.current.take().map(SectionParser::finish))
                } else {
                    Ok(None)
                }
            }
            None => {
                if SectionParser::is_opening_line(line) {
                    self.current = Some(SectionParser::open(line, line_no)?);
                } else if UnitParser::is_opening_line(line) {
                    warn!("line {}: ignoring <trans-unit> outside any <file>", line_no);
                }
                Ok(None)
            }
        }
    }

    /// Ends the input. Fails if a section, or a unit inside it, is still
    /// open.
    pub fn finish(self) -> Result<(), Error> {
        let Some(section) = self.current else {
            return Ok(());
        };
        match section.current_unit() {
            Some(unit) => Err(Error::truncated(Tag::TransUnit, unit.opened_at())),
            None => Err(Error::truncated(Tag::File, section.opened_at())),
        }
    }
}

/// Reads `reader` to the end, handing each section to `on_section` as soon
/// as it closes. Returns the number of sections seen.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn for_each_section<R, F>(reader: R, mut on_section: F) -> Result<usize, Error>
where
    R: BufRead,
    F: FnMut(Section) -> Result<(), Error>,
{
    let mut driver = DocumentDriver::new();
    let mut count = 0;

    for line in reader.lines() {
        let line = line?;
        for part in line.split('\r') {
            if let Some(section) = driver.feed_line(part)? {
                count += 1;
                on_section(section)?;
            }
        }
    }

    debug!("read {} lines, {} sections", driver.line_no(), count);
    driver.finish()?;
    Ok(count)
}

/// Parses every section of a document held in any reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Section>, Error> {
    let mut sections = Vec::new();
    for_each_section(reader, |section| {
        sections.push(section);
        Ok(())
    })?;
    Ok(sections)
}

/// Parses every section of a document held in a string.
pub fn parse_str(s: &str) -> Result<Vec<Section>, Error> {
    parse_reader(Cursor::new(s))
}

/// What [`convert_file`] did with one section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub original: String,
    pub target_language: String,
    /// Where the section was (or, in a dry run, would have been) written.
    pub output: PathBuf,
    pub units: usize,
}

/// The outcome of a whole [`convert_file`] run, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub sections: Vec<SectionSummary>,
}

impl ConversionReport {
    pub fn total_units(&self) -> usize {
        self.sections.iter().map(|s| s.units).sum()
    }
}

/// Opens `path`, decoding UTF-16 input with a BOM to UTF-8; UTF-8 passes
/// through.
fn open_input(path: &Path) -> Result<impl BufRead, Error> {
    let file = File::open(path).map_err(|e| Error::unreadable(path, e))?;
    let decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .bom_override(true)
        .build(file);
    Ok(BufReader::new(decoder))
}

fn write_section(section: &Section, output: &Path, options: &ConvertOptions) -> Result<(), Error> {
    if options.dry_run {
        info!("dry run: skipping {}", output.display());
        return Ok(());
    }

    if options.create_dirs {
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| Error::unwritable(parent, e))?;
        }
    }
    section.write_to(output)?;
    info!(
        "wrote {} ({} units) to {}",
        section.original,
        section.units.len(),
        output.display()
    );
    Ok(())
}

/// Converts the XLIFF document at `input`, writing one `.strings` file per
/// section under `options.output_base`.
///
/// Sections are written as they complete, so an error later in the document
/// leaves the earlier sections' files in place.
pub fn convert_file(
    input: impl AsRef<Path>,
    options: &ConvertOptions,
) -> Result<ConversionReport, Error> {
    let input = input.as_ref();
    let reader = open_input(input)?;
    let mut report = ConversionReport::default();

    let result = for_each_section(reader, |section| {
        let output = section.output_path(&options.output_base);
        write_section(&section, &output, options)?;
        report.sections.push(SectionSummary {
            output,
            units: section.units.len(),
            original: section.original,
            target_language: section.target_language,
        });
        Ok(())
    });

    match result {
        Ok(0) => warn!("no <file> sections found in {}", input.display()),
        Ok(_) => {}
        Err(Error::Io(e)) => return Err(Error::unreadable(input, e)),
        Err(e) => return Err(e),
    }
    Ok(report)
}
