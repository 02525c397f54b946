#![forbid(unsafe_code)]
//! Streaming converter from XLIFF 1.2 documents to Apple `.strings` files.
//!
//! The input is scanned line by line with a narrow marker grammar tuned to
//! `<file>`, `<trans-unit>`, `<source>`, `<target>` and `<note>` elements
//! appearing one per line. Each `<file>` section becomes one `.strings`
//! resource table, written next to its siblings under an output directory.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use xliff2strings::{ConvertOptions, convert_file};
//!
//! let options = ConvertOptions::new().with_output_base("Resources");
//! let report = convert_file("fr.xliff", &options)?;
//! for section in &report.sections {
//!     println!("{} -> {}", section.original, section.output.display());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Output
//!
//! ```text
//! /* App/en.lproj/Localizable.strings -> fr */
//! /* Greeting */
//! "hello" = "Bonjour";
//!
//! ```
//!
//! This is not an XML parser: attributes are matched by fixed patterns, and
//! entities are copied verbatim.

pub mod document;
pub mod error;
pub mod markers;
pub mod options;
pub mod section;
pub mod segment;
pub mod strings;
pub mod traits;
pub mod unit;

// Re-export most used types for easy consumption
pub use crate::{
    document::{
        ConversionReport, DocumentDriver, SectionSummary, convert_file, for_each_section,
        parse_reader, parse_str,
    },
    error::Error,
    markers::Tag,
    options::ConvertOptions,
    section::{Section, SectionParser},
    segment::SegmentParser,
    unit::{Expected, TranslationUnit, UnitParser},
};
