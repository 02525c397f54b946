//! All error types for the xliff2strings crate.
//!
//! Every failure is fatal to the run: parsing stops at the first error and no
//! output is written for the section being parsed.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::markers::Tag;

#[derive(Error, Debug)]
pub enum Error {
    /// An opening marker lacks a required attribute or does not have the
    /// expected shape at all.
    #[error("line {line}: malformed <{tag}> opening marker (missing required attribute)")]
    MissingAttribute { tag: Tag, line: usize },

    /// Input ended, or an enclosing section closed, while `tag` was still open.
    #[error("document truncated: <{tag}> opened at line {opened_at} was never closed")]
    TruncatedDocument { tag: Tag, opened_at: usize },

    #[error("cannot read input `{}`: {source}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write output `{}`: {source}", path.display())]
    UnwritableOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Creates a new missing-attribute error for `tag` at a 1-based line number.
    pub fn missing_attribute(tag: Tag, line: usize) -> Self {
        Error::MissingAttribute { tag, line }
    }

    /// Creates a new truncation error for an element opened at `opened_at`.
    pub fn truncated(tag: Tag, opened_at: usize) -> Self {
        Error::TruncatedDocument { tag, opened_at }
    }

    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::UnreadableInput {
            path: path.into(),
            source,
        }
    }

    pub fn unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::UnwritableOutput {
            path: path.into(),
            source,
        }
    }
}
