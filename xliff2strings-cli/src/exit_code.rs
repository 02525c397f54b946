//! Process exit codes, one per failure class.

use xliff2strings::{Error, Tag};

pub const SUCCESS: i32 = 0;
/// Any failure without a more specific code.
pub const FAILURE: i32 = 1;
/// Invalid command line. Reported by clap itself, never by [`exit_code_for`].
pub const USAGE: i32 = 2;
pub const INPUT_UNREADABLE: i32 = 3;
pub const MALFORMED_SECTION_HEADER: i32 = 4;
pub const MALFORMED_UNIT_HEADER: i32 = 5;
pub const TRUNCATED_DOCUMENT: i32 = 6;
pub const OUTPUT_UNWRITABLE: i32 = 7;

/// Maps a conversion error to the exit code reported for it.
pub fn exit_code_for(error: &Error) -> i32 {
    match error {
        Error::UnreadableInput { .. } => INPUT_UNREADABLE,
        Error::MissingAttribute { tag: Tag::File, .. } => MALFORMED_SECTION_HEADER,
        Error::MissingAttribute {
            tag: Tag::TransUnit,
            ..
        } => MALFORMED_UNIT_HEADER,
        Error::TruncatedDocument { .. } => TRUNCATED_DOCUMENT,
        Error::UnwritableOutput { .. } => OUTPUT_UNWRITABLE,
        Error::MissingAttribute { .. } | Error::Io(_) => FAILURE,
    }
}
