//! Options controlling how [`crate::convert_file`] writes its output.

use std::path::PathBuf;

/// Write behavior options for [`crate::convert_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Directory under which each section's derived path is resolved.
    pub output_base: PathBuf,
    /// Parse and report sections without writing any file.
    pub dry_run: bool,
    /// Create missing directories implied by a derived output path.
    pub create_dirs: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            output_base: PathBuf::from("."),
            dry_run: false,
            create_dirs: true,
        }
    }
}

impl ConvertOptions {
    /// Creates default options: write under the current directory,
    /// creating directories as needed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output base directory.
    pub fn with_output_base(mut self, output_base: impl Into<PathBuf>) -> Self {
        self.output_base = output_base.into();
        self
    }

    /// Enables/disables dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Enables/disables creation of missing output directories.
    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}
