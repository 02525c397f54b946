//! Traits for writing parsed values out as `.strings` text.

use std::{fs, io::Write, path::Path};

use tempfile::{Builder, NamedTempFile};

use crate::error::Error;

/// A value that renders to `.strings` text.
///
/// Rendering is a pure function of the value: calling it twice on the same
/// value yields byte-identical output.
///
/// # Example
///
/// ```rust
/// use xliff2strings::{parse_str, traits::Render};
///
/// let sections = parse_str(concat!(
///     "<file original=\"en.lproj/Localizable.strings\" datatype=\"plaintext\" source-language=\"en\" target-language=\"fr\">\n",
///     "</file>\n",
/// ))?;
/// assert_eq!(sections[0].render()?, "/* en.lproj/Localizable.strings -> fr */\n");
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Render {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Render into a string.
    fn render(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        // writers only ever receive `str` data
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Write to file path, replacing any existing file in a single rename.
    ///
    /// The rendered text goes to a temporary file in the destination
    /// directory first. The result keeps the permissions of the file it
    /// replaces, or gets the same default mode as [`std::fs::File::create`].
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let content = self.render()?;
        let mut tmp = create_temp_in(dir).map_err(|e| Error::unwritable(path, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| Error::unwritable(path, e))?;
        if let Ok(existing) = fs::metadata(path) {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::unwritable(path, e))?;
        }
        tmp.persist(path)
            .map_err(|e| Error::unwritable(path, e.error))?;
        Ok(())
    }
}

/// Temporary files default to owner-only access; request `0o666` so the
/// process umask decides, as it does for a plain create.
#[cfg(unix)]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn create_temp_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    Builder::new().tempfile_in(dir)
}
