use crate::core::models::tube::Nanotube;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Defines the interface for writing one of the tube's output files.
///
/// Implementors handle format-specific serialization; the provided methods
/// take care of naming and opening the file.
pub trait TopologyFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Suffix appended to the tube's base name, including the extension.
    const SUFFIX: &'static str;

    /// Writes the file contents for `tube` to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails or the tube is internally inconsistent.
    fn write_to(tube: &Nanotube, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Path of this file for `tube` inside `dir`.
    fn path_in<P: AsRef<Path>>(tube: &Nanotube, dir: P) -> PathBuf {
        dir.as_ref()
            .join(format!("{}{}", tube.config().basename, Self::SUFFIX))
    }

    /// Creates the file at `path`, writes `tube` and flushes it.
    ///
    /// The handle is closed when this returns, whether or not writing
    /// succeeded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, written or flushed.
    fn write_to_path<P: AsRef<Path>>(tube: &Nanotube, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(tube, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
