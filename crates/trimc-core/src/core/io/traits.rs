use super::trimer::Snapshot;
use crate::core::models::configuration::Configuration;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Interface of a particle snapshot format.
///
/// Readers produce a box-independent [`Snapshot`]; the caller decides the periodic box when
/// turning it into a [`Configuration`].
pub trait SnapshotFile {
    /// The error type for I/O operations.
    type Error: Error + From<io::Error>;

    /// Parses a snapshot from a buffered reader.
    fn read_from(reader: &mut impl BufRead) -> Result<Snapshot, Self::Error>;

    /// Writes diameters and unwrapped positions of `cfg`.
    fn write_to(cfg: &Configuration, writer: &mut impl Write) -> Result<(), Self::Error>;

    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Snapshot, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }

    fn write_to_path<P: AsRef<Path>>(cfg: &Configuration, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(cfg, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
