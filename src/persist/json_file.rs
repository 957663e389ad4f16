//! JSON data file
//!
//! Saves go through a temporary sibling file that is renamed over the
//! target, so a failed write leaves the previous document intact.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::record::Record;

/// A data file holding the full record collection
#[derive(Debug, Clone)]
pub struct JsonFile {
    /// Target document
    path: PathBuf,

    /// Indent the output
    pretty: bool,
}

impl JsonFile {
    /// Create an adapter for the given path (nothing is touched yet)
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    /// Read every record.
    ///
    /// Returns:
    /// - `Ok(records)` in file order
    /// - `Ok(vec![])` when the file does not exist
    /// - `Err(Serialization)` when the document is not a list of records
    pub fn load<R: Record>(&self) -> Result<Vec<R>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<R> = serde_json::from_reader(BufReader::new(file))?;
        info!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    /// Overwrite the document with `records`
    pub fn save<R: Record>(&self, records: &[R]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        if let Err(e) = self.write_and_swap(&tmp_path, records) {
            if let Err(cleanup) = fs::remove_file(&tmp_path) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(path = %tmp_path.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(e);
        }

        debug!(path = %self.path.display(), count = records.len(), "saved records");
        Ok(())
    }

    /// Get the data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Write `records` to `tmp_path`, sync, then rename over the target
    fn write_and_swap<R: Record>(&self, tmp_path: &Path, records: &[R]) -> Result<()> {
        let mut writer = BufWriter::new(File::create(tmp_path)?);
        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, records)?;
        } else {
            serde_json::to_writer(&mut writer, records)?;
        }
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(tmp_path, &self.path)?;
        Ok(())
    }

    /// "properties.json" → "properties.json.tmp"
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
