//! JSON file persistence for the Orbit repositories.
//!
//! Each repository owns one [`JsonStore`] pointing at one document on disk:
//!
//! ```text
//! data/players.json   -> [ {Player}, ... ]
//! data/items.json     -> [ {Item}, ... ]
//! data/game_map.json  -> { "sectors": [...] }
//! ```
//!
//! Failure policy:
//! - Loading never fails. A missing, unreadable or unparsable file is logged
//!   and reported as "no data" so a fresh install can bootstrap itself.
//! - Saving always surfaces errors. The document is written to a sibling
//!   temp file, synced, then renamed over the target.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{OrbitError, Result};

/// Handle to a single JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonStore {
    /// A store for `path` that writes indented JSON.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            pretty: true,
        }
    }

    /// Choose between indented and compact output.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Path of the backing document.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing document exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    // ------------------------------------------------------------------
    // Load
    // ------------------------------------------------------------------

    /// Decode the document.
    ///
    /// Returns `None` if the file is missing, cannot be read, or does not
    /// decode as `T`.
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        let start = Instant::now();

        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No document on disk yet");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable document, treating as empty");
                return None;
            }
        };

        match serde_json::from_slice(&data) {
            Ok(value) => {
                debug!(
                    path = %self.path.display(),
                    bytes = data.len(),
                    elapsed_us = start.elapsed().as_micros(),
                    "Loaded document"
                );
                Some(value)
            }
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Corrupt document, treating as empty"
                );
                None
            }
        }
    }

    /// Decode the document, falling back to `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self) -> T {
        self.load().unwrap_or_default()
    }

    // ------------------------------------------------------------------
    // Save
    // ------------------------------------------------------------------

    /// Serialize `value` and replace the document with it.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Serialization`] if encoding fails, or
    /// [`OrbitError::Persistence`] if any filesystem step fails.
    pub fn save<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let start = Instant::now();

        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };
        let json = encoded.map_err(|e| OrbitError::Serialization(e.to_string()))?;

        self.write_atomically(&json).map_err(|source| OrbitError::Persistence {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            path = %self.path.display(),
            bytes = json.len(),
            elapsed_us = start.elapsed().as_micros(),
            "Saved document"
        );
        Ok(())
    }

    /// Delete the document. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`OrbitError::Persistence`] if the file exists but cannot be
    /// removed.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed document");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(OrbitError::Persistence {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write_atomically(&self, bytes: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.tmp_path();
        let result = write_synced(&tmp_path, bytes).and_then(|()| fs::rename(&tmp_path, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp_path);
        }
        result
    }

    /// Sibling temp file, e.g. `players.json.tmp`.
    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

/// Write `bytes` to `path` and flush them to disk.
fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
