//! Storage layer for questlog
//!
//! The whole tracker state lives in a single JSON document on disk
//! (`goal_data.json` by default). Every operation reads and writes the full
//! document; there are no partial updates.
//!
//! Reads are self-healing: a missing, unreadable, or unparseable store yields
//! the default empty document, which is persisted best-effort. Loading never
//! fails. Writes are atomic (temp file + rename) so a reader never sees a
//! partial document.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::goal::Document;

/// Default store file, relative to the working directory
pub const DEFAULT_STORE_FILE: &str = "goal_data.json";

/// Storage manager for the questlog document
#[derive(Debug, Clone)]
pub struct Store {
    /// Path to the backing JSON file
    path: PathBuf,
}

impl Store {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file exists on disk
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the document, substituting the default empty document when the
    /// backing file is missing or does not parse.
    ///
    /// The substituted default is persisted so the next load sees a valid
    /// store; if that write fails too it is logged and ignored (the caller
    /// still gets a usable in-memory document).
    pub fn load(&self) -> Document {
        match fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str::<Document>(&content) {
                Ok(doc) => {
                    debug!(path = %self.path.display(), "loaded store");
                    doc
                }
                Err(err) => {
                    warn!(path = %self.path.display(), %err, "store unparseable, resetting to empty");
                    self.heal()
                }
            },
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), %err, "store unreadable, resetting to empty");
                }
                self.heal()
            }
        }
    }

    /// Serialize and persist the full document, replacing prior content.
    pub fn save(&self, doc: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        self.write_atomic(json.as_bytes())?;
        debug!(path = %self.path.display(), "saved store");
        Ok(())
    }

    fn heal(&self) -> Document {
        let doc = Document::default();
        if let Err(err) = self.save(&doc) {
            warn!(path = %self.path.display(), %err, "could not persist healed store");
        }
        doc
    }

    /// Write data atomically using temp file + rename, so readers never see
    /// a partial document.
    fn write_atomic(&self, data: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");

        let mut file = File::create(&temp_path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::PermissionDenied {
                Error::StoreNotWritable(self.path.clone())
            } else {
                Error::Io(err)
            }
        })?;
        file.write_all(data)?;
        file.sync_all()?;

        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}
