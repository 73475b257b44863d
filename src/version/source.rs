//! Version property sources

#[cfg(test)]
use mockall::automock;

use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use crate::version::error::SourceError;

/// File extension of version property files
pub const PROPERTIES_EXTENSION: &str = "properties";

/// Trait for reading raw version property files
#[cfg_attr(test, automock)]
pub trait VersionSource {
    /// Lists the version identifiers present in the source
    ///
    /// # Returns
    /// * `Ok(Some(ids))` - Identifiers in no particular order
    /// * `Ok(None)` - The source location does not exist
    /// * `Err(SourceError)` - The location exists but could not be listed
    fn version_ids(&self) -> Result<Option<Vec<String>>, SourceError>;

    /// Reads the raw property file for a version
    ///
    /// Returns `Ok(None)` when no file exists for `version`.
    fn read_version(&self, version: &str) -> Result<Option<String>, SourceError>;
}

/// Source backed by a directory of `<version>.properties` files
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn version_path(&self, version: &str) -> PathBuf {
        self.dir.join(format!("{version}.{PROPERTIES_EXTENSION}"))
    }
}

/// Identifiers are file stems; anything that could escape the directory is
/// never a valid one.
fn is_plain_identifier(version: &str) -> bool {
    !version.is_empty() && !version.contains(['/', '\\']) && version != ".." && version != "."
}

impl VersionSource for DirectorySource {
    fn version_ids(&self) -> Result<Option<Vec<String>>, SourceError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Version properties directory {:?} does not exist", self.dir);
                return Ok(None);
            }
            Err(source) => {
                return Err(SourceError::List {
                    path: self.dir.clone(),
                    source,
                });
            }
        };

        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| SourceError::List {
                path: self.dir.clone(),
                source,
            })?;
            let path = entry.path();

            if path.extension().and_then(|ext| ext.to_str()) != Some(PROPERTIES_EXTENSION) {
                continue;
            }
            match path.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) if !stem.is_empty() => ids.push(stem.to_string()),
                _ => debug!("Skipping unusable file name {:?}", path),
            }
        }

        debug!("Found {} version files in {:?}", ids.len(), self.dir);
        Ok(Some(ids))
    }

    fn read_version(&self, version: &str) -> Result<Option<String>, SourceError> {
        if !is_plain_identifier(version) {
            debug!("Rejecting version identifier {:?}", version);
            return Ok(None);
        }

        let path = self.version_path(version);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(SourceError::Read { path, source }),
        }
    }
}
