//! Version registry resolver
//!
//! Every call re-reads its source. Failures never propagate: a missing or
//! unreadable source degrades to the fallback version list, and a missing or
//! unreadable version file degrades to `None`.

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::config::{FALLBACK_LATEST_VERSION, FALLBACK_VERSIONS};
use crate::properties::{VersionRecord, parse_properties};
use crate::version::ordering::sort_versions;
use crate::version::source::{DirectorySource, VersionSource};

pub struct VersionRegistry<S: VersionSource> {
    source: S,
}

impl VersionRegistry<DirectorySource> {
    /// Build a registry over a `version_properties` directory
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self::new(DirectorySource::new(dir))
    }
}

impl<S: VersionSource> VersionRegistry<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// All available versions, sorted ascending by dotted numeric components
    pub fn available_versions(&self) -> Vec<String> {
        let mut versions = match self.source.version_ids() {
            Ok(Some(ids)) => ids,
            Ok(None) => {
                warn!("version_properties directory not found, using fallback versions");
                fallback_versions()
            }
            Err(e) => {
                warn!("{}, using fallback versions", e);
                fallback_versions()
            }
        };

        sort_versions(&mut versions);
        versions
    }

    /// Metadata for a single version, or `None` if it cannot be resolved
    pub fn version_info(&self, version: &str) -> Option<VersionRecord> {
        let content = match self.source.read_version(version) {
            Ok(Some(content)) => content,
            Ok(None) => {
                debug!("No properties file for version {}", version);
                return None;
            }
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let props = parse_properties(&content);
        Some(VersionRecord::from_properties(version, &props))
    }

    /// The highest available version, or the fallback when none exist
    pub fn latest_version(&self) -> String {
        self.available_versions()
            .pop()
            .unwrap_or_else(|| FALLBACK_LATEST_VERSION.to_string())
    }

    /// Metadata for every available version that resolves
    pub fn all_version_info(&self) -> Vec<VersionRecord> {
        self.available_versions()
            .iter()
            .filter_map(|version| self.version_info(version))
            .collect()
    }

    pub fn is_supported(&self, version: &str) -> bool {
        self.available_versions().iter().any(|v| v == version)
    }

    /// `version` when given, otherwise the latest version
    pub fn target_version(&self, version: Option<&str>) -> String {
        match version {
            Some(version) => version.to_string(),
            None => self.latest_version(),
        }
    }
}

fn fallback_versions() -> Vec<String> {
    FALLBACK_VERSIONS.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::properties::ReleaseType;
    use crate::version::error::SourceError;
    use crate::version::source::MockVersionSource;

    fn ids(versions: &[&str]) -> Option<Vec<String>> {
        Some(versions.iter().map(|v| v.to_string()).collect())
    }

    fn io_error() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn available_versions_sorts_numerically() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(ids(&["1.21.2", "1.21.10", "1.21.4"])));
        let registry = VersionRegistry::new(source);

        assert_eq!(
            registry.available_versions(),
            vec!["1.21.2", "1.21.4", "1.21.10"]
        );
    }

    #[test]
    fn available_versions_falls_back_when_source_missing() {
        let mut source = MockVersionSource::new();
        source.expect_version_ids().returning(|| Ok(None));
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.available_versions(), FALLBACK_VERSIONS);
    }

    #[test]
    fn available_versions_falls_back_when_listing_fails() {
        let mut source = MockVersionSource::new();
        source.expect_version_ids().returning(|| {
            Err(SourceError::List {
                path: PathBuf::from("version_properties"),
                source: io_error(),
            })
        });
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.available_versions(), FALLBACK_VERSIONS);
    }

    #[test]
    fn available_versions_is_empty_for_empty_source() {
        let mut source = MockVersionSource::new();
        source.expect_version_ids().returning(|| Ok(Some(vec![])));
        let registry = VersionRegistry::new(source);

        assert!(registry.available_versions().is_empty());
    }

    #[test]
    fn available_versions_reads_source_on_every_call() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .times(2)
            .returning(|| Ok(ids(&["1.21.6"])));
        let registry = VersionRegistry::new(source);

        registry.available_versions();
        registry.available_versions();
    }

    #[test]
    fn latest_version_returns_highest_version() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(ids(&["1.21.10", "1.21.9"])));
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.latest_version(), "1.21.10");
    }

    #[test]
    fn latest_version_returns_fallback_for_empty_source() {
        let mut source = MockVersionSource::new();
        source.expect_version_ids().returning(|| Ok(Some(vec![])));
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.latest_version(), FALLBACK_LATEST_VERSION);
    }

    #[test]
    fn version_info_parses_properties() {
        let mut source = MockVersionSource::new();
        source.expect_read_version().returning(|_| {
            Ok(Some(
                "minecraft_version=1.21.6\nfabric_loader_version=0.16.14\nrelease_type=beta\n"
                    .to_string(),
            ))
        });
        let registry = VersionRegistry::new(source);

        let record = registry.version_info("1.21.6").unwrap();

        assert_eq!(record.minecraft_version, "1.21.6");
        assert_eq!(record.fabric_loader_version, "0.16.14");
        assert_eq!(record.release_type, ReleaseType::Beta);
    }

    #[test]
    fn version_info_returns_none_for_missing_file() {
        let mut source = MockVersionSource::new();
        source.expect_read_version().returning(|_| Ok(None));
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.version_info("9.9.9"), None);
    }

    #[test]
    fn version_info_returns_none_for_unreadable_file() {
        let mut source = MockVersionSource::new();
        source.expect_read_version().returning(|version| {
            Err(SourceError::Read {
                path: PathBuf::from(format!("{version}.properties")),
                source: io_error(),
            })
        });
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.version_info("1.21.6"), None);
    }

    #[test]
    fn all_version_info_skips_unresolved_versions() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(ids(&["1.21.6", "1.21.4", "1.21.5"])));
        source.expect_read_version().returning(|version| match version {
            "1.21.5" => Ok(None),
            other => Ok(Some(format!("minecraft_version={other}"))),
        });
        let registry = VersionRegistry::new(source);

        let versions: Vec<String> = registry
            .all_version_info()
            .into_iter()
            .map(|record| record.minecraft_version)
            .collect();

        assert_eq!(versions, vec!["1.21.4", "1.21.6"]);
    }

    #[test]
    fn is_supported_checks_membership() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(ids(&["1.21.4", "1.21.6"])));
        let registry = VersionRegistry::new(source);

        assert!(registry.is_supported("1.21.4"));
        assert!(!registry.is_supported("1.21.5"));
    }

    #[test]
    fn target_version_defaults_to_latest() {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(ids(&["1.21.4", "1.21.6"])));
        let registry = VersionRegistry::new(source);

        assert_eq!(registry.target_version(None), "1.21.6");
        assert_eq!(registry.target_version(Some("1.21.4")), "1.21.4");
    }
}
