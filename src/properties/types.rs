//! Version metadata types

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

/// Property keys recognized in `<version>.properties`
pub mod keys {
    pub const MINECRAFT_VERSION: &str = "minecraft_version";
    pub const COMPATIBLE_MINECRAFT_VERSIONS: &str = "compatible_minecraft_versions";
    pub const FABRIC_LOADER_VERSION: &str = "fabric_loader_version";
    pub const FABRIC_VERSION: &str = "fabric_version";
    pub const PLACEHOLDER_API_VERSION: &str = "placeholder_api_version";
    pub const RELEASE_TYPE: &str = "release_type";
}

/// Release channel of a supported Minecraft version
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    #[default]
    Release,
    Beta,
    Alpha,
}

impl ReleaseType {
    /// Returns the string representation of the release type
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Release => "release",
            ReleaseType::Beta => "beta",
            ReleaseType::Alpha => "alpha",
        }
    }
}

impl std::str::FromStr for ReleaseType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "release" => Ok(ReleaseType::Release),
            "beta" => Ok(ReleaseType::Beta),
            "alpha" => Ok(ReleaseType::Alpha),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one supported Minecraft version
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionRecord {
    /// Canonical version (e.g., "1.21.6")
    pub minecraft_version: String,
    /// Other game versions this build also runs on
    pub compatible_versions: Vec<String>,
    /// Empty when not specified
    pub fabric_loader_version: String,
    /// Empty when not specified
    pub fabric_api_version: String,
    /// Empty when not specified
    pub placeholder_api_version: String,
    pub release_type: ReleaseType,
}

impl VersionRecord {
    /// Project parsed properties into a record.
    ///
    /// `requested` is the identifier the file was looked up by; it stands in
    /// for a missing or empty `minecraft_version`.
    pub fn from_properties(requested: &str, props: &IndexMap<String, String>) -> Self {
        let value = |key: &str| -> String { props.get(key).cloned().unwrap_or_default() };

        let mut minecraft_version = value(keys::MINECRAFT_VERSION);
        if minecraft_version.is_empty() {
            minecraft_version = requested.to_string();
        }

        let compatible_versions = match props
            .get(keys::COMPATIBLE_MINECRAFT_VERSIONS)
            .filter(|v| !v.is_empty())
        {
            None => Vec::new(),
            Some(raw) => serde_json::from_str::<Vec<String>>(raw).unwrap_or_else(|e| {
                warn!(
                    "Malformed {} for {}: {}",
                    keys::COMPATIBLE_MINECRAFT_VERSIONS,
                    requested,
                    e
                );
                vec![minecraft_version.clone()]
            }),
        };

        let release_type = match props.get(keys::RELEASE_TYPE).filter(|v| !v.is_empty()) {
            None => ReleaseType::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(
                    "Unknown {} {:?} for {}, using release",
                    keys::RELEASE_TYPE,
                    raw,
                    requested
                );
                ReleaseType::default()
            }),
        };

        Self {
            minecraft_version,
            compatible_versions,
            fabric_loader_version: value(keys::FABRIC_LOADER_VERSION),
            fabric_api_version: value(keys::FABRIC_VERSION),
            placeholder_api_version: value(keys::PLACEHOLDER_API_VERSION),
            release_type,
        }
    }
}
