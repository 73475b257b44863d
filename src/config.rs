use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Fallback constants
// =============================================================================

/// Versions reported when the version properties directory does not exist
pub const FALLBACK_VERSIONS: &[&str] = &["1.21.2", "1.21.4", "1.21.5", "1.21.6"];

/// Version reported as latest when no versions are available at all
pub const FALLBACK_LATEST_VERSION: &str = "1.21.6";

/// Mod release used to build `{MOD_VERSION}`
pub const DEFAULT_MOD_VERSION: &str = "2.3.1";

pub const DEFAULT_VERSIONS_DIR: &str = "../version_properties";

pub const DEFAULT_CONTENT_DIR: &str = "content/docs";

pub const DEFAULT_SITE_URL: &str = "https://showcase-fabric.vercel.app";

/// Modrinth project page, suffixed with `/version/latest?g=<version>` for downloads
pub const MODRINTH_PROJECT_URL: &str = "https://modrinth.com/mod/showcase";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid modVersion {value:?}: {source}")]
    ModVersion {
        value: String,
        source: semver::Error,
    },
}

/// Documentation tooling configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    /// Directory holding `<version>.properties` files
    pub versions_dir: PathBuf,
    /// Root of the documentation pages used for the sitemap
    pub content_dir: PathBuf,
    pub mod_version: String,
    /// Additional log destination
    pub log_file: Option<PathBuf>,
    pub site: SiteConfig,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            versions_dir: PathBuf::from(DEFAULT_VERSIONS_DIR),
            content_dir: PathBuf::from(DEFAULT_CONTENT_DIR),
            mod_version: DEFAULT_MOD_VERSION.to_string(),
            log_file: None,
            site: SiteConfig::default(),
        }
    }
}

/// Public site identity used by robots.txt and sitemap.xml
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SITE_URL.to_string(),
        }
    }
}

impl SiteConfig {
    /// Site URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

impl DocsConfig {
    /// Parse a config document and validate it
    pub fn from_json(path: &Path, content: &str) -> Result<Self, ConfigError> {
        let config: DocsConfig =
            serde_json::from_str(content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config from an explicit path, or from the default location.
    ///
    /// A missing file at the default location yields the defaults; a missing
    /// explicitly requested file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (config_path(), false),
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        semver::Version::parse(&self.mod_version).map_err(|source| ConfigError::ModVersion {
            value: self.mod_version.clone(),
            source,
        })?;
        Ok(())
    }
}

/// Returns the path to the config directory for showcase-docs.
/// Uses $XDG_CONFIG_HOME/showcase-docs if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/showcase-docs,
/// or ./showcase-docs if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the default config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("showcase-docs")
}
