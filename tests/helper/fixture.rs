//! Version properties directory fixtures

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Temporary `version_properties` directory
pub struct VersionDir {
    _temp_dir: TempDir,
    path: PathBuf,
}

impl VersionDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version_properties");
        std::fs::create_dir_all(&path).unwrap();
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }

    /// Write `<version>.properties` with the given content
    pub fn with_file(self, version: &str, content: &str) -> Self {
        std::fs::write(self.path.join(format!("{version}.properties")), content).unwrap();
        self
    }

    /// Write a complete properties file for `version`
    pub fn with_version(self, version: &str) -> Self {
        let content = properties(version);
        self.with_file(version, &content)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A sibling path that does not exist
    pub fn missing_path(&self) -> PathBuf {
        self.path.with_file_name("does_not_exist")
    }
}

/// Typical properties file for a Minecraft version
pub fn properties(version: &str) -> String {
    format!(
        r#"# Showcase build properties for {version}
minecraft_version={version}
compatible_minecraft_versions=["{version}"]
fabric_loader_version=0.16.14
fabric_version=0.127.1+{version}
placeholder_api_version=2.7.0+{version}
release_type=release
"#
    )
}
