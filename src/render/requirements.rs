//! Server requirements and dependency listing

use tracing::debug;

use crate::render::template::substitute;
use crate::render::{Fragments, fence_for};
use crate::version::VersionSource;

/// Gradle block listing the dependency versions of one Minecraft version
pub const DEPENDENCY_TEMPLATE: &str = r#"dependencies {
    minecraft "{MC_VERSION}"
    mappings "net.fabricmc:yarn:{MC_VERSION}+build.1:v2"
    modImplementation "net.fabricmc:fabric-loader:{LOADER_VERSION}"
    modImplementation "net.fabricmc.fabric-api:fabric-api:{FABRIC_VERSION}"

    // Optional dependencies
    modImplementation "eu.pb4:placeholder-api:{PLACEHOLDER_API_VERSION}"
}"#;

impl<S: VersionSource> Fragments<'_, S> {
    /// Server requirement list for `version` (latest when `None`).
    ///
    /// With `show_all_versions` the Minecraft line lists every available
    /// version instead of the target. A version without metadata renders a
    /// "not available" notice.
    pub fn requirements(&self, version: Option<&str>, show_all_versions: bool) -> String {
        let target = self.registry.target_version(version);
        let Some(info) = self.registry.version_info(&target) else {
            return format!("> Version information not available for {target}\n");
        };

        let minecraft = if show_all_versions {
            self.registry.available_versions().join(", ")
        } else {
            target.clone()
        };

        let mut out = String::from("#### Server Requirements\n\n");
        out.push_str(&format!("- **Minecraft Server:** {minecraft}"));
        if info.compatible_versions.len() > 1 {
            out.push_str(&format!(
                " (Compatible: {})",
                info.compatible_versions.join(", ")
            ));
        }
        out.push('\n');
        out.push_str(&format!(
            "- **Fabric Loader:** {}\n",
            info.fabric_loader_version
        ));
        out.push_str(&format!("- **Fabric API:** {}\n", info.fabric_api_version));
        if !info.placeholder_api_version.is_empty() {
            out.push_str(&format!(
                "- **PlaceholderAPI:** {}\n",
                info.placeholder_api_version
            ));
        }

        out
    }

    /// Dependency block for developers, or `None` when `version` has no metadata
    pub fn dependency_versions(&self, version: Option<&str>) -> Option<String> {
        let target = self.registry.target_version(version);
        let Some(info) = self.registry.version_info(&target) else {
            debug!("Skipping dependency versions for {}", target);
            return None;
        };

        let code = substitute(DEPENDENCY_TEMPLATE, &info, self.mod_version);
        let fence = fence_for(&code);

        Some(format!(
            "#### Dependency Versions for MC {target}\n\n{fence}groovy\n{code}\n{fence}\n"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::VersionRegistry;
    use crate::version::source::MockVersionSource;

    const FULL: &str = r#"minecraft_version=1.21.6
compatible_minecraft_versions=["1.21.6", "1.21.7"]
fabric_loader_version=0.16.14
fabric_version=0.127.1+1.21.6
placeholder_api_version=2.7.0+1.21.6
"#;

    fn registry(content: Option<&'static str>) -> VersionRegistry<MockVersionSource> {
        let mut source = MockVersionSource::new();
        source
            .expect_version_ids()
            .returning(|| Ok(Some(vec!["1.21.5".to_string(), "1.21.6".to_string()])));
        source
            .expect_read_version()
            .returning(move |_| Ok(content.map(str::to_string)));
        VersionRegistry::new(source)
    }

    #[test]
    fn requirements_lists_all_dependencies() {
        let registry = registry(Some(FULL));
        let fragments = Fragments::new(&registry, "2.3.1");

        assert_eq!(
            fragments.requirements(None, false),
            "#### Server Requirements\n\n\
             - **Minecraft Server:** 1.21.6 (Compatible: 1.21.6, 1.21.7)\n\
             - **Fabric Loader:** 0.16.14\n\
             - **Fabric API:** 0.127.1+1.21.6\n\
             - **PlaceholderAPI:** 2.7.0+1.21.6\n"
        );
    }

    #[test]
    fn requirements_with_all_versions_lists_every_version() {
        let registry = registry(Some(FULL));
        let fragments = Fragments::new(&registry, "2.3.1");

        assert!(
            fragments
                .requirements(Some("1.21.6"), true)
                .contains("- **Minecraft Server:** 1.21.5, 1.21.6 (Compatible:")
        );
    }

    #[test]
    fn requirements_omits_single_compatible_version_and_missing_placeholder_api() {
        let registry = registry(Some(
            "minecraft_version=1.21.6\ncompatible_minecraft_versions=[\"1.21.6\"]\n",
        ));
        let fragments = Fragments::new(&registry, "2.3.1");

        let result = fragments.requirements(None, false);

        assert!(result.contains("- **Minecraft Server:** 1.21.6\n"));
        assert!(!result.contains("Compatible"));
        assert!(!result.contains("PlaceholderAPI"));
    }

    #[test]
    fn requirements_reports_missing_version_information() {
        let registry = registry(None);
        let fragments = Fragments::new(&registry, "2.3.1");

        assert_eq!(
            fragments.requirements(Some("1.20.1"), false),
            "> Version information not available for 1.20.1\n"
        );
    }

    #[test]
    fn dependency_versions_renders_gradle_block() {
        let registry = registry(Some(FULL));
        let fragments = Fragments::new(&registry, "2.3.1");

        let result = fragments.dependency_versions(None).unwrap();

        assert!(result.starts_with("#### Dependency Versions for MC 1.21.6\n\n```groovy\n"));
        assert!(result.contains("    minecraft \"1.21.6\"\n"));
        assert!(result.contains("fabric-loader:0.16.14\""));
        assert!(result.contains("eu.pb4:placeholder-api:2.7.0+1.21.6\""));
        assert!(result.ends_with("}\n```\n"));
    }

    #[test]
    fn dependency_versions_is_none_without_metadata() {
        let registry = registry(None);
        let fragments = Fragments::new(&registry, "2.3.1");

        assert_eq!(fragments.dependency_versions(Some("1.20.1")), None);
    }
}
