//! Version-templated code blocks

use tracing::warn;

use crate::render::template::{substitute, unresolved_placeholders};
use crate::render::{Fragments, fence_for};
use crate::version::VersionSource;

pub const DEFAULT_LANGUAGE: &str = "groovy";

pub const MAVEN_TEMPLATE: &str = r#"<dependency>
    <groupId>maven.modrinth</groupId>
    <artifactId>showcase</artifactId>
    <version>{MOD_VERSION}</version>
    <scope>provided</scope>
</dependency>"#;

pub const GRADLE_TEMPLATE: &str = r#"dependencies {
    minecraft "{MC_VERSION}"
    mappings "net.fabricmc:yarn:{MC_VERSION}+build.1:v2"
    modImplementation "net.fabricmc:fabric-loader:{LOADER_VERSION}"
    modImplementation "net.fabricmc.fabric-api:fabric-api:{FABRIC_VERSION}"

    // Showcase mod
    modImplementation "maven.modrinth:showcase:{MOD_VERSION}"

    // Optional dependencies
    modImplementation "eu.pb4:placeholder-api:{PLACEHOLDER_API_VERSION}"
}"#;

impl<S: VersionSource> Fragments<'_, S> {
    /// Render `template` with the placeholders of `version` (latest when `None`)
    /// as a fenced block in `language`.
    pub fn versioned_code_block(
        &self,
        language: &str,
        template: &str,
        version: Option<&str>,
    ) -> String {
        let target = self.registry.target_version(version);
        let Some(info) = self.registry.version_info(&target) else {
            return format!("> Error: Version information not available for {target}\n");
        };

        let code = substitute(template, &info, self.mod_version);
        let leftover = unresolved_placeholders(&code);
        if !leftover.is_empty() {
            warn!(
                "Unresolved placeholders in code block for {}: {}",
                target,
                leftover.join(", ")
            );
        }

        let fence = fence_for(&code);
        format!(
            "_For Minecraft {target} · Auto-generated_\n\n{fence}{language}\n{code}\n{fence}\n"
        )
    }

    pub fn maven_dependency(&self, version: Option<&str>) -> String {
        self.versioned_code_block("xml", MAVEN_TEMPLATE, version)
    }

    pub fn gradle_dependency(&self, version: Option<&str>) -> String {
        self.versioned_code_block("groovy", GRADLE_TEMPLATE, version)
    }
}
