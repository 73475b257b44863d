//! Version badges, compatibility note and version table

use crate::config::MODRINTH_PROJECT_URL;
use crate::render::Fragments;
use crate::version::VersionSource;

/// Which versions a badge row shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BadgeSelection {
    /// Every available version
    #[default]
    Auto,
    /// Only the latest version
    Latest,
    /// Exactly these versions, in this order
    Explicit(Vec<String>),
}

impl<S: VersionSource> Fragments<'_, S> {
    /// Inline `MC <version>` badges separated by spaces
    pub fn badges(&self, selection: &BadgeSelection) -> String {
        let versions = match selection {
            BadgeSelection::Auto => self.registry.available_versions(),
            BadgeSelection::Latest => vec![self.registry.latest_version()],
            BadgeSelection::Explicit(versions) => versions.clone(),
        };

        versions
            .iter()
            .map(|version| format!("`MC {version}`"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn compatibility(&self, version: Option<&str>) -> String {
        let version = self.registry.target_version(version);

        format!(
            "> **Version Compatibility**\n>\n> This feature is available in Minecraft {version}\n"
        )
    }

    /// Table of all supported versions with download links
    pub fn version_table(&self) -> String {
        let mut out = String::from("| Minecraft Version | Status | Download |\n");
        out.push_str("| --- | --- | --- |\n");

        for version in self.registry.available_versions() {
            out.push_str(&format!(
                "| {version} | Supported | [Download]({}) |\n",
                download_url(&version)
            ));
        }

        out
    }
}

/// Modrinth download page for the newest mod release on a game version
pub fn download_url(version: &str) -> String {
    format!("{MODRINTH_PROJECT_URL}/version/latest?g={version}")
}
