//! Placeholder substitution for version-templated code
//!
//! Supported placeholders:
//! - `{MC_VERSION}` - Minecraft version (e.g., "1.21.6")
//! - `{FABRIC_VERSION}` - Fabric API version
//! - `{LOADER_VERSION}` - Fabric Loader version
//! - `{PLACEHOLDER_API_VERSION}` - PlaceholderAPI version
//! - `{MOD_VERSION}` - Mod release tagged with the Minecraft version (e.g., "2.3.1+mc1.21.6")

use std::sync::LazyLock;

use regex::Regex;
use semver::{BuildMetadata, Version};

use crate::properties::VersionRecord;

pub const MC_VERSION: &str = "{MC_VERSION}";
pub const FABRIC_VERSION: &str = "{FABRIC_VERSION}";
pub const LOADER_VERSION: &str = "{LOADER_VERSION}";
pub const PLACEHOLDER_API_VERSION: &str = "{PLACEHOLDER_API_VERSION}";
pub const MOD_VERSION: &str = "{MOD_VERSION}";

/// Matches any `{UPPER_SNAKE}` token
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Z][A-Z0-9_]*\}").expect("placeholder pattern is valid"));

/// Build the mod version for a Minecraft version as semver build metadata.
///
/// Any build metadata already on `base` is replaced. Inputs that do not form
/// a valid semver version are joined verbatim.
pub fn mod_version(base: &str, minecraft_version: &str) -> String {
    let build = format!("mc{minecraft_version}");
    match (Version::parse(base), BuildMetadata::new(&build)) {
        (Ok(mut version), Ok(build)) => {
            version.build = build;
            version.to_string()
        }
        _ => format!("{base}+{build}"),
    }
}

/// Replace every occurrence of each supported placeholder
pub fn substitute(template: &str, record: &VersionRecord, mod_version_base: &str) -> String {
    template
        .replace(MC_VERSION, &record.minecraft_version)
        .replace(FABRIC_VERSION, &record.fabric_api_version)
        .replace(LOADER_VERSION, &record.fabric_loader_version)
        .replace(PLACEHOLDER_API_VERSION, &record.placeholder_api_version)
        .replace(
            MOD_VERSION,
            &mod_version(mod_version_base, &record.minecraft_version),
        )
}

/// Placeholder-like tokens left in `text`, in order of first appearance
pub fn unresolved_placeholders(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in PLACEHOLDER_RE.find_iter(text) {
        if !found.iter().any(|f| f == m.as_str()) {
            found.push(m.as_str().to_string());
        }
    }
    found
}
