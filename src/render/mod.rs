//! Documentation fragment renderers
//!
//! Each renderer resolves what it needs from a [`VersionRegistry`] at call
//! time and returns a Markdown fragment ready to be embedded in an MDX page.
//!
//! # Modules
//!
//! - [`template`]: `{MC_VERSION}`-style placeholder substitution
//! - [`badges`]: Version badges, compatibility note and version table
//! - [`requirements`]: Server requirements and dependency listing
//! - [`codeblock`]: Version-templated code blocks with Maven/Gradle presets

pub mod badges;
pub mod codeblock;
pub mod requirements;
pub mod template;

pub use badges::BadgeSelection;

use crate::version::{VersionRegistry, VersionSource};

/// Renders Markdown fragments against a registry
pub struct Fragments<'a, S: VersionSource> {
    registry: &'a VersionRegistry<S>,
    mod_version: &'a str,
}

impl<'a, S: VersionSource> Fragments<'a, S> {
    /// `mod_version` is the mod release used for `{MOD_VERSION}` (e.g., "2.3.1")
    pub fn new(registry: &'a VersionRegistry<S>, mod_version: &'a str) -> Self {
        Self {
            registry,
            mod_version,
        }
    }
}

/// A code fence long enough that `content` cannot close it early
pub(crate) fn fence_for(content: &str) -> String {
    let longest_run = content
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest_run.max(2) + 1)
}
