//! Version metadata resolver for the Showcase mod documentation site.
//!
//! Reads per-version `<version>.properties` files, orders the supported
//! Minecraft versions, and renders the Markdown fragments (badges, tables,
//! requirement lists, version-templated code blocks) and site artifacts
//! (robots.txt, sitemap.xml) the documentation pages embed.
//!
//! # Modules
//!
//! - [`config`]: Configuration file, defaults and fallback constants
//! - [`properties`]: Property file parser and the `VersionRecord` model
//! - [`version`]: Version sources, ordering and the registry resolver
//! - [`render`]: Markdown fragment renderers
//! - [`site`]: robots.txt and sitemap.xml generation
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod properties;
pub mod render;
pub mod site;
pub mod version;
