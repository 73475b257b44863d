//! sitemap.xml generation
//!
//! Pages are discovered from the documentation content tree:
//! - `guide/commands.mdx` -> `/docs/guide/commands`
//! - `guide/index.mdx` -> `/docs/guide`
//! - `index.md` -> `/docs`
//!
//! Segments are percent-encoded, so `getting started.mdx` -> `/docs/getting%20started`.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::config::SiteConfig;
use crate::site::SiteError;

const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];
const DOCS_ROOT: &str = "/docs";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFrequency {
    Weekly,
    Monthly,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
        }
    }
}

impl Serialize for ChangeFrequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
    pub changefreq: ChangeFrequency,
    #[serde(serialize_with = "serialize_priority")]
    pub priority: f32,
}

fn serialize_priority<S: Serializer>(priority: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{priority:.1}"))
}

#[derive(Serialize)]
struct UrlSet<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    urls: &'a [SitemapEntry],
}

/// Documentation page URLs under `content_dir`, sorted and deduplicated.
///
/// A missing directory yields no pages.
pub fn discover_pages(content_dir: &Path) -> Result<Vec<String>, SiteError> {
    if !content_dir.exists() {
        warn!(
            "Content directory {:?} not found, sitemap will only contain static pages",
            content_dir
        );
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    collect_pages(content_dir, &mut Vec::new(), &mut pages)?;
    pages.sort();
    pages.dedup();

    debug!("Discovered {} pages in {:?}", pages.len(), content_dir);
    Ok(pages)
}

fn collect_pages(
    dir: &Path,
    segments: &mut Vec<String>,
    pages: &mut Vec<String>,
) -> Result<(), SiteError> {
    let walk_error = |source: std::io::Error| SiteError::Walk {
        path: dir.to_path_buf(),
        source,
    };

    for entry in std::fs::read_dir(dir).map_err(walk_error)? {
        let entry = entry.map_err(walk_error)?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type().map_err(walk_error)?;
        if file_type.is_dir() {
            segments.push(name.to_string());
            collect_pages(&path, segments, pages)?;
            segments.pop();
            continue;
        }

        let is_page = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext));
        if !is_page {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let mut url = String::from(DOCS_ROOT);
        for segment in segments.iter() {
            url.push('/');
            url.push_str(&encode_segment(segment));
        }
        if stem != "index" {
            url.push('/');
            url.push_str(&encode_segment(stem));
        }
        pages.push(url);
    }

    Ok(())
}

/// Percent-encode every byte outside the RFC 3986 unreserved set
fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{byte:02X}"));
        }
    }
    encoded
}

/// Static entries followed by one entry per page.
///
/// Pages whose URL matches a static entry are skipped.
pub fn sitemap_entries(
    site: &SiteConfig,
    pages: &[String],
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let base = site.base_url();
    let lastmod = last_modified.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut entries = vec![
        SitemapEntry {
            loc: base.to_string(),
            lastmod: lastmod.clone(),
            changefreq: ChangeFrequency::Monthly,
            priority: 1.0,
        },
        SitemapEntry {
            loc: format!("{base}{DOCS_ROOT}"),
            lastmod: lastmod.clone(),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.9,
        },
    ];

    for page in pages {
        let loc = format!("{base}{page}");
        if entries.iter().any(|entry| entry.loc == loc) {
            continue;
        }
        entries.push(SitemapEntry {
            loc,
            lastmod: lastmod.clone(),
            changefreq: ChangeFrequency::Weekly,
            priority: 0.8,
        });
    }

    entries
}

pub fn sitemap_xml(entries: &[SitemapEntry]) -> Result<String, SiteError> {
    let set = UrlSet {
        xmlns: SITEMAP_NAMESPACE,
        urls: entries,
    };
    let body = quick_xml::se::to_string_with_root("urlset", &set)
        .map_err(|e| SiteError::Xml(e.to_string()))?;

    Ok(format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{body}\n"
    ))
}
