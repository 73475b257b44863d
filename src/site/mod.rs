//! Site artifacts: robots.txt and sitemap.xml

pub mod robots;
pub mod sitemap;

use std::path::PathBuf;

use thiserror::Error;

pub use robots::robots_txt;
pub use sitemap::{ChangeFrequency, SitemapEntry, discover_pages, sitemap_entries, sitemap_xml};

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("Failed to scan content directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize sitemap: {0}")]
    Xml(String),
}
