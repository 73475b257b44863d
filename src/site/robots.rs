use crate::config::SiteConfig;

/// Paths crawlers are asked to skip
pub const DISALLOWED_PATHS: &[&str] = &["/api/", "/_next/", "/404"];

pub fn robots_txt(site: &SiteConfig) -> String {
    let base = site.base_url();
    let mut out = String::from("User-agent: *\nAllow: /\n");
    for path in DISALLOWED_PATHS {
        out.push_str(&format!("Disallow: {path}\n"));
    }
    out.push('\n');
    out.push_str(&format!("Sitemap: {base}/sitemap.xml\n"));
    out.push_str(&format!("Host: {base}\n"));
    out
}
