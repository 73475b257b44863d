//! Property file parser
//!
//! Parses the flat `key=value` format used by `version_properties/*.properties`.
//!
//! Format rules:
//! - A leading byte order mark is ignored
//! - Lines are trimmed; blank lines and lines starting with `#` are skipped
//! - The first `=` separates key and value, so values may contain `=`
//! - Keys and values are trimmed
//! - Lines without `=` or with an empty key are ignored

use indexmap::IndexMap;

/// Parse property file content into an ordered key/value map.
///
/// A repeated key keeps its first position and takes the last value.
pub fn parse_properties(content: &str) -> IndexMap<String, String> {
    let mut properties = IndexMap::new();
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        properties.insert(key.to_string(), value.trim().to_string());
    }

    properties
}
