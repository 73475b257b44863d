use std::cmp::Ordering;

/// Split a version identifier into numeric components.
///
/// Each dot-separated component contributes its leading ASCII digits as an
/// integer; a component without leading digits counts as 0 and an oversized
/// one saturates.
///
/// Examples:
/// - "1.21.6" -> [1, 21, 6]
/// - "1.21" -> [1, 21]
/// - "1.21.6-pre1" -> [1, 21, 6]
/// - "24w14a" -> [24]
pub fn version_components(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|part| {
            let digits_end = part
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(part.len());
            let digits = &part[..digits_end];
            if digits.is_empty() {
                0
            } else {
                digits.parse::<u64>().unwrap_or(u64::MAX)
            }
        })
        .collect()
}

/// Compare two identifiers component by component, padding the shorter one
/// with zeros.
pub fn compare_dotted(a: &str, b: &str) -> Ordering {
    let a_parts = version_components(a);
    let b_parts = version_components(b);
    let len = a_parts.len().max(b_parts.len());

    (0..len)
        .map(|i| {
            let a_num = a_parts.get(i).copied().unwrap_or(0);
            let b_num = b_parts.get(i).copied().unwrap_or(0);
            a_num.cmp(&b_num)
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sort identifiers ascending.
///
/// Numerically equal identifiers ("1.21" and "1.21.0") fall back to string
/// order so the result does not depend on directory listing order.
pub fn sort_versions(versions: &mut [String]) {
    versions.sort_by(|a, b| compare_dotted(a, b).then_with(|| a.cmp(b)));
}
