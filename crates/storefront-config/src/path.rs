//! Hierarchical key path helpers.
//!
//! Keys are segments joined by [`KEY_DELIMITER`]; comparisons ignore ASCII case.

/// Separator between key path segments.
pub const KEY_DELIMITER: &str = ":";

/// Join key segments into a single hierarchical path.
///
/// ```
/// use storefront_config::key_path;
///
/// assert_eq!(
///     key_path(&["Keys", "AzureMLFrequentlyBoughtTogether", "ModelName"]),
///     "Keys:AzureMLFrequentlyBoughtTogether:ModelName"
/// );
/// ```
#[must_use]
pub fn key_path(segments: &[&str]) -> String {
    segments.join(KEY_DELIMITER)
}

pub(crate) fn normalize_key(key: &str) -> String {
    key.to_ascii_lowercase()
}

pub(crate) fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{KEY_DELIMITER}{segment}")
    }
}

/// Strip `prefix:` from an already normalised key, returning the remainder.
pub(crate) fn strip_section<'a>(key: &'a str, normalized_prefix: &str) -> Option<&'a str> {
    key.strip_prefix(normalized_prefix)?
        .strip_prefix(KEY_DELIMITER)
        .filter(|rest| !rest.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_key_skips_delimiter_for_root() {
        assert_eq!(join_key("", "CDN"), "CDN");
        assert_eq!(
            join_key("Data:DefaultConnection", "ConnectionString"),
            "Data:DefaultConnection:ConnectionString"
        );
    }

    #[test]
    fn strip_section_requires_segment_boundary() {
        assert_eq!(
            strip_section("keys:applicationinsights:key", "keys"),
            Some("applicationinsights:key")
        );
        assert_eq!(strip_section("keysextra:value", "keys"), None);
        assert_eq!(strip_section("keys", "keys"), None);
    }
}
