use std::time::Duration;

/// Trim a text value and drop it when nothing is left.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

pub(super) fn millis(value: u64) -> Duration {
    Duration::from_millis(value)
}

/// Whether `url` names an `http` or `https` location with a host.
pub(super) fn is_http_url(url: &str) -> bool {
    let Some((scheme, rest)) = url.split_once("://") else {
        return false;
    };
    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    matches!(scheme.to_ascii_lowercase().as_str(), "http" | "https") && !host.is_empty()
}
