//! Text and URL normalizers shared by the extractors.

use scraper::ElementRef;

/// Trimmed text content of `element`, or an empty string when absent.
#[must_use]
pub fn element_text(element: Option<ElementRef<'_>>) -> String {
    element
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed value of `attr` on `element`, or `None` when missing or blank.
#[must_use]
pub fn non_empty_attr<'a>(element: ElementRef<'a>, attr: &str) -> Option<&'a str> {
    element
        .value()
        .attr(attr)
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Resolves a link `href` against `origin`.
///
/// - `http://` and `https://` URLs pass through unchanged.
/// - Protocol-relative `//host/path` gets an `https:` scheme.
/// - Root-relative `/path` is prefixed with `origin`.
/// - Anything else (e.g. `dp/B0001`, `?ref=x`) passes through unchanged.
#[must_use]
pub fn absolute_url(href: &str, origin: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    if href.starts_with("//") {
        return format!("https:{href}");
    }
    if href.starts_with('/') {
        return format!("{}{href}", origin.trim_end_matches('/'));
    }
    href.to_string()
}
