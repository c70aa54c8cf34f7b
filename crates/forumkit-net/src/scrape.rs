//! Page title and meta tag extraction.
//!
//! Regex-based scraping of the two document fields the toolkit cares
//! about. This is intentionally not an HTML parser; pages with exotic
//! markup may not match.

use std::sync::LazyLock;

use regex::Regex;

use crate::client::HttpClient;
use crate::error::FetchError;

/// `<title>` element, first occurrence.
static TITLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// Any `<meta ...>` tag.
static META_TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?is)<meta\b[^>]*>").unwrap());

/// `name=` or `property=` attribute inside a meta tag.
static META_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\b(?:name|property)\s*=\s*["']([^"']+)["']"#).unwrap());

/// `content=` attribute inside a meta tag.
static META_CONTENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)\bcontent\s*=\s*["']([^"']*)["']"#).unwrap());

/// Extract the first `<title>` from an HTML document.
#[must_use]
pub fn extract_title(html: &str) -> Option<String> {
    TITLE_PATTERN
        .captures(html)
        .map(|caps| caps[1].trim().to_owned())
}

/// Extract the `content` of the first `<meta>` tag whose `name` or
/// `property` attribute equals `name` (ASCII case-insensitive).
#[must_use]
pub fn extract_meta(html: &str, name: &str) -> Option<String> {
    for tag in META_TAG_PATTERN.find_iter(html) {
        let tag = tag.as_str();

        let Some(name_caps) = META_NAME_PATTERN.captures(tag) else {
            continue;
        };
        if !name_caps[1].eq_ignore_ascii_case(name) {
            continue;
        }

        if let Some(content_caps) = META_CONTENT_PATTERN.captures(tag) {
            return Some(content_caps[1].to_owned());
        }
    }

    None
}

/// Fetch `url` and return its page title, if the document has one.
pub fn page_title(client: &HttpClient, url: &str) -> Result<Option<String>, FetchError> {
    let html = client.get_text(url)?;
    Ok(extract_title(&html))
}

/// Fetch `url` and return the content of the named meta tag, if present.
pub fn page_meta(client: &HttpClient, url: &str, name: &str) -> Result<Option<String>, FetchError> {
    let html = client.get_text(url)?;
    Ok(extract_meta(&html, name))
}
