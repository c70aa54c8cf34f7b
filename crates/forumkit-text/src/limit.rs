//! Text truncation.

use std::sync::LazyLock;

use regex::Regex;

/// Matches HTML/XML tags, stripped before measuring length.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").unwrap());

/// Unit used by [`limit_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitBy {
    /// Limit by number of characters (Unicode scalar values, not bytes).
    Characters,
    /// Limit by number of whitespace-separated words.
    Words,
}

/// Limit `text` to at most `max` characters or words.
///
/// Markup tags are stripped before the limit is applied. Character
/// truncation counts `char`s, never splitting a multi-byte sequence. Word
/// truncation joins the first `max` whitespace-separated words with single
/// spaces; input with fewer words is returned whole, whitespace intact.
#[must_use]
pub fn limit_text(text: &str, max: usize, by: LimitBy) -> String {
    let text = TAG_PATTERN.replace_all(text, "");

    match by {
        LimitBy::Characters => text.chars().take(max).collect(),
        LimitBy::Words => {
            let words: Vec<&str> = text.split_whitespace().collect();
            if words.len() < max {
                text.into_owned()
            } else {
                words[..max].join(" ")
            }
        }
    }
}
