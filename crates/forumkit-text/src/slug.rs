//! URL-safe slug generation.

/// Convert text to a URL-safe slug.
///
/// Lowercases ASCII alphanumerics, collapses every other run of characters
/// into a single dash, and trims leading/trailing dashes. Text with nothing
/// usable in it yields the placeholder slug `"na"` so callers always get a
/// non-empty path segment.
#[must_use]
pub fn slug(text: &str) -> String {
    let mut result = String::new();
    let mut last_was_dash = true; // Prevents leading dash

    for c in text.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            result.push('-');
            last_was_dash = true;
        }
    }

    // Remove trailing dash if present
    if result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        return "na".to_owned();
    }

    result
}
