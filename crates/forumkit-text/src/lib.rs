//! Text utilities shared across forumkit.
//!
//! Pure string helpers: truncation by characters or words, URL slugs,
//! random string generation, and email validation. Nothing in this crate
//! touches the network or the filesystem.

mod email;
mod limit;
mod random;
mod slug;

pub use email::is_valid_email;
pub use limit::{LimitBy, limit_text};
pub use random::{Charset, random_string};
pub use slug::slug;

/// Compare two strings for equality.
///
/// Thin convenience kept for API parity with the historical toolkit. This
/// is a plain comparison, not a constant-time one; do not use it to check
/// password hashes or other secrets.
#[must_use]
pub fn compare(first: &str, second: &str) -> bool {
    first == second
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare() {
        assert!(compare("abc", "abc"));
        assert!(!compare("abc", "abd"));
        assert!(!compare("abc", ""));
    }
}
