//! Email address validation.

use std::sync::LazyLock;

use regex::Regex;

/// WHATWG HTML5 `input[type=email]` validation pattern.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        ^[a-zA-Z0-9.!\#$%&'*+/=?^_`{|}~-]+
        @[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?
        (?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Check whether `email` is a syntactically valid address.
///
/// Uses the HTML5 form-validation grammar: permissive on the local part,
/// hostname-shaped on the domain. No DNS or deliverability check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
