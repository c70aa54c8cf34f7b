//! Gravatar avatar URLs.

use md5::{Digest, Md5};

use forumkit_text::is_valid_email;

use crate::error::MediaError;

/// Build the Gravatar image URL for an email address.
///
/// The address is trimmed and lowercased before hashing, as Gravatar
/// requires. `size` is the requested image size in pixels.
pub fn gravatar_url(email: &str, size: u32) -> Result<String, MediaError> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(MediaError::InvalidEmail(email.to_owned()));
    }

    let hash = hex::encode(Md5::digest(email.to_lowercase().as_bytes()));
    Ok(format!(
        "https://www.gravatar.com/avatar/{hash}?size={size}"
    ))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_url_uses_documented_hash() {
        // The reference example from the Gravatar documentation.
        assert_eq!(
            gravatar_url("MyEmailAddress@example.com ", 80).unwrap(),
            "https://www.gravatar.com/avatar/0bc83cb571cd1c50ba6f3e8a78ef1346?size=80"
        );
    }

    #[test]
    fn test_size_parameter() {
        let url = gravatar_url("user@example.com", 256).unwrap();
        assert!(url.ends_with("?size=256"));
    }

    #[test]
    fn test_invalid_email_rejected() {
        assert!(matches!(
            gravatar_url("not-an-email", 80),
            Err(MediaError::InvalidEmail(_))
        ));
    }
}
