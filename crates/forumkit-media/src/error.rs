//! Error types for media platform operations.

use forumkit_net::FetchError;

/// Error from a media platform client.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum MediaError {
    /// HTTP fetch failed.
    #[error("fetch failed")]
    Fetch(#[from] FetchError),

    /// The platform knows no video with this ID.
    #[error("video not found: {0}")]
    VideoNotFound(String),

    /// The image host refused the upload.
    #[error("upload rejected: {0}")]
    UploadRejected(String),

    /// A required API credential (key or client ID) was empty.
    #[error("API credential required")]
    MissingCredential,

    /// The email address failed validation.
    #[error("invalid email address: {0}")]
    InvalidEmail(String),
}
