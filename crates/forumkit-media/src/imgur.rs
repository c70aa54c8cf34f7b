//! Imgur image uploads.

use serde::Deserialize;
use tracing::info;

use forumkit_net::HttpClient;

use crate::error::MediaError;

const UPLOAD_ENDPOINT: &str = "https://api.imgur.com/3/image.json";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    success: bool,
    #[serde(default)]
    data: UploadData,
}

#[derive(Debug, Default, Deserialize)]
struct UploadData {
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Imgur anonymous upload client.
///
/// Uploads are tied to an application client ID, registered at
/// <https://api.imgur.com/oauth2/addclient>.
pub struct ImgurClient {
    client: HttpClient,
    client_id: String,
}

impl ImgurClient {
    /// Create a client. Fails with [`MediaError::MissingCredential`] when
    /// `client_id` is empty.
    pub fn new(client: HttpClient, client_id: impl Into<String>) -> Result<Self, MediaError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(MediaError::MissingCredential);
        }

        Ok(Self { client, client_id })
    }

    /// Upload the image at `image_url` (fetched by Imgur itself) and
    /// return the hosted image link.
    pub fn upload_url(&self, image_url: &str) -> Result<String, MediaError> {
        info!("Uploading {} to Imgur", image_url);

        let auth = format!("Client-ID {}", self.client_id);
        let response: UploadResponse = self.client.post_form_json(
            UPLOAD_ENDPOINT,
            &[("Authorization", &auth)],
            &[("image", image_url)],
        )?;

        if !response.success {
            let detail = response
                .data
                .error
                .map_or_else(|| "unknown error".to_owned(), |e| e.to_string());
            return Err(MediaError::UploadRejected(detail));
        }

        response
            .data
            .link
            .ok_or_else(|| MediaError::UploadRejected("response carried no link".to_owned()))
    }
}
