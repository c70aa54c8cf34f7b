//! Vimeo helpers: metadata fetch and embed codes.

use serde::Deserialize;
use tracing::debug;

use forumkit_net::HttpClient;

use crate::error::MediaError;

/// Video metadata from the Vimeo simple API (`/api/v2/video/{id}.json`).
///
/// The endpoint is keyless and only serves public videos.
#[derive(Debug, Clone, Deserialize)]
pub struct VimeoDetails {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub upload_date: String,
    /// Video length in seconds.
    pub duration: u64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    pub user_name: String,
    pub user_url: String,
    #[serde(default)]
    pub thumbnail_small: String,
    #[serde(default)]
    pub thumbnail_medium: String,
    #[serde(default)]
    pub thumbnail_large: String,
    #[serde(default)]
    pub stats_number_of_plays: Option<u64>,
    #[serde(default)]
    pub stats_number_of_likes: Option<u64>,
    #[serde(default)]
    pub stats_number_of_comments: Option<u64>,
}

/// Fetch title, user, upload date, duration, counters and thumbnails of a
/// public Vimeo video.
pub fn vimeo_details(client: &HttpClient, video_id: u64) -> Result<VimeoDetails, MediaError> {
    debug!("Fetching Vimeo details for {video_id}");

    let url = format!("https://vimeo.com/api/v2/video/{video_id}.json");

    // The simple API wraps the single video in a one-element array.
    let mut videos: Vec<VimeoDetails> = client.get_json(&url)?;
    if videos.is_empty() {
        return Err(MediaError::VideoNotFound(video_id.to_string()));
    }
    Ok(videos.swap_remove(0))
}

/// Builder for Vimeo iframe embed codes.
///
/// Defaults: 500x281, no autoplay, player default control color, byline,
/// portrait and title hidden.
#[derive(Debug, Clone)]
pub struct VimeoEmbed {
    width: u32,
    height: u32,
    autoplay: bool,
    color: Option<String>,
    byline: bool,
    portrait: bool,
    title: bool,
}

impl Default for VimeoEmbed {
    fn default() -> Self {
        Self::new()
    }
}

impl VimeoEmbed {
    /// Create a builder with default player settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 500,
            height: 281,
            autoplay: false,
            color: None,
            byline: false,
            portrait: false,
            title: false,
        }
    }

    /// Set the iframe size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Start playback automatically.
    #[must_use]
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Set the player control color as a hex code without the leading `#`
    /// (e.g. `00adef`).
    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Show or hide the uploader byline.
    #[must_use]
    pub fn byline(mut self, enabled: bool) -> Self {
        self.byline = enabled;
        self
    }

    /// Show or hide the uploader portrait.
    #[must_use]
    pub fn portrait(mut self, enabled: bool) -> Self {
        self.portrait = enabled;
        self
    }

    /// Show or hide the video title overlay.
    #[must_use]
    pub fn title(mut self, enabled: bool) -> Self {
        self.title = enabled;
        self
    }

    /// Build the iframe embed code for `video_id`.
    #[must_use]
    pub fn iframe(&self, video_id: u64) -> String {
        let mut url = format!("//player.vimeo.com/video/{video_id}/?");

        if self.autoplay {
            url.push_str("autoplay=1&");
        }
        if let Some(color) = &self.color {
            url.push_str("color=");
            url.push_str(color);
            url.push('&');
        }
        if !self.byline {
            url.push_str("byline=0&");
        }
        if !self.portrait {
            url.push_str("portrait=0&");
        }
        if !self.title {
            url.push_str("title=0&");
        }

        format!(
            r#"<iframe src="{url}" width="{}" height="{}" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#,
            self.width, self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_embed_defaults() {
        assert_eq!(
            VimeoEmbed::new().iframe(76979871),
            r#"<iframe src="//player.vimeo.com/video/76979871/?byline=0&portrait=0&title=0&" width="500" height="281" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
        );
    }

    #[test]
    fn test_embed_all_toggles() {
        let html = VimeoEmbed::new()
            .size(640, 360)
            .autoplay(true)
            .color("00adef")
            .byline(true)
            .portrait(true)
            .title(true)
            .iframe(76979871);
        assert_eq!(
            html,
            r#"<iframe src="//player.vimeo.com/video/76979871/?autoplay=1&color=00adef&" width="640" height="360" frameborder="0" webkitallowfullscreen mozallowfullscreen allowfullscreen></iframe>"#
        );
    }

    #[test]
    fn test_details_deserialization() {
        let json = r#"[{
            "id": 76979871,
            "title": "A video",
            "description": "About things",
            "url": "https://vimeo.com/76979871",
            "upload_date": "2013-10-16 10:52:03",
            "duration": 206,
            "width": 1280,
            "height": 720,
            "user_name": "Someone",
            "user_url": "https://vimeo.com/someone",
            "thumbnail_small": "https://i.vimeocdn.com/video/small.jpg",
            "thumbnail_medium": "https://i.vimeocdn.com/video/medium.jpg",
            "thumbnail_large": "https://i.vimeocdn.com/video/large.jpg",
            "stats_number_of_plays": 100,
            "stats_number_of_likes": 10,
            "stats_number_of_comments": 3
        }]"#;

        let videos: Vec<VimeoDetails> = serde_json::from_str(json).unwrap();
        let video = &videos[0];
        assert_eq!(video.id, 76979871);
        assert_eq!(video.title, "A video");
        assert_eq!(video.duration, 206);
        assert_eq!(video.user_name, "Someone");
        assert_eq!(video.stats_number_of_plays, Some(100));
    }
}
