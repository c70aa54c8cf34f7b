//! YouTube helpers: video ID extraction, metadata fetch and embed codes.

use std::collections::HashMap;
use std::sync::LazyLock;

use percent_encoding::utf8_percent_encode;
use regex::Regex;
use serde::Deserialize;
use tracing::debug;

use forumkit_net::HttpClient;

use crate::QUERY_VALUE_ENCODE_SET;
use crate::error::MediaError;

/// Ordered contextual patterns a video ID is recognized by. Tried first to
/// last; the first capture wins. Covers watch URLs (`v=`/`vi=`), legacy
/// `/v/` and `/vi/` paths, embed codes and short `youtu.be` links.
static ID_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"vi?=([A-Za-z0-9_-]+)&",
        r"vi/([A-Za-z0-9_-]+)",
        r"v/([A-Za-z0-9_-]+)",
        r"vi?=([A-Za-z0-9_-]+)",
        r"embed/([A-Za-z0-9_-]+)",
        r"youtu\.be/([A-Za-z0-9_-]+)",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).unwrap())
    .collect()
});

/// Extract a YouTube video ID from a URL or embed code.
///
/// Returns `None` when no known URL shape matches; callers must handle the
/// absent case rather than assume an ID is always present.
#[must_use]
pub fn extract_video_id(input: &str) -> Option<&str> {
    let input = input.trim();

    ID_PATTERNS.iter().find_map(|pattern| {
        pattern
            .captures(input)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
    })
}

/// Player chrome theme for [`YoutubeEmbed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerTheme {
    Dark,
    Light,
}

/// Builder for YouTube iframe embed codes.
///
/// Uses the privacy-enhanced `youtube-nocookie.com` player. Defaults:
/// 640x360, dark theme, no autoplay, player controls and video details
/// shown, related videos hidden.
#[derive(Debug, Clone)]
pub struct YoutubeEmbed {
    width: u32,
    height: u32,
    theme: PlayerTheme,
    autoplay: bool,
    controls: bool,
    show_details: bool,
    show_suggested: bool,
}

impl Default for YoutubeEmbed {
    fn default() -> Self {
        Self::new()
    }
}

impl YoutubeEmbed {
    /// Create a builder with default player settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 640,
            height: 360,
            theme: PlayerTheme::Dark,
            autoplay: false,
            controls: true,
            show_details: true,
            show_suggested: false,
        }
    }

    /// Set the iframe size in pixels.
    #[must_use]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the player chrome theme.
    #[must_use]
    pub fn theme(mut self, theme: PlayerTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Start playback automatically.
    #[must_use]
    pub fn autoplay(mut self, enabled: bool) -> Self {
        self.autoplay = enabled;
        self
    }

    /// Show or hide the player controls.
    #[must_use]
    pub fn controls(mut self, enabled: bool) -> Self {
        self.controls = enabled;
        self
    }

    /// Show or hide the title and uploader details.
    #[must_use]
    pub fn show_details(mut self, enabled: bool) -> Self {
        self.show_details = enabled;
        self
    }

    /// Show or hide suggested videos when playback ends.
    #[must_use]
    pub fn show_suggested(mut self, enabled: bool) -> Self {
        self.show_suggested = enabled;
        self
    }

    /// Build the iframe embed code for `video_id`.
    #[must_use]
    pub fn iframe(&self, video_id: &str) -> String {
        let mut url = format!("//www.youtube-nocookie.com/embed/{}?", video_id.trim());

        url.push_str(match self.theme {
            PlayerTheme::Dark => "theme=dark&",
            PlayerTheme::Light => "theme=light&",
        });
        if self.autoplay {
            url.push_str("autoplay=1&");
        }
        if !self.controls {
            url.push_str("controls=0&");
        }
        if !self.show_details {
            url.push_str("showinfo=0&");
        }
        if !self.show_suggested {
            url.push_str("rel=0&");
        }

        format!(
            r#"<iframe width="{}" height="{}" src="{url}" frameborder="0" allowfullscreen></iframe>"#,
            self.width, self.height
        )
    }
}

/// A single thumbnail rendition.
#[derive(Debug, Clone, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

/// Video metadata reshaped from the YouTube Data API response.
#[derive(Debug, Clone)]
pub struct YoutubeDetails {
    /// Video title.
    pub title: String,
    /// Channel name the video was published under.
    pub author: String,
    /// Publish timestamp (RFC 3339).
    pub published: String,
    /// Video length as an ISO 8601 duration (e.g. `PT4M13S`).
    pub duration: String,
    /// Total view count, when the API exposes it.
    pub view_count: Option<u64>,
    /// Like count, when the API exposes it.
    pub like_count: Option<u64>,
    /// Thumbnail renditions keyed by size name (`default`, `medium`, ...).
    pub thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    snippet: VideoSnippet,
    content_details: VideoContentDetails,
    #[serde(default)]
    statistics: VideoStatistics,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoSnippet {
    title: String,
    channel_title: String,
    published_at: String,
    #[serde(default)]
    thumbnails: HashMap<String, Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct VideoContentDetails {
    duration: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoStatistics {
    // The API serves counters as decimal strings.
    #[serde(default)]
    view_count: Option<String>,
    #[serde(default)]
    like_count: Option<String>,
}

/// YouTube Data API v3 client.
pub struct YoutubeClient {
    client: HttpClient,
    api_key: String,
}

impl YoutubeClient {
    /// Create a client with an API key from the Google developer console.
    /// Fails with [`MediaError::MissingCredential`] when `api_key` is
    /// empty.
    pub fn new(client: HttpClient, api_key: impl Into<String>) -> Result<Self, MediaError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(MediaError::MissingCredential);
        }

        Ok(Self { client, api_key })
    }

    /// Fetch title, author, publish date, duration, counters and
    /// thumbnails of a video.
    pub fn video_details(&self, video_id: &str) -> Result<YoutubeDetails, MediaError> {
        debug!("Fetching YouTube details for {video_id}");

        let url = format!(
            "https://www.googleapis.com/youtube/v3/videos?part=snippet,contentDetails,statistics&id={}&key={}",
            utf8_percent_encode(video_id.trim(), QUERY_VALUE_ENCODE_SET),
            utf8_percent_encode(&self.api_key, QUERY_VALUE_ENCODE_SET),
        );

        let response: VideoListResponse = self.client.get_json(&url)?;
        let item = response
            .items
            .into_iter()
            .next()
            .ok_or_else(|| MediaError::VideoNotFound(video_id.to_owned()))?;

        Ok(YoutubeDetails {
            title: item.snippet.title,
            author: item.snippet.channel_title,
            published: item.snippet.published_at,
            duration: item.content_details.duration,
            view_count: item.statistics.view_count.and_then(|c| c.parse().ok()),
            like_count: item.statistics.like_count.and_then(|c| c.parse().ok()),
            thumbnails: item.snippet.thumbnails,
        })
    }
}
