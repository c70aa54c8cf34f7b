//! Third-party media platform glue.
//!
//! Thin clients and builders around the platforms the toolkit talks to:
//! YouTube (ID extraction, metadata, embed codes), Vimeo (metadata, embed
//! codes), Imgur uploads, Gravatar URLs and Facebook Graph lookups. All
//! HTTP goes through [`forumkit_net::HttpClient`]; everything else is pure
//! string work.

mod error;
mod facebook;
mod gravatar;
mod imgur;
mod vimeo;
mod youtube;

pub use error::MediaError;
pub use facebook::facebook_details;
pub use gravatar::gravatar_url;
pub use imgur::ImgurClient;
pub use vimeo::{VimeoDetails, VimeoEmbed, vimeo_details};
pub use youtube::{
    PlayerTheme, Thumbnail, YoutubeClient, YoutubeDetails, YoutubeEmbed, extract_video_id,
};

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

/// Characters kept literal in query-string values: RFC 3986 unreserved.
pub(crate) const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
