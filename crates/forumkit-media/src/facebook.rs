//! Facebook Graph API object lookup.

use percent_encoding::utf8_percent_encode;
use serde_json::Value;
use tracing::debug;

use forumkit_net::HttpClient;

use crate::QUERY_VALUE_ENCODE_SET;
use crate::error::MediaError;

/// Fetch all public details of a Facebook page or user from the Graph API.
///
/// The raw JSON object is returned as-is; the Graph API's field set varies
/// with object type and token permissions, so no fixed shape is imposed.
pub fn facebook_details(
    client: &HttpClient,
    object_id: &str,
    access_token: Option<&str>,
) -> Result<Value, MediaError> {
    debug!("Fetching Graph object {object_id}");

    let mut url = format!(
        "https://graph.facebook.com/{}",
        utf8_percent_encode(object_id, QUERY_VALUE_ENCODE_SET)
    );
    if let Some(token) = access_token {
        url.push_str("?access_token=");
        url.push_str(&utf8_percent_encode(token, QUERY_VALUE_ENCODE_SET).to_string());
    }

    Ok(client.get_json(&url)?)
}
