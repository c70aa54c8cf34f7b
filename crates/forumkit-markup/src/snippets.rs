//! Small standalone HTML snippet builders.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters kept literal when a URL is embedded as a query-string value:
/// RFC 3986 unreserved characters only.
const QUERY_VALUE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Build a meta-refresh tag that sends the browser to `url` after
/// `seconds` seconds.
///
/// The URL is emitted verbatim; it is the caller's responsibility to pass a
/// well-formed destination.
#[must_use]
pub fn meta_refresh(url: &str, seconds: u32) -> String {
    format!(r#"<meta http-equiv="refresh" content="{seconds}; url={url}" />"#)
}

/// Build an iframe that shows a document through the Google Docs viewer.
///
/// Works for both publicly reachable remote files and locally hosted ones,
/// as long as the viewer can fetch `source`. The source URL is
/// percent-encoded into the viewer query string.
#[must_use]
pub fn docs_viewer_iframe(source: &str, width: u32, height: u32) -> String {
    let encoded = utf8_percent_encode(source, QUERY_VALUE_ENCODE_SET);
    format!(
        r#"<iframe src="https://docs.google.com/gview?url={encoded}&embedded=true" style="width:{width}px; height:{height}px;" frameborder="0"></iframe>"#
    )
}
