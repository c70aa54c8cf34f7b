//! Synchronous HTTP plumbing for forumkit.
//!
//! [`HttpClient`] wraps a [`ureq::Agent`] behind a small fetch surface
//! (text, bytes, JSON, form POST) used by the scraping helpers here and by
//! the platform clients in `forumkit-media`. There is no retry or caching
//! layer; a request either succeeds or surfaces a [`FetchError`].

mod client;
mod download;
mod error;
mod scrape;

pub use client::HttpClient;
pub use download::{DownloadError, download_file};
pub use error::FetchError;
pub use scrape::{extract_meta, extract_title, page_meta, page_title};
