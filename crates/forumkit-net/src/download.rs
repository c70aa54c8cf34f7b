//! Remote file download to local disk.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use forumkit_text::{Charset, random_string};

use crate::client::HttpClient;
use crate::error::FetchError;

/// Error from downloading a remote file.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DownloadError {
    /// Fetching the remote file failed.
    #[error("fetch failed")]
    Fetch(#[from] FetchError),

    /// The URL path carries no file extension to name the local file with.
    #[error("no file extension in URL: {0}")]
    MissingExtension(String),

    /// Writing the file to disk failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Download `url` into `directory` and return the path written.
///
/// The local file keeps the extension of the URL path. Its stem is `name`
/// when given, otherwise a random numeric one. An existing file is never
/// overwritten; on collision a timestamp suffix is appended to the stem.
///
/// The target directory must already exist.
pub fn download_file(
    client: &HttpClient,
    url: &str,
    directory: &Path,
    name: Option<&str>,
) -> Result<PathBuf, DownloadError> {
    let extension =
        url_extension(url).ok_or_else(|| DownloadError::MissingExtension(url.to_owned()))?;

    let data = client.get_bytes(url)?;

    let stem = name.map_or_else(|| random_string(12, Charset::Numeric), str::to_owned);
    let path = unique_path(directory, &stem, extension);

    fs::write(&path, &data)?;
    info!("Downloaded {} ({} bytes) to {}", url, data.len(), path.display());

    Ok(path)
}

/// Extension of the file the URL path points at, query and fragment
/// stripped.
fn url_extension(url: &str) -> Option<&str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let (_, extension) = path.rsplit_once('.')?;

    if extension.is_empty() || extension.contains('/') {
        return None;
    }

    Some(extension)
}

/// Join `directory/stem.extension`, disambiguating with a timestamp suffix
/// when that file already exists.
fn unique_path(directory: &Path, stem: &str, extension: &str) -> PathBuf {
    let path = directory.join(format!("{stem}.{extension}"));
    if !path.exists() {
        return path;
    }

    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros())
        .unwrap_or_default();
    directory.join(format!("{stem}-{micros}.{extension}"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_url_extension() {
        assert_eq!(url_extension("http://x.com/a/photo.png"), Some("png"));
        assert_eq!(url_extension("http://x.com/file.tar.gz"), Some("gz"));
    }

    #[test]
    fn test_url_extension_strips_query_and_fragment() {
        assert_eq!(url_extension("http://x.com/a.jpg?w=100&h=50"), Some("jpg"));
        assert_eq!(url_extension("http://x.com/a.jpg#top"), Some("jpg"));
    }

    #[test]
    fn test_url_extension_absent() {
        assert_eq!(url_extension("http://x.com/path/file"), None);
        assert_eq!(url_extension("http://x.com/dir."), None);
    }

    #[test]
    fn test_unique_path_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let path = unique_path(dir.path(), "photo", "png");
        assert_eq!(path, dir.path().join("photo.png"));
    }

    #[test]
    fn test_unique_path_collision() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("photo.png"), b"existing").unwrap();

        let path = unique_path(dir.path(), "photo", "png");
        assert_ne!(path, dir.path().join("photo.png"));

        let filename = path.file_name().unwrap().to_str().unwrap().to_owned();
        assert!(filename.starts_with("photo-"));
        assert!(filename.ends_with(".png"));
    }
}
