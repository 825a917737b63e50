use std::{error::Error, fmt::Display, io, path::PathBuf};

use reqwest::Client;
use tokio::task::JoinError;
use url::Url;

/// Where the playlist text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistSource {
    Remote(Url),
    Local(PathBuf),
}

impl PlaylistSource {
    /// `http(s)://` locations are fetched, anything else is read from disk
    pub fn from_location(location: impl AsRef<str>) -> Self {
        let location = location.as_ref();
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Remote(url),
            _ => Self::Local(PathBuf::from(location)),
        }
    }

    pub async fn fetch_text(&self, http_client: &Client) -> Result<String, FetchError> {
        match self {
            Self::Remote(url) => {
                let response = http_client.get(url.clone()).send().await?;
                if !response.status().is_success() {
                    return Err(FetchError::RequestNotSuccess(response.status().as_u16()));
                }
                Ok(response.text().await?)
            }
            Self::Local(path) => {
                let text = tokio::fs::read_to_string(path).await?;
                // reqwest drops the byte order mark on remote text, do the same here
                match text.strip_prefix('\u{feff}') {
                    Some(stripped) => Ok(stripped.to_owned()),
                    None => Ok(text),
                }
            }
        }
    }
}

impl Display for PlaylistSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote(url) => url.fmt(f),
            Self::Local(path) => path.display().fmt(f),
        }
    }
}

#[derive(Debug)]
pub enum FetchError {
    RequestError(reqwest::Error),
    RequestNotSuccess(u16),
    IoError(io::Error),
    JoinError(JoinError),
}

impl FetchError {
    /// Whether the playlist origin is at fault rather than this service
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Self::JoinError(_))
    }
}

impl Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestError(e) => e.fmt(f),
            Self::RequestNotSuccess(status_code) => {
                write!(f, "Server respond with status code {}", status_code)
            }
            Self::IoError(e) => e.fmt(f),
            Self::JoinError(e) => e.fmt(f),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<io::Error> for FetchError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

impl From<JoinError> for FetchError {
    fn from(value: JoinError) -> Self {
        Self::JoinError(value)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use reqwest::Client;

    use crate::transfer::{FetchError, PlaylistSource};

    #[test]
    fn source_from_location() {
        assert!(matches!(
            PlaylistSource::from_location("https://example.com/a.m3u"),
            PlaylistSource::Remote(_)
        ));
        assert_eq!(
            PlaylistSource::from_location("./lists/a.m3u"),
            PlaylistSource::Local(PathBuf::from("./lists/a.m3u"))
        );
        assert!(matches!(
            PlaylistSource::from_location("file:///tmp/a.m3u"),
            PlaylistSource::Local(_)
        ));
    }

    #[tokio::test]
    async fn fetch_local() {
        let path = std::env::temp_dir().join(format!("vodstream-fetch-{}.m3u", std::process::id()));
        tokio::fs::write(&path, "#EXTINF:-1,A\nhttp://a\n").await.unwrap();

        let text = PlaylistSource::Local(path.clone())
            .fetch_text(&Client::new())
            .await
            .unwrap();
        assert_eq!(text, "#EXTINF:-1,A\nhttp://a\n");

        _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn fetch_local_with_bom() {
        let path = std::env::temp_dir().join(format!("vodstream-bom-{}.m3u", std::process::id()));
        tokio::fs::write(&path, "\u{feff}#EXTINF:-1,A\nhttp://a\n")
            .await
            .unwrap();

        let text = PlaylistSource::Local(path.clone())
            .fetch_text(&Client::new())
            .await
            .unwrap();
        assert!(text.starts_with("#EXTINF"));
        assert_eq!(vodlist_rs::parse(text).len(), 1);

        _ = tokio::fs::remove_file(path).await;
    }

    #[tokio::test]
    async fn fetch_missing_file() {
        let result = PlaylistSource::Local(PathBuf::from("/nonexistent/vodstream.m3u"))
            .fetch_text(&Client::new())
            .await;

        let e = result.unwrap_err();
        assert!(matches!(e, FetchError::IoError(_)));
        assert!(e.is_upstream());
    }
}
