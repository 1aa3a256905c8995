//! Local or remote location of a dataset resource.

use crate::LoadError;
use log::{debug, info};
use reqwest::{Client, Url};
use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;

/// A file on disk or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceLocation {
    Path(PathBuf),
    Url(Url),
}

impl ResourceLocation {
    /// Treat `http://` and `https://` strings that parse as URLs; everything
    /// else is a path.
    pub fn parse(raw: &str) -> Self {
        if (raw.starts_with("http://") || raw.starts_with("https://"))
            && let Ok(url) = Url::parse(raw)
        {
            return Self::Url(url);
        }
        Self::Path(PathBuf::from(raw))
    }

    /// Read the whole resource in one attempt.
    ///
    /// A missing file maps to [`LoadError::Missing`] and any non-2xx response
    /// to [`LoadError::HttpStatus`].
    pub async fn read(&self, client: &Client) -> Result<Vec<u8>, LoadError> {
        match self {
            Self::Path(path) => {
                debug!("reading dataset file (path={})", path.display());
                tokio::fs::read(path).await.map_err(|err| {
                    if err.kind() == ErrorKind::NotFound {
                        LoadError::Missing(path.display().to_string())
                    } else {
                        LoadError::Io(err)
                    }
                })
            }
            Self::Url(url) => {
                info!("fetching dataset (url={})", url);
                let response = client.get(url.clone()).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::HttpStatus {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                let body = response.bytes().await?;
                debug!("dataset fetched (url={}, bytes={})", url, body.len());
                Ok(body.to_vec())
            }
        }
    }
}

impl fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => write!(f, "{url}"),
        }
    }
}
