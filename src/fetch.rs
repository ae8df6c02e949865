use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// A source of static resources addressed by relative path.
///
/// `Ok(None)` means the source was reachable but the resource is missing
/// (non-success HTTP status, file not found). `Err` means the request itself
/// failed. The loaders collapse both cases into the same fallback text.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<Option<Vec<u8>>>;
}

/// Fetches resources over HTTP relative to a base URL.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(mut base: Url) -> Result<Self> {
        // Relative joins drop the last path segment unless the base ends in '/'
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        let client = reqwest::Client::builder()
            .user_agent("statsboard/0.1")
            .build()?;
        Ok(Self { client, base })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let url = self
            .base
            .join(name)
            .with_context(|| format!("invalid resource path: {name}"))?;
        let resp = self.client.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            tracing::debug!(%url, status = %resp.status(), "resource request returned non-success status");
            return Ok(None);
        }
        Ok(Some(resp.bytes().await?.to_vec()))
    }
}

/// Fetches resources from a local directory, for serving unpacked assets
/// and for tests.
pub struct FileFetcher {
    root: PathBuf,
}

impl FileFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.root.join(name);
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "resource not found");
                Ok(None)
            }
            Err(e) => Err(e).with_context(|| format!("reading resource: {}", path.display())),
        }
    }
}
