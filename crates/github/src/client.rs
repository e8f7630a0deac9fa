//! GitHub REST API client.
//!
//! Async HTTP client using `reqwest`. GitHub rejects requests without a
//! `User-Agent`, so one is always set.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};

use crate::release::{latest_release, select_archive_asset};
use crate::types::{Release, ReleaseAsset};

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const API_VERSION: &str = "2022-11-28";

/// Errors from the GitHub client.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid user agent")]
    InvalidUserAgent,

    #[error("no releases found in {owner}/{repo}")]
    NoReleases { owner: String, repo: String },

    #[error("no archive asset (.zip, .7z, .rar) found in release {tag}")]
    NoArchiveAsset { tag: String },
}

/// GitHub API client.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Creates a new unauthenticated client.
    pub fn new(user_agent: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|_| Error::InvalidUserAgent)?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("x-github-api-version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Sets a custom API base URL (GitHub Enterprise, tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Performs a GET request against the API.
    async fn get(&self, endpoint: &str) -> Result<Vec<u8>, Error> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let resp = self.http.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.bytes().await?.to_vec())
    }

    /// Lists the first page of a repository's releases.
    pub async fn list_releases(&self, owner: &str, repo: &str) -> Result<Vec<Release>, Error> {
        let body = self.get(&format!("/repos/{owner}/{repo}/releases")).await?;
        let releases: Vec<Release> = serde_json::from_slice(&body)?;
        tracing::debug!(owner, repo, count = releases.len(), "listed releases");
        Ok(releases)
    }

    /// Resolves the archive asset of the newest release.
    pub async fn latest_archive(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<(Release, ReleaseAsset), Error> {
        let releases = self.list_releases(owner, repo).await?;

        let release = latest_release(&releases).ok_or_else(|| Error::NoReleases {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })?;

        let asset = select_archive_asset(release).ok_or_else(|| Error::NoArchiveAsset {
            tag: release.tag_name.clone(),
        })?;

        tracing::info!(
            tag = %release.tag_name,
            asset = %asset.name,
            size = asset.size,
            "resolved release asset"
        );
        Ok((release.clone(), asset.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Starts a mock HTTP server that answers one request with `status` and `body`.
    async fn mock_server(status: u16, body: &str) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let url = format!("http://127.0.0.1:{port}");
        let body = body.to_string();

        let handle = tokio::spawn(async move {
            let mut request = String::new();
            if let Ok((mut stream, _)) = listener.accept().await {
                let mut buf = vec![0u8; 8192];
                let n = stream.read(&mut buf).await.unwrap_or(0);
                request = String::from_utf8_lossy(&buf[..n]).into_owned();

                let resp = format!(
                    "HTTP/1.1 {status} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(resp.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
            request
        });

        (url, handle)
    }

    const RELEASES: &str = r#"[
        {"id":2,"tag_name":"v2","name":"v2","draft":false,"prerelease":false,
         "published_at":"2024-05-01T00:00:00Z",
         "assets":[
            {"name":"readme.txt","browser_download_url":"https://example.com/readme.txt","size":10},
            {"name":"P3PBR.zip","browser_download_url":"https://example.com/P3PBR.zip","size":2048},
            {"name":"P3PBR.rar","browser_download_url":"https://example.com/P3PBR.rar","size":2000}
         ]},
        {"id":1,"tag_name":"v1","name":"v1","draft":false,"prerelease":false,
         "published_at":"2024-01-01T00:00:00Z",
         "assets":[{"name":"old.zip","browser_download_url":"https://example.com/old.zip","size":1}]}
    ]"#;

    #[tokio::test]
    async fn list_releases_parses_and_sends_headers() {
        let (url, handle) = mock_server(200, RELEASES).await;

        let client = Client::new("P3P-Installer").unwrap().with_base_url(url);
        let releases = client.list_releases("Hinrong", "P3P-Traduzido").await.unwrap();

        assert_eq!(releases.len(), 2);
        assert_eq!(releases[0].tag_name, "v2");
        assert_eq!(releases[0].assets.len(), 3);

        let request = handle.await.unwrap().to_lowercase();
        assert!(request.starts_with("get /repos/hinrong/p3p-traduzido/releases "));
        assert!(request.contains("user-agent: p3p-installer"));
        assert!(request.contains("accept: application/vnd.github+json"));
    }

    #[tokio::test]
    async fn latest_archive_picks_first_zip_of_newest() {
        let (url, handle) = mock_server(200, RELEASES).await;

        let client = Client::new("P3P-Installer").unwrap().with_base_url(url);
        let (release, asset) = client.latest_archive("Hinrong", "P3P-Traduzido").await.unwrap();

        assert_eq!(release.tag_name, "v2");
        assert_eq!(asset.name, "P3PBR.zip");
        assert_eq!(asset.browser_download_url, "https://example.com/P3PBR.zip");

        handle.abort();
    }

    #[tokio::test]
    async fn latest_archive_empty_list() {
        let (url, handle) = mock_server(200, "[]").await;

        let client = Client::new("P3P-Installer").unwrap().with_base_url(url);
        let err = client.latest_archive("o", "r").await.unwrap_err();
        assert!(matches!(err, Error::NoReleases { .. }), "got {err:?}");

        handle.abort();
    }

    #[tokio::test]
    async fn latest_archive_without_archive_asset() {
        let json = r#"[{"tag_name":"v1","published_at":"2024-01-01T00:00:00Z",
            "assets":[{"name":"notes.txt","browser_download_url":"https://example.com/notes.txt"}]}]"#;
        let (url, handle) = mock_server(200, json).await;

        let client = Client::new("P3P-Installer").unwrap().with_base_url(url);
        let err = client.latest_archive("o", "r").await.unwrap_err();
        match err {
            Error::NoArchiveAsset { tag } => assert_eq!(tag, "v1"),
            other => panic!("unexpected error: {other:?}"),
        }

        handle.abort();
    }

    #[tokio::test]
    async fn api_error_status() {
        let (url, handle) = mock_server(404, r#"{"message":"Not Found"}"#).await;

        let client = Client::new("P3P-Installer").unwrap().with_base_url(url);
        let err = client.list_releases("o", "missing").await.unwrap_err();
        let err_msg = err.to_string();
        assert!(err_msg.contains("404"), "error should mention 404: {err_msg}");

        handle.abort();
    }

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = Client::new("P3P-Installer")
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(client.base_url, "http://localhost:1234");
    }

    #[test]
    fn invalid_user_agent_rejected() {
        assert!(matches!(
            Client::new("bad\nagent"),
            Err(Error::InvalidUserAgent)
        ));
    }
}
