use crate::config::RunConfig;
use crate::contents_client::ContentsClient;
use crate::error::FetchError;
use futures_util::StreamExt;
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use url::Url;

const GITHUB_API_BASE: &str = "https://api.github.com";

// The GitHub API rejects requests without a user agent.
const USER_AGENT: &str = concat!("ghdir/", env!("CARGO_PKG_VERSION"));

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    /// Entry kind as reported by the API, at least `"file"` or `"dir"`.
    /// Directory entries are iterated like files but never recursed into.
    pub entry_type: String,
    pub name: String,
    /// Byte count, informational only.
    pub size: u64,
    /// Absolute raw-content URL; empty for non-file entries.
    pub download_url: String,
}

/// Matches the GitHub contents API JSON for a single directory entry
#[derive(Debug, Clone, Deserialize)]
struct ContentEntryJson {
    #[serde(rename = "type")]
    entry_type: String,
    name: String,
    size: u64,
    download_url: Option<String>,
}

impl FileDescriptor {
    fn from_json_struct(json: ContentEntryJson) -> Self {
        FileDescriptor {
            entry_type: json.entry_type,
            name: json.name,
            size: json.size,
            download_url: json.download_url.unwrap_or_default(),
        }
    }
}

/// Decodes a listing response body, preserving the order the API returned.
/// The body is decoded whatever the HTTP status was; an API error page
/// simply fails to parse as an entry array.
fn decode_listing(body: &str) -> Result<Vec<FileDescriptor>, FetchError> {
    let entries: Vec<ContentEntryJson> =
        serde_json::from_str(body).map_err(FetchError::DecodeFailed)?;
    Ok(entries
        .into_iter()
        .map(FileDescriptor::from_json_struct)
        .collect())
}

pub struct GitHubClient {
    client: Client,
    api_base: Url,
}

impl GitHubClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");
        let api_base = Url::parse(GITHUB_API_BASE).expect("API base URL is valid");
        Self { client, api_base }
    }

    /// `GET /repos/{owner}/{repository}/contents/{subdirectory}`, with the
    /// subdirectory split into percent-encoded segments. An empty
    /// subdirectory addresses the repository root.
    fn listing_url(&self, config: &RunConfig) -> Url {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .expect("API base URL has a path")
            .extend([
                "repos",
                config.owner.as_str(),
                config.repository.as_str(),
                "contents",
            ])
            .extend(config.subdirectory.split('/').filter(|s| !s.is_empty()));
        url
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentsClient for GitHubClient {
    async fn list_directory(
        &self,
        config: &RunConfig,
    ) -> Result<Vec<FileDescriptor>, FetchError> {
        let url = self.listing_url(config);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(FetchError::ListingRequestFailed)?;
        let body = response
            .text()
            .await
            .map_err(FetchError::ListingRequestFailed)?;
        decode_listing(&body)
    }

    async fn download_file(
        &self,
        descriptor: &FileDescriptor,
        path: &Path,
    ) -> Result<(), FetchError> {
        // The file is created before the request goes out, so a failed
        // download leaves an empty or partial file behind.
        let mut file = tokio::fs::File::create(path).await.map_err(|e| {
            FetchError::FileCreateFailed {
                name: descriptor.name.clone(),
                source: e,
            }
        })?;

        let response = self
            .client
            .get(&descriptor.download_url)
            .send()
            .await
            .map_err(|e| FetchError::DownloadRequestFailed {
                name: descriptor.name.clone(),
                source: e,
            })?;

        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::CopyFailed {
                name: descriptor.name.clone(),
                source: std::io::Error::other(e),
            })?;
            file.write_all(&chunk)
                .await
                .map_err(|e| FetchError::CopyFailed {
                    name: descriptor.name.clone(),
                    source: e,
                })?;
        }

        file.flush().await.map_err(|e| FetchError::CopyFailed {
            name: descriptor.name.clone(),
            source: e,
        })?;
        Ok(())
    }
}
