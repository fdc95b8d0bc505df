use crate::config::RunConfig;
use crate::contents_client::ContentsClient;
use crate::error::FetchError;
use crate::github::FileDescriptor;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Scripted client for exercising the fetch loop without the network.
pub struct MockContentsClient {
    pub entries: Vec<FileDescriptor>,
    /// Download bodies keyed by download URL.
    pub bodies: HashMap<String, Vec<u8>>,
    /// Fail the listing request instead of returning `entries`.
    pub fail_listing: bool,
    /// Fail the nth download (1-based) after creating an empty file.
    pub fail_download_at: Option<usize>,
    listing_calls: Mutex<usize>,
    download_calls: Mutex<usize>,
}

impl MockContentsClient {
    pub fn new(entries: Vec<FileDescriptor>, bodies: HashMap<String, Vec<u8>>) -> Self {
        Self {
            entries,
            bodies,
            fail_listing: false,
            fail_download_at: None,
            listing_calls: Mutex::new(0),
            download_calls: Mutex::new(0),
        }
    }

    pub fn listing_calls(&self) -> usize {
        *self.listing_calls.lock().unwrap()
    }

    pub fn download_calls(&self) -> usize {
        *self.download_calls.lock().unwrap()
    }
}

/// A real `reqwest::Error`, produced without any network traffic.
fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .expect_err("building a request for an invalid URL fails")
}

impl ContentsClient for MockContentsClient {
    async fn list_directory(
        &self,
        _config: &RunConfig,
    ) -> Result<Vec<FileDescriptor>, FetchError> {
        *self.listing_calls.lock().unwrap() += 1;
        if self.fail_listing {
            return Err(FetchError::ListingRequestFailed(transport_error()));
        }
        Ok(self.entries.clone())
    }

    async fn download_file(
        &self,
        descriptor: &FileDescriptor,
        path: &Path,
    ) -> Result<(), FetchError> {
        let call = {
            let mut calls = self.download_calls.lock().unwrap();
            *calls += 1;
            *calls
        };

        if Some(call) == self.fail_download_at {
            // Simulate a request that died mid-copy: the file was already
            // created but its contents never arrived.
            std::fs::write(path, b"").unwrap();
            return Err(FetchError::CopyFailed {
                name: descriptor.name.clone(),
                source: std::io::Error::other("simulated copy failure"),
            });
        }

        let body = self
            .bodies
            .get(&descriptor.download_url)
            .cloned()
            .unwrap_or_default();
        std::fs::write(path, body).unwrap();
        Ok(())
    }
}
