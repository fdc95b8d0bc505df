use crate::config::RunConfig;
use crate::error::FetchError;
use crate::github::FileDescriptor;
use std::path::Path;

pub trait ContentsClient {
    /// Fetch and decode the directory listing addressed by `config`.
    fn list_directory(
        &self,
        config: &RunConfig,
    ) -> impl Future<Output = Result<Vec<FileDescriptor>, FetchError>> + Send;

    /// Download one listed file to `path`, creating or truncating it.
    fn download_file(
        &self,
        descriptor: &FileDescriptor,
        path: &Path,
    ) -> impl Future<Output = Result<(), FetchError>> + Send;
}
