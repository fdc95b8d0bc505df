use crate::error::FetchError;
use std::path::PathBuf;

/// Immutable configuration for one fetch run, captured once at startup.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// GitHub user or organization that owns the repository.
    pub owner: String,

    /// Repository name.
    pub repository: String,

    /// Path within the repository to list; empty means the repository root.
    pub subdirectory: String,

    /// When true, only print the listing; nothing is downloaded or written.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), FetchError> {
        if self.owner.is_empty() || self.repository.is_empty() {
            return Err(FetchError::InvalidConfig);
        }
        Ok(())
    }

    /// Local directory downloads are written into. Mirrors the remote
    /// subdirectory relative to the working directory; the repository root
    /// maps to the working directory itself.
    pub fn target_dir(&self) -> PathBuf {
        if self.subdirectory.is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(&self.subdirectory)
        }
    }
}
