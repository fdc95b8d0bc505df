use thiserror::Error;

/// Terminal failures of a fetch run. None are retried; the first one raised
/// aborts the remaining entries and is reported to the caller.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("owner and repository must be non-empty")]
    InvalidConfig,

    #[error("unable to list directory contents")]
    ListingRequestFailed(#[source] reqwest::Error),

    #[error("error decoding listing response")]
    DecodeFailed(#[source] serde_json::Error),

    #[error("error creating file: {name}")]
    FileCreateFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error requesting file: {name}")]
    DownloadRequestFailed {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("error saving file contents: {name}")]
    CopyFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
}
