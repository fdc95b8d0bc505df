pub mod config;
pub mod contents_client;
pub mod error;
pub mod fetcher;
pub mod github;
pub mod logging;

#[cfg(test)]
pub mod test_helpers;
