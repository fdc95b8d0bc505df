use tracing::level_filters::LevelFilter;

/// Message-only output on stdout: no timestamps, levels, or targets.
/// Listing lines and error reports share the same stream.
pub fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(false)
        .without_time()
        .with_max_level(LevelFilter::INFO)
        .init();
}
