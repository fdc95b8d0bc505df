use crate::config::RunConfig;
use crate::contents_client::ContentsClient;
use crate::error::FetchError;
use std::path::Path;

/// Lists one repository directory and either prints the listing (dry run) or
/// downloads every listed entry into the local target directory.
///
/// The run is strictly sequential: each entry completes before the next one
/// starts, and the first failure aborts the remainder. A download that fails
/// mid-copy leaves its partially written file on disk.
pub async fn fetch_directory<C: ContentsClient>(
    config: &RunConfig,
    client: &C,
) -> Result<(), FetchError> {
    config.validate()?;

    let entries = client.list_directory(config).await?;

    if config.dry_run {
        // Directory entries are printed along with files; nothing is
        // recursed into.
        for entry in &entries {
            tracing::info!("{} {}", entry.name, entry.size);
        }
        return Ok(());
    }

    let target_dir = config.target_dir();
    ensure_target_dir(&target_dir);

    for entry in &entries {
        let path = target_dir.join(&entry.name);
        client.download_file(entry, &path).await?;
        tracing::debug!("Saved {}", path.display());
    }

    Ok(())
}

/// Single-level create; missing parents are not created. An existing entry of
/// any kind is accepted, and a create failure is not itself fatal — the file
/// create that follows reports it.
fn ensure_target_dir(path: &Path) {
    if path.exists() {
        return;
    }
    if let Err(e) = std::fs::create_dir(path) {
        tracing::debug!("Could not create {}: {}", path.display(), e);
    }
}
