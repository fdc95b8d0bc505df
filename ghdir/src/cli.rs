use crate::ui;
use anyhow::Result;
use clap::{ArgAction, Parser};
use ghdir_lib::config::RunConfig;
use ghdir_lib::fetcher::fetch_directory;
use ghdir_lib::github::GitHubClient;

#[derive(Parser)]
#[command(name = "ghdir")]
#[command(about = "List and download the files of a single GitHub repository directory")]
#[command(version)]
pub struct Cli {
    /// The GitHub user or organization that owns the repository
    #[arg(long, default_value = "")]
    pub user: String,

    /// The GitHub repository name
    #[arg(long, default_value = "")]
    pub repo: String,

    /// The sub directory to fetch; defaults to the repository root
    #[arg(long, default_value = "")]
    pub dir: String,

    /// Only list file names and sizes; pass --dry-run=false to download
    #[arg(
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub dry_run: bool,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = RunConfig {
            owner: self.user,
            repository: self.repo,
            subdirectory: self.dir,
            dry_run: self.dry_run,
        };

        if config.dry_run {
            ui::info("Dry run: listing files only");
        } else {
            ui::info(&format!(
                "Downloading into {}",
                config.target_dir().display()
            ));
        }

        let client = GitHubClient::new();
        fetch_directory(&config, &client).await?;

        if !config.dry_run {
            ui::success("Download complete");
        }
        Ok(())
    }
}
