mod cli;
mod ui;

use clap::Parser;
use cli::Cli;
use ghdir_lib::logging::initialize_logging;

#[tokio::main]
async fn main() {
    initialize_logging();
    let cli = Cli::parse();
    // Failures are reported on stdout; the process still exits normally.
    if let Err(e) = cli.run().await {
        ui::error(&format!("{e:#}"));
    }
}
