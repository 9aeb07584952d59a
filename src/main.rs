use clap::Parser;

use pushgate::cli::{self, Cli};
use pushgate::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration first so the logger honors file/env/CLI overrides
    let settings = cli::load_and_merge_config(&cli).map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(logger_config)?;

    cli::execute_command(&cli, settings).await?;

    Ok(())
}
