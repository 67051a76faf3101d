//! Konkurranseguiden CLI - Command-line front end for competition analysis.

use clap::Parser;
use konkurranse_cli::commands;
use konkurranse_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> konkurranse_cli::Result<()> {
    // Load config, falling back to defaults when the file is absent
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let data_file = config.data_file(cli.data_file)?;

    match cli.command {
        Command::Analyze(args) => {
            let extractor = commands::build_extractor(&config, cli.api_key)?;
            commands::execute_analyze(args, &extractor, &data_file, &formatter).await?;
        }
        Command::Scrape(args) => {
            let extractor = commands::build_extractor(&config, cli.api_key)?;
            commands::execute_scrape(args, &extractor, &data_file, &formatter).await?;
        }
        Command::List(args) => {
            commands::execute_list(args, &data_file, &formatter).await?;
        }
        Command::Delete(args) => {
            commands::execute_delete(args, &data_file, &formatter).await?;
        }
    }

    Ok(())
}
