//! Konkurranseguiden Router CLI
//!
//! Starts the HTTP server for competition analysis.

use konkurranse_llm::openai::{usable_api_key, API_KEY_VAR};
use konkurranse_router::{
    config::{RouterConfig, PORT_VAR},
    start_server, RouterError,
};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), RouterError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        RouterConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        eprintln!("No config file specified, using defaults");
        eprintln!("Usage: konkurranse-router --config <path-to-config.toml>");
        eprintln!();
        RouterConfig::default()
    };

    let config = config.with_port_override(env::var(PORT_VAR).ok())?;
    let api_key = usable_api_key(env::var(API_KEY_VAR).ok());

    start_server(config, api_key).await?;

    Ok(())
}

fn print_help() {
    println!("Konkurranseguiden Router - Competition analysis service");
    println!();
    println!("USAGE:");
    println!("    konkurranse-router --config <path-to-config.toml>");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    OPENAI_API_KEY     Enables AI analysis when set");
    println!("    PORT               Overrides bind_port");
    println!("    RUST_LOG           Log filter (default: info)");
    println!();
    println!("EXAMPLE:");
    println!("    konkurranse-router --config config/router.toml");
    println!();
}
