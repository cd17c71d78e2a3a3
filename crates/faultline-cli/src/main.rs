//! faultline CLI
//!
//! Command-line interface for calling the faultline daemon

use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use faultline_api::paths::ApiVersion;
use faultline_client::HttpClient;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "faultline")]
#[command(about = "Call the faultline failure translation endpoints", long_about = None)]
struct Cli {
    /// Daemon base URL
    #[arg(long, global = true, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Daemon health
    Health,
    /// Call give-me-success
    Success {
        /// Handler version (v1 or v2)
        #[arg(long, default_value = "v1")]
        api: ApiVersion,
    },
    /// Call give-me-handled-exception
    Handled(EndpointArgs),
    /// Call give-me-handled-globally-exception
    HandledGlobally(EndpointArgs),
    /// Call give-me-unhandled-exception
    Unhandled(EndpointArgs),
}

#[derive(Args)]
struct EndpointArgs {
    /// Handler version (v1 or v2)
    #[arg(long, default_value = "v1")]
    api: ApiVersion,

    /// Ask the endpoint to fail
    #[arg(long)]
    throw: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = HttpClient::new(&cli.url)?;

    match cli.command {
        Commands::Health => print(&client.health().await?),
        Commands::Success { api } => print(&client.success(api).await?),
        Commands::Handled(args) => print(&client.handled(args.api, args.throw).await?),
        Commands::HandledGlobally(args) => {
            print(&client.handled_globally(args.api, args.throw).await?)
        }
        Commands::Unhandled(args) => print(&client.unhandled(args.api, args.throw).await?),
    }
}

fn print(value: &impl Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
