mod config;
mod models;
mod services;
mod utils;
use clap::Parser;
use config::loader::Config;
use services::client::Client;
use services::diagnostics::TracingSink;
use services::input::FileChooser;
use services::submitter::submit;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Upload a file to the /process endpoint and log the response")]
struct Cli {
    /// Base url of the server, overrides UPLOADER_SERVER_URL and the config file
    #[arg(long)]
    server: Option<String>,

    /// YAML config file with a `server_url` key
    #[arg(long)]
    config: Option<PathBuf>,

    /// File to upload
    file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.server, cli.config)?;

    let client = Client::new(&config)?;
    tracing::info!("uploading to {}", config.server_url);

    let input = FileChooser::new(cli.file);
    submit(&input, &client, &TracingSink).await?;

    Ok(())
}
