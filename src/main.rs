use std::process::ExitCode;

use capital::cli::{self, Cli};
use capital::config::Config;
use capital::render;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("capital=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    tracing::debug!(bitflyer = %config.bitflyer_api_host, kabucom = %config.kabucom_api_host, "Starting");

    let mut stdout = std::io::stdout();
    match cli::run(cli, &config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", render::error(&e));
            ExitCode::FAILURE
        }
    }
}
