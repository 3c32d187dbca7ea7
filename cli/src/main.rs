use clap::Parser;
mod app;
mod commands;
use commands::cli;
use robotrun_core::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), error::CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let exit = app::run_app(args).await?;
    std::process::exit(exit);
}
