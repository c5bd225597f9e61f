use std::process::ExitCode;

use clap::Parser as _;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use waitfor::WaitSpec;

use cli::Cli;

mod cli;
mod config;
mod dispatch;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let spec = match WaitSpec::try_from(&cli) {
        Ok(spec) => spec,
        Err(err) => {
            tracing::error!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match dispatch::run(spec).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(outcome) => {
            tracing::error!("Wait failed: {outcome}");
            ExitCode::FAILURE
        }
        Err(err) => {
            tracing::error!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
