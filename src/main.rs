//! kafka-cli - produce and consume Kafka messages over SASL/SCRAM
//!
#![doc = "Main entry point for the kafka-cli application."]

use tokio_util::sync::CancellationToken;

use kafka_cli::cli::Cli;
use kafka_cli::commands;
use kafka_cli::config::Credentials;
use kafka_cli::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = kafka_cli::logging::init_tracing() {
        eprintln!("{e:#}");
    }

    // Every failure is reported on stdout and mapped to an exit status here.
    if let Err(e) = run().await {
        println!("{e}");
        std::process::exit(e.exit_code());
    }
}

async fn run() -> Result<()> {
    let command = Cli::dispatch_env()?;
    let credentials = Credentials::from_env()?;
    tracing::debug!(?credentials, "Resolved credentials");

    let cancel = CancellationToken::new();
    kafka_cli::signal::cancel_on_interrupt(cancel.clone())?;

    commands::execute(&command, &credentials, &cancel).await
}
