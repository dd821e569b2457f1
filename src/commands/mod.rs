/*!
Command handlers for the CLI

- `produce`: send one message to a topic
- `consume`: print a topic under a fresh consumer group

Both take the already-resolved [`Credentials`] and their raw positional
arguments, and validate the argument count before touching the network.
*/

use tokio_util::sync::CancellationToken;

use crate::cli::Commands;
use crate::config::Credentials;
use crate::error::{KafkaCliError, Result};

pub mod consume;
pub mod produce;

pub use consume::run_consume;
pub use produce::run_produce;

/// Runs the dispatched subcommand.
///
/// Cancelling `cancel` stops either command with `KafkaCliError::Interrupted`.
pub async fn execute(
    command: &Commands,
    credentials: &Credentials,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        Commands::Produce { args } => tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(KafkaCliError::Interrupted),
            result = run_produce(credentials, args) => result,
        },
        Commands::Consume { args } => run_consume(credentials, args, cancel).await,
    }
}
