//! `consume <topic>`: print every message until a read fails.

use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::Credentials;
use crate::error::{KafkaCliError, Result};
use crate::kafka::consumer::{consume_until_error, generate_group_id, ConsolePrinter, KafkaConsumer};
use crate::kafka::settings::ClientSettings;

/// Usage text for a wrong argument count.
pub const USAGE: &str = "Usage: kafka-cli consume <topic>";

/// Positional arguments of `consume`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumeArgs {
    /// Topic to read
    pub topic: String,
}

impl ConsumeArgs {
    /// Accepts exactly one argument: the topic.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Usage` for any other count.
    pub fn parse(args: &[String]) -> Result<Self> {
        match args {
            [topic] => Ok(Self {
                topic: topic.clone(),
            }),
            _ => Err(KafkaCliError::Usage(USAGE.to_string())),
        }
    }
}

/// Runs the `consume` command.
///
/// Joins a fresh random consumer group and prints messages to stdout. This
/// only ever returns an error: `Receive` when a read fails, `Interrupted`
/// when `cancel` fires.
pub async fn run_consume(
    credentials: &Credentials,
    args: &[String],
    cancel: &CancellationToken,
) -> Result<()> {
    let args = ConsumeArgs::parse(args)?;

    let group_id = generate_group_id();
    let settings = ClientSettings::from_credentials(credentials);
    let consumer = KafkaConsumer::new(&settings, &args.topic, &group_id)?;
    info!(topic = %args.topic, group_id = %consumer.group_id(), "Consuming");

    let mut printer = ConsolePrinter::stdout();
    Err(consume_until_error(&consumer, &mut printer, cancel).await)
}
