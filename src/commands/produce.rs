//! `produce <topic> <message>`: send one message.

use std::io::{self, Write};

use crate::config::Credentials;
use crate::error::{KafkaCliError, Result};
use crate::kafka::producer::{KafkaProducer, MessageSender};
use crate::kafka::settings::ClientSettings;

/// Usage text for a wrong argument count.
pub const USAGE: &str = "Usage: kafka-cli produce <topic> <message>";

/// Printed after the broker acknowledged the message.
pub const CONFIRMATION: &str = "Message sent";

/// Positional arguments of `produce`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProduceArgs {
    /// Destination topic
    pub topic: String,
    /// Message body, sent verbatim
    pub message: String,
}

impl ProduceArgs {
    /// Accepts exactly two arguments: topic and message.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Usage` for any other count.
    pub fn parse(args: &[String]) -> Result<Self> {
        match args {
            [topic, message] => Ok(Self {
                topic: topic.clone(),
                message: message.clone(),
            }),
            _ => Err(KafkaCliError::Usage(USAGE.to_string())),
        }
    }
}

/// Sends the message and closes the sender whether or not the send worked.
pub async fn send_and_close<S>(sender: &S, args: &ProduceArgs) -> Result<()>
where
    S: MessageSender + ?Sized,
{
    let result = sender.send(&args.topic, args.message.as_bytes()).await;
    sender.close();
    result
}

/// Sends the message through `sender`, then writes [`CONFIRMATION`] to `out`.
///
/// Nothing is written when the send fails.
pub async fn produce_with<S, W>(sender: &S, args: &ProduceArgs, out: &mut W) -> Result<()>
where
    S: MessageSender + ?Sized,
    W: Write,
{
    send_and_close(sender, args).await?;
    writeln!(out, "{CONFIRMATION}")?;
    Ok(())
}

/// Runs the `produce` command.
///
/// # Errors
///
/// Returns `KafkaCliError::Usage` before any network activity if the
/// argument count is wrong, `KafkaCliError::Client` if the producer cannot be
/// built and `KafkaCliError::Send` if delivery fails.
pub async fn run_produce(credentials: &Credentials, args: &[String]) -> Result<()> {
    let args = ProduceArgs::parse(args)?;

    let producer = KafkaProducer::new(&ClientSettings::from_credentials(credentials))?;
    produce_with(&producer, &args, &mut io::stdout()).await
}
