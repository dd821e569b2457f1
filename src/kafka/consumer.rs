//! Kafka consumer for printing a topic.
//!
//! Each run joins a brand-new consumer group whose id is a random UUID, so
//! nothing carries over between runs and no offsets are ever committed.
//! Messages are read one at a time and passed to a [`MessageHandler`] until a
//! read fails or the cancellation token fires.
//!
//! # Example
//!
//! ```rust,no_run
//! use kafka_cli::kafka::consumer::{
//!     consume_until_error, generate_group_id, ConsolePrinter, KafkaConsumer,
//! };
//! use kafka_cli::kafka::settings::ClientSettings;
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> kafka_cli::Result<()> {
//! let settings = ClientSettings::new("broker:9093", "user", "secret");
//! let consumer = KafkaConsumer::new(&settings, "orders", &generate_group_id())?;
//! let mut printer = ConsolePrinter::stdout();
//! let err = consume_until_error(&consumer, &mut printer, &CancellationToken::new()).await;
//! Err(err)
//! # }
//! ```

use std::io::{self, Write};

use async_trait::async_trait;
use rdkafka::consumer::{Consumer, StreamConsumer};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};
use uuid::Uuid;

use super::message::ReceivedMessage;
use super::settings::ClientSettings;
use crate::error::{KafkaCliError, Result};

/// Source of messages for the consume loop.
#[async_trait]
pub trait MessageSource: Send + Sync {
    /// Waits for the next message.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Receive` on any read failure. Transient and
    /// permanent failures are not distinguished.
    async fn recv(&self) -> Result<ReceivedMessage>;
}

/// Handler called for every message the loop receives.
pub trait MessageHandler {
    /// Processes one message. An error stops the loop.
    fn handle(&mut self, message: &ReceivedMessage) -> Result<()>;
}

/// Generates a fresh consumer group id.
///
/// # Examples
///
/// ```rust
/// use kafka_cli::kafka::consumer::generate_group_id;
///
/// assert_ne!(generate_group_id(), generate_group_id());
/// ```
pub fn generate_group_id() -> String {
    Uuid::new_v4().to_string()
}

/// SASL/SCRAM consumer backed by rdkafka's `StreamConsumer`.
pub struct KafkaConsumer {
    consumer: StreamConsumer,
    group_id: String,
}

impl KafkaConsumer {
    /// Creates a consumer in group `group_id` and subscribes it to `topic`.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Client` if the consumer cannot be created or
    /// subscribed.
    pub fn new(settings: &ClientSettings, topic: &str, group_id: &str) -> Result<Self> {
        info!(
            brokers = %settings.brokers,
            topic = %topic,
            group_id = %group_id,
            mechanism = %settings.sasl.mechanism,
            "Creating Kafka consumer"
        );

        let consumer: StreamConsumer = settings
            .consumer_config(group_id)
            .create()
            .map_err(|e| KafkaCliError::Client(e.to_string()))?;

        consumer
            .subscribe(&[topic])
            .map_err(|e| KafkaCliError::Client(format!("Failed to subscribe to {topic}: {e}")))?;

        Ok(Self {
            consumer,
            group_id: group_id.to_string(),
        })
    }

    /// Returns the consumer group ID.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

#[async_trait]
impl MessageSource for KafkaConsumer {
    async fn recv(&self) -> Result<ReceivedMessage> {
        self.consumer
            .recv()
            .await
            .map(|message| ReceivedMessage::from_borrowed(&message))
            .map_err(|e| KafkaCliError::Receive(e.to_string()))
    }
}

/// Writes each message as one line to a writer.
pub struct ConsolePrinter<W: Write> {
    writer: W,
}

impl<W: Write> ConsolePrinter<W> {
    /// Creates a printer writing to `writer`.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the printer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl ConsolePrinter<io::Stdout> {
    /// Creates a printer writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> MessageHandler for ConsolePrinter<W> {
    fn handle(&mut self, message: &ReceivedMessage) -> Result<()> {
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Reads from `source` and hands every message to `handler` until something
/// fails.
///
/// There is no successful exit: the returned error is whatever ended the
/// loop. Cancelling `cancel` yields `KafkaCliError::Interrupted`, a read
/// failure yields `KafkaCliError::Receive` and a handler failure is passed
/// through unchanged.
pub async fn consume_until_error<S, H>(
    source: &S,
    handler: &mut H,
    cancel: &CancellationToken,
) -> KafkaCliError
where
    S: MessageSource + ?Sized,
    H: MessageHandler + ?Sized,
{
    loop {
        let received = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                info!("Consumer cancelled");
                return KafkaCliError::Interrupted;
            }
            received = source.recv() => received,
        };

        let message = match received {
            Ok(message) => message,
            Err(e) => return e,
        };

        debug!(
            topic = %message.topic,
            partition = message.partition,
            offset = message.offset,
            "Message received"
        );

        if let Err(e) = handler.handle(&message) {
            return e;
        }
    }
}
