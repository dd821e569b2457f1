//! Producing single messages.
//!
//! [`MessageSender`] is the seam the produce command talks to;
//! [`KafkaProducer`] implements it on top of rdkafka's `FutureProducer`.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::producer::{FutureProducer, FutureRecord, Producer};
use rdkafka::util::Timeout;
use tracing::{debug, info, warn};

use super::settings::ClientSettings;
use crate::error::{KafkaCliError, Result};

/// Upper bound for flushing the producer queue on close.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends messages to a topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Sends one message and waits for the broker's acknowledgment.
    ///
    /// [`KafkaProducer`] waits with no queue timeout, so failures such as
    /// rejected SCRAM credentials surface only once librdkafka gives up on
    /// delivery (`message.timeout.ms`, 300s by default).
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Send` if the message could not be delivered.
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<()>;

    /// Releases the connection, flushing anything still queued.
    fn close(&self);
}

/// SASL/SCRAM producer backed by rdkafka.
pub struct KafkaProducer {
    producer: FutureProducer,
}

impl KafkaProducer {
    /// Creates a producer from client settings.
    ///
    /// No network traffic happens until the first send.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Client` if librdkafka rejects the configuration.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        info!(
            brokers = %settings.brokers,
            mechanism = %settings.sasl.mechanism,
            "Creating Kafka producer"
        );

        let producer: FutureProducer = settings
            .producer_config()
            .create()
            .map_err(|e| KafkaCliError::Client(e.to_string()))?;

        Ok(Self { producer })
    }
}

#[async_trait]
impl MessageSender for KafkaProducer {
    async fn send(&self, topic: &str, payload: &[u8]) -> Result<()> {
        let record: FutureRecord<'_, (), [u8]> = FutureRecord::to(topic).payload(payload);

        let (partition, offset) = self
            .producer
            .send(record, Timeout::Never)
            .await
            .map_err(|(err, _)| KafkaCliError::Send(err.to_string()))?;

        debug!(topic, partition, offset, "Message delivered");
        Ok(())
    }

    fn close(&self) {
        if let Err(e) = self.producer.flush(CLOSE_TIMEOUT) {
            warn!("Failed to flush producer on close: {}", e);
        }
    }
}
