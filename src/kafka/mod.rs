//! Kafka integration
//!
//! Thin wrappers over rdkafka for the two things the CLI does: send one
//! message, and read a topic message by message.
//!
//! # Authentication
//!
//! Every connection uses `SASL_SSL` with a SCRAM mechanism:
//! - SCRAM-SHA-256 (default)
//! - SCRAM-SHA-512
//!
//! TLS trust comes from librdkafka's platform defaults.

pub mod consumer;
pub mod message;
pub mod producer;
pub mod settings;

pub use consumer::{
    consume_until_error, generate_group_id, ConsolePrinter, KafkaConsumer, MessageHandler,
    MessageSource,
};
pub use message::ReceivedMessage;
pub use producer::{KafkaProducer, MessageSender};
pub use settings::{ClientSettings, SaslConfig, SaslMechanism};
