//! Error types for kafka-cli
//!
//! Every failure the tool can hit is one of these variants. Handlers return
//! them up to `main`, which prints the message and exits with
//! [`KafkaCliError::exit_code`].

use thiserror::Error;

/// Exit status for every failure except an interrupted consumer.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status used when the consumer is stopped by Ctrl-C.
pub const EXIT_INTERRUPTED: i32 = 130;

/// Main error type for kafka-cli operations
#[derive(Error, Debug)]
pub enum KafkaCliError {
    /// Wrong argument count or unknown subcommand. Carries the usage text.
    #[error("{0}")]
    Usage(String),

    /// Missing or invalid environment configuration
    #[error("{0}")]
    Config(String),

    /// The Kafka client could not be created or subscribed
    #[error("Failed to create Kafka client: {0}")]
    Client(String),

    /// Producing the message failed
    #[error("Error sending message: {0}")]
    Send(String),

    /// Reading from the topic failed
    #[error("Error reading message: {0}")]
    Receive(String),

    /// The consume loop was cancelled
    #[error("Interrupted")]
    Interrupted,

    /// Writing output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KafkaCliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => EXIT_INTERRUPTED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Result type alias for kafka-cli operations
pub type Result<T> = std::result::Result<T, KafkaCliError>;
