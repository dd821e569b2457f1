//! kafka-cli - produce and consume Kafka messages over SASL/SCRAM
//!
//! # Architecture
//!
//! - `cli`: command dispatch (`produce` / `consume`)
//! - `config`: credentials resolved from the environment
//! - `commands`: the two command handlers
//! - `kafka`: rdkafka producer/consumer wrappers and client settings
//! - `error`: error taxonomy and exit codes
//! - `logging`: tracing subscriber setup
//! - `signal`: Ctrl-C to cancellation
//!
//! # Example
//!
//! ```no_run
//! use kafka_cli::{commands, Cli, Credentials};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> kafka_cli::Result<()> {
//!     let command = Cli::dispatch(["kafka-cli", "produce", "orders", "order-123"])?;
//!     let credentials = Credentials::from_env()?;
//!     commands::execute(&command, &credentials, &CancellationToken::new()).await
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod kafka;
pub mod logging;
pub mod signal;

// Re-export commonly used types
pub use cli::{Cli, Commands};
pub use config::Credentials;
pub use error::{KafkaCliError, Result};
