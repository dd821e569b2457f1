//! Command-line interface definition for kafka-cli
//!
//! Two subcommands, selected by the first argument. There are no flags:
//! help and version are disabled, and each subcommand collects its
//! positional arguments verbatim so the count is checked by the command
//! itself, after credentials have been resolved.

use std::ffi::OsString;

use clap::{Parser, Subcommand};
use tracing::debug;

use crate::error::{KafkaCliError, Result};

/// Printed when no subcommand is given.
pub const USAGE: &str = "Usage: kafka-cli command [args]";

/// Appended to [`USAGE`] for an unknown subcommand.
pub const AVAILABLE_COMMANDS: &str = "Available commands: consume, produce";

/// kafka-cli - produce and consume Kafka messages over SASL/SCRAM
#[derive(Parser, Debug, Clone)]
#[command(name = "kafka-cli")]
#[command(
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Send one message to a topic
    #[command(disable_help_flag = true)]
    Produce {
        /// <topic> <message>
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },

    /// Print messages from a topic until a read fails
    #[command(disable_help_flag = true)]
    Consume {
        /// <topic>
        #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
        args: Vec<String>,
    },
}

impl Commands {
    /// Replaces the collected positional arguments.
    fn with_args(self, args: Vec<String>) -> Self {
        match self {
            Self::Produce { .. } => Self::Produce { args },
            Self::Consume { .. } => Self::Consume { args },
        }
    }
}

/// Everything after the subcommand, exactly as given.
///
/// clap swallows a leading `--` as its end-of-options marker, which would
/// change the argument count the commands validate.
fn raw_tail(argv: &[OsString]) -> Vec<String> {
    argv.iter()
        .skip(2)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

impl Cli {
    /// Selects the subcommand from a full argument list (program name first).
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Usage` with [`USAGE`] when no subcommand is
    /// given, and with [`USAGE`] plus [`AVAILABLE_COMMANDS`] for anything
    /// else that is not `produce` or `consume`.
    pub fn dispatch<I, T>(args: I) -> Result<Commands>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv: Vec<OsString> = args.into_iter().map(Into::into).collect();

        match Self::try_parse_from(&argv) {
            Ok(Cli {
                command: Some(command),
            }) => Ok(command.with_args(raw_tail(&argv))),
            Ok(Cli { command: None }) => Err(KafkaCliError::Usage(USAGE.to_string())),
            Err(e) => {
                debug!(kind = ?e.kind(), "Unrecognized command line");
                Err(KafkaCliError::Usage(format!("{USAGE}\n{AVAILABLE_COMMANDS}")))
            }
        }
    }

    /// Dispatches the process arguments.
    pub fn dispatch_env() -> Result<Commands> {
        Self::dispatch(std::env::args_os())
    }
}
