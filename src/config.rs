//! Credential resolution for kafka-cli
//!
//! The three connection values are read once at startup into a
//! [`Credentials`] value that is passed to the command handlers. All three are
//! required; an empty value counts as missing.

use std::fmt;

use crate::error::{KafkaCliError, Result};
use crate::kafka::settings::SaslMechanism;

/// Environment variable holding the SASL username.
pub const USERNAME_VAR: &str = "KAFKA_USERNAME";

/// Environment variable holding the SASL password.
pub const PASSWORD_VAR: &str = "KAFKA_PASSWORD";

/// Environment variable holding the broker address (`host:port`).
pub const ADDRESS_VAR: &str = "KAFKA_ADDRESS";

/// Optional environment variable selecting the SCRAM variant.
pub const MECHANISM_VAR: &str = "KAFKA_SASL_MECHANISM";

/// Message printed when any required variable is missing.
pub const MISSING_CREDENTIALS: &str =
    "KAFKA_USERNAME, KAFKA_PASSWORD and KAFKA_ADDRESS environment variables must be set";

/// Broker credentials and address.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// SASL username
    pub username: String,
    /// SASL password
    pub password: String,
    /// Broker address
    pub address: String,
    /// SCRAM variant, SCRAM-SHA-256 unless overridden
    pub mechanism: SaslMechanism,
}

impl Credentials {
    /// Resolves credentials from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `KafkaCliError::Config` if any required variable is unset or
    /// empty, or if `KAFKA_SASL_MECHANISM` names an unsupported mechanism.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves credentials through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kafka_cli::config::Credentials;
    ///
    /// let creds = Credentials::from_lookup(|name| match name {
    ///     "KAFKA_USERNAME" => Some("alice".to_string()),
    ///     "KAFKA_PASSWORD" => Some("secret".to_string()),
    ///     "KAFKA_ADDRESS" => Some("broker:9093".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(creds.address, "broker:9093");
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let (Some(username), Some(password), Some(address)) = (
            required(USERNAME_VAR),
            required(PASSWORD_VAR),
            required(ADDRESS_VAR),
        ) else {
            return Err(KafkaCliError::Config(MISSING_CREDENTIALS.to_string()));
        };

        let mechanism = match required(MECHANISM_VAR) {
            Some(value) => value.parse()?,
            None => SaslMechanism::default(),
        };

        Ok(Self {
            username,
            password,
            address,
            mechanism,
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("address", &self.address)
            .field("mechanism", &self.mechanism)
            .finish()
    }
}
