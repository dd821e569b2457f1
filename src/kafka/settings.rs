//! Kafka client configuration for SASL/SCRAM over TLS.
//!
//! Both the producer and the consumer connect with `SASL_SSL` and a SCRAM
//! mechanism. Trust is left to librdkafka's platform defaults, so no CA or
//! client certificate properties are ever set.
//!
//! # Example
//!
//! ```rust
//! use kafka_cli::kafka::settings::{ClientSettings, SaslMechanism};
//!
//! let settings = ClientSettings::new("kafka.example.com:9093", "user", "secret")
//!     .with_mechanism(SaslMechanism::ScramSha512);
//!
//! let props: std::collections::HashMap<_, _> =
//!     settings.consumer_settings("group-1").into_iter().collect();
//! assert_eq!(props["sasl.mechanism"], "SCRAM-SHA-512");
//! assert_eq!(props["group.id"], "group-1");
//! ```

use std::fmt;
use std::str::FromStr;

use rdkafka::ClientConfig;

use crate::config::Credentials;
use crate::error::KafkaCliError;

/// Security protocol used for every connection.
pub const SECURITY_PROTOCOL: &str = "SASL_SSL";

/// SCRAM hash variant used for the challenge-response exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaslMechanism {
    /// SCRAM-SHA-256
    #[default]
    ScramSha256,
    /// SCRAM-SHA-512
    ScramSha512,
}

impl SaslMechanism {
    /// Returns the librdkafka configuration string for this mechanism.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ScramSha256 => "SCRAM-SHA-256",
            Self::ScramSha512 => "SCRAM-SHA-512",
        }
    }
}

impl fmt::Display for SaslMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaslMechanism {
    type Err = KafkaCliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SCRAM-SHA-256" => Ok(Self::ScramSha256),
            "SCRAM-SHA-512" => Ok(Self::ScramSha512),
            _ => Err(KafkaCliError::Config(format!(
                "Invalid SASL mechanism: {s} (expected SCRAM-SHA-256 or SCRAM-SHA-512)"
            ))),
        }
    }
}

/// SASL credentials and mechanism.
#[derive(Clone, PartialEq, Eq)]
pub struct SaslConfig {
    /// Authentication mechanism to use.
    pub mechanism: SaslMechanism,
    /// SASL username.
    pub username: String,
    /// SASL password.
    pub password: String,
}

impl fmt::Debug for SaslConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaslConfig")
            .field("mechanism", &self.mechanism)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Connection settings shared by the producer and the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    /// Broker address in `host:port` form.
    pub brokers: String,

    /// SASL configuration.
    pub sasl: SaslConfig,
}

impl ClientSettings {
    /// Creates settings using SCRAM-SHA-256.
    pub fn new(brokers: &str, username: &str, password: &str) -> Self {
        Self {
            brokers: brokers.to_string(),
            sasl: SaslConfig {
                mechanism: SaslMechanism::default(),
                username: username.to_string(),
                password: password.to_string(),
            },
        }
    }

    /// Overrides the SCRAM mechanism.
    pub fn with_mechanism(mut self, mechanism: SaslMechanism) -> Self {
        self.sasl.mechanism = mechanism;
        self
    }

    /// Builds settings from resolved credentials.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new(
            &credentials.address,
            &credentials.username,
            &credentials.password,
        )
        .with_mechanism(credentials.mechanism)
    }

    fn base_settings(&self) -> Vec<(String, String)> {
        vec![
            ("bootstrap.servers".to_string(), self.brokers.clone()),
            (
                "security.protocol".to_string(),
                SECURITY_PROTOCOL.to_string(),
            ),
            (
                "sasl.mechanism".to_string(),
                self.sasl.mechanism.as_str().to_string(),
            ),
            ("sasl.username".to_string(), self.sasl.username.clone()),
            ("sasl.password".to_string(), self.sasl.password.clone()),
        ]
    }

    /// Returns the producer properties as key-value pairs.
    pub fn producer_settings(&self) -> Vec<(String, String)> {
        self.base_settings()
    }

    /// Returns the consumer properties as key-value pairs.
    ///
    /// Offsets are never committed and a group with no history starts from
    /// the earliest offset.
    pub fn consumer_settings(&self, group_id: &str) -> Vec<(String, String)> {
        let mut settings = self.base_settings();
        settings.extend([
            ("group.id".to_string(), group_id.to_string()),
            ("enable.auto.commit".to_string(), "false".to_string()),
            ("auto.offset.reset".to_string(), "earliest".to_string()),
            ("enable.partition.eof".to_string(), "false".to_string()),
        ]);
        settings
    }

    /// Producer configuration ready for `create()`.
    pub fn producer_config(&self) -> ClientConfig {
        to_client_config(self.producer_settings())
    }

    /// Consumer configuration ready for `create()`.
    pub fn consumer_config(&self, group_id: &str) -> ClientConfig {
        to_client_config(self.consumer_settings(group_id))
    }
}

fn to_client_config(settings: Vec<(String, String)>) -> ClientConfig {
    let mut config = ClientConfig::new();
    for (key, value) in settings {
        config.set(key, value);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings() -> ClientSettings {
        ClientSettings::new("broker.example.com:9093", "alice", "s3cret")
    }

    #[test]
    fn test_new_defaults_to_scram_sha256() {
        let settings = settings();
        assert_eq!(settings.brokers, "broker.example.com:9093");
        assert_eq!(settings.sasl.mechanism, SaslMechanism::ScramSha256);
        assert_eq!(settings.sasl.username, "alice");
        assert_eq!(settings.sasl.password, "s3cret");
    }

    #[test]
    fn test_mechanism_as_str() {
        assert_eq!(SaslMechanism::ScramSha256.as_str(), "SCRAM-SHA-256");
        assert_eq!(SaslMechanism::ScramSha512.as_str(), "SCRAM-SHA-512");
    }

    #[test]
    fn test_mechanism_from_str_is_case_insensitive() {
        assert_eq!(
            "scram-sha-512".parse::<SaslMechanism>().unwrap(),
            SaslMechanism::ScramSha512
        );
        assert_eq!(
            "SCRAM-SHA-256".parse::<SaslMechanism>().unwrap(),
            SaslMechanism::ScramSha256
        );
    }

    #[test]
    fn test_mechanism_rejects_plain() {
        let result = "PLAIN".parse::<SaslMechanism>();
        assert!(matches!(result, Err(KafkaCliError::Config(_))));
    }

    #[test]
    fn test_producer_settings() {
        let props: HashMap<_, _> = settings().producer_settings().into_iter().collect();

        assert_eq!(props["bootstrap.servers"], "broker.example.com:9093");
        assert_eq!(props["security.protocol"], "SASL_SSL");
        assert_eq!(props["sasl.mechanism"], "SCRAM-SHA-256");
        assert_eq!(props["sasl.username"], "alice");
        assert_eq!(props["sasl.password"], "s3cret");
        assert!(!props.contains_key("group.id"));
    }

    #[test]
    fn test_consumer_settings_never_commit() {
        let props: HashMap<_, _> = settings()
            .consumer_settings("7f0c1e1a-4c39-4a59-9b8e-0c3f4ab1d2e3")
            .into_iter()
            .collect();

        assert_eq!(props["group.id"], "7f0c1e1a-4c39-4a59-9b8e-0c3f4ab1d2e3");
        assert_eq!(props["enable.auto.commit"], "false");
        assert_eq!(props["auto.offset.reset"], "earliest");
        assert_eq!(props["security.protocol"], "SASL_SSL");
    }

    #[test]
    fn test_no_certificate_properties() {
        let settings = settings();
        for (key, _) in settings
            .producer_settings()
            .into_iter()
            .chain(settings.consumer_settings("g"))
        {
            assert!(!key.starts_with("ssl."), "unexpected property {key}");
        }
    }

    #[test]
    fn test_client_config_carries_settings() {
        let config = settings()
            .with_mechanism(SaslMechanism::ScramSha512)
            .consumer_config("group-a");

        assert_eq!(config.get("sasl.mechanism"), Some("SCRAM-SHA-512"));
        assert_eq!(config.get("group.id"), Some("group-a"));
        assert_eq!(config.get("bootstrap.servers"), Some("broker.example.com:9093"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", settings());
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
