use assert_cmd::Command;

pub const KAFKA_VARS: [&str; 4] = [
    "KAFKA_USERNAME",
    "KAFKA_PASSWORD",
    "KAFKA_ADDRESS",
    "KAFKA_SASL_MECHANISM",
];

/// The binary with every `KAFKA_*` variable removed from its environment.
#[allow(dead_code)]
pub fn bare_cli() -> Command {
    let mut cmd = Command::cargo_bin("kafka-cli").unwrap();
    for var in KAFKA_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// The binary with placeholder credentials pointing at a closed port.
#[allow(dead_code)]
pub fn cli_with_credentials() -> Command {
    let mut cmd = bare_cli();
    cmd.env("KAFKA_USERNAME", "alice")
        .env("KAFKA_PASSWORD", "s3cret")
        .env("KAFKA_ADDRESS", "127.0.0.1:9");
    cmd
}

/// Whether the live-broker variables are all set.
#[allow(dead_code)]
pub fn live_broker_configured() -> bool {
    KAFKA_VARS[..3]
        .iter()
        .all(|var| std::env::var(var).map(|v| !v.is_empty()).unwrap_or(false))
}
