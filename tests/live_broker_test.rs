//! Round trip against a real broker.
//!
//! Needs `KAFKA_USERNAME`, `KAFKA_PASSWORD` and `KAFKA_ADDRESS` pointing at a
//! SASL_SSL cluster with SCRAM credentials and an existing topic named by
//! `KAFKA_TEST_TOPIC` (default `orders`). Run with:
//! `cargo test --test live_broker_test -- --ignored`

use std::io::{BufRead, BufReader};
use std::process::{Command, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use predicates::prelude::*;

mod common;

fn test_topic() -> String {
    std::env::var("KAFKA_TEST_TOPIC").unwrap_or_else(|_| "orders".to_string())
}

#[test]
#[ignore = "requires a live SASL/SCRAM Kafka cluster"]
fn test_produce_then_consume() {
    assert!(
        common::live_broker_configured(),
        "KAFKA_USERNAME, KAFKA_PASSWORD and KAFKA_ADDRESS must be set"
    );
    let topic = test_topic();
    let body = format!("order-{}", uuid::Uuid::new_v4());

    assert_cmd::Command::cargo_bin("kafka-cli")
        .unwrap()
        .args(["produce", &topic, &body])
        .assert()
        .success()
        .stdout(predicate::str::contains("Message sent"));

    // A fresh group starts from the earliest offset, so the message above is
    // visible to the consumer.
    let mut child = Command::new(assert_cmd::cargo::cargo_bin("kafka-cli"))
        .args(["consume", &topic])
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let stdout = child.stdout.take().unwrap();

    let (tx, rx) = mpsc::channel();
    std::thread::spawn(move || {
        for line in BufReader::new(stdout).lines().map_while(Result::ok) {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    let expected = body.clone();
    let found = std::iter::from_fn(|| rx.recv_timeout(Duration::from_secs(60)).ok())
        .any(|line| line.starts_with("Message received:") && line.ends_with(&expected));

    // The consumer never exits on its own.
    assert!(child.try_wait().unwrap().is_none());
    child.kill().unwrap();
    let _ = child.wait();

    assert!(found, "did not see {body} on {topic}");
}

#[test]
#[ignore = "requires a live SASL/SCRAM Kafka cluster"]
fn test_bad_password_fails_to_send() {
    assert!(common::live_broker_configured());

    assert_cmd::Command::cargo_bin("kafka-cli")
        .unwrap()
        .env("KAFKA_PASSWORD", "definitely-not-the-password")
        .args(["produce", &test_topic(), "order-123"])
        .timeout(Duration::from_secs(600))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error sending message: "));
}
