//! Messages read from a topic.

use std::borrow::Cow;
use std::fmt;

use rdkafka::message::{BorrowedMessage, Message};

/// A message received from Kafka.
///
/// Key and value are opaque bytes; nothing here interprets them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedMessage {
    /// Kafka topic
    pub topic: String,
    /// Kafka partition
    pub partition: i32,
    /// Kafka offset
    pub offset: i64,
    /// Message key (if any)
    pub key: Option<Vec<u8>>,
    /// Message value, empty for a tombstone
    pub value: Vec<u8>,
}

impl ReceivedMessage {
    /// Copies the parts of a borrowed rdkafka message we keep.
    pub fn from_borrowed(message: &BorrowedMessage<'_>) -> Self {
        Self {
            topic: message.topic().to_string(),
            partition: message.partition(),
            offset: message.offset(),
            key: message.key().map(<[u8]>::to_vec),
            value: message.payload().map(<[u8]>::to_vec).unwrap_or_default(),
        }
    }

    /// Key as text, lossily decoded. Empty when the message has no key.
    pub fn key_lossy(&self) -> Cow<'_, str> {
        match &self.key {
            Some(key) => String::from_utf8_lossy(key),
            None => Cow::Borrowed(""),
        }
    }

    /// Value as text, lossily decoded.
    pub fn value_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }
}

/// Console rendering: `Message received: <key> <value>`.
///
/// Key and value are printed as lossy UTF-8 text with a single separating
/// space; a missing key prints as nothing. This differs from printing the
/// key as a list of byte values.
impl fmt::Display for ReceivedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Message received: {} {}",
            self.key_lossy(),
            self.value_lossy()
        )
    }
}
