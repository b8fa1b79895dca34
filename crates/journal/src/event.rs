use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{JournalError, Result};

/// Unique identifier for a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an entry in the journal.
///
/// The first entry has sequence 1; every append continues without gaps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Sequence(u64);

impl Sequence {
    /// Creates a sequence from a raw value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the sequence of an empty journal (0).
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the sequence of the first entry (1).
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next sequence.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Sequence {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A journal entry wrapping a serialized domain event with its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Unique identifier for this entry.
    pub event_id: EventId,

    /// The type of the event (e.g., "StockReceived", "OrderShipped").
    pub event_type: String,

    /// Position in the journal.
    pub sequence: Sequence,

    /// When the entry was recorded.
    pub recorded_at: DateTime<Utc>,

    /// The event payload as JSON.
    pub payload: serde_json::Value,

    /// Additional metadata about the event.
    pub metadata: HashMap<String, serde_json::Value>,
}

impl EventEnvelope {
    /// Creates a new event envelope builder.
    pub fn builder() -> EventEnvelopeBuilder {
        EventEnvelopeBuilder::default()
    }

    /// Deserializes the payload into a concrete event type.
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Builder for constructing event envelopes.
#[derive(Debug, Default)]
pub struct EventEnvelopeBuilder {
    event_type: Option<String>,
    sequence: Option<Sequence>,
    payload: Option<serde_json::Value>,
    metadata: HashMap<String, serde_json::Value>,
}

impl EventEnvelopeBuilder {
    /// Sets the event type.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Sets the sequence.
    pub fn sequence(mut self, sequence: Sequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Sets the payload from a serializable value.
    pub fn payload<T: Serialize>(mut self, payload: &T) -> Result<Self> {
        self.payload = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Sets the payload from a raw JSON value.
    pub fn payload_raw(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Adds a metadata entry.
    pub fn metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Builds the envelope, failing if event type, sequence or payload is missing.
    pub fn build(self) -> Result<EventEnvelope> {
        Ok(EventEnvelope {
            event_id: EventId::new(),
            event_type: self
                .event_type
                .ok_or(JournalError::MissingField("event_type"))?,
            sequence: self.sequence.ok_or(JournalError::MissingField("sequence"))?,
            recorded_at: Utc::now(),
            payload: self.payload.ok_or(JournalError::MissingField("payload"))?,
            metadata: self.metadata,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_id_new_creates_unique_ids() {
        assert_ne!(EventId::new(), EventId::new());
    }

    #[test]
    fn sequence_initial_and_first() {
        assert_eq!(Sequence::initial().as_u64(), 0);
        assert_eq!(Sequence::initial().next(), Sequence::first());
        assert!(Sequence::first() < Sequence::new(2));
    }

    #[test]
    fn builder_sets_all_fields() {
        let payload = serde_json::json!({"location": "A1"});

        let envelope = EventEnvelope::builder()
            .event_type("StockReceived")
            .sequence(Sequence::first())
            .payload_raw(payload.clone())
            .metadata("operator", serde_json::json!("desk-1"))
            .build()
            .unwrap();

        assert_eq!(envelope.event_type, "StockReceived");
        assert_eq!(envelope.sequence, Sequence::first());
        assert_eq!(envelope.payload, payload);
        assert_eq!(
            envelope.metadata.get("operator"),
            Some(&serde_json::json!("desk-1"))
        );
    }

    #[test]
    fn builder_reports_missing_field() {
        let err = EventEnvelope::builder()
            .event_type("StockReceived")
            .payload_raw(serde_json::json!({}))
            .build()
            .unwrap_err();

        assert!(matches!(err, JournalError::MissingField("sequence")));
    }

    #[test]
    fn decode_reads_typed_payload() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Shipped {
            quantity: u32,
        }

        let envelope = EventEnvelope::builder()
            .event_type("UnitsShipped")
            .sequence(Sequence::first())
            .payload_raw(serde_json::json!({"quantity": 4}))
            .build()
            .unwrap();

        let decoded: Shipped = envelope.decode().unwrap();
        assert_eq!(decoded, Shipped { quantity: 4 });
    }
}
