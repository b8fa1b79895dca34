use crate::{EventEnvelope, Sequence};

/// Builder for constructing journal queries.
///
/// Allows filtering entries by event type and sequence range, with paging.
#[derive(Debug, Clone, Default)]
pub struct JournalQuery {
    /// Filter by event types (any of these types).
    pub event_types: Option<Vec<String>>,

    /// Filter by minimum sequence (inclusive).
    pub from_sequence: Option<Sequence>,

    /// Filter by maximum sequence (inclusive).
    pub to_sequence: Option<Sequence>,

    /// Maximum number of entries to return.
    pub limit: Option<usize>,

    /// Number of entries to skip.
    pub offset: Option<usize>,
}

impl JournalQuery {
    /// Creates a new empty query matching every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a query for entries of a specific type.
    pub fn for_event_type(event_type: impl Into<String>) -> Self {
        Self {
            event_types: Some(vec![event_type.into()]),
            ..Default::default()
        }
    }

    /// Filters by event type.
    pub fn event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_types = Some(vec![event_type.into()]);
        self
    }

    /// Filters by multiple event types (any of these).
    pub fn event_types(mut self, event_types: Vec<String>) -> Self {
        self.event_types = Some(event_types);
        self
    }

    /// Filters to entries starting from this sequence (inclusive).
    pub fn from_sequence(mut self, sequence: Sequence) -> Self {
        self.from_sequence = Some(sequence);
        self
    }

    /// Filters to entries up to this sequence (inclusive).
    pub fn to_sequence(mut self, sequence: Sequence) -> Self {
        self.to_sequence = Some(sequence);
        self
    }

    /// Limits the number of entries returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skips this many entries before returning results.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Returns true if the entry passes every filter of this query.
    ///
    /// Paging (`limit`/`offset`) is not considered here.
    pub fn matches(&self, entry: &EventEnvelope) -> bool {
        if let Some(ref types) = self.event_types
            && !types.contains(&entry.event_type)
        {
            return false;
        }
        if let Some(from) = self.from_sequence
            && entry.sequence < from
        {
            return false;
        }
        if let Some(to) = self.to_sequence
            && entry.sequence > to
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(event_type: &str, sequence: u64) -> EventEnvelope {
        EventEnvelope::builder()
            .event_type(event_type)
            .sequence(Sequence::new(sequence))
            .payload_raw(serde_json::json!({}))
            .build()
            .unwrap()
    }

    #[test]
    fn query_for_event_type() {
        let query = JournalQuery::for_event_type("OrderCreated");

        assert_eq!(query.event_types, Some(vec!["OrderCreated".to_string()]));
        assert!(query.from_sequence.is_none());
    }

    #[test]
    fn query_builder_chain() {
        let query = JournalQuery::new()
            .event_type("UnitsShipped")
            .from_sequence(Sequence::new(2))
            .to_sequence(Sequence::new(10))
            .limit(5)
            .offset(1);

        assert_eq!(query.event_types, Some(vec!["UnitsShipped".to_string()]));
        assert_eq!(query.from_sequence, Some(Sequence::new(2)));
        assert_eq!(query.to_sequence, Some(Sequence::new(10)));
        assert_eq!(query.limit, Some(5));
        assert_eq!(query.offset, Some(1));
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(JournalQuery::new().matches(&entry("StockReceived", 1)));
    }

    #[test]
    fn matches_applies_type_and_sequence_filters() {
        let query = JournalQuery::new()
            .event_types(vec!["OrderCreated".into(), "OrderShipped".into()])
            .from_sequence(Sequence::new(2))
            .to_sequence(Sequence::new(3));

        assert!(!query.matches(&entry("OrderCreated", 1)));
        assert!(query.matches(&entry("OrderCreated", 2)));
        assert!(query.matches(&entry("OrderShipped", 3)));
        assert!(!query.matches(&entry("OrderShipped", 4)));
        assert!(!query.matches(&entry("StockReceived", 2)));
    }
}
