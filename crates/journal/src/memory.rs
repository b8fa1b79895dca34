use crate::{
    EventEnvelope, JournalQuery, Result, Sequence,
    store::{Journal, validate_events_for_append},
};

/// Journal implementation backed by a `Vec`.
///
/// Entries are kept in sequence order, so queries never need to sort.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJournal {
    events: Vec<EventEnvelope>,
}

impl InMemoryJournal {
    /// Creates a new empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry in sequence order.
    pub fn entries(&self) -> &[EventEnvelope] {
        &self.events
    }
}

impl Journal for InMemoryJournal {
    fn append(&mut self, events: Vec<EventEnvelope>) -> Result<Sequence> {
        validate_events_for_append(&events, self.last_sequence())?;

        let last = events
            .last()
            .map(|e| e.sequence)
            .unwrap_or_else(|| self.last_sequence());
        tracing::trace!(count = events.len(), %last, "journal append");
        self.events.extend(events);

        Ok(last)
    }

    fn query(&self, query: &JournalQuery) -> Result<Vec<EventEnvelope>> {
        let matching = self.events.iter().filter(|e| query.matches(e));
        let skipped = matching.skip(query.offset.unwrap_or(0));

        let events = match query.limit {
            Some(limit) => skipped.take(limit).cloned().collect(),
            None => skipped.cloned().collect(),
        };

        Ok(events)
    }

    fn last_sequence(&self) -> Sequence {
        self.events
            .last()
            .map(|e| e.sequence)
            .unwrap_or(Sequence::initial())
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}
