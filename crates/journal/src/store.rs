use crate::{EventEnvelope, JournalError, JournalQuery, Result, Sequence};

/// Core trait for journal implementations.
///
/// A journal keeps warehouse events in the order they were recorded. Appends
/// are atomic: either the whole batch is stored or nothing is.
pub trait Journal {
    /// Appends a batch of entries.
    ///
    /// The batch must start right after [`Journal::last_sequence`] and be
    /// gap-free, otherwise `SequenceConflict` is returned and nothing is
    /// stored. Returns the sequence of the last stored entry.
    fn append(&mut self, events: Vec<EventEnvelope>) -> Result<Sequence>;

    /// Retrieves entries matching a query, in sequence order.
    fn query(&self, query: &JournalQuery) -> Result<Vec<EventEnvelope>>;

    /// Returns the sequence of the newest entry, or `Sequence::initial()` when empty.
    fn last_sequence(&self) -> Sequence;

    /// Returns the number of stored entries.
    fn len(&self) -> usize;

    /// Returns true if nothing has been recorded yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Validates a batch before appending it after `last`.
pub fn validate_events_for_append(events: &[EventEnvelope], last: Sequence) -> Result<()> {
    let Some(first) = events.first() else {
        return Err(JournalError::EmptyAppend);
    };

    let mut expected = last.next();
    if first.sequence != expected {
        return Err(JournalError::SequenceConflict {
            expected,
            actual: first.sequence,
        });
    }

    for event in events.iter().skip(1) {
        expected = expected.next();
        if event.sequence != expected {
            return Err(JournalError::SequenceConflict {
                expected,
                actual: event.sequence,
            });
        }
    }

    Ok(())
}
