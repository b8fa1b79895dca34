//! Append-only journal of warehouse activity.
//!
//! Every successful warehouse operation is recorded here as one or more
//! [`EventEnvelope`]s carrying a JSON payload and a gap-free [`Sequence`].
//! The journal lives in memory only and is discarded when the process exits.

pub mod error;
pub mod event;
pub mod memory;
pub mod query;
pub mod store;

pub use error::{JournalError, Result};
pub use event::{EventEnvelope, EventEnvelopeBuilder, EventId, Sequence};
pub use memory::InMemoryJournal;
pub use query::JournalQuery;
pub use store::{Journal, validate_events_for_append};
