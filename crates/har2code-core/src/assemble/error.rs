//! Structural errors that abort a conversion run.

/// An entry the assembler cannot place in the record sequence.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    #[error("entry {index}: startedDateTime {value:?} is not an ISO-8601 timestamp")]
    Timestamp {
        index: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
