//! DocumentStore port - abstraction for whole-document persistence
//!
//! This trait allows the resolver layer to read and write the document
//! without knowing about file paths or JSON serialization.

use crate::domain::entities::Document;
use crate::error::PomadeResult;

/// Abstract whole-document store
///
/// `read` deserializes the full document fresh on every call (no in-memory
/// cache), so edits by concurrent processes are visible immediately. `write`
/// serializes the full document, replacing whatever was stored. There is no
/// locking: concurrent read-modify-write callers race, last writer wins.
/// Invariant: `write(d)` followed by `read()` yields a document equal to `d`.
pub trait DocumentStore {
    /// Load the full document
    fn read(&self) -> PomadeResult<Document>;

    /// Replace the stored document
    fn write(&self, document: &Document) -> PomadeResult<()>;
}
