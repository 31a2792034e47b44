//! IdGenerator port - fresh ids for created entities

/// Source of fresh entity ids
///
/// Implementations must never return the same id twice from one instance.
/// Uniqueness against ids already persisted in the store is enforced by the
/// caller (the store may predate this process).
pub trait IdGenerator {
    fn next_id(&self) -> String;
}
