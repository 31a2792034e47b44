//! Infrastructure layer - concrete implementations of the domain ports

pub mod ids;
pub mod seed;
pub mod store;
pub mod transport;

pub use ids::TimestampIdGenerator;
pub use store::{default_store_path, JsonDocumentStore};
