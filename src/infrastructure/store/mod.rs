//! Document store implementations

mod json_store;

pub use json_store::{default_store_path, JsonDocumentStore};
