//! Service client factory
//!
//! Wires the concrete infrastructure (JSON store, timestamp ids) into a
//! resolver and client. This is the dependency injection point for the CLI.

use std::path::PathBuf;
use std::time::Duration;

use crate::application::{Resolver, ServiceClient};
use crate::config::Config;
use crate::infrastructure::{default_store_path, JsonDocumentStore, TimestampIdGenerator};

/// The concrete client used by every CLI command
pub type ConcreteClient = ServiceClient<JsonDocumentStore, TimestampIdGenerator>;

/// Resolve the data file path from env override, config, or default
pub fn resolve_store_path(config: &Config) -> PathBuf {
    if let Ok(path) = std::env::var("POMADE_DB_PATH") {
        return PathBuf::from(path);
    }
    config
        .store
        .path
        .clone()
        .unwrap_or_else(default_store_path)
}

/// Create a client with all dependencies wired up
pub fn create_client(config: &Config) -> ConcreteClient {
    let store = JsonDocumentStore::with_path(resolve_store_path(config));
    let resolver = Resolver::new(store, TimestampIdGenerator::new())
        .with_latency(Duration::from_millis(config.latency_ms));
    ServiceClient::new(resolver)
}
