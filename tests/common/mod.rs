//! Shared helpers for integration tests
//!
//! Every test gets its own database file under a tempdir so tests never
//! share state. CLI tests point the binary at it via `POMADE_DB_PATH`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pomade::infrastructure::seed;
use pomade::{
    ConcreteClient, DocumentStore, JsonDocumentStore, Resolver, ServiceClient,
    TimestampIdGenerator,
};

pub fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_pomade")
}

/// Write a seeded database into the tempdir, returning its path
pub fn seeded_db(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("db.json");
    let store = JsonDocumentStore::with_path(path.clone());
    store.write(&seed::seed_document()).unwrap();
    path
}

/// Client bound to the database at `path`, no artificial latency
pub fn client_at(path: &Path) -> ConcreteClient {
    ServiceClient::new(Resolver::new(
        JsonDocumentStore::with_path(path.to_path_buf()),
        TimestampIdGenerator::new(),
    ))
}

/// Read the raw document back for assertions
pub fn read_document(path: &Path) -> pomade::Document {
    JsonDocumentStore::with_path(path.to_path_buf())
        .read()
        .unwrap()
}
