//! Property tests for the envelope dispatcher.

use proptest::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

use pomade::infrastructure::transport::{dispatch, dispatch_json, Request};
use pomade::infrastructure::seed;
use pomade::{
    ConcreteClient, DocumentStore, JsonDocumentStore, Resolver, ServiceClient,
    TimestampIdGenerator,
};

fn seeded_client(dir: &tempfile::TempDir) -> ConcreteClient {
    let store = JsonDocumentStore::with_path(dir.path().join("db.json"));
    store.write(&seed::seed_document()).unwrap();
    ServiceClient::new(Resolver::new(store, TimestampIdGenerator::new()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary text never panics the dispatcher; the result is
    /// always a well-formed envelope with exactly one of data or errors.
    #[test]
    fn property_dispatch_json_never_panics(text in ".{0,120}") {
        let dir = tempdir().unwrap();
        let client = seeded_client(&dir);

        let response = dispatch_json(&client, &text);

        prop_assert!(response.data.is_some() != response.errors.is_some());
    }

    /// PROPERTY: Any operation name gets an envelope back, never a panic.
    /// Unknown names come back as the unknown-operation error.
    #[test]
    fn property_any_operation_name_gets_an_envelope(name in "[A-Za-z0-9_]{0,24}") {
        let dir = tempdir().unwrap();
        let client = seeded_client(&dir);

        let response = dispatch(&client, &Request::new(name.clone(), Value::Null));

        if response.is_error() {
            let message = &response.errors.unwrap()[0].message;
            prop_assert!(
                message.starts_with("invalid arguments")
                    || message.starts_with("unknown operation"),
                "unexpected error for '{}': {}",
                name,
                message
            );
        }
    }
}
