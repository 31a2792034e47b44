//! Property tests for the JSON document store.

use proptest::prelude::*;
use tempfile::tempdir;

use pomade::{Document, DocumentStore, JsonDocumentStore, Salon, Service, User};

fn ident() -> impl Strategy<Value = String> {
    "[a-z0-9\\-]{1,12}"
}

fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 '&\\.]{0,24}"
}

fn salon_strategy() -> impl Strategy<Value = Salon> {
    (
        ident(),
        text(),
        text(),
        0.0f64..5.0,
        proptest::collection::vec(text(), 0..3),
    )
        .prop_map(|(id, name, address, rating, specialties)| Salon {
            id,
            name,
            address,
            rating,
            specialties,
        })
}

fn service_strategy() -> impl Strategy<Value = Service> {
    (ident(), text(), 0.0f64..500.0, ident()).prop_map(|(id, name, price, salon_id)| Service {
        id,
        name,
        price,
        salon_id,
    })
}

fn user_strategy() -> impl Strategy<Value = User> {
    (ident(), text(), "[0-9]{10,11}", text(), text()).prop_map(
        |(id, name, phone, email, password)| User {
            id,
            name,
            phone,
            email,
            password,
        },
    )
}

fn document_strategy() -> impl Strategy<Value = Document> {
    (
        proptest::collection::vec(salon_strategy(), 0..4),
        proptest::collection::vec(service_strategy(), 0..6),
        proptest::collection::vec(user_strategy(), 0..4),
    )
        .prop_map(|(salons, services, users)| Document {
            salons,
            services,
            staff: Vec::new(),
            schedules: Vec::new(),
            users,
            bookings: Vec::new(),
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Whatever document is written, reading it back yields an
    /// identical document.
    #[test]
    fn property_write_then_read_round_trips(document in document_strategy()) {
        let dir = tempdir().unwrap();
        let store = JsonDocumentStore::with_path(dir.path().join("db.json"));

        store.write(&document).unwrap();
        let read_back = store.read().unwrap();

        prop_assert_eq!(read_back, document);
    }

    /// PROPERTY: Writing twice keeps the last document (last writer wins).
    #[test]
    fn property_last_write_wins(
        first in document_strategy(),
        second in document_strategy(),
    ) {
        let dir = tempdir().unwrap();
        let store = JsonDocumentStore::with_path(dir.path().join("db.json"));

        store.write(&first).unwrap();
        store.write(&second).unwrap();

        prop_assert_eq!(store.read().unwrap(), second);
    }
}
