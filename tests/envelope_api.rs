//! Wire contract tests: request envelopes dispatched in-process against a
//! seeded database.

mod common;

use serde_json::{json, Value};
use tempfile::tempdir;

use pomade::infrastructure::transport::{dispatch, dispatch_json, Request};

#[test]
fn get_salons_returns_data_envelope() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let response = dispatch(&client, &Request::new("getSalons", Value::Null));

    assert!(!response.is_error());
    let data = response.data.unwrap();
    let salons = data.as_array().unwrap();
    assert_eq!(salons.len(), 3);
    // Wire field names are camelCase.
    assert!(salons[0].get("name").is_some());
    assert!(salons[0].get("specialties").is_some());
}

#[test]
fn get_services_filters_by_salon_id() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let request = Request::new("getServices", json!({ "salonId": "salon-2" }));
    let response = dispatch(&client, &request);

    let data = response.data.unwrap();
    let services = data.as_array().unwrap();
    assert_eq!(services.len(), 3);
    for service in services {
        assert_eq!(service["salonId"], "salon-2");
    }
}

#[test]
fn create_booking_round_trip_over_the_wire() {
    let dir = tempdir().unwrap();
    let db = common::seeded_db(&dir);
    let client = common::client_at(&db);

    let request = Request::new(
        "createBooking",
        json!({
            "userId": "u-demo",
            "salonId": "salon-1",
            "serviceIds": ["svc-101", "svc-103"],
            "staffId": "staff-12",
            "time": "2:00 PM",
        }),
    );
    let response = dispatch(&client, &request);

    assert!(!response.is_error(), "errors: {:?}", response.errors);
    let booking = response.data.unwrap();
    assert_eq!(booking["userId"], "u-demo");
    assert_eq!(booking["salon"]["id"], "salon-1");
    assert_eq!(booking["services"].as_array().unwrap().len(), 2);
    assert_eq!(booking["staff"]["id"], "staff-12");

    // getBookings sees the booking created above.
    let request = Request::new("getBookings", json!({ "userId": "u-demo" }));
    let response = dispatch(&client, &request);
    let bookings = response.data.unwrap();
    assert_eq!(bookings.as_array().unwrap().len(), 1);
}

#[test]
fn login_failure_is_soft_not_an_error_envelope() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let request = Request::new(
        "login",
        json!({ "email": "demo@salon.com", "password": "wrong" }),
    );
    let response = dispatch(&client, &request);

    // Bad credentials come back as data with success=false, not errors.
    assert!(!response.is_error());
    let data = response.data.unwrap();
    assert_eq!(data["success"], false);
    assert_eq!(data["message"], "Invalid email or password");
    assert!(data.get("user").is_none());
}

#[test]
fn register_validation_message_over_the_wire() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let request = Request::new(
        "register",
        json!({
            "name": "Pat",
            "phone": "12345",
            "email": "pat@example.com",
            "password": "longenough",
        }),
    );
    let response = dispatch(&client, &request);

    let data = response.data.unwrap();
    assert_eq!(data["success"], false);
    assert_eq!(data["message"], "Phone number must be at least 10 digits");
}

#[test]
fn unknown_operation_yields_error_envelope() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let response = dispatch(&client, &Request::new("frobnicate", Value::Null));

    assert!(response.is_error());
    assert!(response.data.is_none());
    let errors = response.errors.unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "unknown operation 'frobnicate'");
}

#[test]
fn missing_arguments_yield_error_envelope() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let response = dispatch(&client, &Request::new("getServices", Value::Null));

    assert!(response.is_error());
    let errors = response.errors.unwrap();
    assert!(
        errors[0].message.starts_with("invalid arguments for 'getServices'"),
        "got: {}",
        errors[0].message
    );
}

#[test]
fn booking_unknown_salon_yields_not_found_error() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let request = Request::new(
        "createBooking",
        json!({
            "userId": "u-demo",
            "salonId": "salon-99",
            "serviceIds": ["svc-101"],
            "staffId": "staff-11",
            "time": "9:00 AM",
        }),
    );
    let response = dispatch(&client, &request);

    assert!(response.is_error());
    assert_eq!(
        response.errors.unwrap()[0].message,
        "salon not found: salon-99"
    );
}

#[test]
fn malformed_envelope_text_yields_error_envelope() {
    let dir = tempdir().unwrap();
    let client = common::client_at(&common::seeded_db(&dir));

    let response = dispatch_json(&client, "{not json");

    assert!(response.is_error());
    assert!(response.errors.unwrap()[0]
        .message
        .starts_with("invalid request envelope"));
}
