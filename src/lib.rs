//! Pomade - salon booking demo service and CLI
//!
//! Pomade models a small salon-booking product end to end: a document store
//! holding the whole database as one JSON file, a resolver layer exposing the
//! service operations, a typed client, and an interactive booking wizard
//! driven by a pure state machine.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{Resolver, ServiceClient};
pub use config::Config;
pub use domain::entities::{Booking, Document, Profile, Salon, Schedule, Service, Staff, User};
pub use domain::ports::{DocumentStore, IdGenerator};
pub use domain::services::flow::{reduce, Command, FlowEvent, FlowState};
pub use domain::value_objects::{AuthResult, Step};
pub use error::{PomadeError, PomadeResult};
pub use infrastructure::{default_store_path, JsonDocumentStore, TimestampIdGenerator};
pub use presentation::{create_client, ConcreteClient};
