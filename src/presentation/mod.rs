//! Presentation layer - dependency wiring and terminal rendering

pub mod factory;
pub mod output;

pub use factory::{create_client, ConcreteClient};
