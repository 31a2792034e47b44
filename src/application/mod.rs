//! Application layer - resolvers and the service client façade

mod client;
mod resolver;

pub use client::ServiceClient;
pub use resolver::Resolver;
