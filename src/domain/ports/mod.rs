//! Domain ports - traits implemented by the infrastructure layer

mod document_store;
mod id_generator;

pub use document_store::DocumentStore;
pub use id_generator::IdGenerator;
