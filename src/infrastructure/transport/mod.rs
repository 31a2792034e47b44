//! In-process realization of the wire contract

mod envelope;

pub use envelope::{dispatch, dispatch_json, Request, Response, ResponseError};
