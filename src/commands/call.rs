//! `pomade call` - raw request envelope dispatch (debugging)
//!
//! Exercises the wire contract without a network stack:
//!
//! ```text
//! pomade call getSalons
//! pomade call getServices --args '{"salonId":"salon-1"}'
//! ```

use anyhow::{Context, Result};
use serde_json::Value;

use crate::infrastructure::transport::{self, Request};
use crate::presentation::ConcreteClient;

pub fn cmd_call(client: &ConcreteClient, operation: &str, args: Option<&str>) -> Result<()> {
    let args = match args {
        Some(text) => {
            serde_json::from_str::<Value>(text).context("arguments must be a JSON object")?
        }
        None => Value::Null,
    };

    let request = Request::new(operation, args);
    let response = transport::dispatch(client, &request);

    // The envelope itself is the output, error or not.
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
