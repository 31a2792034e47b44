//! Salon entity

use serde::{Deserialize, Serialize};

/// A salon offering services, staffed by stylists
///
/// Seed data - read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Salon {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Rating on a 0-5 scale
    pub rating: f64,
    #[serde(default)]
    pub specialties: Vec<String>,
}
