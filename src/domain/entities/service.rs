//! Service entity

use serde::{Deserialize, Serialize};

/// A bookable service offered by one salon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Non-negative price in the display currency
    pub price: f64,
    pub salon_id: String,
}
