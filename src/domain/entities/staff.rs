//! Staff entity

use serde::{Deserialize, Serialize};

/// A staff member employed by one salon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub name: String,
    pub specialization: String,
    /// Photo URL (display only, never fetched)
    pub photo: String,
    pub salon_id: String,
}
