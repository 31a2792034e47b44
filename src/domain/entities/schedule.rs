//! Schedule entity

use serde::{Deserialize, Serialize};

/// A time slot in a staff member's schedule
///
/// `staff_id` associates the slot with its staff member so schedule queries
/// can filter per staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    /// Display string, e.g. "10:00 AM"
    pub time: String,
    pub is_available: bool,
    pub staff_id: String,
}
