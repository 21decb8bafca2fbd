//! Parking space model.

use super::OccupancyStatus;

/// A parking space row.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingSpace {
    pub parking_id: String,
    /// Fixed prefix plus a 3-digit sequence, e.g. "P007".
    pub parking_number: String,
    pub owner_id: Option<String>,
    pub status: OccupancyStatus,
}
