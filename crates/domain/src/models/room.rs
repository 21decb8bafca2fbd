//! Room model and the shared occupancy flag.

/// Occupancy flag for rooms and parking spaces.
///
/// Derived from the ownership reference, never set independently: a present
/// owner means occupied (assigned, for parking spaces), an absent owner
/// means vacant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyStatus {
    Vacant,
    Occupied,
}

impl OccupancyStatus {
    pub fn for_owner(owner: Option<&str>) -> Self {
        if owner.is_some() {
            OccupancyStatus::Occupied
        } else {
            OccupancyStatus::Vacant
        }
    }

    pub fn code(&self) -> i16 {
        match self {
            OccupancyStatus::Vacant => 0,
            OccupancyStatus::Occupied => 1,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(OccupancyStatus::Vacant),
            1 => Some(OccupancyStatus::Occupied),
            _ => None,
        }
    }
}

/// A room row.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub room_id: String,
    pub building_id: String,
    /// Floor-and-unit encoding, e.g. floor 2 unit 1 → "201". Unique within
    /// a building.
    pub room_number: String,
    pub floor: i32,
    /// Square metres, two decimal places.
    pub area_sqm: f64,
    pub owner_id: Option<String>,
    pub status: OccupancyStatus,
}
