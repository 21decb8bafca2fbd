//! Fee standard model.

use shared::time::UNSET;

/// Category of a billed fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeType {
    Property,
    Parking,
    Water,
    Electricity,
    Gas,
}

impl FeeType {
    pub fn code(&self) -> i16 {
        match self {
            FeeType::Property => 1,
            FeeType::Parking => 2,
            FeeType::Water => 3,
            FeeType::Electricity => 4,
            FeeType::Gas => 5,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            1 => Some(FeeType::Property),
            2 => Some(FeeType::Parking),
            3 => Some(FeeType::Water),
            4 => Some(FeeType::Electricity),
            5 => Some(FeeType::Gas),
            _ => None,
        }
    }
}

/// A priced rate for a fee category, effective from a given date.
#[derive(Debug, Clone, PartialEq)]
pub struct FeeStandard {
    pub standard_id: String,
    pub fee_type: FeeType,
    pub price_per_unit: f64,
    /// Human-readable unit label, e.g. "元/㎡/月".
    pub unit: String,
    /// Epoch seconds.
    pub effective_date: i64,
    /// Epoch seconds; 0 while the standard is currently effective.
    pub end_date: i64,
}

impl FeeStandard {
    pub fn is_open_ended(&self) -> bool {
        self.end_date == UNSET
    }
}
