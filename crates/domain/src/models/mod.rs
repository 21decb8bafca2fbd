//! Entity models for the property-management schema.
//!
//! Identifiers are opaque string tokens, timestamps are epoch seconds (0 as
//! the "unset" sentinel), and every enumeration maps to the small-integer
//! codes the downstream application binds to.

mod building;
mod fee;
mod parking;
mod role;
mod room;
mod service;
mod staff;
mod transaction;
mod user;

pub use building::Building;
pub use fee::{FeeStandard, FeeType};
pub use parking::ParkingSpace;
pub use role::{PermissionLevel, Role, ROLE_ADMIN, ROLE_OWNER, ROLE_STAFF};
pub use room::{OccupancyStatus, Room};
pub use service::{ServiceArea, ServiceRecord, ServiceStatus, ServiceTarget};
pub use staff::{Staff, StaffType};
pub use transaction::{PaymentMethod, PaymentStatus, Transaction};
pub use user::{AccountStatus, User};
