//! Domain layer for the property seeder.
//!
//! This crate contains:
//! - Entity models matching the property-management schema
//! - Integer-coded enumerations shared with downstream consumers

pub mod models;
