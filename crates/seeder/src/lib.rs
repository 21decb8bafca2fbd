//! Synthetic dataset generator for a residential property-management store.
//!
//! Populates users/roles, buildings, rooms, parking spaces, staff, service
//! activity and monthly billing transactions with referentially valid,
//! statistically plausible data for testing and demos.

pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
