//! Persistence layer for the property seeder.
//!
//! This crate contains:
//! - Database connection management
//! - The transactional seed store (PostgreSQL and in-memory)
//! - Row batching for bounded-memory writes

pub mod batch;
pub mod db;
pub mod error;
pub mod memory;
pub mod store;

pub use batch::Batch;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{PgSeedStore, SeedStore};
