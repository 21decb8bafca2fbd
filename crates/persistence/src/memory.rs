//! In-memory seed store.
//!
//! Backs the test suite: same conflict-skip semantics for reference data and
//! the same use-after-commit guard as the PostgreSQL store, with every
//! generated row inspectable afterwards.

use async_trait::async_trait;

use domain::models::{
    Building, FeeStandard, ParkingSpace, Role, Room, ServiceArea, ServiceRecord, Staff, StaffType,
    Transaction as BillingTransaction, User,
};

use crate::error::StoreError;
use crate::store::SeedStore;

/// Seed store keeping every row in vectors.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub roles: Vec<Role>,
    pub users: Vec<User>,
    pub buildings: Vec<Building>,
    pub rooms: Vec<Room>,
    pub parking_spaces: Vec<ParkingSpace>,
    pub staff_types: Vec<StaffType>,
    pub staff: Vec<Staff>,
    pub service_areas: Vec<ServiceArea>,
    pub service_records: Vec<ServiceRecord>,
    pub fee_standards: Vec<FeeStandard>,
    pub transactions: Vec<BillingTransaction>,
    pub committed: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> Result<(), StoreError> {
        if self.committed {
            Err(StoreError::AlreadyCommitted)
        } else {
            Ok(())
        }
    }

    /// Looks up a user row by id, for cross-table assertions in tests.
    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }
}

#[async_trait]
impl SeedStore for MemoryStore {
    async fn seed_roles(&mut self, rows: &[Role]) -> Result<(), StoreError> {
        self.guard()?;
        for row in rows {
            if !self.roles.iter().any(|r| r.role_id == row.role_id) {
                self.roles.push(row.clone());
            }
        }
        Ok(())
    }

    async fn seed_fee_standards(&mut self, rows: &[FeeStandard]) -> Result<(), StoreError> {
        self.guard()?;
        for row in rows {
            if !self
                .fee_standards
                .iter()
                .any(|f| f.standard_id == row.standard_id)
            {
                self.fee_standards.push(row.clone());
            }
        }
        Ok(())
    }

    async fn seed_users(&mut self, rows: &[User]) -> Result<(), StoreError> {
        self.guard()?;
        for row in rows {
            if !self.users.iter().any(|u| u.username == row.username) {
                self.users.push(row.clone());
            }
        }
        Ok(())
    }

    async fn seed_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError> {
        self.guard()?;
        for row in rows {
            if !self
                .staff_types
                .iter()
                .any(|t| t.staff_type_id == row.staff_type_id)
            {
                self.staff_types.push(row.clone());
            }
        }
        Ok(())
    }

    async fn seed_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError> {
        self.guard()?;
        for row in rows {
            if !self.staff.iter().any(|s| s.staff_id == row.staff_id) {
                self.staff.push(row.clone());
            }
        }
        Ok(())
    }

    async fn insert_users(&mut self, rows: &[User]) -> Result<(), StoreError> {
        self.guard()?;
        self.users.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_buildings(&mut self, rows: &[Building]) -> Result<(), StoreError> {
        self.guard()?;
        self.buildings.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_rooms(&mut self, rows: &[Room]) -> Result<(), StoreError> {
        self.guard()?;
        self.rooms.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_parking_spaces(&mut self, rows: &[ParkingSpace]) -> Result<(), StoreError> {
        self.guard()?;
        self.parking_spaces.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError> {
        self.guard()?;
        self.staff_types.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError> {
        self.guard()?;
        self.staff.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_service_areas(&mut self, rows: &[ServiceArea]) -> Result<(), StoreError> {
        self.guard()?;
        self.service_areas.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_service_records(&mut self, rows: &[ServiceRecord]) -> Result<(), StoreError> {
        self.guard()?;
        self.service_records.extend_from_slice(rows);
        Ok(())
    }

    async fn insert_transactions(
        &mut self,
        rows: &[BillingTransaction],
    ) -> Result<(), StoreError> {
        self.guard()?;
        self.transactions.extend_from_slice(rows);
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        self.guard()?;
        self.committed = true;
        Ok(())
    }
}
