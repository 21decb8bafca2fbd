//! The transactional seed store.
//!
//! All writes of one generation run go through a single store holding one
//! database transaction. Batched inserts bound memory but are never
//! individually durable; only the terminal [`SeedStore::commit`] makes the
//! run visible. Dropping the store without committing rolls everything back.

use async_trait::async_trait;
use sqlx::postgres::PgConnection;
use sqlx::{PgPool, Postgres, Transaction};

use domain::models::{
    Building, FeeStandard, ParkingSpace, Role, Room, ServiceArea, ServiceRecord, Staff, StaffType,
    Transaction as BillingTransaction, User,
};

use crate::error::StoreError;

/// Batched, deferred-commit insert interface the generators write through.
///
/// `seed_*` methods are idempotent (skip on conflict) so reference data
/// tolerates reruns against a non-empty target. `insert_*` methods are plain
/// inserts: a constraint violation there is a logic defect and aborts the
/// run.
#[async_trait]
pub trait SeedStore: Send {
    async fn seed_roles(&mut self, rows: &[Role]) -> Result<(), StoreError>;
    async fn seed_fee_standards(&mut self, rows: &[FeeStandard]) -> Result<(), StoreError>;
    async fn seed_users(&mut self, rows: &[User]) -> Result<(), StoreError>;
    async fn seed_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError>;
    async fn seed_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError>;

    async fn insert_users(&mut self, rows: &[User]) -> Result<(), StoreError>;
    async fn insert_buildings(&mut self, rows: &[Building]) -> Result<(), StoreError>;
    async fn insert_rooms(&mut self, rows: &[Room]) -> Result<(), StoreError>;
    async fn insert_parking_spaces(&mut self, rows: &[ParkingSpace]) -> Result<(), StoreError>;
    async fn insert_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError>;
    async fn insert_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError>;
    async fn insert_service_areas(&mut self, rows: &[ServiceArea]) -> Result<(), StoreError>;
    async fn insert_service_records(&mut self, rows: &[ServiceRecord]) -> Result<(), StoreError>;
    async fn insert_transactions(&mut self, rows: &[BillingTransaction])
        -> Result<(), StoreError>;

    /// The run's single durability point. Using the store afterwards is an
    /// error.
    async fn commit(&mut self) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store holding the run's transaction.
pub struct PgSeedStore {
    tx: Option<Transaction<'static, Postgres>>,
}

impl PgSeedStore {
    /// Begins the run's transaction on a connection from the pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, StoreError> {
        Ok(Self {
            tx: Some(pool.begin().await?),
        })
    }

    fn conn(&mut self) -> Result<&mut PgConnection, StoreError> {
        match self.tx.as_mut() {
            Some(tx) => Ok(&mut **tx),
            None => Err(StoreError::AlreadyCommitted),
        }
    }

    async fn write_users(&mut self, rows: &[User], skip_conflicts: bool) -> Result<(), StoreError> {
        let sql = if skip_conflicts {
            "INSERT INTO users (user_id, username, password_hash, name, phone_number, email, role_id, status, registration_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (username) DO NOTHING"
        } else {
            "INSERT INTO users (user_id, username, password_hash, name, phone_number, email, role_id, status, registration_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)"
        };
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(sql)
                .bind(&row.user_id)
                .bind(&row.username)
                .bind(&row.password_hash)
                .bind(&row.name)
                .bind(row.phone_number.as_deref())
                .bind(row.email.as_deref())
                .bind(&row.role_id)
                .bind(row.status.code())
                .bind(row.registration_date)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }

    async fn write_staff_types(
        &mut self,
        rows: &[StaffType],
        skip_conflicts: bool,
    ) -> Result<(), StoreError> {
        let sql = if skip_conflicts {
            "INSERT INTO staff_types (staff_type_id, type_name, description)
             VALUES ($1, $2, $3)
             ON CONFLICT (staff_type_id) DO NOTHING"
        } else {
            "INSERT INTO staff_types (staff_type_id, type_name, description)
             VALUES ($1, $2, $3)"
        };
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(sql)
                .bind(&row.staff_type_id)
                .bind(&row.type_name)
                .bind(&row.description)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }

    async fn write_staff(&mut self, rows: &[Staff], skip_conflicts: bool) -> Result<(), StoreError> {
        let sql = if skip_conflicts {
            "INSERT INTO staff (staff_id, user_id, staff_type_id, hire_date, status)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (staff_id) DO NOTHING"
        } else {
            "INSERT INTO staff (staff_id, user_id, staff_type_id, hire_date, status)
             VALUES ($1, $2, $3, $4, $5)"
        };
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(sql)
                .bind(&row.staff_id)
                .bind(&row.user_id)
                .bind(&row.staff_type_id)
                .bind(row.hire_date)
                .bind(row.status.code())
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl SeedStore for PgSeedStore {
    async fn seed_roles(&mut self, rows: &[Role]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO roles (role_id, role_name, permission_level)
                 VALUES ($1, $2, $3)
                 ON CONFLICT (role_id) DO NOTHING",
            )
            .bind(&row.role_id)
            .bind(&row.role_name)
            .bind(row.permission_level.code())
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn seed_fee_standards(&mut self, rows: &[FeeStandard]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO fee_standards (standard_id, fee_type, price_per_unit, unit, effective_date, end_date)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (standard_id) DO NOTHING",
            )
            .bind(&row.standard_id)
            .bind(row.fee_type.code())
            .bind(row.price_per_unit)
            .bind(&row.unit)
            .bind(row.effective_date)
            .bind(row.end_date)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn seed_users(&mut self, rows: &[User]) -> Result<(), StoreError> {
        self.write_users(rows, true).await
    }

    async fn seed_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError> {
        self.write_staff_types(rows, true).await
    }

    async fn seed_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError> {
        self.write_staff(rows, true).await
    }

    async fn insert_users(&mut self, rows: &[User]) -> Result<(), StoreError> {
        self.write_users(rows, false).await
    }

    async fn insert_buildings(&mut self, rows: &[Building]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO buildings (building_id, building_name, address, floors_count)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&row.building_id)
            .bind(&row.building_name)
            .bind(&row.address)
            .bind(row.floors_count)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_rooms(&mut self, rows: &[Room]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO rooms (room_id, building_id, room_number, floor, area_sqm, owner_id, status)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&row.room_id)
            .bind(&row.building_id)
            .bind(&row.room_number)
            .bind(row.floor)
            .bind(row.area_sqm)
            .bind(row.owner_id.as_deref())
            .bind(row.status.code())
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_parking_spaces(&mut self, rows: &[ParkingSpace]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO parking_spaces (parking_id, parking_number, owner_id, status)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&row.parking_id)
            .bind(&row.parking_number)
            .bind(row.owner_id.as_deref())
            .bind(row.status.code())
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_staff_types(&mut self, rows: &[StaffType]) -> Result<(), StoreError> {
        self.write_staff_types(rows, false).await
    }

    async fn insert_staff(&mut self, rows: &[Staff]) -> Result<(), StoreError> {
        self.write_staff(rows, false).await
    }

    async fn insert_service_areas(&mut self, rows: &[ServiceArea]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO service_areas (area_id, staff_id, building_id, assignment_date)
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(&row.area_id)
            .bind(&row.staff_id)
            .bind(&row.building_id)
            .bind(row.assignment_date)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_service_records(&mut self, rows: &[ServiceRecord]) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO service_records (record_id, staff_id, service_type, service_date, description, status, target_id)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(&row.record_id)
            .bind(&row.staff_id)
            .bind(&row.service_type)
            .bind(row.service_date)
            .bind(&row.description)
            .bind(row.status.code())
            .bind(row.target.id())
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn insert_transactions(
        &mut self,
        rows: &[BillingTransaction],
    ) -> Result<(), StoreError> {
        let conn = self.conn()?;
        for row in rows {
            sqlx::query(
                "INSERT INTO transactions (transaction_id, user_id, room_id, parking_id, fee_type, amount, payment_date, due_date, payment_method, status, period_start, period_end)
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
            )
            .bind(&row.transaction_id)
            .bind(&row.user_id)
            .bind(row.room_id.as_deref())
            .bind(row.parking_id.as_deref())
            .bind(row.fee_type.code())
            .bind(row.amount)
            .bind(row.payment_date)
            .bind(row.due_date)
            .bind(row.payment_method.code())
            .bind(row.status.code())
            .bind(row.period_start)
            .bind(row.period_end)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    async fn commit(&mut self) -> Result<(), StoreError> {
        match self.tx.take() {
            Some(tx) => Ok(tx.commit().await?),
            None => Err(StoreError::AlreadyCommitted),
        }
    }
}
