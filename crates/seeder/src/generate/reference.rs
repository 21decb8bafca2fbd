//! Fixed vocabulary rows everything else depends on: roles, fee standards
//! and the default privileged accounts.
//!
//! All rows here carry deterministic identifiers and are written with
//! skip-on-conflict semantics, so rerunning against an already-seeded
//! target neither duplicates them nor breaks their cross-references.

use domain::models::{
    AccountStatus, FeeStandard, FeeType, PermissionLevel, Role, Staff, StaffType, User, ROLE_ADMIN,
    ROLE_OWNER, ROLE_STAFF,
};
use persistence::SeedStore;
use shared::crypto::password_digest;
use shared::time::UNSET;

use crate::error::SeedError;

/// Epoch second the seeded fee standards take effect: 2024-01-01 00:00:00
/// UTC.
const STANDARDS_EFFECTIVE: i64 = 1_704_067_200;

const ADMIN_USER_ID: &str = "user_admin";
const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

const STAFF_USER_ID: &str = "user_staff";
const STAFF_USERNAME: &str = "staff";
const STAFF_PASSWORD: &str = "staff123";

const DEFAULT_STAFF_TYPE_ID: &str = "stype_default";
const DEFAULT_STAFF_ID: &str = "staff_default";

/// The three fixed roles.
pub fn role_catalog() -> Vec<Role> {
    vec![
        Role {
            role_id: ROLE_ADMIN.to_string(),
            role_name: "管理员".to_string(),
            permission_level: PermissionLevel::Admin,
        },
        Role {
            role_id: ROLE_STAFF.to_string(),
            role_name: "物业服务人员".to_string(),
            permission_level: PermissionLevel::Staff,
        },
        Role {
            role_id: ROLE_OWNER.to_string(),
            role_name: "业主".to_string(),
            permission_level: PermissionLevel::Owner,
        },
    ]
}

/// The six fixed fee standards, all effective from the reference date with
/// an open end date. Parking carries two tiers (surface and underground).
pub fn fee_standard_catalog() -> Vec<FeeStandard> {
    let standard = |id: &str, fee_type: FeeType, price: f64, unit: &str| FeeStandard {
        standard_id: id.to_string(),
        fee_type,
        price_per_unit: price,
        unit: unit.to_string(),
        effective_date: STANDARDS_EFFECTIVE,
        end_date: UNSET,
    };
    vec![
        standard("PF01", FeeType::Property, 3.5, "元/㎡/月"),
        standard("CF01", FeeType::Parking, 300.0, "元/月"),
        standard("CF02", FeeType::Parking, 400.0, "元/月"),
        standard("WF01", FeeType::Water, 4.9, "元/m³"),
        standard("EF01", FeeType::Electricity, 0.98, "元/kWh"),
        standard("GF01", FeeType::Gas, 3.2, "元/m³"),
    ]
}

/// Seeds roles, fee standards and the default accounts. Returns the fee
/// standards so the billing engine can resolve unit prices without a
/// read-back.
pub async fn seed_reference_data<S: SeedStore>(
    store: &mut S,
    now: i64,
) -> Result<Vec<FeeStandard>, SeedError> {
    store.seed_roles(&role_catalog()).await?;

    let standards = fee_standard_catalog();
    store.seed_fee_standards(&standards).await?;

    seed_default_accounts(store, now).await?;
    Ok(standards)
}

/// One admin and one staff account with reproducible credentials, plus the
/// default staff type and the staff record backing the staff account.
async fn seed_default_accounts<S: SeedStore>(store: &mut S, now: i64) -> Result<(), SeedError> {
    let account = |user_id: &str, username: &str, password: &str, name: &str, role_id: &str| User {
        user_id: user_id.to_string(),
        username: username.to_string(),
        password_hash: password_digest(password),
        name: name.to_string(),
        phone_number: None,
        email: None,
        role_id: role_id.to_string(),
        status: AccountStatus::Active,
        registration_date: now,
    };

    store
        .seed_users(&[
            account(
                ADMIN_USER_ID,
                ADMIN_USERNAME,
                ADMIN_PASSWORD,
                "系统管理员",
                ROLE_ADMIN,
            ),
            account(
                STAFF_USER_ID,
                STAFF_USERNAME,
                STAFF_PASSWORD,
                "物业服务员",
                ROLE_STAFF,
            ),
        ])
        .await?;

    store
        .seed_staff_types(&[StaffType {
            staff_type_id: DEFAULT_STAFF_TYPE_ID.to_string(),
            type_name: "普通物业人员".to_string(),
            description: "默认物业服务人员类型".to_string(),
        }])
        .await?;

    store
        .seed_staff(&[Staff {
            staff_id: DEFAULT_STAFF_ID.to_string(),
            user_id: STAFF_USER_ID.to_string(),
            staff_type_id: DEFAULT_STAFF_TYPE_ID.to_string(),
            hire_date: now,
            status: AccountStatus::Active,
        }])
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::MemoryStore;

    #[test]
    fn test_role_catalog_covers_all_permission_levels() {
        let roles = role_catalog();
        assert_eq!(roles.len(), 3);
        let mut levels: Vec<i16> = roles.iter().map(|r| r.permission_level.code()).collect();
        levels.sort_unstable();
        assert_eq!(levels, vec![1, 2, 3]);
    }

    #[test]
    fn test_fee_standard_catalog_shape() {
        let standards = fee_standard_catalog();
        assert_eq!(standards.len(), 6);
        assert!(standards.iter().all(|s| s.is_open_ended()));
        assert!(standards
            .iter()
            .all(|s| s.effective_date == STANDARDS_EFFECTIVE));
        let parking_tiers = standards
            .iter()
            .filter(|s| s.fee_type == FeeType::Parking)
            .count();
        assert_eq!(parking_tiers, 2);
    }

    #[tokio::test]
    async fn test_seeding_twice_does_not_duplicate() {
        let mut store = MemoryStore::new();
        seed_reference_data(&mut store, 1_700_000_000).await.unwrap();
        seed_reference_data(&mut store, 1_700_000_000).await.unwrap();

        assert_eq!(store.roles.len(), 3);
        assert_eq!(store.fee_standards.len(), 6);
        assert_eq!(store.users.len(), 2);
        assert_eq!(store.staff_types.len(), 1);
        assert_eq!(store.staff.len(), 1);
    }

    #[tokio::test]
    async fn test_default_staff_account_is_wired() {
        let mut store = MemoryStore::new();
        seed_reference_data(&mut store, 1_700_000_000).await.unwrap();

        let staff = &store.staff[0];
        let user = store.user(&staff.user_id).expect("staff user must exist");
        assert_eq!(user.role_id, ROLE_STAFF);
        assert_eq!(user.password_hash, password_digest("staff123"));
    }
}
