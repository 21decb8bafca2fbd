//! Structural generators: the physical and organizational skeleton.
//!
//! Buildings, owner accounts, rooms, parking spaces, the staff-type catalog,
//! staff members and their service-area assignments. Each generator is
//! parameterized by [`GenerationConfig`] and draws cross-references from the
//! pools produced by earlier generators.

use fake::faker::internet::raw::{FreeEmail, Username};
use fake::faker::name::raw::Name;
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::ZH_CN;
use fake::Fake;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use domain::models::{
    AccountStatus, Building, OccupancyStatus, ParkingSpace, Room, ServiceArea, Staff, StaffType,
    User, ROLE_OWNER, ROLE_STAFF,
};
use persistence::{Batch, SeedStore};
use shared::crypto::{new_id, password_digest};
use shared::money::round2;

use super::{epoch_between, ownership, MONTH_SECS, YEAR_SECS};
use crate::config::GenerationConfig;
use crate::error::SeedError;

/// Shared password of every generated owner account.
const OWNER_PASSWORD: &str = "password123";
/// Shared password of every generated staff account.
const STAFF_PASSWORD: &str = "staffpass";

const ROOM_FLUSH: usize = 500;
const STAFF_FLUSH: usize = 50;

const STAFF_TYPE_CATALOG: [(&str, &str); 5] = [
    ("管家", "负责业主日常服务"),
    ("保安", "负责小区安全"),
    ("清洁工", "负责小区清洁"),
    ("维修工", "负责设施维修"),
    ("绿化工", "负责园艺管理"),
];

/// Pool entry for a generated building.
#[derive(Debug, Clone)]
pub struct BuildingRef {
    pub building_id: String,
    pub floors: i32,
}

/// Pool entry for a generated room, carrying what billing needs.
#[derive(Debug, Clone)]
pub struct RoomRef {
    pub room_id: String,
    pub owner_id: Option<String>,
    pub area_sqm: f64,
}

/// Pool entry for a generated parking space.
#[derive(Debug, Clone)]
pub struct ParkingRef {
    pub parking_id: String,
    pub owner_id: Option<String>,
}

/// Emits `cfg.buildings` buildings with floor counts sampled from the
/// configured range.
pub async fn generate_buildings<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
) -> Result<Vec<BuildingRef>, SeedError> {
    let mut rows = Vec::with_capacity(cfg.buildings);
    let mut pool = Vec::with_capacity(cfg.buildings);

    for i in 1..=cfg.buildings {
        let floors = rng.gen_range(cfg.floors_min..=cfg.floors_max);
        let building = Building {
            building_id: new_id(),
            building_name: format!("A{}", i),
            address: format!("示范小区{}号楼", i),
            floors_count: floors,
        };
        pool.push(BuildingRef {
            building_id: building.building_id.clone(),
            floors,
        });
        rows.push(building);
    }

    store.insert_buildings(&rows).await?;
    Ok(pool)
}

/// Emits `cfg.owners` owner accounts with localized synthetic identities and
/// registration instants within the past two years.
pub async fn generate_owners<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    now: i64,
) -> Result<Vec<String>, SeedError> {
    let password_hash = password_digest(OWNER_PASSWORD);
    let mut rows = Vec::with_capacity(cfg.owners);
    let mut pool = Vec::with_capacity(cfg.owners);

    for _ in 0..cfg.owners {
        let username = format!(
            "{}{}",
            Username(ZH_CN).fake_with_rng::<String, _>(rng),
            rng.gen_range(1..=9999)
        );
        let user = User {
            user_id: new_id(),
            username,
            password_hash: password_hash.clone(),
            name: Name(ZH_CN).fake_with_rng(rng),
            phone_number: Some(PhoneNumber(ZH_CN).fake_with_rng(rng)),
            email: Some(FreeEmail(ZH_CN).fake_with_rng(rng)),
            role_id: ROLE_OWNER.to_string(),
            status: AccountStatus::Active,
            registration_date: epoch_between(rng, now - 2 * YEAR_SECS, now),
        };
        pool.push(user.user_id.clone());
        rows.push(user);
    }

    store.insert_users(&rows).await?;
    Ok(pool)
}

/// Emits 8 units per floor for every building: room number encodes floor and
/// unit ("201" = floor 2, unit 1), area is uniform within the configured
/// range, ownership follows the room owner rate.
pub async fn generate_rooms<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    buildings: &[BuildingRef],
    owners: &[String],
) -> Result<Vec<RoomRef>, SeedError> {
    let mut batch = Batch::new(ROOM_FLUSH);
    let mut pool = Vec::new();

    for building in buildings {
        for floor in 1..=building.floors {
            for unit in 1..=cfg.units_per_floor {
                let area = round2(rng.gen_range(cfg.area_min..=cfg.area_max));
                let owner_id = ownership::assign_owner(rng, owners, cfg.room_owner_rate);
                let room = Room {
                    room_id: new_id(),
                    building_id: building.building_id.clone(),
                    room_number: format!("{}{:02}", floor, unit),
                    floor,
                    area_sqm: area,
                    status: OccupancyStatus::for_owner(owner_id.as_deref()),
                    owner_id: owner_id.clone(),
                };
                pool.push(RoomRef {
                    room_id: room.room_id.clone(),
                    owner_id,
                    area_sqm: area,
                });
                if let Some(chunk) = batch.push(room) {
                    store.insert_rooms(&chunk).await?;
                }
            }
        }
    }

    let rest = batch.finish();
    if !rest.is_empty() {
        store.insert_rooms(&rest).await?;
    }
    Ok(pool)
}

/// Emits `count` parking spaces numbered `P001`, `P002`, ... with ownership
/// following the parking owner rate.
pub async fn generate_parking_spaces<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    owners: &[String],
    count: usize,
) -> Result<Vec<ParkingRef>, SeedError> {
    let mut rows = Vec::with_capacity(count);
    let mut pool = Vec::with_capacity(count);

    for i in 1..=count {
        let owner_id = ownership::assign_owner(rng, owners, cfg.parking_owner_rate);
        let space = ParkingSpace {
            parking_id: new_id(),
            parking_number: format!("P{:03}", i),
            status: OccupancyStatus::for_owner(owner_id.as_deref()),
            owner_id: owner_id.clone(),
        };
        pool.push(ParkingRef {
            parking_id: space.parking_id.clone(),
            owner_id,
        });
        rows.push(space);
    }

    store.insert_parking_spaces(&rows).await?;
    Ok(pool)
}

/// Emits the fixed staff-type catalog.
pub async fn generate_staff_types<S: SeedStore>(store: &mut S) -> Result<Vec<String>, SeedError> {
    let rows: Vec<StaffType> = STAFF_TYPE_CATALOG
        .iter()
        .map(|(type_name, description)| StaffType {
            staff_type_id: new_id(),
            type_name: type_name.to_string(),
            description: description.to_string(),
        })
        .collect();

    let pool = rows.iter().map(|t| t.staff_type_id.clone()).collect();
    store.insert_staff_types(&rows).await?;
    Ok(pool)
}

/// Emits `count` staff accounts, each backed by exactly one staff record
/// with a uniformly drawn staff type. Staff rows are flushed in chunks of
/// 50, user rows alongside them.
pub async fn generate_staff<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    staff_type_ids: &[String],
    count: usize,
    now: i64,
) -> Result<Vec<String>, SeedError> {
    let password_hash = password_digest(STAFF_PASSWORD);
    let mut users = Batch::new(STAFF_FLUSH);
    let mut staff_rows = Batch::new(STAFF_FLUSH);
    let mut pool = Vec::with_capacity(count);

    for i in 0..count {
        let user = User {
            user_id: new_id(),
            username: format!("staff{}", i + 1),
            password_hash: password_hash.clone(),
            name: Name(ZH_CN).fake_with_rng(rng),
            phone_number: Some(PhoneNumber(ZH_CN).fake_with_rng(rng)),
            email: Some(FreeEmail(ZH_CN).fake_with_rng(rng)),
            role_id: ROLE_STAFF.to_string(),
            status: AccountStatus::Active,
            registration_date: epoch_between(rng, now - 3 * YEAR_SECS, now - YEAR_SECS),
        };
        let staff_type_id = staff_type_ids
            .choose(rng)
            .ok_or(SeedError::EmptyPool("staff type"))?
            .clone();
        let staff = Staff {
            staff_id: new_id(),
            user_id: user.user_id.clone(),
            staff_type_id,
            hire_date: epoch_between(rng, now - 3 * YEAR_SECS, now - 6 * MONTH_SECS),
            status: AccountStatus::Active,
        };
        pool.push(staff.staff_id.clone());

        // Users flush first so staff rows never reference an unwritten user.
        if let Some(chunk) = users.push(user) {
            store.insert_users(&chunk).await?;
        }
        if let Some(chunk) = staff_rows.push(staff) {
            store.insert_staff(&chunk).await?;
        }
    }

    let rest = users.finish();
    if !rest.is_empty() {
        store.insert_users(&rest).await?;
    }
    let rest = staff_rows.finish();
    if !rest.is_empty() {
        store.insert_staff(&rest).await?;
    }
    Ok(pool)
}

/// Assigns every staff member 1 or 2 distinct buildings to service.
pub async fn generate_service_areas<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    staff_ids: &[String],
    buildings: &[BuildingRef],
    now: i64,
) -> Result<usize, SeedError> {
    let mut rows = Vec::new();

    for staff_id in staff_ids {
        let wanted = rng.gen_range(1..=2usize).min(buildings.len());
        for building in buildings.choose_multiple(rng, wanted) {
            rows.push(ServiceArea {
                area_id: new_id(),
                staff_id: staff_id.clone(),
                building_id: building.building_id.clone(),
                assignment_date: epoch_between(rng, now - 2 * YEAR_SECS, now - MONTH_SECS),
            });
        }
    }

    store.insert_service_areas(&rows).await?;
    Ok(rows.len())
}
