//! Service activity records.

use fake::faker::lorem::raw::Sentence;
use fake::locales::ZH_CN;
use fake::Fake;
use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use domain::models::{ServiceRecord, ServiceStatus, ServiceTarget};
use persistence::{Batch, SeedStore};
use shared::crypto::new_id;

use super::structure::{BuildingRef, RoomRef};
use super::{epoch_between, YEAR_SECS};
use crate::config::GenerationConfig;
use crate::error::SeedError;

const RECORD_FLUSH: usize = 500;

const SERVICE_TYPE_CATALOG: [&str; 8] = [
    "日常巡检",
    "设备维修",
    "清洁服务",
    "安全检查",
    "投诉处理",
    "访客登记",
    "快递接收",
    "紧急救援",
];

/// Index order matches the configured status weights.
const STATUSES: [ServiceStatus; 3] = [
    ServiceStatus::Pending,
    ServiceStatus::InProgress,
    ServiceStatus::Done,
];

/// Emits `cfg.service_records` staff-attributed activity records. The
/// target is a building with probability `building_target_rate`, otherwise
/// a room drawn uniformly over all generated rooms regardless of ownership.
pub async fn generate_service_records<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    staff_ids: &[String],
    buildings: &[BuildingRef],
    rooms: &[RoomRef],
    now: i64,
) -> Result<usize, SeedError> {
    if cfg.service_records == 0 {
        return Ok(0);
    }

    let status_dist = WeightedIndex::new(cfg.service_status_weights)?;
    let mut batch = Batch::new(RECORD_FLUSH);

    for _ in 0..cfg.service_records {
        let staff_id = staff_ids
            .choose(rng)
            .ok_or(SeedError::EmptyPool("staff"))?
            .clone();
        let target = if rng.gen_bool(cfg.building_target_rate) {
            let building = buildings.choose(rng).ok_or(SeedError::EmptyPool("building"))?;
            ServiceTarget::Building(building.building_id.clone())
        } else {
            let room = rooms.choose(rng).ok_or(SeedError::EmptyPool("room"))?;
            ServiceTarget::Room(room.room_id.clone())
        };

        let record = ServiceRecord {
            record_id: new_id(),
            staff_id,
            service_type: SERVICE_TYPE_CATALOG[rng.gen_range(0..SERVICE_TYPE_CATALOG.len())]
                .to_string(),
            service_date: epoch_between(rng, now - 2 * YEAR_SECS, now),
            description: Sentence(ZH_CN, 4..10).fake_with_rng(rng),
            status: STATUSES[status_dist.sample(rng)],
            target,
        };
        if let Some(chunk) = batch.push(record) {
            store.insert_service_records(&chunk).await?;
        }
    }

    let rest = batch.finish();
    if !rest.is_empty() {
        store.insert_service_records(&rest).await?;
    }
    Ok(cfg.service_records)
}
