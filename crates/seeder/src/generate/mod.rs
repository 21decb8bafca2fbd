//! The generation pipeline.
//!
//! Generators run strictly in dependency order (reference data, buildings,
//! owners, rooms, parking, staff types, staff, service areas, service
//! records, billing), each returning the identifier pool(s) later stages
//! wire against, so no stage re-reads rows it just wrote. Every write goes
//! through one [`SeedStore`] transaction and the orchestrator issues the
//! single terminal commit.

pub mod billing;
pub mod ownership;
pub mod records;
pub mod reference;
pub mod structure;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use persistence::SeedStore;
use shared::time::BillingMonth;

use crate::config::GenerationConfig;
use crate::error::SeedError;

pub(crate) const DAY_SECS: i64 = 86_400;
pub(crate) const MONTH_SECS: i64 = 30 * DAY_SECS;
pub(crate) const YEAR_SECS: i64 = 365 * DAY_SECS;

/// Uniform instant between two epoch seconds, inclusive.
pub(crate) fn epoch_between(rng: &mut StdRng, start: i64, end: i64) -> i64 {
    rng.gen_range(start..=end)
}

/// Row counts of a completed run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub buildings: usize,
    pub owners: usize,
    pub rooms: usize,
    pub parking_spaces: usize,
    pub staff: usize,
    pub service_areas: usize,
    pub service_records: usize,
    pub transactions: usize,
}

/// Runs the whole pipeline against `store` and commits.
///
/// `months` is the caller-supplied billing month list; `now` anchors every
/// sampled historical instant. Any error aborts the remaining stages and
/// skips the commit, so an interrupted run leaves no rows behind.
pub async fn run<S: SeedStore>(
    store: &mut S,
    cfg: &GenerationConfig,
    months: &[BillingMonth],
    now: i64,
) -> Result<SeedSummary, SeedError> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let standards = reference::seed_reference_data(store, now).await?;
    info!("reference data seeded");

    let buildings = structure::generate_buildings(store, &mut rng, cfg).await?;
    info!(count = buildings.len(), "buildings generated");

    let owners = structure::generate_owners(store, &mut rng, cfg, now).await?;
    info!(count = owners.len(), "owner accounts generated");

    let rooms = structure::generate_rooms(store, &mut rng, cfg, &buildings, &owners).await?;
    info!(count = rooms.len(), "rooms generated");

    let parking_count = (rooms.len() as f64 * cfg.parking_ratio) as usize;
    let parking =
        structure::generate_parking_spaces(store, &mut rng, cfg, &owners, parking_count).await?;
    info!(count = parking.len(), "parking spaces generated");

    let staff_types = structure::generate_staff_types(store).await?;
    info!(count = staff_types.len(), "staff types generated");

    let staff_count = cfg.staff_min.max(rooms.len() / cfg.rooms_per_staff);
    let staff =
        structure::generate_staff(store, &mut rng, cfg, &staff_types, staff_count, now).await?;
    info!(count = staff.len(), "staff members generated");

    let service_areas =
        structure::generate_service_areas(store, &mut rng, &staff, &buildings, now).await?;
    info!(count = service_areas, "service areas assigned");

    let service_records =
        records::generate_service_records(store, &mut rng, cfg, &staff, &buildings, &rooms, now)
            .await?;
    info!(count = service_records, "service records generated");

    let schedule = billing::FeeSchedule::from_standards(&standards);
    let transactions =
        billing::generate_transactions(store, &mut rng, cfg, &schedule, &rooms, &parking, months)
            .await?;
    info!(count = transactions, "billing transactions generated");

    store.commit().await?;
    info!("run committed");

    Ok(SeedSummary {
        buildings: buildings.len(),
        owners: owners.len(),
        rooms: rooms.len(),
        parking_spaces: parking.len(),
        staff: staff.len(),
        service_areas,
        service_records,
        transactions,
    })
}
