//! Monthly billing transactions for owned assets.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::Rng;

use domain::models::{FeeStandard, FeeType, PaymentMethod, PaymentStatus, Transaction};
use persistence::{Batch, SeedStore};
use shared::crypto::new_id;
use shared::money::round2;
use shared::time::{BillingMonth, UNSET};

use super::structure::{ParkingRef, RoomRef};
use crate::config::GenerationConfig;
use crate::error::SeedError;

const TRANSACTION_FLUSH: usize = 500;

/// Index order matches the configured status weights.
const STATUSES: [PaymentStatus; 3] = [
    PaymentStatus::Unpaid,
    PaymentStatus::Paid,
    PaymentStatus::Overdue,
];

const METHODS: [PaymentMethod; 4] = [
    PaymentMethod::Cash,
    PaymentMethod::Wechat,
    PaymentMethod::Alipay,
    PaymentMethod::BankTransfer,
];

/// Unit prices resolved from the seeded fee standards.
///
/// The last row per fee type wins, matching the management application's
/// lookup; with two parking tiers seeded, every parking bill uses the
/// second (underground) rate. The tier distinction itself is a known
/// inconsistency left as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSchedule {
    pub property_rate: f64,
    pub parking_rate: f64,
}

impl FeeSchedule {
    pub fn from_standards(standards: &[FeeStandard]) -> Self {
        let mut schedule = Self {
            property_rate: 0.0,
            parking_rate: 0.0,
        };
        for standard in standards {
            match standard.fee_type {
                FeeType::Property => schedule.property_rate = standard.price_per_unit,
                FeeType::Parking => schedule.parking_rate = standard.price_per_unit,
                _ => {}
            }
        }
        schedule
    }
}

/// One billable asset reference.
enum Charge<'a> {
    Room { room_id: &'a str, area_sqm: f64 },
    Parking { parking_id: &'a str },
}

/// Emits one transaction per owned asset per requested month. Assets
/// without an owner produce no rows at all.
pub async fn generate_transactions<S: SeedStore>(
    store: &mut S,
    rng: &mut StdRng,
    cfg: &GenerationConfig,
    schedule: &FeeSchedule,
    rooms: &[RoomRef],
    parking: &[ParkingRef],
    months: &[BillingMonth],
) -> Result<usize, SeedError> {
    let status_dist = WeightedIndex::new(cfg.payment_status_weights)?;
    let mut batch = Batch::new(TRANSACTION_FLUSH);
    let mut written = 0usize;

    for room in rooms {
        let Some(owner_id) = room.owner_id.as_deref() else {
            continue;
        };
        for month in months {
            let row = build_transaction(
                rng,
                &status_dist,
                owner_id,
                Charge::Room {
                    room_id: &room.room_id,
                    area_sqm: room.area_sqm,
                },
                schedule,
                month,
            );
            written += 1;
            if let Some(chunk) = batch.push(row) {
                store.insert_transactions(&chunk).await?;
            }
        }
    }

    for space in parking {
        let Some(owner_id) = space.owner_id.as_deref() else {
            continue;
        };
        for month in months {
            let row = build_transaction(
                rng,
                &status_dist,
                owner_id,
                Charge::Parking {
                    parking_id: &space.parking_id,
                },
                schedule,
                month,
            );
            written += 1;
            if let Some(chunk) = batch.push(row) {
                store.insert_transactions(&chunk).await?;
            }
        }
    }

    let rest = batch.finish();
    if !rest.is_empty() {
        store.insert_transactions(&rest).await?;
    }
    Ok(written)
}

/// Computes one month's bill: area-based for rooms, flat-rate for parking.
/// Paid bills get a payment instant within the period and a real payment
/// method; unpaid and overdue ones carry the 0 sentinel and the cash
/// placeholder.
fn build_transaction(
    rng: &mut StdRng,
    status_dist: &WeightedIndex<f64>,
    owner_id: &str,
    charge: Charge<'_>,
    schedule: &FeeSchedule,
    month: &BillingMonth,
) -> Transaction {
    let period_start = month.period_start();
    let period_end = month.period_end();
    let due_date = period_end;

    let status = STATUSES[status_dist.sample(rng)];
    let (payment_date, payment_method) = if matches!(status, PaymentStatus::Paid) {
        (
            rng.gen_range(period_start..=due_date),
            METHODS[rng.gen_range(0..METHODS.len())],
        )
    } else {
        (UNSET, PaymentMethod::Cash)
    };

    let (room_id, parking_id, fee_type, amount) = match charge {
        Charge::Room { room_id, area_sqm } => (
            Some(room_id.to_string()),
            None,
            FeeType::Property,
            round2(area_sqm * schedule.property_rate),
        ),
        Charge::Parking { parking_id } => (
            None,
            Some(parking_id.to_string()),
            FeeType::Parking,
            schedule.parking_rate,
        ),
    };

    Transaction {
        transaction_id: new_id(),
        user_id: owner_id.to_string(),
        room_id,
        parking_id,
        fee_type,
        amount,
        payment_date,
        due_date,
        payment_method,
        status,
        period_start,
        period_end,
    }
}
