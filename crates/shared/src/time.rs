//! Conversions between calendar instants and the stored epoch-second form,
//! plus billing-period arithmetic.
//!
//! All persisted timestamps are signed integer seconds since the Unix epoch,
//! computed against the UTC calendar. Epoch value 0 is the sentinel for "no
//! real timestamp" (unpaid transactions, open-ended fee standards).

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};

/// Sentinel epoch value representing the absence of a real timestamp.
pub const UNSET: i64 = 0;

/// Converts a calendar instant to stored epoch seconds.
pub fn epoch(instant: DateTime<Utc>) -> i64 {
    instant.timestamp()
}

/// Converts stored epoch seconds back to a calendar instant.
///
/// Returns `None` for values outside chrono's representable range.
pub fn from_epoch(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// One calendar month used as a billing period.
///
/// Always holds a valid (year, month) pair; construction validates once so
/// the period accessors cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingMonth {
    first_day: NaiveDate,
}

impl BillingMonth {
    /// Creates a billing month, or `None` if `month` is not in `1..=12`.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Epoch second of day 1 of the month, 00:00:00.
    pub fn period_start(&self) -> i64 {
        self.first_day.and_time(NaiveTime::MIN).and_utc().timestamp()
    }

    /// Epoch second of the last day of the month, 23:59:59.
    ///
    /// Computed as the first instant of the following month minus one second,
    /// which handles the December→January year rollover.
    pub fn period_end(&self) -> i64 {
        let next = self.first_day + Months::new(1);
        next.and_time(NaiveTime::MIN).and_utc().timestamp() - 1
    }
}

/// Derives the default month list fed to the billing engine: the current
/// month and its predecessors, newest first, stepping the first of the month
/// back in 30-day strides.
///
/// The stride is an approximation carried over from the management
/// application's billing job; around long months it may skip a calendar
/// month. Callers wanting exact sequences pass their own list.
pub fn recent_months(now: DateTime<Utc>, count: usize) -> Vec<BillingMonth> {
    let today = now.date_naive();
    let first = today - Duration::days(i64::from(today.day0()));

    (0..count)
        .filter_map(|i| {
            let day = first - Duration::days(30 * i as i64);
            BillingMonth::new(day.year(), day.month())
        })
        .collect()
}
