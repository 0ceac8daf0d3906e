//! Retention policy - which dated entries survive a rotation
//!
//! Three overlapping tiers decide whether a day directory is kept:
//!
//! | Tier | Protects | Window |
//! |------|----------|--------|
//! | **Daily** | every entry | `days` |
//! | **Weekly** | Sundays | `weeks * 7` days |
//! | **Monthly** | first of the month | `months * 30` days |
//!
//! An entry is deleted only when no tier covers it. The monthly window is a
//! fixed multiple of 30 days, not calendar months.

use crate::date::ArchiveDate;
use chrono::NaiveDate;

/// Days per week used by the weekly window
pub const DAYS_PER_WEEK: i64 = 7;

/// Days per month used by the monthly window
pub const DAYS_PER_MONTH: i64 = 30;

/// Why an entry was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeepReason {
    /// Younger than the daily window
    Daily,

    /// A Sunday inside the weekly window
    Weekly,

    /// A first-of-month inside the monthly window
    Monthly,
}

impl KeepReason {
    /// Get the reason name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            KeepReason::Daily => "daily",
            KeepReason::Weekly => "weekly",
            KeepReason::Monthly => "monthly",
        }
    }
}

/// The retention decision for one dated entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// At least one tier protects the entry
    Keep(KeepReason),

    /// No tier protects the entry
    Delete,
}

impl Verdict {
    /// True for [`Verdict::Delete`]
    pub fn is_delete(&self) -> bool {
        matches!(self, Verdict::Delete)
    }
}

/// Tiered retention parameters
///
/// A value of 0 disables that tier's grace extension; the daily window still
/// applies to every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Keep every entry at most this many days old
    pub days: u32,

    /// Keep Sunday entries for this many weeks
    pub weeks: u32,

    /// Keep first-of-month entries for this many 30-day months
    pub months: u32,
}

impl Default for RetentionPolicy {
    /// 7 days, 4 weeks, 3 months
    fn default() -> Self {
        Self {
            days: 7,
            weeks: 4,
            months: 3,
        }
    }
}

impl RetentionPolicy {
    /// Create a policy from its three tier parameters
    pub fn new(days: u32, weeks: u32, months: u32) -> Self {
        Self { days, weeks, months }
    }

    /// Length of the weekly grace window in days
    pub fn weekly_window_days(&self) -> i64 {
        i64::from(self.weeks) * DAYS_PER_WEEK
    }

    /// Length of the monthly grace window in days
    pub fn monthly_window_days(&self) -> i64 {
        i64::from(self.months) * DAYS_PER_MONTH
    }

    /// Decide whether the entry dated `date` survives a rotation run on `today`
    ///
    /// The daily window is checked first, then the weekly, then the monthly,
    /// so an entry covered by several tiers reports the earliest one.
    pub fn evaluate(&self, date: ArchiveDate, today: NaiveDate) -> Verdict {
        let age_days = date.age_days(today);

        if age_days <= i64::from(self.days) {
            return Verdict::Keep(KeepReason::Daily);
        }
        if date.is_sunday() && age_days <= self.weekly_window_days() {
            return Verdict::Keep(KeepReason::Weekly);
        }
        if date.is_month_start() && age_days <= self.monthly_window_days() {
            return Verdict::Keep(KeepReason::Monthly);
        }

        Verdict::Delete
    }
}
