//! Aggregate immunisation statistics

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Per-status user counts, captured in a single aggregate pass over the
/// stored statuses. Never persisted; recomputed on every request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    pub total_users: i64,
    pub fully_immunised: i64,
    pub partially_immunised: i64,
    pub non_immunised: i64,
    pub overdue: i64,
}

impl DashboardStatistics {
    /// Percentage of users whose stored status is FullyImmunised, rounded
    /// to two decimal places, half away from zero. Zero when no users are
    /// tracked.
    pub fn completion_rate(&self) -> Decimal {
        if self.total_users == 0 {
            return Decimal::ZERO;
        }

        let rate = Decimal::from(self.fully_immunised) / Decimal::from(self.total_users)
            * Decimal::ONE_HUNDRED;

        rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}
