//! Dashboard service - aggregate statistics and per-user immunisation summaries

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::{parse_status, DashboardStatistics, DomainError, UserRepository, UserSummary};

/// Aggregate dashboard figures with the derived completion rate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_users: i64,
    pub fully_immunised: i64,
    pub partially_immunised: i64,
    pub non_immunised: i64,
    pub overdue: i64,
    pub immunisation_completion_rate: Decimal,
}

impl From<DashboardStatistics> for DashboardReport {
    fn from(stats: DashboardStatistics) -> Self {
        Self {
            total_users: stats.total_users,
            fully_immunised: stats.fully_immunised,
            partially_immunised: stats.partially_immunised,
            non_immunised: stats.non_immunised,
            overdue: stats.overdue,
            immunisation_completion_rate: stats.completion_rate(),
        }
    }
}

/// Dashboard service for read-side reporting over the user roster
#[derive(Debug)]
pub struct DashboardService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> DashboardService<R> {
    /// Create a new DashboardService with the given repository
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Aggregate statistics across all users
    pub async fn statistics(&self) -> Result<DashboardReport, DomainError> {
        let stats = self.repository.statistics().await?;
        Ok(DashboardReport::from(stats))
    }

    /// Summaries for every user, ordered by last name then first name
    pub async fn user_summaries(&self) -> Result<Vec<UserSummary>, DomainError> {
        let users = self.repository.list_all().await?;
        Ok(users.iter().map(UserSummary::from_user).collect())
    }

    /// Summaries for the users holding the given status
    ///
    /// The status string is parsed before any repository access, so an
    /// unknown value is rejected without touching storage.
    pub async fn users_by_status(&self, status: &str) -> Result<Vec<UserSummary>, DomainError> {
        let status = parse_status(status)?;
        let users = self.repository.list_by_status(status).await?;
        Ok(users.iter().map(UserSummary::from_user).collect())
    }
}
