//! Dashboard domain
//!
//! Aggregate statistics and the per-user summary projection shown on the
//! immunisation dashboard.

mod statistics;
mod summary;

pub use statistics::DashboardStatistics;
pub use summary::UserSummary;
