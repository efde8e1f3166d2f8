//! Per-user dashboard summary

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::user::{ImmunisationStatus, User};

/// Flattened view of a user for dashboard lists: identity, display fields
/// and the date-derived compliance checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub status: ImmunisationStatus,
    pub status_display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_immunisation_date: Option<DateTime<Utc>>,
    pub is_overdue: bool,
    pub is_fully_compliant: bool,
}

impl UserSummary {
    /// Projects a user into its dashboard summary
    pub fn from_user(user: &User) -> Self {
        Self::from_user_at(user, Utc::now())
    }

    /// [`Self::from_user`] against an explicit clock. Pure: the same user
    /// and clock always yield the same summary.
    pub fn from_user_at(user: &User, now: DateTime<Utc>) -> Self {
        Self {
            id: user.id(),
            full_name: user.full_name(),
            email: user.email().to_string(),
            status: user.status(),
            status_display: user.status().display_name().to_string(),
            last_immunisation_date: user.last_immunisation_date(),
            is_overdue: user.is_overdue_at(now),
            is_fully_compliant: user.is_fully_compliant_at(now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    fn make_user(
        id: i32,
        first: &str,
        last: &str,
        status: ImmunisationStatus,
        last_immunisation_date: Option<DateTime<Utc>>,
    ) -> User {
        User::new(
            id,
            first,
            last,
            format!("{}.{}@example.com", first.to_lowercase(), last.to_lowercase()),
            status,
            last_immunisation_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            None,
        )
    }

    #[test]
    fn test_summary_of_compliant_user() {
        let now = fixed_now();
        let user = make_user(
            1,
            "John",
            "Doe",
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(45)),
        );

        let summary = UserSummary::from_user_at(&user, now);

        assert_eq!(summary.id, 1);
        assert_eq!(summary.full_name, "John Doe");
        assert_eq!(summary.email, "john.doe@example.com");
        assert_eq!(summary.status, ImmunisationStatus::FullyImmunised);
        assert_eq!(summary.status_display, "Fully Immunised");
        assert!(!summary.is_overdue);
        assert!(summary.is_fully_compliant);
    }

    #[test]
    fn test_summary_of_overdue_user() {
        let now = fixed_now();
        let user = make_user(
            4,
            "Alice",
            "Williams",
            ImmunisationStatus::Overdue,
            Some(now - Duration::days(500)),
        );

        let summary = UserSummary::from_user_at(&user, now);

        assert_eq!(summary.status_display, "Overdue");
        assert!(summary.is_overdue);
        assert!(!summary.is_fully_compliant);
    }

    #[test]
    fn test_summary_without_immunisation_date() {
        let now = fixed_now();
        let user = make_user(3, "Bob", "Johnson", ImmunisationStatus::NonImmunised, None);

        let summary = UserSummary::from_user_at(&user, now);

        assert_eq!(summary.status_display, "Not Immunised");
        assert_eq!(summary.last_immunisation_date, None);
        assert!(!summary.is_overdue);
        assert!(!summary.is_fully_compliant);
    }

    #[test]
    fn test_mapping_same_user_twice_is_identical() {
        let now = fixed_now();
        let user = make_user(
            2,
            "Jane",
            "Smith",
            ImmunisationStatus::PartiallyImmunised,
            Some(now - Duration::days(200)),
        );

        let first = UserSummary::from_user_at(&user, now);
        let second = UserSummary::from_user_at(&user, now);

        assert_eq!(first, second);
    }
}
