//! User entity and immunisation status types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Days since the last immunisation after which a user counts as overdue.
/// Exactly this many days is still current; one more day tips over.
pub const OVERDUE_AFTER_DAYS: i64 = 365;

/// Immunisation status recorded for a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ImmunisationStatus {
    /// No immunisations recorded
    #[default]
    NonImmunised,
    /// Some but not all required immunisations
    PartiallyImmunised,
    /// All required immunisations recorded
    FullyImmunised,
    /// Flagged as overdue for a booster
    Overdue,
}

impl ImmunisationStatus {
    /// All statuses in declaration order
    pub const ALL: [ImmunisationStatus; 4] = [
        Self::NonImmunised,
        Self::PartiallyImmunised,
        Self::FullyImmunised,
        Self::Overdue,
    ];

    /// Canonical name used in JSON payloads and storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NonImmunised => "NonImmunised",
            Self::PartiallyImmunised => "PartiallyImmunised",
            Self::FullyImmunised => "FullyImmunised",
            Self::Overdue => "Overdue",
        }
    }

    /// Human-readable label for dashboard display
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NonImmunised => "Not Immunised",
            Self::PartiallyImmunised => "Partially Immunised",
            Self::FullyImmunised => "Fully Immunised",
            Self::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for ImmunisationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameters for creating a user. The repository assigns the id and
/// creation timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: ImmunisationStatus,
    pub last_immunisation_date: Option<DateTime<Utc>>,
}

/// User tracked by the immunisation dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the repository
    id: i32,
    /// Given name
    first_name: String,
    /// Family name
    last_name: String,
    /// Contact email, unique across users
    email: String,
    /// Recorded immunisation status
    status: ImmunisationStatus,
    /// Date of the most recent immunisation, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    last_immunisation_date: Option<DateTime<Utc>>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp, absent until the first update
    #[serde(skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Assemble a user from stored parts
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        status: ImmunisationStatus,
        last_immunisation_date: Option<DateTime<Utc>>,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            status,
            last_immunisation_date,
            created_at,
            updated_at,
        }
    }

    // Getters

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn status(&self) -> ImmunisationStatus {
        self.status
    }

    pub fn last_immunisation_date(&self) -> Option<DateTime<Utc>> {
        self.last_immunisation_date
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Full name as shown on the dashboard
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    // Derived checks

    /// Whether the last immunisation is more than a year in the past.
    /// Users without a recorded date are never overdue, whatever their
    /// stored status says.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Utc::now())
    }

    /// [`Self::is_overdue`] against an explicit clock
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        match self.last_immunisation_date {
            Some(date) => (now - date).num_days() > OVERDUE_AFTER_DAYS,
            None => false,
        }
    }

    /// Fully immunised and not overdue
    pub fn is_fully_compliant(&self) -> bool {
        self.is_fully_compliant_at(Utc::now())
    }

    /// [`Self::is_fully_compliant`] against an explicit clock
    pub fn is_fully_compliant_at(&self, now: DateTime<Utc>) -> bool {
        self.status == ImmunisationStatus::FullyImmunised && !self.is_overdue_at(now)
    }

    // Mutators

    pub fn set_first_name(&mut self, first_name: impl Into<String>) {
        self.first_name = first_name.into();
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) {
        self.last_name = last_name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_status(&mut self, status: ImmunisationStatus) {
        self.status = status;
    }

    pub fn set_last_immunisation_date(&mut self, date: Option<DateTime<Utc>>) {
        self.last_immunisation_date = date;
    }

    /// Record an update timestamp. Called by repositories on write, not by
    /// the field setters, so loads and in-place edits stay distinguishable.
    pub fn set_updated_at(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn create_test_user(
        status: ImmunisationStatus,
        last_immunisation_date: Option<DateTime<Utc>>,
    ) -> User {
        User::new(
            1,
            "John",
            "Doe",
            "john.doe@example.com",
            status,
            last_immunisation_date,
            Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            None,
        )
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_status_display_names() {
        assert_eq!(
            ImmunisationStatus::NonImmunised.display_name(),
            "Not Immunised"
        );
        assert_eq!(
            ImmunisationStatus::PartiallyImmunised.display_name(),
            "Partially Immunised"
        );
        assert_eq!(
            ImmunisationStatus::FullyImmunised.display_name(),
            "Fully Immunised"
        );
        assert_eq!(ImmunisationStatus::Overdue.display_name(), "Overdue");
    }

    #[test]
    fn test_status_serializes_as_canonical_name() {
        let json = serde_json::to_string(&ImmunisationStatus::PartiallyImmunised).unwrap();
        assert_eq!(json, "\"PartiallyImmunised\"");
    }

    #[test]
    fn test_not_overdue_without_date() {
        let user = create_test_user(ImmunisationStatus::Overdue, None);
        assert!(!user.is_overdue_at(fixed_now()));
    }

    #[test]
    fn test_not_overdue_with_recent_date() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(60)),
        );
        assert!(!user.is_overdue_at(now));
    }

    #[test]
    fn test_overdue_after_two_years() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(730)),
        );
        assert!(user.is_overdue_at(now));
    }

    #[test]
    fn test_exactly_365_days_is_not_overdue() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(365)),
        );
        assert!(!user.is_overdue_at(now));
    }

    #[test]
    fn test_366_days_is_overdue() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(366)),
        );
        assert!(user.is_overdue_at(now));
    }

    #[test]
    fn test_partial_day_does_not_tip_overdue() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(365) - Duration::hours(23)),
        );
        // 365 days and 23 hours truncates to 365 whole days
        assert!(!user.is_overdue_at(now));
    }

    #[test]
    fn test_fully_compliant_when_fully_immunised_and_current() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(30)),
        );
        assert!(user.is_fully_compliant_at(now));
    }

    #[test]
    fn test_not_compliant_when_fully_immunised_but_overdue() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::FullyImmunised,
            Some(now - Duration::days(400)),
        );
        assert!(!user.is_fully_compliant_at(now));
    }

    #[test]
    fn test_not_compliant_when_partially_immunised() {
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::PartiallyImmunised,
            Some(now - Duration::days(30)),
        );
        assert!(!user.is_fully_compliant_at(now));
    }

    #[test]
    fn test_stored_overdue_status_independent_of_derived_check() {
        // A user can carry the Overdue status while their recorded date is
        // recent; the stored status and the date-derived check do not
        // correct each other.
        let now = fixed_now();
        let user = create_test_user(
            ImmunisationStatus::Overdue,
            Some(now - Duration::days(10)),
        );
        assert_eq!(user.status(), ImmunisationStatus::Overdue);
        assert!(!user.is_overdue_at(now));
        assert!(!user.is_fully_compliant_at(now));
    }

    #[test]
    fn test_full_name() {
        let user = create_test_user(ImmunisationStatus::FullyImmunised, None);
        assert_eq!(user.full_name(), "John Doe");
    }

    #[test]
    fn test_updated_at_absent_until_set() {
        let mut user = create_test_user(ImmunisationStatus::FullyImmunised, None);
        assert!(user.updated_at().is_none());

        let stamp = fixed_now();
        user.set_updated_at(stamp);
        assert_eq!(user.updated_at(), Some(stamp));
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let user = create_test_user(ImmunisationStatus::NonImmunised, None);
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("last_immunisation_date"));
        assert!(!json.contains("updated_at"));
    }
}
