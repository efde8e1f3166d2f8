//! Domain layer - Core business logic and entities

pub mod dashboard;
pub mod error;
pub mod user;

pub use dashboard::{DashboardStatistics, UserSummary};
pub use error::DomainError;
pub use user::{
    parse_status, validate_email, validate_first_name, validate_last_name, ImmunisationStatus,
    NewUser, User, UserRepository, UserValidationError, OVERDUE_AFTER_DAYS,
};

#[cfg(test)]
pub use user::MockUserRepository;
