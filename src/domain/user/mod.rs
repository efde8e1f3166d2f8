//! User domain
//!
//! This module provides domain types and traits for tracked users,
//! including the user entity, immunisation status, validation, and the
//! repository trait.

mod entity;
mod repository;
mod validation;

pub use entity::{ImmunisationStatus, NewUser, User, OVERDUE_AFTER_DAYS};
pub use repository::UserRepository;
pub use validation::{
    parse_status, validate_email, validate_first_name, validate_last_name,
    UserValidationError,
};

#[cfg(test)]
pub use repository::MockUserRepository;
