//! User repository trait

use async_trait::async_trait;

use super::entity::{ImmunisationStatus, NewUser, User};
use crate::domain::dashboard::DashboardStatistics;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for user persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Lists all users ordered by last name, then first name
    async fn list_all(&self) -> Result<Vec<User>, DomainError>;

    /// Gets a user by id
    async fn get_by_id(&self, id: i32) -> Result<Option<User>, DomainError>;

    /// Lists users with the given stored status, ordered by last name,
    /// then first name
    async fn list_by_status(
        &self,
        status: ImmunisationStatus,
    ) -> Result<Vec<User>, DomainError>;

    /// Computes the per-status counts in a single aggregate pass
    async fn statistics(&self) -> Result<DashboardStatistics, DomainError>;

    /// Creates a user, assigning the id and creation timestamp
    async fn create(&self, new_user: NewUser) -> Result<User, DomainError>;

    /// Updates an existing user, stamping the update timestamp
    async fn update(&self, user: &User) -> Result<User, DomainError>;

    /// Deletes a user; returns false when the id did not exist
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
