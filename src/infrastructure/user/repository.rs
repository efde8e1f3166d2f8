//! In-memory user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dashboard::DashboardStatistics;
use crate::domain::user::{ImmunisationStatus, NewUser, User, UserRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
///
/// Default storage when no database is configured. Ids are assigned from a
/// counter; ordering and aggregation happen on read.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i32, User>>>,
    next_id: Arc<RwLock<i32>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    /// Create a repository with initial users. The id counter continues
    /// after the highest seeded id.
    pub fn with_users(users: Vec<User>) -> Self {
        let mut users_map = HashMap::new();
        let mut max_id = 0;

        for user in users {
            max_id = max_id.max(user.id());
            users_map.insert(user.id(), user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            next_id: Arc::new(RwLock::new(max_id + 1)),
        }
    }

    fn sorted(mut users: Vec<User>) -> Vec<User> {
        users.sort_by(|a, b| {
            a.last_name()
                .cmp(b.last_name())
                .then_with(|| a.first_name().cmp(b.first_name()))
        });
        users
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(Self::sorted(users.values().cloned().collect()))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn list_by_status(
        &self,
        status: ImmunisationStatus,
    ) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;

        let matching: Vec<User> = users
            .values()
            .filter(|u| u.status() == status)
            .cloned()
            .collect();

        Ok(Self::sorted(matching))
    }

    async fn statistics(&self) -> Result<DashboardStatistics, DomainError> {
        let users = self.users.read().await;

        let mut stats = DashboardStatistics {
            total_users: users.len() as i64,
            ..Default::default()
        };

        for user in users.values() {
            match user.status() {
                ImmunisationStatus::FullyImmunised => stats.fully_immunised += 1,
                ImmunisationStatus::PartiallyImmunised => stats.partially_immunised += 1,
                ImmunisationStatus::NonImmunised => stats.non_immunised += 1,
                ImmunisationStatus::Overdue => stats.overdue += 1,
            }
        }

        Ok(stats)
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let mut next_id = self.next_id.write().await;

        if users.values().any(|u| u.email() == new_user.email) {
            return Err(DomainError::conflict(format!(
                "User with email '{}' already exists",
                new_user.email
            )));
        }

        let id = *next_id;
        *next_id += 1;

        let user = User::new(
            id,
            new_user.first_name,
            new_user.last_name,
            new_user.email,
            new_user.status,
            new_user.last_immunisation_date,
            Utc::now(),
            None,
        );

        users.insert(id, user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id()) {
            return Err(DomainError::not_found(format!(
                "User with id {} not found",
                user.id()
            )));
        }

        let email_taken = users
            .values()
            .any(|u| u.email() == user.email() && u.id() != user.id());

        if email_taken {
            return Err(DomainError::conflict(format!(
                "User with email '{}' already exists",
                user.email()
            )));
        }

        let mut updated = user.clone();
        updated.set_updated_at(Utc::now());

        users.insert(updated.id(), updated.clone());

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }
}
