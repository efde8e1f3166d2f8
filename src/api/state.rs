//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::UserRepository;
use crate::domain::{DomainError, User, UserSummary};
use crate::infrastructure::auth::JwtGenerator;
use crate::infrastructure::services::{
    CreateUserRequest, DashboardReport, DashboardService, UpdateUserRequest, UserService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub dashboard_service: Arc<dyn DashboardServiceTrait>,
    pub user_service: Arc<dyn UserServiceTrait>,
    pub jwt_service: Arc<dyn JwtGenerator>,
    pub admin_credentials: AdminCredentials,
}

/// Configured login credentials for the dashboard administrator
#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl AdminCredentials {
    /// Check a login attempt against the configured credentials
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

/// Trait for dashboard service operations
#[async_trait::async_trait]
pub trait DashboardServiceTrait: Send + Sync {
    async fn statistics(&self) -> Result<DashboardReport, DomainError>;
    async fn user_summaries(&self) -> Result<Vec<UserSummary>, DomainError>;
    async fn users_by_status(&self, status: &str) -> Result<Vec<UserSummary>, DomainError>;
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: i32) -> Result<User, DomainError>;
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<User, DomainError>;
    async fn delete(&self, id: i32) -> Result<(), DomainError>;
}

// Implement traits for the actual services

#[async_trait::async_trait]
impl<R: UserRepository + 'static> DashboardServiceTrait for DashboardService<R> {
    async fn statistics(&self) -> Result<DashboardReport, DomainError> {
        DashboardService::statistics(self).await
    }

    async fn user_summaries(&self) -> Result<Vec<UserSummary>, DomainError> {
        DashboardService::user_summaries(self).await
    }

    async fn users_by_status(&self, status: &str) -> Result<Vec<UserSummary>, DomainError> {
        DashboardService::users_by_status(self, status).await
    }
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: i32) -> Result<User, DomainError> {
        UserService::get(self, id).await
    }

    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<User, DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_credentials_match() {
        let credentials = AdminCredentials {
            username: "admin".to_string(),
            password: "admin123".to_string(),
        };

        assert!(credentials.matches("admin", "admin123"));
        assert!(!credentials.matches("admin", "wrong"));
        assert!(!credentials.matches("root", "admin123"));
    }
}
