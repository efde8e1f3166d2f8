//! Immunisation Dashboard API
//!
//! A JWT-gated HTTP service for tracking immunisation compliance:
//! - Aggregate statistics with a derived completion rate
//! - Per-user summaries with overdue and compliance checks
//! - Status-filtered roster queries and admin user CRUD
//! - Postgres or in-memory storage, selected via configuration

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use api::state::{AdminCredentials, AppState};
use domain::user::UserRepository;
use domain::{ImmunisationStatus, User};
use infrastructure::auth::{JwtConfig, JwtService};
use infrastructure::services::{DashboardService, UserService};
use infrastructure::storage::{run_storage_migrations, seed_demo_data};
use infrastructure::user::{InMemoryUserRepository, PostgresUserRepository};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let jwt_service = Arc::new(JwtService::new(JwtConfig::new(
        config.auth.jwt.secret.clone(),
        config.auth.jwt.issuer.clone(),
        config.auth.jwt.audience.clone(),
        config.auth.jwt.expires_in_hours,
    )));

    let admin_credentials = AdminCredentials {
        username: config.auth.admin_username.clone(),
        password: config.auth.admin_password.clone(),
    };

    match &config.database.url {
        Some(url) => {
            info!("Using Postgres storage");

            let pool = PgPoolOptions::new()
                .max_connections(config.database.max_connections)
                .connect(url)
                .await?;

            run_storage_migrations(&pool).await?;

            if config.database.seed_demo_data {
                seed_demo_data(&pool).await?;
            }

            let repository = Arc::new(PostgresUserRepository::new(pool));
            Ok(build_state(repository, jwt_service, admin_credentials))
        }
        None => {
            info!("No database URL configured; using in-memory storage");

            let repository = if config.database.seed_demo_data {
                Arc::new(InMemoryUserRepository::with_users(demo_users()))
            } else {
                Arc::new(InMemoryUserRepository::new())
            };

            Ok(build_state(repository, jwt_service, admin_credentials))
        }
    }
}

/// Assemble the shared state over a concrete repository
fn build_state<R: UserRepository + 'static>(
    repository: Arc<R>,
    jwt_service: Arc<JwtService>,
    admin_credentials: AdminCredentials,
) -> AppState {
    AppState {
        dashboard_service: Arc::new(DashboardService::new(repository.clone())),
        user_service: Arc::new(UserService::new(repository)),
        jwt_service,
        admin_credentials,
    }
}

/// Demo roster loaded into the in-memory repository when seeding is enabled
fn demo_users() -> Vec<User> {
    let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

    vec![
        User::new(
            1,
            "John",
            "Doe",
            "john.doe@example.com",
            ImmunisationStatus::FullyImmunised,
            Some(Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap()),
            created,
            None,
        ),
        User::new(
            2,
            "Jane",
            "Smith",
            "jane.smith@example.com",
            ImmunisationStatus::PartiallyImmunised,
            Some(Utc.with_ymd_and_hms(2025, 8, 15, 0, 0, 0).unwrap()),
            created,
            None,
        ),
        User::new(
            3,
            "Bob",
            "Johnson",
            "bob.johnson@example.com",
            ImmunisationStatus::NonImmunised,
            None,
            created,
            None,
        ),
        User::new(
            4,
            "Alice",
            "Williams",
            "alice.williams@example.com",
            ImmunisationStatus::Overdue,
            Some(Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap()),
            created,
            None,
        ),
        User::new(
            5,
            "Charlie",
            "Brown",
            "charlie.brown@example.com",
            ImmunisationStatus::FullyImmunised,
            Some(Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap()),
            created,
            None,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_users_cover_every_status() {
        let users = demo_users();

        assert_eq!(users.len(), 5);
        for status in ImmunisationStatus::ALL {
            assert!(
                users.iter().any(|u| u.status() == status),
                "missing demo user with status {}",
                status
            );
        }
    }

    #[tokio::test]
    async fn test_create_app_state_without_database_seeds_demo_roster() {
        let state = create_app_state().await.unwrap();

        let report = state.dashboard_service.statistics().await.unwrap();
        assert_eq!(report.total_users, 5);
        assert_eq!(report.fully_immunised, 2);
        assert_eq!(report.partially_immunised, 1);
        assert_eq!(report.non_immunised, 1);
        assert_eq!(report.overdue, 1);
    }

    #[tokio::test]
    async fn test_create_app_state_respects_seed_flag() {
        let mut config = AppConfig::default();
        config.database.seed_demo_data = false;

        let state = create_app_state_with_config(&config).await.unwrap();

        let users = state.user_service.list().await.unwrap();
        assert!(users.is_empty());
    }
}
