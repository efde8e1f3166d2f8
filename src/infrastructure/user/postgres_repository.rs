//! PostgreSQL user repository implementation

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domain::dashboard::DashboardStatistics;
use crate::domain::user::{ImmunisationStatus, NewUser, User, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, status,
                   last_immunisation_date, created_at, updated_at
            FROM users
            ORDER BY last_name, first_name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, status,
                   last_immunisation_date, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_by_status(
        &self,
        status: ImmunisationStatus,
    ) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, status,
                   last_immunisation_date, created_at, updated_at
            FROM users
            WHERE status = $1
            ORDER BY last_name, first_name
            "#,
        )
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users by status: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn statistics(&self) -> Result<DashboardStatistics, DomainError> {
        // One aggregate pass over the table; no per-status queries
        let row = sqlx::query(
            r#"
            SELECT COUNT(*)                               AS total_users,
                   COUNT(*) FILTER (WHERE status = $1)    AS fully_immunised,
                   COUNT(*) FILTER (WHERE status = $2)    AS partially_immunised,
                   COUNT(*) FILTER (WHERE status = $3)    AS non_immunised,
                   COUNT(*) FILTER (WHERE status = $4)    AS overdue
            FROM users
            "#,
        )
        .bind(ImmunisationStatus::FullyImmunised.as_str())
        .bind(ImmunisationStatus::PartiallyImmunised.as_str())
        .bind(ImmunisationStatus::NonImmunised.as_str())
        .bind(ImmunisationStatus::Overdue.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to aggregate statistics: {}", e)))?;

        Ok(DashboardStatistics {
            total_users: row.get("total_users"),
            fully_immunised: row.get("fully_immunised"),
            partially_immunised: row.get("partially_immunised"),
            non_immunised: row.get("non_immunised"),
            overdue: row.get("overdue"),
        })
    }

    async fn create(&self, new_user: NewUser) -> Result<User, DomainError> {
        let created_at = Utc::now();

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO users (first_name, last_name, email, status,
                               last_immunisation_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.email)
        .bind(new_user.status.as_str())
        .bind(new_user.last_immunisation_date)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "User with email '{}' already exists",
                    new_user.email
                ))
            } else {
                DomainError::storage(format!("Failed to create user: {}", e))
            }
        })?;

        Ok(User::new(
            id,
            new_user.first_name,
            new_user.last_name,
            new_user.email,
            new_user.status,
            new_user.last_immunisation_date,
            created_at,
            None,
        ))
    }

    async fn update(&self, user: &User) -> Result<User, DomainError> {
        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4, status = $5,
                last_immunisation_date = $6, updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.status().as_str())
        .bind(user.last_immunisation_date())
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "User with email '{}' already exists",
                    user.email()
                ))
            } else {
                DomainError::storage(format!("Failed to update user: {}", e))
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User with id {} not found",
                user.id()
            )));
        }

        let mut updated = user.clone();
        updated.set_updated_at(updated_at);

        Ok(updated)
    }

    async fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> Result<User, DomainError> {
    let id: i32 = row.get("id");
    let first_name: String = row.get("first_name");
    let last_name: String = row.get("last_name");
    let email: String = row.get("email");
    let status: String = row.get("status");
    let last_immunisation_date: Option<chrono::DateTime<Utc>> =
        row.get("last_immunisation_date");
    let created_at: chrono::DateTime<Utc> = row.get("created_at");
    let updated_at: Option<chrono::DateTime<Utc>> = row.get("updated_at");

    Ok(User::new(
        id,
        first_name,
        last_name,
        email,
        status_from_db(&status)?,
        last_immunisation_date,
        created_at,
        updated_at,
    ))
}

fn status_from_db(s: &str) -> Result<ImmunisationStatus, DomainError> {
    ImmunisationStatus::ALL
        .iter()
        .find(|status| status.as_str() == s)
        .copied()
        .ok_or_else(|| {
            DomainError::storage(format!("Unknown immunisation status in database: '{}'", s))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_db() {
        assert_eq!(
            status_from_db("FullyImmunised").unwrap(),
            ImmunisationStatus::FullyImmunised
        );
        assert_eq!(
            status_from_db("PartiallyImmunised").unwrap(),
            ImmunisationStatus::PartiallyImmunised
        );
        assert_eq!(
            status_from_db("NonImmunised").unwrap(),
            ImmunisationStatus::NonImmunised
        );
        assert_eq!(status_from_db("Overdue").unwrap(), ImmunisationStatus::Overdue);
    }

    #[test]
    fn test_status_from_db_rejects_unknown_text() {
        let result = status_from_db("fully_immunised");
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
