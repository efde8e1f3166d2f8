//! Database migrations infrastructure

use sqlx::postgres::PgPool;

use crate::domain::DomainError;

/// PostgreSQL migrator tracking applied versions in a ledger table
#[derive(Debug)]
pub struct PostgresMigrator {
    pool: PgPool,
}

impl PostgresMigrator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the migrations table if it doesn't exist
    async fn ensure_migrations_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS _migrations (
                version BIGINT PRIMARY KEY,
                description TEXT NOT NULL,
                installed_on TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                success BOOLEAN NOT NULL DEFAULT TRUE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create migrations table: {}", e)))?;

        Ok(())
    }

    /// Checks the ledger for a recorded version
    async fn is_applied(&self, version: i64) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM _migrations WHERE version = $1)")
            .bind(version)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to check migration status: {}", e)))
    }

    /// Runs a single migration; a no-op when the version is already recorded
    pub async fn run_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        if self.is_applied(migration.version).await? {
            return Ok(());
        }

        sqlx::query(&migration.up)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to run migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("INSERT INTO _migrations (version, description) VALUES ($1, $2)")
            .bind(migration.version)
            .bind(&migration.description)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to record migration {}: {}",
                    migration.version, e
                ))
            })?;

        Ok(())
    }

    /// Reverts a single migration and drops its ledger row
    pub async fn revert_migration(&self, migration: &Migration) -> Result<(), DomainError> {
        self.ensure_migrations_table().await?;

        if !self.is_applied(migration.version).await? {
            return Ok(());
        }

        sqlx::query(&migration.down)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to revert migration {}: {}",
                    migration.version, e
                ))
            })?;

        sqlx::query("DELETE FROM _migrations WHERE version = $1")
            .bind(migration.version)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::storage(format!(
                    "Failed to remove migration record {}: {}",
                    migration.version, e
                ))
            })?;

        Ok(())
    }

    /// Returns the latest applied migration version
    pub async fn current_version(&self) -> Result<Option<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT MAX(version) FROM _migrations WHERE success = TRUE")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get migration version: {}", e)))
    }

    /// Returns all applied migration versions
    pub async fn applied_versions(&self) -> Result<Vec<i64>, DomainError> {
        self.ensure_migrations_table().await?;

        sqlx::query_scalar("SELECT version FROM _migrations WHERE success = TRUE ORDER BY version")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get applied migrations: {}", e)))
    }
}

/// Represents a database migration
#[derive(Debug, Clone)]
pub struct Migration {
    /// Migration version
    pub version: i64,
    /// Human-readable description
    pub description: String,
    /// SQL to run when applying the migration
    pub up: String,
    /// SQL to run when reverting the migration
    pub down: String,
}

impl Migration {
    pub fn new(
        version: i64,
        description: impl Into<String>,
        up: impl Into<String>,
        down: impl Into<String>,
    ) -> Self {
        Self {
            version,
            description: description.into(),
            up: up.into(),
            down: down.into(),
        }
    }
}

/// Collection of schema migrations for the storage layer
pub fn storage_migrations() -> Vec<Migration> {
    vec![Migration::new(
        1,
        "Create users table",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            first_name VARCHAR(100) NOT NULL,
            last_name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            status VARCHAR(32) NOT NULL,
            last_immunisation_date TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email);
        CREATE INDEX IF NOT EXISTS idx_users_status ON users(status);
        "#,
        r#"
        DROP TABLE IF EXISTS users;
        "#,
    )]
}

/// Demo roster rows, applied separately when seeding is enabled
pub fn demo_data_migration() -> Migration {
    Migration::new(
        2,
        "Seed demo users",
        r#"
        INSERT INTO users (first_name, last_name, email, status, last_immunisation_date, created_at)
        VALUES
            ('John', 'Doe', 'john.doe@example.com', 'FullyImmunised', '2025-12-01T00:00:00Z', '2025-01-01T00:00:00Z'),
            ('Jane', 'Smith', 'jane.smith@example.com', 'PartiallyImmunised', '2025-08-15T00:00:00Z', '2025-01-01T00:00:00Z'),
            ('Bob', 'Johnson', 'bob.johnson@example.com', 'NonImmunised', NULL, '2025-01-01T00:00:00Z'),
            ('Alice', 'Williams', 'alice.williams@example.com', 'Overdue', '2024-01-10T00:00:00Z', '2025-01-01T00:00:00Z'),
            ('Charlie', 'Brown', 'charlie.brown@example.com', 'FullyImmunised', '2025-11-20T00:00:00Z', '2025-01-01T00:00:00Z')
        ON CONFLICT (email) DO NOTHING;
        "#,
        r#"
        DELETE FROM users WHERE email IN (
            'john.doe@example.com',
            'jane.smith@example.com',
            'bob.johnson@example.com',
            'alice.williams@example.com',
            'charlie.brown@example.com'
        );
        "#,
    )
}

/// Runs all pending storage migrations
pub async fn run_storage_migrations(pool: &PgPool) -> Result<(), DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());

    for migration in storage_migrations() {
        migrator.run_migration(&migration).await?;
    }

    Ok(())
}

/// Inserts the demo roster rows
pub async fn seed_demo_data(pool: &PgPool) -> Result<(), DomainError> {
    let migrator = PostgresMigrator::new(pool.clone());
    migrator.run_migration(&demo_data_migration()).await
}
