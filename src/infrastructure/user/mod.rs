//! User infrastructure module
//!
//! This module provides the storage implementations for the user roster,
//! including the in-memory repository and the Postgres-backed repository.

mod postgres_repository;
mod repository;

pub use postgres_repository::PostgresUserRepository;
pub use repository::InMemoryUserRepository;
