//! Storage infrastructure - database migrations

pub mod migrations;

pub use migrations::{run_storage_migrations, seed_demo_data, Migration, PostgresMigrator};
