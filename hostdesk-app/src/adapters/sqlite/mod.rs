//! SQLite-based unified store using `SeaORM`.
//!
//! A single `SqliteStore` implements `EntityRepository` for customers, domains,
//! hosting packages and servers, backed by a local `SQLite` database.

mod customer_repo;
mod domain_repo;
pub(crate) mod entity;
mod hosting_repo;
mod migration;
mod vps_repo;

use std::path::Path;

use chrono::SecondsFormat;
use hostdesk_core::error::{CoreError, CoreResult};
use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;

use migration::Migrator;

/// SQLite-based unified store.
///
/// Rows are kept in their snake_case storage form (`customers`, `domains`,
/// `hosting_packages`, `vps`); identifiers are UUID v4 strings assigned on insert.
/// `find_all` returns rows in insertion order.
pub struct SqliteStore {
    /// Shared `SeaORM` database connection.
    pub(crate) db: DatabaseConnection,
}

impl SqliteStore {
    /// Create a new `SQLite` store.
    ///
    /// - `db_path`: Path to the `SQLite` database file (created if not exists).
    ///
    /// # Errors
    /// Returns `CoreError::StorageError` if directory creation, database
    /// connection, or schema migration fails.
    pub async fn new(db_path: &Path) -> CoreResult<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::StorageError(format!("Failed to create directory: {e}")))?;
        }

        let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
        let db = Database::connect(&db_url)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to connect to SQLite: {e}")))?;

        let store = Self { db };

        // Ensure schema is up to date before the store is used.
        Migrator::up(&store.db, None)
            .await
            .map_err(|e| CoreError::StorageError(format!("Failed to run migrations: {e}")))?;

        log::info!("SQLite store ready at {}", db_path.display());
        Ok(store)
    }
}

fn db_error(action: &str, err: &DbErr) -> CoreError {
    CoreError::StorageError(format!("Failed to {action}: {err}"))
}

/// Insert timestamp; only used to keep `find_all` in insertion order.
fn created_at_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Nanos, true)
}
