use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

use crate::config::StorageSettings;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

pub fn create_pool(settings: &StorageSettings) -> Result<DbPool> {
    let manager = build_manager(&settings.database_path);
    build_pool(manager, settings.pool_size)
}

/// Single-connection pool over a private in-memory database.
pub fn create_memory_pool() -> Result<DbPool> {
    let manager = with_foreign_keys(SqliteConnectionManager::memory());
    build_pool(manager, 1)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    with_foreign_keys(SqliteConnectionManager::file(path))
}

fn with_foreign_keys(manager: SqliteConnectionManager) -> SqliteConnectionManager {
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}
