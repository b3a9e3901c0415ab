// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Create & migrate SQLite database files for the year wheel
//!

use crate::StoreError;
use log::info;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool, migrate::MigrateDatabase};
use std::path::Path;

/// Setup a database at the supplied path (ensure the file exists and run the
/// migrations) and return a connection pool
pub async fn setup_database_at_path(path: &Path) -> Result<SqlitePool, StoreError> {
    // Construct the database URL
    let db_url = db_url_from_path(path);

    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Create the database file (if not already extant)
    if !Sqlite::database_exists(&db_url).await.unwrap_or(false) {
        info!("Creating database at {}", path.to_string_lossy());
        Sqlite::create_database(&db_url).await?;
    } else {
        info!("Database already exists at {}", path.to_string_lossy());
    }

    // Open a connection
    let pool = SqlitePool::connect(&db_url).await?;

    // Run migrations (uses compile-time embedding of migrations)
    sqlx::migrate!("./migrations").run(&pool).await?;

    info!(
        "Migrations applied successfully to {}",
        path.to_string_lossy()
    );

    Ok(pool)
}

/// An in-memory database with the migrations applied (nothing is written to
/// disk).  A single connection is kept open, as each connection to
/// `sqlite::memory:` is a separate database.
pub async fn setup_in_memory_database() -> Result<SqlitePool, StoreError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

/// Create a URL for the SQLite database using the path to the database
pub fn db_url_from_path(path: &Path) -> String {
    format!("sqlite://{}", path.to_string_lossy())
}
