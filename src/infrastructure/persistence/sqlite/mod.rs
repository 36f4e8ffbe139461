mod account_repo;

pub use account_repo::SqliteAccountRepository;

use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub type DbConnection = Arc<Mutex<Connection>>;

/// Open (or create) the SQLite database at `db_path`
pub fn init_database(db_path: &Path) -> anyhow::Result<DbConnection> {
    // Ensure directory exists
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Initializing database at {:?}", db_path);

    let conn = Connection::open(db_path)?;
    create_tables(&conn)?;

    tracing::info!("Database initialized successfully");

    Ok(Arc::new(Mutex::new(conn)))
}

/// Private in-memory database
#[cfg(test)]
pub fn init_in_memory() -> anyhow::Result<DbConnection> {
    let conn = Connection::open_in_memory()?;
    create_tables(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

fn create_tables(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            balance REAL NOT NULL,
            creation_date TEXT NOT NULL,
            type TEXT NOT NULL
        )",
        [],
    )?;
    Ok(())
}
