//! SQLite-backed user records.
//!
//! # Responsibilities
//! - Execute caller-built SQL text against the database file
//! - Flatten every returned row into tuple-list text
//! - Seed the `users` table for local runs and tests
//!
//! # Design Decisions
//! - A fresh connection per query; nothing is pooled
//! - Query text is executed exactly as given, never parameterized

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::Connection;
use thiserror::Error;

use crate::repr;

/// Errors raised by the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database rejected the statement or could not be opened.
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Rows inserted by [`seed`] when the table is empty.
pub const SEED_USERS: [(i64, &str, &str); 3] = [
    (1, "alice", "alice@example.com"),
    (2, "bob", "bob@example.com"),
    (3, "carol", "carol@example.com"),
];

/// Build the lookup statement by splicing the identifier into the SQL text.
pub fn lookup_query(user_id: &str) -> String {
    format!("SELECT * FROM users WHERE id = {}", user_id)
}

/// Execute `sql` and render every row as `[(..), (..)]`.
pub fn fetch_all(db_path: &Path, sql: &str) -> Result<String, StoreError> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare(sql)?;
    let columns = stmt.column_count();

    let mut rendered = Vec::new();
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let mut fields = Vec::with_capacity(columns);
        for i in 0..columns {
            fields.push(render_value(row.get_ref(i)?));
        }
        rendered.push(repr::tuple(&fields));
    }

    Ok(repr::list(&rendered))
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "None".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => repr::float(f),
        ValueRef::Text(t) => repr::quote(&String::from_utf8_lossy(t)),
        ValueRef::Blob(b) => repr::quote_bytes(b),
    }
}

/// Create the `users` table and insert the sample rows if it is empty.
pub fn seed(db_path: &Path) -> Result<(), StoreError> {
    let conn = Connection::open(db_path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            username TEXT NOT NULL,
            email TEXT NOT NULL
        )",
        [],
    )?;

    let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    if count == 0 {
        for (id, username, email) in SEED_USERS {
            conn.execute(
                "INSERT INTO users (id, username, email) VALUES (?1, ?2, ?3)",
                rusqlite::params![id, username, email],
            )?;
        }
        tracing::info!(path = %db_path.display(), rows = SEED_USERS.len(), "Seeded users table");
    }

    Ok(())
}
