//! Database schema.
//!
//! Both statements use `IF NOT EXISTS` and run at every startup. There are
//! no migrations.
//!
//! `runs.user_id` declares a reference to `users.id`, but the
//! `foreign_keys` pragma is left off, so runs for unknown users are still
//! accepted.

use rusqlite::Connection;

/// Create the `users` table.
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    age INTEGER,
    gender TEXT,
    nationality TEXT
);
"#;

/// Create the `runs` table.
const CREATE_RUNS: &str = r#"
CREATE TABLE IF NOT EXISTS runs(
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    run_date TEXT NOT NULL,
    user_id INTEGER NOT NULL,
    num_of_letters INTEGER NOT NULL,
    num_of_loops INTEGER NOT NULL,
    score INTEGER NOT NULL,
    time REAL NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users (id)
);
"#;

/// Initialize the database schema.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(CREATE_USERS)?;
    conn.execute_batch(CREATE_RUNS)?;
    Ok(())
}
