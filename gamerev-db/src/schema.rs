//! SQLite schema creation and migration.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 2;

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a review database at the given path.
///
/// The returned connection has foreign keys enabled and an up-to-date schema.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        migrate(&conn, version)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }

    let mut version = from_version;
    while version < CURRENT_VERSION {
        if version == 1 {
            // Version 1 allowed the same game/category or game/publisher pair
            // to be linked more than once. Keep the oldest link of each pair.
            conn.execute_batch(
                "DELETE FROM game_category WHERE ID NOT IN
                     (SELECT MIN(ID) FROM game_category GROUP BY gameID, categoryID);
                 DELETE FROM game_publisher WHERE ID NOT IN
                     (SELECT MIN(ID) FROM game_publisher GROUP BY gameID, publisherID);
                 CREATE UNIQUE INDEX IF NOT EXISTS idx_game_category_pair
                     ON game_category(gameID, categoryID);
                 CREATE UNIQUE INDEX IF NOT EXISTS idx_game_publisher_pair
                     ON game_publisher(gameID, publisherID);",
            )?;
        }
        version += 1;
        set_schema_version(conn, version)?;
    }

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Games (aggregate root)
CREATE TABLE IF NOT EXISTS game (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    summary TEXT NOT NULL,
    "desc" TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS gamePhoto (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    gameID INTEGER NOT NULL REFERENCES game(ID),
    picture TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_game_photo_game ON gamePhoto(gameID);

-- Lookup tables and their links to games
CREATE TABLE IF NOT EXISTS category (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS publisher (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS game_category (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    gameID INTEGER NOT NULL REFERENCES game(ID),
    categoryID INTEGER NOT NULL REFERENCES category(ID)
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_game_category_pair ON game_category(gameID, categoryID);

CREATE TABLE IF NOT EXISTS game_publisher (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    gameID INTEGER NOT NULL REFERENCES game(ID),
    publisherID INTEGER NOT NULL REFERENCES publisher(ID)
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_game_publisher_pair ON game_publisher(gameID, publisherID);

-- Accounts
CREATE TABLE IF NOT EXISTS role (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE
);
INSERT OR IGNORE INTO role (ID, name) VALUES (1, 'user'), (2, 'admin');

CREATE TABLE IF NOT EXISTS user (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    pass TEXT NOT NULL,
    avatar TEXT,
    roleID INTEGER REFERENCES role(ID)
);

-- Reviews and comments
CREATE TABLE IF NOT EXISTS review (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    gameID INTEGER NOT NULL REFERENCES game(ID),
    userID INTEGER NOT NULL REFERENCES user(ID),
    fullText TEXT NOT NULL,
    rating INTEGER NOT NULL CHECK (rating BETWEEN 1 AND 5),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    UNIQUE(gameID, userID)
);
CREATE INDEX IF NOT EXISTS idx_review_game ON review(gameID);

CREATE TABLE IF NOT EXISTS comment (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    reviewID INTEGER NOT NULL REFERENCES review(ID),
    userID INTEGER NOT NULL REFERENCES user(ID),
    fullText TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_comment_review ON comment(reviewID);
"#;
