use gamerev_db::schema::{create_schema, get_schema_version, CURRENT_VERSION};
use gamerev_db::{open_database, open_memory, SchemaError};

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();
    let roles: i64 = conn
        .query_row("SELECT COUNT(*) FROM role", [], |row| row.get(0))
        .unwrap();
    assert_eq!(roles, 2);
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "game",
        "gamePhoto",
        "category",
        "publisher",
        "game_category",
        "game_publisher",
        "role",
        "user",
        "review",
        "comment",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn roles_are_seeded() {
    let conn = open_memory().unwrap();
    let name: String = conn
        .query_row("SELECT name FROM role WHERE ID = 2", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "admin");
}

#[test]
fn on_disk_database_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reviews.db");

    {
        let conn = open_database(&path).unwrap();
        gamerev_db::add_category(&conn, "Puzzle").unwrap();
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    assert_eq!(
        gamerev_db::find_category_by_title(&conn, "Puzzle").unwrap(),
        Some(1)
    );
}

#[test]
fn migrates_version_one_link_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("old.db");

    {
        let conn = open_database(&path).unwrap();
        let game = gamerev_db::add_new_game(&conn, "Tetris", "Blocks", "Falling blocks").unwrap();
        let cat = gamerev_db::add_category(&conn, "Puzzle").unwrap();

        // Recreate the version 1 layout, which allowed repeated links.
        conn.execute_batch(
            "DROP INDEX idx_game_category_pair;
             DELETE FROM schema_version;
             INSERT INTO schema_version (version) VALUES (1);",
        )
        .unwrap();
        for _ in 0..3 {
            conn.execute(
                "INSERT INTO game_category (gameID, categoryID) VALUES (?1, ?2)",
                [game, cat],
            )
            .unwrap();
        }
    }

    let conn = open_database(&path).unwrap();
    assert_eq!(get_schema_version(&conn).unwrap(), CURRENT_VERSION);
    let links: i64 = conn
        .query_row("SELECT COUNT(*) FROM game_category", [], |row| row.get(0))
        .unwrap();
    assert_eq!(links, 1);
}

#[test]
fn newer_database_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    {
        let conn = open_database(&path).unwrap();
        conn.execute(
            "INSERT INTO schema_version (version) VALUES (?1)",
            [CURRENT_VERSION + 1],
        )
        .unwrap();
    }

    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, CURRENT_VERSION + 1);
        }
        other => panic!("expected version mismatch, got {other:?}"),
    }
}
