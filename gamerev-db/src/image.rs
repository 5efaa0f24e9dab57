//! Game pictures (`gamePhoto` rows).

use std::path::Path;

use gamerev_catalog::validate::{require_id, require_non_empty};
use gamerev_catalog::ValidationError;
use rusqlite::{params, Connection};

use crate::error::{Entity, OperationError};
use crate::files::FileStore;
use crate::queries::ensure_exists;

/// Record an already-stored picture for a game. Returns the photo ID.
pub fn add_game_picture(conn: &Connection, game_id: i64, picture: &str) -> Result<i64, OperationError> {
    require_id(game_id, "gameID")?;
    require_non_empty(picture, "picture")?;
    ensure_exists(conn, Entity::Game, game_id)?;

    conn.execute(
        "INSERT INTO gamePhoto (gameID, picture) VALUES (?1, ?2)",
        params![game_id, picture],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Picture paths of a game, oldest first.
pub fn get_pictures_by_game_id(conn: &Connection, game_id: i64) -> Result<Vec<String>, OperationError> {
    require_id(game_id, "gameID")?;
    let mut stmt = conn.prepare("SELECT picture FROM gamePhoto WHERE gameID = ?1 ORDER BY ID")?;
    let rows = stmt.query_map(params![game_id], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Copy a picture into the store as `game/<id>/picture_<n>.<ext>` and record it.
///
/// Returns the stored relative path.
pub fn upload_game_picture(
    conn: &Connection,
    store: &dyn FileStore,
    source: &Path,
    mime_type: &str,
    game_id: i64,
) -> Result<String, OperationError> {
    require_id(game_id, "gameID")?;
    if source.as_os_str().is_empty() {
        return Err(ValidationError::Missing("path").into());
    }
    require_non_empty(mime_type, "type")?;
    ensure_exists(conn, Entity::Game, game_id)?;

    let existing: i64 = conn.query_row(
        "SELECT COUNT(*) FROM gamePhoto WHERE gameID = ?1",
        params![game_id],
        |row| row.get(0),
    )?;
    let stored = store.store(
        source,
        mime_type,
        "game",
        game_id,
        &format!("picture_{existing}"),
    )?;
    add_game_picture(conn, game_id, &stored)?;
    Ok(stored)
}

/// Remove every picture row of a game. Stored files are left in place.
pub(crate) fn delete_pictures_for_game(conn: &Connection, game_id: i64) -> Result<usize, OperationError> {
    Ok(conn.execute("DELETE FROM gamePhoto WHERE gameID = ?1", params![game_id])?)
}
