//! Games, the aggregate root of the site.
//!
//! A game row only holds title, summary and description. Reads assemble a
//! [`GameView`] by asking the image, review, publisher and category modules
//! for the parts they own. That fan-out happens in one place, [`assemble`],
//! so list reads can be batched later without touching the callers.

use gamerev_catalog::validate::{
    check_game_fields, require_alnum_words, require_id, require_non_empty,
};
use gamerev_catalog::{GameUpdate, GameView, ValidationError};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Entity, OperationError};
use crate::queries::{contains_pattern, ensure_exists, row_exists};
use crate::{category, image, publisher, review};

/// A bare `game` row.
#[derive(Debug, Clone)]
struct GameRow {
    id: i64,
    title: String,
    summary: String,
    desc: String,
}

/// Insert a game. Returns the new ID.
pub fn add_new_game(
    conn: &Connection,
    title: &str,
    summary: &str,
    desc: &str,
) -> Result<i64, OperationError> {
    check_game_fields(title, summary, desc)?;

    if find_game_id_by_title(conn, title)?.is_some() {
        return Err(OperationError::duplicate(Entity::Game, title));
    }

    conn.execute(
        r#"INSERT INTO game (title, summary, "desc") VALUES (?1, ?2, ?3)"#,
        params![title, summary, desc],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Added game {id}: {title}");
    Ok(id)
}

/// Find a game ID by exact (case-sensitive) title.
pub fn find_game_id_by_title(conn: &Connection, title: &str) -> Result<Option<i64>, OperationError> {
    Ok(conn
        .query_row(
            "SELECT ID FROM game WHERE title = ?1 LIMIT 1",
            params![title],
            |row| row.get(0),
        )
        .optional()?)
}

pub fn get_game_by_id(conn: &Connection, id: i64) -> Result<GameView, OperationError> {
    require_id(id, "ID")?;
    let row = conn
        .query_row(
            r#"SELECT ID, title, summary, "desc" FROM game WHERE ID = ?1"#,
            params![id],
            row_to_game,
        )
        .optional()?
        .ok_or_else(|| OperationError::not_found(Entity::Game, id))?;
    assemble(conn, row)
}

pub fn get_game_by_title(conn: &Connection, title: &str) -> Result<GameView, OperationError> {
    require_alnum_words(title, "title")?;
    let row = conn
        .query_row(
            r#"SELECT ID, title, summary, "desc" FROM game WHERE title = ?1"#,
            params![title],
            row_to_game,
        )
        .optional()?
        .ok_or_else(|| OperationError::not_found(Entity::Game, format!("\"{title}\"")))?;
    assemble(conn, row)
}

/// Every game, in insertion order.
pub fn get_games(conn: &Connection) -> Result<Vec<GameView>, OperationError> {
    let mut stmt = conn.prepare(r#"SELECT ID, title, summary, "desc" FROM game ORDER BY ID"#)?;
    let rows = stmt
        .query_map([], row_to_game)?
        .collect::<Result<Vec<_>, _>>()?;
    assemble_all(conn, rows)
}

/// Games in a category, in the order they were linked.
pub fn get_games_of_category(conn: &Connection, cat_id: i64) -> Result<Vec<GameView>, OperationError> {
    require_id(cat_id, "catID")?;
    category::category_game_ids(conn, cat_id)?
        .into_iter()
        .map(|id| get_game_by_id(conn, id))
        .collect()
}

/// Games of a publisher, in the order they were linked.
pub fn get_games_of_publisher(conn: &Connection, pub_id: i64) -> Result<Vec<GameView>, OperationError> {
    require_id(pub_id, "publisherID")?;
    publisher::publisher_game_ids(conn, pub_id)?
        .into_iter()
        .map(|id| get_game_by_id(conn, id))
        .collect()
}

/// Games whose title, summary or description contain `text`
/// (case-insensitive), in insertion order.
pub fn search_game(conn: &Connection, text: &str) -> Result<Vec<GameView>, OperationError> {
    require_non_empty(text, "toSearch")?;
    let mut stmt = conn.prepare(
        r#"SELECT ID, title, summary, "desc" FROM game
           WHERE title LIKE ?1 ESCAPE '\' OR summary LIKE ?1 ESCAPE '\' OR "desc" LIKE ?1 ESCAPE '\'
           ORDER BY ID"#,
    )?;
    let rows = stmt
        .query_map(params![contains_pattern(text)], row_to_game)?
        .collect::<Result<Vec<_>, _>>()?;
    assemble_all(conn, rows)
}

/// Apply a partial update to a game.
///
/// A malformed ID is a plain validation error. Invalid or missing fields and
/// a missing game are reported as [`OperationError::UpdateRejected`]; a title
/// already used by another game is a duplicate.
pub fn update_game_by_id(conn: &Connection, id: i64, update: &GameUpdate) -> Result<(), OperationError> {
    require_id(id, "ID")?;

    check_update_fields(update).map_err(|e| OperationError::UpdateRejected(Box::new(e.into())))?;
    if !row_exists(conn, Entity::Game, id)? {
        return Err(OperationError::UpdateRejected(Box::new(
            OperationError::not_found(Entity::Game, id),
        )));
    }

    if let Some(title) = &update.title {
        let taken: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM game WHERE title = ?1 AND ID != ?2)",
            params![title, id],
            |row| row.get(0),
        )?;
        if taken {
            return Err(OperationError::duplicate(Entity::Game, title));
        }
    }

    conn.execute(
        r#"UPDATE game SET
               title = COALESCE(?2, title),
               summary = COALESCE(?3, summary),
               "desc" = COALESCE(?4, "desc")
           WHERE ID = ?1"#,
        params![id, update.title, update.summary, update.desc],
    )?;
    log::debug!("Updated game {id}");
    Ok(())
}

/// Delete a game with its links, pictures and reviews, all or nothing.
pub fn delete_game_by_id(conn: &Connection, id: i64) -> Result<(), OperationError> {
    require_id(id, "ID")?;
    ensure_exists(conn, Entity::Game, id)?;

    let tx = conn.unchecked_transaction()?;
    category::delete_category_links_for_game(&tx, id)?;
    publisher::delete_publisher_links_for_game(&tx, id)?;
    image::delete_pictures_for_game(&tx, id)?;
    let reviews = review::delete_reviews_for_game(&tx, id)?;
    tx.execute("DELETE FROM game WHERE ID = ?1", params![id])?;
    tx.commit()?;

    log::debug!("Deleted game {id} ({reviews} reviews)");
    Ok(())
}

fn check_update_fields(update: &GameUpdate) -> Result<(), ValidationError> {
    if update.is_empty() {
        return Err(ValidationError::Missing("field(s)"));
    }
    if let Some(title) = &update.title {
        require_alnum_words(title, "title")?;
    }
    if let Some(summary) = &update.summary {
        require_alnum_words(summary, "summary")?;
    }
    if let Some(desc) = &update.desc {
        require_alnum_words(desc, "description")?;
    }
    Ok(())
}

// ── Assembly ────────────────────────────────────────────────────────────────

fn assemble_all(conn: &Connection, rows: Vec<GameRow>) -> Result<Vec<GameView>, OperationError> {
    rows.into_iter().map(|row| assemble(conn, row)).collect()
}

/// Build the read view of one game from its owning modules.
fn assemble(conn: &Connection, row: GameRow) -> Result<GameView, OperationError> {
    let pictures = image::get_pictures_by_game_id(conn, row.id)?;
    let avg_rating = round_half_up(review::get_average_rating(conn, row.id)?);
    let publishers = publisher::publishers_for_game(conn, row.id)?;
    let categories = category::categories_for_game(conn, row.id)?;

    Ok(GameView {
        id: row.id,
        title: row.title,
        summary: row.summary,
        desc: row.desc,
        pictures,
        avg_rating,
        publishers,
        categories,
    })
}

/// Ratings are positive, so this is plain round-half-up: 3.5 → 4.
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

fn row_to_game(row: &rusqlite::Row<'_>) -> rusqlite::Result<GameRow> {
    Ok(GameRow {
        id: row.get(0)?,
        title: row.get(1)?,
        summary: row.get(2)?,
        desc: row.get(3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_breaks_ties_upward() {
        assert_eq!(round_half_up(3.5), 4);
        assert_eq!(round_half_up(3.49), 3);
        assert_eq!(round_half_up(0.0), 0);
        assert_eq!(round_half_up(4.0), 4);
        assert_eq!(round_half_up(2.0 / 3.0 + 2.0), 3);
    }

    #[test]
    fn empty_update_is_rejected() {
        assert_eq!(
            check_update_fields(&GameUpdate::default()),
            Err(ValidationError::Missing("field(s)"))
        );
    }

    #[test]
    fn update_checks_only_present_fields() {
        let update = GameUpdate {
            summary: Some("New summary".to_string()),
            ..Default::default()
        };
        assert_eq!(check_update_fields(&update), Ok(()));

        let update = GameUpdate {
            desc: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            check_update_fields(&update),
            Err(ValidationError::Missing("description"))
        );
    }
}
