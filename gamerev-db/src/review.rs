//! Reviews of games, with their comments nested on read.

use gamerev_catalog::validate::{require_id, require_non_empty, require_rating};
use gamerev_catalog::{GameReviews, NewReview, Review};
use rusqlite::{params, Connection, OptionalExtension};

use crate::comment;
use crate::error::{Entity, OperationError};
use crate::queries::ensure_exists;

/// Insert a review. Returns the new ID.
///
/// Each user may review a game once.
pub fn add_review(
    conn: &Connection,
    game_id: i64,
    review: &NewReview,
    user_id: i64,
) -> Result<i64, OperationError> {
    require_id(game_id, "gameID")?;
    require_id(user_id, "userID")?;
    require_non_empty(&review.full_text, "fulltext")?;
    require_rating(review.rating)?;

    ensure_exists(conn, Entity::Game, game_id)?;
    ensure_exists(conn, Entity::User, user_id)?;

    let taken: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM review WHERE gameID = ?1 AND userID = ?2)",
        params![game_id, user_id],
        |row| row.get(0),
    )?;
    if taken {
        return Err(OperationError::duplicate(
            Entity::Review,
            format!("game {game_id} by user {user_id}"),
        ));
    }

    conn.execute(
        "INSERT INTO review (gameID, userID, fullText, rating) VALUES (?1, ?2, ?3, ?4)",
        params![game_id, user_id, review.full_text, review.rating],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Added review {id} of game {game_id} (rating {})", review.rating);
    Ok(id)
}

pub fn get_review_by_id(conn: &Connection, id: i64) -> Result<Review, OperationError> {
    require_id(id, "reviewID")?;

    let review = conn
        .query_row(
            "SELECT ID, gameID, userID, fullText, rating, created_at
             FROM review WHERE ID = ?1",
            params![id],
            row_to_review,
        )
        .optional()?
        .ok_or_else(|| OperationError::not_found(Entity::Review, id))?;
    with_comments(conn, review)
}

/// Reviews of a game, oldest first, each with its comments.
///
/// When `include_own` is set and a requesting user is given, that user's
/// review is moved out of `reviews` into `user_review`.
pub fn get_reviews_by_game_id(
    conn: &Connection,
    game_id: i64,
    include_own: bool,
    requesting_user: Option<i64>,
) -> Result<GameReviews, OperationError> {
    require_id(game_id, "gameID")?;
    if let Some(user_id) = requesting_user {
        require_id(user_id, "userID")?;
    }
    ensure_exists(conn, Entity::Game, game_id)?;

    let mut stmt = conn.prepare(
        "SELECT ID, gameID, userID, fullText, rating, created_at
         FROM review WHERE gameID = ?1 ORDER BY ID",
    )?;
    let rows = stmt
        .query_map(params![game_id], row_to_review)?
        .collect::<Result<Vec<_>, _>>()?;

    let own_user = requesting_user.filter(|_| include_own);
    let mut result = GameReviews::default();
    for row in rows {
        let review = with_comments(conn, row)?;
        if own_user == Some(review.user_id) {
            result.user_review = Some(review);
        } else {
            result.reviews.push(review);
        }
    }
    Ok(result)
}

/// Mean rating of a game's reviews, or `0.0` when it has none.
pub fn get_average_rating(conn: &Connection, game_id: i64) -> Result<f64, OperationError> {
    require_id(game_id, "gameID")?;
    let avg: Option<f64> = conn.query_row(
        "SELECT AVG(rating) FROM review WHERE gameID = ?1",
        params![game_id],
        |row| row.get(0),
    )?;
    Ok(avg.unwrap_or(0.0))
}

/// Delete a review and its comments.
pub fn delete_review_by_id(conn: &Connection, id: i64) -> Result<(), OperationError> {
    require_id(id, "reviewID")?;
    ensure_exists(conn, Entity::Review, id)?;

    let tx = conn.unchecked_transaction()?;
    comment::delete_comments_for_review(&tx, id)?;
    tx.execute("DELETE FROM review WHERE ID = ?1", params![id])?;
    tx.commit()?;
    log::debug!("Deleted review {id}");
    Ok(())
}

/// Remove every review of a game, with their comments.
///
/// Runs on the caller's connection; the game cascade wraps it in a transaction.
pub(crate) fn delete_reviews_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<usize, OperationError> {
    let ids = {
        let mut stmt = conn.prepare("SELECT ID FROM review WHERE gameID = ?1")?;
        let rows = stmt.query_map(params![game_id], |row| row.get::<_, i64>(0))?;
        rows.collect::<Result<Vec<_>, _>>()?
    };
    for id in &ids {
        comment::delete_comments_for_review(conn, *id)?;
    }
    conn.execute("DELETE FROM review WHERE gameID = ?1", params![game_id])?;
    Ok(ids.len())
}

fn with_comments(conn: &Connection, mut review: Review) -> Result<Review, OperationError> {
    review.comments = comment::get_comments_by_review_id(conn, review.id)?;
    Ok(review)
}

fn row_to_review(row: &rusqlite::Row<'_>) -> rusqlite::Result<Review> {
    Ok(Review {
        id: row.get(0)?,
        game_id: row.get(1)?,
        user_id: row.get(2)?,
        full_text: row.get(3)?,
        rating: row.get(4)?,
        created_at: row.get(5)?,
        comments: Vec::new(),
    })
}
