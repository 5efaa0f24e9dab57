//! Comments attached to reviews.

use gamerev_catalog::validate::{require_id, require_non_empty};
use gamerev_catalog::Comment;
use rusqlite::{params, Connection};

use crate::error::{Entity, OperationError};
use crate::queries::ensure_exists;

/// Insert a comment on a review. Returns the new ID.
///
/// Inputs are checked in argument order before either row is looked up.
pub fn add_comment(
    conn: &Connection,
    review_id: i64,
    user_id: i64,
    full_text: &str,
) -> Result<i64, OperationError> {
    require_id(review_id, "reviewID")?;
    require_id(user_id, "userID")?;
    require_non_empty(full_text, "fulltext")?;

    ensure_exists(conn, Entity::Review, review_id)?;
    ensure_exists(conn, Entity::User, user_id)?;

    conn.execute(
        "INSERT INTO comment (reviewID, userID, fullText) VALUES (?1, ?2, ?3)",
        params![review_id, user_id, full_text],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Added comment {id} on review {review_id}");
    Ok(id)
}

/// Comments on a review, oldest first.
pub fn get_comments_by_review_id(
    conn: &Connection,
    review_id: i64,
) -> Result<Vec<Comment>, OperationError> {
    require_id(review_id, "reviewID")?;

    let mut stmt = conn.prepare(
        "SELECT ID, reviewID, userID, fullText, created_at
         FROM comment WHERE reviewID = ?1 ORDER BY ID",
    )?;
    let rows = stmt.query_map(params![review_id], row_to_comment)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

pub fn delete_comment_by_id(conn: &Connection, id: i64) -> Result<(), OperationError> {
    require_id(id, "commentID")?;
    ensure_exists(conn, Entity::Comment, id)?;

    conn.execute("DELETE FROM comment WHERE ID = ?1", params![id])?;
    log::debug!("Deleted comment {id}");
    Ok(())
}

/// Remove every comment on a review. Returns how many were removed.
pub(crate) fn delete_comments_for_review(
    conn: &Connection,
    review_id: i64,
) -> Result<usize, OperationError> {
    Ok(conn.execute(
        "DELETE FROM comment WHERE reviewID = ?1",
        params![review_id],
    )?)
}

fn row_to_comment(row: &rusqlite::Row<'_>) -> rusqlite::Result<Comment> {
    Ok(Comment {
        id: row.get(0)?,
        review_id: row.get(1)?,
        user_id: row.get(2)?,
        full_text: row.get(3)?,
        created_at: row.get(4)?,
    })
}
