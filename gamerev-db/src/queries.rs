//! Shared read helpers and site-wide statistics.

use rusqlite::{params, Connection};

use crate::error::{Entity, OperationError};

/// Whether a row with this ID exists.
pub fn row_exists(conn: &Connection, entity: Entity, id: i64) -> Result<bool, OperationError> {
    let sql = format!(
        "SELECT EXISTS(SELECT 1 FROM {} WHERE ID = ?1)",
        entity.table()
    );
    Ok(conn.query_row(&sql, params![id], |row| row.get(0))?)
}

/// Fail with `NotFound` unless the row exists.
pub fn ensure_exists(conn: &Connection, entity: Entity, id: i64) -> Result<(), OperationError> {
    if row_exists(conn, entity, id)? {
        Ok(())
    } else {
        Err(OperationError::not_found(entity, id))
    }
}

/// Build a `LIKE ... ESCAPE '\'` pattern matching `text` anywhere.
///
/// `%`, `_` and `\` in the input match themselves.
pub(crate) fn contains_pattern(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() + 2);
    pattern.push('%');
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Get row counts for the whole site.
pub fn site_stats(conn: &Connection) -> Result<SiteStats, OperationError> {
    let count = |sql: &str| -> Result<i64, OperationError> {
        Ok(conn.query_row(sql, [], |r| r.get(0))?)
    };

    Ok(SiteStats {
        games: count("SELECT COUNT(*) FROM game")?,
        pictures: count("SELECT COUNT(*) FROM gamePhoto")?,
        categories: count("SELECT COUNT(*) FROM category")?,
        publishers: count("SELECT COUNT(*) FROM publisher")?,
        users: count("SELECT COUNT(*) FROM user")?,
        reviews: count("SELECT COUNT(*) FROM review")?,
        comments: count("SELECT COUNT(*) FROM comment")?,
    })
}

/// Summary statistics for the site.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SiteStats {
    pub games: i64,
    pub pictures: i64,
    pub categories: i64,
    pub publishers: i64,
    pub users: i64,
    pub reviews: i64,
    pub comments: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_plain_text() {
        assert_eq!(contains_pattern("star"), "%star%");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
