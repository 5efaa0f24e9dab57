//! Named lookup tables linked many-to-many to games.
//!
//! Categories and publishers share one shape: an `ID` plus a unique name
//! column, and a join table of `(gameID, <row>ID)` pairs. [`LinkedTable`]
//! describes one such table; the `category` and `publisher` modules wrap it
//! with their own types.

use gamerev_catalog::validate::{require_alnum_words, require_id};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Entity, OperationError};
use crate::queries::{contains_pattern, ensure_exists};

pub(crate) struct LinkedTable {
    pub entity: Entity,
    pub name_column: &'static str,
    pub link_table: &'static str,
    pub link_column: &'static str,
    /// Label used in validation errors for this table's IDs.
    pub id_label: &'static str,
}

impl LinkedTable {
    fn table(&self) -> &'static str {
        self.entity.table()
    }

    pub fn add(&self, conn: &Connection, name: &str) -> Result<i64, OperationError> {
        require_alnum_words(name, "name")?;

        if self.find_by_name(conn, name)?.is_some() {
            return Err(OperationError::duplicate(self.entity, name));
        }

        conn.execute(
            &format!(
                "INSERT INTO {} ({}) VALUES (?1)",
                self.table(),
                self.name_column
            ),
            params![name],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Added {} {id}: {name}", self.table());
        Ok(id)
    }

    /// Exact, case-sensitive name lookup.
    pub fn find_by_name(&self, conn: &Connection, name: &str) -> Result<Option<i64>, OperationError> {
        let sql = format!(
            "SELECT ID FROM {} WHERE {} = ?1 LIMIT 1",
            self.table(),
            self.name_column
        );
        Ok(conn
            .query_row(&sql, params![name], |row| row.get(0))
            .optional()?)
    }

    pub fn get(&self, conn: &Connection, id: i64) -> Result<(i64, String), OperationError> {
        require_id(id, self.id_label)?;
        let sql = format!(
            "SELECT ID, {} FROM {} WHERE ID = ?1",
            self.name_column,
            self.table()
        );
        conn.query_row(&sql, params![id], |row| Ok((row.get(0)?, row.get(1)?)))
            .optional()?
            .ok_or_else(|| OperationError::not_found(self.entity, id))
    }

    pub fn all(&self, conn: &Connection) -> Result<Vec<(i64, String)>, OperationError> {
        let sql = format!(
            "SELECT ID, {} FROM {} ORDER BY ID",
            self.name_column,
            self.table()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Rows whose name contains `text` (SQL `LIKE`, ASCII case-insensitive).
    pub fn search(&self, conn: &Connection, text: &str) -> Result<Vec<(i64, String)>, OperationError> {
        let sql = format!(
            "SELECT ID, {col} FROM {table} WHERE {col} LIKE ?1 ESCAPE '\\' ORDER BY ID",
            col = self.name_column,
            table = self.table()
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![contains_pattern(text)], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete a row and every link to it.
    pub fn delete(&self, conn: &Connection, id: i64) -> Result<(), OperationError> {
        require_id(id, self.id_label)?;
        ensure_exists(conn, self.entity, id)?;

        let tx = conn.unchecked_transaction()?;
        tx.execute(
            &format!(
                "DELETE FROM {} WHERE {} = ?1",
                self.link_table, self.link_column
            ),
            params![id],
        )?;
        tx.execute(
            &format!("DELETE FROM {} WHERE ID = ?1", self.table()),
            params![id],
        )?;
        tx.commit()?;
        log::debug!("Deleted {} {id}", self.table());
        Ok(())
    }

    /// Link a game to a row. Linking an already-linked pair is a no-op.
    pub fn associate(&self, conn: &Connection, game_id: i64, id: i64) -> Result<(), OperationError> {
        self.check_pair(conn, game_id, id)?;
        conn.execute(
            &format!(
                "INSERT OR IGNORE INTO {} (gameID, {}) VALUES (?1, ?2)",
                self.link_table, self.link_column
            ),
            params![game_id, id],
        )?;
        Ok(())
    }

    /// Remove a game/row link. Removing a missing link is a no-op.
    pub fn unassociate(&self, conn: &Connection, game_id: i64, id: i64) -> Result<(), OperationError> {
        self.check_pair(conn, game_id, id)?;
        conn.execute(
            &format!(
                "DELETE FROM {} WHERE gameID = ?1 AND {} = ?2",
                self.link_table, self.link_column
            ),
            params![game_id, id],
        )?;
        Ok(())
    }

    /// IDs of the games linked to a row, oldest link first.
    pub fn game_ids(&self, conn: &Connection, id: i64) -> Result<Vec<i64>, OperationError> {
        require_id(id, self.id_label)?;
        ensure_exists(conn, self.entity, id)?;

        let sql = format!(
            "SELECT gameID FROM {} WHERE {} = ?1 ORDER BY ID",
            self.link_table, self.link_column
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![id], |row| row.get(0))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Rows linked to a game, oldest link first.
    pub fn for_game(&self, conn: &Connection, game_id: i64) -> Result<Vec<(i64, String)>, OperationError> {
        require_id(game_id, "gameID")?;
        let sql = format!(
            "SELECT t.ID, t.{col} FROM {link} l JOIN {table} t ON t.ID = l.{link_col}
             WHERE l.gameID = ?1 ORDER BY l.ID",
            col = self.name_column,
            link = self.link_table,
            table = self.table(),
            link_col = self.link_column
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt.query_map(params![game_id], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn delete_links_for_game(&self, conn: &Connection, game_id: i64) -> Result<usize, OperationError> {
        Ok(conn.execute(
            &format!("DELETE FROM {} WHERE gameID = ?1", self.link_table),
            params![game_id],
        )?)
    }

    /// Validate both IDs (game first), then check both rows exist (game first).
    fn check_pair(&self, conn: &Connection, game_id: i64, id: i64) -> Result<(), OperationError> {
        require_id(game_id, "gameID")?;
        require_id(id, self.id_label)?;
        ensure_exists(conn, Entity::Game, game_id)?;
        ensure_exists(conn, self.entity, id)
    }
}
