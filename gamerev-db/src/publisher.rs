//! Game publishers and the `game_publisher` links.

use gamerev_catalog::Publisher;
use rusqlite::Connection;

use crate::association::LinkedTable;
use crate::error::{Entity, OperationError};

const PUBLISHERS: LinkedTable = LinkedTable {
    entity: Entity::Publisher,
    name_column: "name",
    link_table: "game_publisher",
    link_column: "publisherID",
    id_label: "publisherID",
};

fn to_publisher((id, name): (i64, String)) -> Publisher {
    Publisher { id, name }
}

/// Insert a publisher. Returns the new ID.
pub fn add_publisher(conn: &Connection, name: &str) -> Result<i64, OperationError> {
    PUBLISHERS.add(conn, name)
}

/// Find a publisher ID by exact name.
pub fn find_publisher_by_name(conn: &Connection, name: &str) -> Result<Option<i64>, OperationError> {
    PUBLISHERS.find_by_name(conn, name)
}

pub fn get_publisher_by_id(conn: &Connection, id: i64) -> Result<Publisher, OperationError> {
    PUBLISHERS.get(conn, id).map(to_publisher)
}

pub fn get_all_publishers(conn: &Connection) -> Result<Vec<Publisher>, OperationError> {
    Ok(PUBLISHERS.all(conn)?.into_iter().map(to_publisher).collect())
}

/// Search publishers by name (case-insensitive LIKE).
pub fn search_publishers(conn: &Connection, text: &str) -> Result<Vec<Publisher>, OperationError> {
    Ok(PUBLISHERS
        .search(conn, text)?
        .into_iter()
        .map(to_publisher)
        .collect())
}

/// Delete a publisher along with its game links.
pub fn delete_publisher_by_id(conn: &Connection, id: i64) -> Result<(), OperationError> {
    PUBLISHERS.delete(conn, id)
}

pub fn associate_publisher(conn: &Connection, game_id: i64, pub_id: i64) -> Result<(), OperationError> {
    PUBLISHERS.associate(conn, game_id, pub_id)
}

pub fn unassociate_publisher(
    conn: &Connection,
    game_id: i64,
    pub_id: i64,
) -> Result<(), OperationError> {
    PUBLISHERS.unassociate(conn, game_id, pub_id)
}

/// Game IDs of a publisher, in the order they were linked.
pub fn publisher_game_ids(conn: &Connection, pub_id: i64) -> Result<Vec<i64>, OperationError> {
    PUBLISHERS.game_ids(conn, pub_id)
}

/// Publishers of a game, in the order they were linked.
pub fn publishers_for_game(conn: &Connection, game_id: i64) -> Result<Vec<Publisher>, OperationError> {
    Ok(PUBLISHERS
        .for_game(conn, game_id)?
        .into_iter()
        .map(to_publisher)
        .collect())
}

pub(crate) fn delete_publisher_links_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<usize, OperationError> {
    PUBLISHERS.delete_links_for_game(conn, game_id)
}
