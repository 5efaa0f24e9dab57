//! Game categories and the `game_category` links.

use gamerev_catalog::Category;
use rusqlite::Connection;

use crate::association::LinkedTable;
use crate::error::{Entity, OperationError};

const CATEGORIES: LinkedTable = LinkedTable {
    entity: Entity::Category,
    name_column: "title",
    link_table: "game_category",
    link_column: "categoryID",
    id_label: "catID",
};

fn to_category((id, title): (i64, String)) -> Category {
    Category { id, title }
}

/// Insert a category. Returns the new ID.
pub fn add_category(conn: &Connection, title: &str) -> Result<i64, OperationError> {
    CATEGORIES.add(conn, title)
}

/// Find a category ID by exact title.
pub fn find_category_by_title(conn: &Connection, title: &str) -> Result<Option<i64>, OperationError> {
    CATEGORIES.find_by_name(conn, title)
}

pub fn get_category_by_id(conn: &Connection, id: i64) -> Result<Category, OperationError> {
    CATEGORIES.get(conn, id).map(to_category)
}

pub fn get_all_categories(conn: &Connection) -> Result<Vec<Category>, OperationError> {
    Ok(CATEGORIES.all(conn)?.into_iter().map(to_category).collect())
}

/// Search categories by title (case-insensitive LIKE).
pub fn search_categories(conn: &Connection, text: &str) -> Result<Vec<Category>, OperationError> {
    Ok(CATEGORIES
        .search(conn, text)?
        .into_iter()
        .map(to_category)
        .collect())
}

/// Delete a category along with its game links.
pub fn delete_category_by_id(conn: &Connection, id: i64) -> Result<(), OperationError> {
    CATEGORIES.delete(conn, id)
}

pub fn associate_category(conn: &Connection, game_id: i64, cat_id: i64) -> Result<(), OperationError> {
    CATEGORIES.associate(conn, game_id, cat_id)
}

pub fn unassociate_category(conn: &Connection, game_id: i64, cat_id: i64) -> Result<(), OperationError> {
    CATEGORIES.unassociate(conn, game_id, cat_id)
}

/// Game IDs in a category, in the order they were linked.
pub fn category_game_ids(conn: &Connection, cat_id: i64) -> Result<Vec<i64>, OperationError> {
    CATEGORIES.game_ids(conn, cat_id)
}

/// Categories of a game, in the order they were linked.
pub fn categories_for_game(conn: &Connection, game_id: i64) -> Result<Vec<Category>, OperationError> {
    Ok(CATEGORIES
        .for_game(conn, game_id)?
        .into_iter()
        .map(to_category)
        .collect())
}

pub(crate) fn delete_category_links_for_game(
    conn: &Connection,
    game_id: i64,
) -> Result<usize, OperationError> {
    CATEGORIES.delete_links_for_game(conn, game_id)
}
