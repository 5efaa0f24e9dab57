//! Populate the database from YAML seed files.

use std::path::Path;

use gamerev_catalog::SeedData;
use rusqlite::Connection;

use crate::category::{add_category, associate_category, find_category_by_title};
use crate::error::OperationError;
use crate::game::{add_new_game, find_game_id_by_title};
use crate::publisher::{add_publisher, associate_publisher, find_publisher_by_name};

/// What a seeding run inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedStats {
    pub categories: usize,
    pub publishers: usize,
    pub games: usize,
    /// Category and publisher links ensured for seeded games.
    pub links: usize,
    /// Links naming a category or publisher that does not exist.
    pub skipped_links: usize,
}

/// Seed from a single YAML file, or from every `.yaml`/`.yml` file in a
/// directory.
pub fn seed_from_path(conn: &Connection, path: &Path) -> Result<SeedStats, OperationError> {
    let data = if path.is_dir() {
        gamerev_catalog::load_seed_dir(path)?
    } else {
        gamerev_catalog::load_seed(path)?
    };
    seed_from_data(conn, &data)
}

/// Insert whatever is missing and link the games.
///
/// Existing rows are left alone, so seeding twice is harmless. The whole run
/// is one transaction.
pub fn seed_from_data(conn: &Connection, data: &SeedData) -> Result<SeedStats, OperationError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = SeedStats::default();

    for title in &data.categories {
        if find_category_by_title(&tx, title)?.is_none() {
            add_category(&tx, title)?;
            stats.categories += 1;
        }
    }
    for name in &data.publishers {
        if find_publisher_by_name(&tx, name)?.is_none() {
            add_publisher(&tx, name)?;
            stats.publishers += 1;
        }
    }

    for game in &data.games {
        let game_id = match find_game_id_by_title(&tx, &game.title)? {
            Some(id) => id,
            None => {
                stats.games += 1;
                add_new_game(&tx, &game.title, &game.summary, &game.desc)?
            }
        };

        for title in &game.categories {
            match find_category_by_title(&tx, title)? {
                Some(cat_id) => {
                    associate_category(&tx, game_id, cat_id)?;
                    stats.links += 1;
                }
                None => {
                    log::warn!("Seed: unknown category \"{title}\" for \"{}\"", game.title);
                    stats.skipped_links += 1;
                }
            }
        }
        for name in &game.publishers {
            match find_publisher_by_name(&tx, name)? {
                Some(pub_id) => {
                    associate_publisher(&tx, game_id, pub_id)?;
                    stats.links += 1;
                }
                None => {
                    log::warn!("Seed: unknown publisher \"{name}\" for \"{}\"", game.title);
                    stats.skipped_links += 1;
                }
            }
        }
    }

    tx.commit()?;
    log::info!(
        "Seeded {} categories, {} publishers, {} games ({} links)",
        stats.categories,
        stats.publishers,
        stats.games,
        stats.links
    );
    Ok(stats)
}
