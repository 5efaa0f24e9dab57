//! SQLite persistence for the game review site.
//!
//! One module per record type, all taking a borrowed `rusqlite::Connection`
//! opened by [`open_database`] or [`open_memory`]. Games are the aggregate
//! root: reads return a [`gamerev_catalog::GameView`] assembled from the
//! category, publisher, image and review modules.

mod association;
pub mod category;
pub mod comment;
pub mod error;
pub mod files;
pub mod game;
pub mod image;
pub mod password;
pub mod publisher;
pub mod queries;
pub mod review;
pub mod schema;
pub mod seed;
pub mod user;

pub use category::{
    add_category, associate_category, categories_for_game, category_game_ids,
    delete_category_by_id, find_category_by_title, get_all_categories, get_category_by_id,
    search_categories, unassociate_category,
};
pub use comment::{add_comment, delete_comment_by_id, get_comments_by_review_id};
pub use error::{Entity, ErrorKind, OperationError};
pub use files::{DiskFileStore, FileStore};
pub use game::{
    add_new_game, delete_game_by_id, find_game_id_by_title, get_game_by_id, get_game_by_title,
    get_games, get_games_of_category, get_games_of_publisher, search_game, update_game_by_id,
};
pub use image::{add_game_picture, get_pictures_by_game_id, upload_game_picture};
pub use password::{HashConfig, Hasher};
pub use publisher::{
    add_publisher, associate_publisher, delete_publisher_by_id, find_publisher_by_name,
    get_all_publishers, get_publisher_by_id, publisher_game_ids, publishers_for_game,
    search_publishers, unassociate_publisher,
};
pub use queries::{site_stats, SiteStats};
pub use review::{
    add_review, delete_review_by_id, get_average_rating, get_review_by_id,
    get_reviews_by_game_id,
};
pub use schema::{open_database, open_memory, SchemaError};
pub use seed::{seed_from_data, seed_from_path, SeedStats};
pub use user::{associate_role, get_user_by_id, login, register, upload_picture};

pub use rusqlite::Connection;
