use std::path::Path;

use gamerev_catalog::{GameUpdate, GameView};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Context;
use crate::CliError;

pub(crate) fn run_game_add(
    ctx: &Context,
    title: &str,
    summary: &str,
    desc: &str,
) -> Result<(), CliError> {
    let id = gamerev_db::add_new_game(&ctx.conn, title, summary, desc)?;
    ctx.emit_created("game", id)
}

pub(crate) fn run_game_show(
    ctx: &Context,
    id: Option<i64>,
    title: Option<String>,
) -> Result<(), CliError> {
    let game = match (id, title) {
        (_, Some(title)) => gamerev_db::get_game_by_title(&ctx.conn, &title)?,
        (Some(id), None) => gamerev_db::get_game_by_id(&ctx.conn, id)?,
        (None, None) => return Err(CliError::config("a game ID or --title is required")),
    };
    ctx.emit(&game, log_game_detail)
}

pub(crate) fn run_game_list(
    ctx: &Context,
    category: Option<i64>,
    publisher: Option<i64>,
) -> Result<(), CliError> {
    let games = match (category, publisher) {
        (Some(cat_id), _) => gamerev_db::get_games_of_category(&ctx.conn, cat_id)?,
        (None, Some(pub_id)) => gamerev_db::get_games_of_publisher(&ctx.conn, pub_id)?,
        (None, None) => gamerev_db::get_games(&ctx.conn)?,
    };
    ctx.emit(games.as_slice(), log_game_table)
}

pub(crate) fn run_game_search(ctx: &Context, text: &str) -> Result<(), CliError> {
    let games = gamerev_db::search_game(&ctx.conn, text)?;
    ctx.emit(games.as_slice(), log_game_table)
}

pub(crate) fn run_game_update(
    ctx: &Context,
    id: i64,
    title: Option<String>,
    summary: Option<String>,
    desc: Option<String>,
) -> Result<(), CliError> {
    let update = GameUpdate {
        title,
        summary,
        desc,
    };
    gamerev_db::update_game_by_id(&ctx.conn, id, &update)?;
    ctx.emit_done(&format!("Updated game {id}"))
}

pub(crate) fn run_game_delete(ctx: &Context, id: i64) -> Result<(), CliError> {
    gamerev_db::delete_game_by_id(&ctx.conn, id)?;
    ctx.emit_done(&format!("Deleted game {id}"))
}

pub(crate) fn run_game_picture(
    ctx: &Context,
    id: i64,
    file: &Path,
    mime_type: &str,
) -> Result<(), CliError> {
    let store = ctx.store();
    let stored = gamerev_db::upload_game_picture(&ctx.conn, &store, file, mime_type, id)?;
    ctx.emit(&serde_json::json!({ "picture": stored }), |_| {
        log::info!(
            "Stored picture as {}",
            store.root().join(&stored).display()
        );
    })
}

fn log_game_table(games: &[GameView]) {
    if games.is_empty() {
        log::info!("No games found.");
        return;
    }
    log::info!(
        "{}",
        format!("  {:>5}  {:<32} {:>6}  Summary", "ID", "Title", "Rating")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for game in games {
        log::info!(
            "  {:>5}  {:<32} {:>6}  {}",
            game.id,
            super::truncate_str(&game.title, 32),
            stars(game.avg_rating),
            super::truncate_str(&game.summary, 40),
        );
    }
    crate::log_blank();
    log::info!("{} game(s)", games.len());
}

fn log_game_detail(game: &GameView) {
    log::info!(
        "{} {}",
        game.title.if_supports_color(Stdout, |t| t.bold()),
        format!("(#{})", game.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  {}", game.summary);
    crate::log_blank();
    log::info!("  {}", game.desc);
    crate::log_blank();
    log::info!("  Rating:      {}", stars(game.avg_rating));

    let names = |items: Vec<&str>| {
        if items.is_empty() {
            "-".to_string()
        } else {
            items.join(", ")
        }
    };
    log::info!(
        "  Categories:  {}",
        names(game.categories.iter().map(|c| c.title.as_str()).collect())
    );
    log::info!(
        "  Publishers:  {}",
        names(game.publishers.iter().map(|p| p.name.as_str()).collect())
    );
    if !game.pictures.is_empty() {
        log::info!("  Pictures:");
        for picture in &game.pictures {
            log::info!(
                "    {}",
                picture.if_supports_color(Stdout, |t| t.cyan())
            );
        }
    }
}

/// `★★★☆☆` for a rating, or `-` when unrated.
pub(crate) fn stars(rating: i64) -> String {
    if rating <= 0 {
        return "-".to_string();
    }
    let filled = rating.clamp(0, 5) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
