use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Context;
use crate::CliError;

pub(crate) fn run_stats(ctx: &Context) -> Result<(), CliError> {
    let stats = gamerev_db::site_stats(&ctx.conn)?;

    let summary = serde_json::json!({
        "games": stats.games,
        "pictures": stats.pictures,
        "categories": stats.categories,
        "publishers": stats.publishers,
        "users": stats.users,
        "reviews": stats.reviews,
        "comments": stats.comments,
    });
    ctx.emit(&summary, |_| {
        log::info!(
            "{}",
            "Review Database Statistics".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("  Database: {}", ctx.db_path.display());
        crate::log_blank();
        log::info!("  Games:          {:>8}", stats.games);
        log::info!("  Pictures:       {:>8}", stats.pictures);
        log::info!("  Categories:     {:>8}", stats.categories);
        log::info!("  Publishers:     {:>8}", stats.publishers);
        log::info!("  Users:          {:>8}", stats.users);
        log::info!("  Reviews:        {:>8}", stats.reviews);
        log::info!("  Comments:       {:>8}", stats.comments);
    })
}
