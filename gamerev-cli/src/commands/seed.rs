use std::path::Path;

use crate::commands::Context;
use crate::CliError;

pub(crate) fn run_seed(ctx: &Context, path: &Path) -> Result<(), CliError> {
    if !path.exists() {
        return Err(CliError::config(format!(
            "Seed path not found: {}",
            path.display()
        )));
    }

    let stats = gamerev_db::seed_from_path(&ctx.conn, path)?;
    let summary = serde_json::json!({
        "categories": stats.categories,
        "publishers": stats.publishers,
        "games": stats.games,
        "links": stats.links,
        "skippedLinks": stats.skipped_links,
    });
    ctx.emit(&summary, |_| {
        if stats.skipped_links > 0 {
            log::warn!(
                "{} link(s) named a missing category or publisher",
                stats.skipped_links
            );
        }
    })
}
