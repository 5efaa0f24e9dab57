//! `category` and `publisher` subcommands, which share one shape.

use gamerev_catalog::{Category, Publisher};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Context;
use crate::{CliError, LookupAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Kind {
    Category,
    Publisher,
}

impl Kind {
    fn noun(self) -> &'static str {
        match self {
            Kind::Category => "category",
            Kind::Publisher => "publisher",
        }
    }
}

pub(crate) fn run_lookup(ctx: &Context, kind: Kind, action: LookupAction) -> Result<(), CliError> {
    let conn = &ctx.conn;
    match action {
        LookupAction::Add { name } => {
            let id = match kind {
                Kind::Category => gamerev_db::add_category(conn, &name)?,
                Kind::Publisher => gamerev_db::add_publisher(conn, &name)?,
            };
            ctx.emit_created(kind.noun(), id)
        }
        LookupAction::List => match kind {
            Kind::Category => {
                let rows = gamerev_db::get_all_categories(conn)?;
                ctx.emit(rows.as_slice(), |rows| log_categories(kind, rows))
            }
            Kind::Publisher => {
                let rows = gamerev_db::get_all_publishers(conn)?;
                ctx.emit(rows.as_slice(), |rows| log_publishers(kind, rows))
            }
        },
        LookupAction::Search { text } => match kind {
            Kind::Category => {
                let rows = gamerev_db::search_categories(conn, &text)?;
                ctx.emit(rows.as_slice(), |rows| log_categories(kind, rows))
            }
            Kind::Publisher => {
                let rows = gamerev_db::search_publishers(conn, &text)?;
                ctx.emit(rows.as_slice(), |rows| log_publishers(kind, rows))
            }
        },
        LookupAction::Show { id } => match kind {
            Kind::Category => {
                let row = gamerev_db::get_category_by_id(conn, id)?;
                let games = gamerev_db::category_game_ids(conn, id)?;
                ctx.emit(&row, |row| log_entry(row.id, &row.title, &games))
            }
            Kind::Publisher => {
                let row = gamerev_db::get_publisher_by_id(conn, id)?;
                let games = gamerev_db::publisher_game_ids(conn, id)?;
                ctx.emit(&row, |row| log_entry(row.id, &row.name, &games))
            }
        },
        LookupAction::Delete { id } => {
            match kind {
                Kind::Category => gamerev_db::delete_category_by_id(conn, id)?,
                Kind::Publisher => gamerev_db::delete_publisher_by_id(conn, id)?,
            }
            ctx.emit_done(&format!("Deleted {} {id}", kind.noun()))
        }
        LookupAction::Link { game, id } => {
            match kind {
                Kind::Category => gamerev_db::associate_category(conn, game, id)?,
                Kind::Publisher => gamerev_db::associate_publisher(conn, game, id)?,
            }
            ctx.emit_done(&format!("Linked game {game} to {} {id}", kind.noun()))
        }
        LookupAction::Unlink { game, id } => {
            match kind {
                Kind::Category => gamerev_db::unassociate_category(conn, game, id)?,
                Kind::Publisher => gamerev_db::unassociate_publisher(conn, game, id)?,
            }
            ctx.emit_done(&format!("Unlinked game {game} from {} {id}", kind.noun()))
        }
    }
}

fn log_categories(kind: Kind, rows: &[Category]) {
    log_rows(kind, rows.iter().map(|c| (c.id, c.title.as_str())));
}

fn log_publishers(kind: Kind, rows: &[Publisher]) {
    log_rows(kind, rows.iter().map(|p| (p.id, p.name.as_str())));
}

fn log_rows<'a>(kind: Kind, rows: impl ExactSizeIterator<Item = (i64, &'a str)>) {
    if rows.len() == 0 {
        log::info!("No {} entries.", kind.noun());
        return;
    }
    for (id, name) in rows {
        log::info!(
            "  {:>5}  {}",
            id.if_supports_color(Stdout, |t| t.dimmed()),
            name
        );
    }
}

fn log_entry(id: i64, name: &str, games: &[i64]) {
    log::info!(
        "{} {}",
        name.if_supports_color(Stdout, |t| t.bold()),
        format!("(#{id})").if_supports_color(Stdout, |t| t.dimmed()),
    );
    if games.is_empty() {
        log::info!("  No linked games.");
    } else {
        let ids: Vec<String> = games.iter().map(ToString::to_string).collect();
        log::info!("  Games: {}", ids.join(", "));
    }
}
