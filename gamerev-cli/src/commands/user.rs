use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::commands::Context;
use crate::CliError;

pub(crate) fn run_user_register(ctx: &Context, username: &str, password: &str) -> Result<(), CliError> {
    let hasher = ctx.hasher()?;
    let id = gamerev_db::register(&ctx.conn, &hasher, username, password)?;
    ctx.emit_created("user", id)
}

pub(crate) fn run_user_login(ctx: &Context, username: &str, password: &str) -> Result<(), CliError> {
    let hasher = ctx.hasher()?;
    let id = gamerev_db::login(&ctx.conn, &hasher, username, password)?;
    ctx.emit(&serde_json::json!({ "ID": id }), |_| {
        log::info!(
            "{} Logged in as {username} (user {id})",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
    })
}

pub(crate) fn run_user_show(ctx: &Context, id: i64) -> Result<(), CliError> {
    let user = gamerev_db::get_user_by_id(&ctx.conn, id)?;
    ctx.emit(&user, |user| {
        log::info!(
            "{} {}",
            user.username.if_supports_color(Stdout, |t| t.bold()),
            format!("(#{})", user.id).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log::info!("  Role:    {}", user.role.as_deref().unwrap_or("-"));
        log::info!("  Avatar:  {}", user.avatar.as_deref().unwrap_or("-"));
    })
}

pub(crate) fn run_user_role(ctx: &Context, user: i64, role: i64) -> Result<(), CliError> {
    gamerev_db::associate_role(&ctx.conn, role, user)?;
    ctx.emit_done(&format!("User {user} now has role {role}"))
}

pub(crate) fn run_user_avatar(
    ctx: &Context,
    user: i64,
    file: &Path,
    mime_type: &str,
) -> Result<(), CliError> {
    let store = ctx.store();
    let stored = gamerev_db::upload_picture(&ctx.conn, &store, file, mime_type, user)?;
    ctx.emit(&serde_json::json!({ "avatar": stored }), |_| {
        log::info!("Stored avatar as {}", store.root().join(&stored).display());
    })
}
