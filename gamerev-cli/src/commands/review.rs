//! `review` and `comment` subcommands.

use gamerev_catalog::{Comment, NewReview, Review};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use super::game::stars;
use crate::commands::Context;
use crate::CliError;

pub(crate) fn run_review_add(
    ctx: &Context,
    game: i64,
    user: i64,
    rating: i64,
    text: String,
) -> Result<(), CliError> {
    let review = NewReview {
        full_text: text,
        rating,
    };
    let id = gamerev_db::add_review(&ctx.conn, game, &review, user)?;
    ctx.emit_created("review", id)
}

pub(crate) fn run_review_list(ctx: &Context, game: i64, user: Option<i64>) -> Result<(), CliError> {
    let reviews = gamerev_db::get_reviews_by_game_id(&ctx.conn, game, user.is_some(), user)?;
    ctx.emit(&reviews, |reviews| {
        if let Some(own) = &reviews.user_review {
            log::info!("{}", "Your review".if_supports_color(Stdout, |t| t.bold()));
            log_review(own);
            crate::log_blank();
        }
        if reviews.reviews.is_empty() {
            log::info!("No reviews yet.");
        }
        for review in &reviews.reviews {
            log_review(review);
        }
    })
}

pub(crate) fn run_review_show(ctx: &Context, id: i64) -> Result<(), CliError> {
    let review = gamerev_db::get_review_by_id(&ctx.conn, id)?;
    ctx.emit(&review, log_review)
}

pub(crate) fn run_review_delete(ctx: &Context, id: i64) -> Result<(), CliError> {
    gamerev_db::delete_review_by_id(&ctx.conn, id)?;
    ctx.emit_done(&format!("Deleted review {id}"))
}

pub(crate) fn run_comment_add(ctx: &Context, review: i64, user: i64, text: &str) -> Result<(), CliError> {
    let id = gamerev_db::add_comment(&ctx.conn, review, user, text)?;
    ctx.emit_created("comment", id)
}

pub(crate) fn run_comment_list(ctx: &Context, review: i64) -> Result<(), CliError> {
    let comments = gamerev_db::get_comments_by_review_id(&ctx.conn, review)?;
    ctx.emit(comments.as_slice(), |comments| {
        if comments.is_empty() {
            log::info!("No comments.");
        }
        for comment in comments {
            log_comment(comment, "");
        }
    })
}

pub(crate) fn run_comment_delete(ctx: &Context, id: i64) -> Result<(), CliError> {
    gamerev_db::delete_comment_by_id(&ctx.conn, id)?;
    ctx.emit_done(&format!("Deleted comment {id}"))
}

fn log_review(review: &Review) {
    log::info!(
        "{} {} {}",
        stars(review.rating).if_supports_color(Stdout, |t| t.yellow()),
        format!("#{} by user {}", review.id, review.user_id)
            .if_supports_color(Stdout, |t| t.dimmed()),
        review.created_at.if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  {}", review.full_text);
    for comment in &review.comments {
        log_comment(comment, "    ");
    }
}

fn log_comment(comment: &Comment, indent: &str) {
    log::info!(
        "{indent}{} {}",
        format!("#{} user {}:", comment.id, comment.user_id)
            .if_supports_color(Stdout, |t| t.dimmed()),
        comment.full_text,
    );
}
