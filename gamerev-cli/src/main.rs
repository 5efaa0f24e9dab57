//! gamerev CLI
//!
//! Command-line front end for the game review catalog.

mod commands;
mod error;
mod settings;

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gamerev_catalog::validate::{parse_id, RATING_RANGE};

pub(crate) use error::CliError;

use commands::Context;
use settings::Settings;

#[derive(Parser)]
#[command(name = "gamerev")]
#[command(about = "Manage games, reviews and accounts of the review site", long_about = None)]
struct Cli {
    /// Database file (overrides [database] path in settings.toml)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Print JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add, inspect, edit and remove games
    Game {
        #[command(subcommand)]
        action: GameAction,
    },

    /// Manage categories and their game links
    Category {
        #[command(subcommand)]
        action: LookupAction,
    },

    /// Manage publishers and their game links
    Publisher {
        #[command(subcommand)]
        action: LookupAction,
    },

    /// Register accounts, log in, set avatars and roles
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Reviews of games
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Comments on reviews
    Comment {
        #[command(subcommand)]
        action: CommentAction,
    },

    /// Load categories, publishers and games from a YAML file or directory
    Seed {
        /// Seed file, or directory of .yaml/.yml files
        path: PathBuf,
    },

    /// Show row counts for the whole site
    Stats,

    /// Inspect settings.toml
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum GameAction {
    /// Add a game
    Add {
        title: String,
        summary: String,
        desc: String,
    },

    /// Show one game by ID or title
    Show {
        #[arg(value_parser = id_arg, required_unless_present = "title")]
        id: Option<i64>,

        /// Look up by exact title instead of ID
        #[arg(long, conflicts_with = "id")]
        title: Option<String>,
    },

    /// List games, optionally only those of one category or publisher
    List {
        #[arg(long, value_parser = id_arg, conflicts_with = "publisher")]
        category: Option<i64>,

        #[arg(long, value_parser = id_arg)]
        publisher: Option<i64>,
    },

    /// Find games whose title, summary or description contain some text
    Search { text: String },

    /// Change any of a game's text fields
    Update {
        #[arg(value_parser = id_arg)]
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        summary: Option<String>,

        #[arg(long)]
        desc: Option<String>,
    },

    /// Delete a game with its links, pictures and reviews
    Delete {
        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Upload a picture for a game
    Picture {
        #[arg(value_parser = id_arg)]
        id: i64,

        file: PathBuf,

        /// MIME type of the file (e.g. image/png)
        #[arg(long = "type")]
        mime_type: String,
    },
}

#[derive(Subcommand)]
enum LookupAction {
    /// Add an entry
    Add { name: String },

    /// List all entries
    List,

    /// Show one entry
    Show {
        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Find entries whose name contains some text
    Search { text: String },

    /// Delete an entry and its game links
    Delete {
        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Link a game to an entry
    Link {
        #[arg(value_parser = id_arg)]
        game: i64,

        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Remove a game link
    Unlink {
        #[arg(value_parser = id_arg)]
        game: i64,

        #[arg(value_parser = id_arg)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Register {
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Check a username and password
    Login {
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Show an account
    Show {
        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Assign a role (1 = user, 2 = admin)
    Role {
        #[arg(value_parser = id_arg)]
        user: i64,

        #[arg(value_parser = id_arg)]
        role: i64,
    },

    /// Upload a profile picture
    Avatar {
        #[arg(value_parser = id_arg)]
        user: i64,

        file: PathBuf,

        /// MIME type of the file (e.g. image/png)
        #[arg(long = "type")]
        mime_type: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Review a game
    Add {
        #[arg(value_parser = id_arg)]
        game: i64,

        #[arg(long, value_parser = id_arg)]
        user: i64,

        #[arg(long, value_parser = rating_arg)]
        rating: i64,

        text: String,
    },

    /// List reviews of a game
    List {
        #[arg(value_parser = id_arg)]
        game: i64,

        /// Show this user's review separately
        #[arg(long, value_parser = id_arg)]
        user: Option<i64>,
    },

    /// Show one review with its comments
    Show {
        #[arg(value_parser = id_arg)]
        id: i64,
    },

    /// Delete a review and its comments
    Delete {
        #[arg(value_parser = id_arg)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum CommentAction {
    /// Comment on a review
    Add {
        #[arg(value_parser = id_arg)]
        review: i64,

        #[arg(long, value_parser = id_arg)]
        user: i64,

        text: String,
    },

    /// List comments on a review
    List {
        #[arg(value_parser = id_arg)]
        review: i64,
    },

    /// Delete a comment
    Delete {
        #[arg(value_parser = id_arg)]
        id: i64,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective settings and where they come from
    Show,

    /// Print the settings file path
    Path,
}

/// Parse a positional or flag ID the same way the library validates them.
fn id_arg(raw: &str) -> Result<i64, gamerev_catalog::ValidationError> {
    parse_id(raw, "ID")
}

fn rating_arg(raw: &str) -> Result<i64, String> {
    let rating: i64 = raw.parse().map_err(|_| format!("not a number: {raw}"))?;
    if RATING_RANGE.contains(&rating) {
        Ok(rating)
    } else {
        Err(format!(
            "rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        ))
    }
}

/// Log an empty line (used to space out human-readable output).
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level.as_str().to_lowercase(), record.args()),
        })
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config {
        action: ConfigAction::Path,
    } = &cli.command
    {
        commands::config::run_config_path();
        return Ok(());
    }

    let settings = Settings::load()?;
    if let Commands::Config { .. } = &cli.command {
        return commands::config::run_config_show(&settings);
    }

    let ctx = Context::open(settings, cli.db, cli.json)?;

    match cli.command {
        Commands::Game { action } => match action {
            GameAction::Add {
                title,
                summary,
                desc,
            } => commands::game::run_game_add(&ctx, &title, &summary, &desc),
            GameAction::Show { id, title } => commands::game::run_game_show(&ctx, id, title),
            GameAction::List {
                category,
                publisher,
            } => commands::game::run_game_list(&ctx, category, publisher),
            GameAction::Search { text } => commands::game::run_game_search(&ctx, &text),
            GameAction::Update {
                id,
                title,
                summary,
                desc,
            } => commands::game::run_game_update(&ctx, id, title, summary, desc),
            GameAction::Delete { id } => commands::game::run_game_delete(&ctx, id),
            GameAction::Picture {
                id,
                file,
                mime_type,
            } => commands::game::run_game_picture(&ctx, id, &file, &mime_type),
        },
        Commands::Category { action } => {
            commands::lookup::run_lookup(&ctx, commands::lookup::Kind::Category, action)
        }
        Commands::Publisher { action } => {
            commands::lookup::run_lookup(&ctx, commands::lookup::Kind::Publisher, action)
        }
        Commands::User { action } => match action {
            UserAction::Register { username, password } => {
                commands::user::run_user_register(&ctx, &username, &password)
            }
            UserAction::Login { username, password } => {
                commands::user::run_user_login(&ctx, &username, &password)
            }
            UserAction::Show { id } => commands::user::run_user_show(&ctx, id),
            UserAction::Role { user, role } => commands::user::run_user_role(&ctx, user, role),
            UserAction::Avatar {
                user,
                file,
                mime_type,
            } => commands::user::run_user_avatar(&ctx, user, &file, &mime_type),
        },
        Commands::Review { action } => match action {
            ReviewAction::Add {
                game,
                user,
                rating,
                text,
            } => commands::review::run_review_add(&ctx, game, user, rating, text),
            ReviewAction::List { game, user } => {
                commands::review::run_review_list(&ctx, game, user)
            }
            ReviewAction::Show { id } => commands::review::run_review_show(&ctx, id),
            ReviewAction::Delete { id } => commands::review::run_review_delete(&ctx, id),
        },
        Commands::Comment { action } => match action {
            CommentAction::Add { review, user, text } => {
                commands::review::run_comment_add(&ctx, review, user, &text)
            }
            CommentAction::List { review } => commands::review::run_comment_list(&ctx, review),
            CommentAction::Delete { id } => commands::review::run_comment_delete(&ctx, id),
        },
        Commands::Seed { path } => commands::seed::run_seed(&ctx, &path),
        Commands::Stats => commands::stats::run_stats(&ctx),
        Commands::Config { .. } => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn id_arguments_must_be_plain_positive_integers() {
        assert_eq!(id_arg("12"), Ok(12));
        for bad in ["", "0", "-1", "1.5", "1e3", " 7", "abc"] {
            assert!(id_arg(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn rating_argument_range() {
        assert_eq!(rating_arg("5"), Ok(5));
        assert!(rating_arg("0").is_err());
        assert!(rating_arg("six").is_err());
    }

    #[test]
    fn parses_nested_subcommands() {
        let cli = Cli::try_parse_from([
            "gamerev", "--json", "review", "add", "3", "--user", "2", "--rating", "4", "Great fun",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Review {
                action:
                    ReviewAction::Add {
                        game,
                        user,
                        rating,
                        text,
                    },
            } => {
                assert_eq!((game, user, rating), (3, 2, 4));
                assert_eq!(text, "Great fun");
            }
            _ => panic!("expected review add"),
        }
    }

    #[test]
    fn rejects_malformed_ids_at_parse_time() {
        assert!(Cli::try_parse_from(["gamerev", "game", "delete", "abc"]).is_err());
        assert!(Cli::try_parse_from(["gamerev", "game", "show"]).is_err());
    }
}
