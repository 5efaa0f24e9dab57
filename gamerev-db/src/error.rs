use std::fmt;

use gamerev_catalog::{ValidationError, YamlError};
use thiserror::Error;

/// The record types managed by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Game,
    Category,
    Publisher,
    Review,
    Comment,
    User,
    Role,
}

impl Entity {
    /// Backing table name. Only ever a compile-time constant.
    pub(crate) fn table(self) -> &'static str {
        match self {
            Entity::Game => "game",
            Entity::Category => "category",
            Entity::Publisher => "publisher",
            Entity::Review => "review",
            Entity::Comment => "comment",
            Entity::User => "user",
            Entity::Role => "role",
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Entity::Game => "Game",
            Entity::Category => "Category",
            Entity::Publisher => "Publisher",
            Entity::Review => "Review",
            Entity::Comment => "Comment",
            Entity::User => "User",
            Entity::Role => "Role",
        };
        f.write_str(name)
    }
}

/// Broad failure classes callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed or missing input. Nothing was read or written.
    Validation,
    /// A referenced record does not exist.
    NotFound,
    /// A unique name, title or username is already taken.
    Duplicate,
    /// Credentials did not match.
    Auth,
    /// The database, file system or hashing backend failed.
    Storage,
}

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{entity} not found: {key}")]
    NotFound { entity: Entity, key: String },

    #[error("{entity} \"{key}\" already exists")]
    Duplicate { entity: Entity, key: String },

    #[error("invalid password for account \"{username}\"")]
    Auth { username: String },

    /// A game update was refused; the cause is either invalid fields or a
    /// missing game.
    #[error("Could not update field(s)")]
    UpdateRejected(#[source] Box<OperationError>),

    #[error("Password hashing error: {0}")]
    Hash(String),

    #[error("File storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Seed error: {0}")]
    Seed(#[from] YamlError),
}

impl OperationError {
    pub(crate) fn not_found(entity: Entity, key: impl ToString) -> Self {
        Self::NotFound {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn duplicate(entity: Entity, key: impl ToString) -> Self {
        Self::Duplicate {
            entity,
            key: key.to_string(),
        }
    }

    pub(crate) fn hash(msg: impl ToString) -> Self {
        Self::Hash(msg.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::NotFound { .. } | Self::UpdateRejected(_) => ErrorKind::NotFound,
            Self::Duplicate { .. } => ErrorKind::Duplicate,
            Self::Auth { .. } => ErrorKind::Auth,
            Self::Sqlite(_) | Self::Hash(_) | Self::Io(_) | Self::Seed(_) => ErrorKind::Storage,
        }
    }
}
