//! Accounts: registration, login, avatars and roles.

use std::path::Path;

use gamerev_catalog::validate::{check_user_fields, require_id, require_non_empty};
use gamerev_catalog::{roles, UserView, ValidationError};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Entity, OperationError};
use crate::files::FileStore;
use crate::password::Hasher;
use crate::queries::ensure_exists;

/// Create an account with the default role. Returns the new user ID.
pub fn register(
    conn: &Connection,
    hasher: &Hasher,
    username: &str,
    password: &str,
) -> Result<i64, OperationError> {
    check_user_fields(Some(username), Some(password))?;

    if find_user_id(conn, username)?.is_some() {
        return Err(OperationError::duplicate(Entity::User, username));
    }

    let stored = hasher.hash(password)?;
    conn.execute(
        "INSERT INTO user (username, pass, roleID) VALUES (?1, ?2, ?3)",
        params![username, stored, roles::USER],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Registered user {id}: {username}");
    Ok(id)
}

/// Check credentials. Returns the user ID on success.
pub fn login(
    conn: &Connection,
    hasher: &Hasher,
    username: &str,
    password: &str,
) -> Result<i64, OperationError> {
    require_non_empty(username, "user")?;
    require_non_empty(password, "pass")?;

    let (id, stored): (i64, String) = conn
        .query_row(
            "SELECT ID, pass FROM user WHERE username = ?1",
            params![username],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()?
        .ok_or_else(|| OperationError::not_found(Entity::User, format!("\"{username}\"")))?;

    if hasher.verify(password, &stored)? {
        Ok(id)
    } else {
        Err(OperationError::Auth {
            username: username.to_string(),
        })
    }
}

/// Copy a profile picture into the store as `users/<id>/profile.<ext>`
/// and make it the user's avatar. Returns the stored relative path.
pub fn upload_picture(
    conn: &Connection,
    store: &dyn FileStore,
    source: &Path,
    mime_type: &str,
    user_id: i64,
) -> Result<String, OperationError> {
    require_id(user_id, "userID")?;
    if source.as_os_str().is_empty() {
        return Err(ValidationError::Missing("path").into());
    }
    require_non_empty(mime_type, "type")?;
    ensure_exists(conn, Entity::User, user_id)?;

    let stored = store.store(source, mime_type, "users", user_id, "profile")?;
    conn.execute(
        "UPDATE user SET avatar = ?1 WHERE ID = ?2",
        params![stored, user_id],
    )?;
    Ok(stored)
}

/// Assign a role to a user.
pub fn associate_role(conn: &Connection, role_id: i64, user_id: i64) -> Result<(), OperationError> {
    require_id(role_id, "roleID")?;
    require_id(user_id, "userID")?;
    ensure_exists(conn, Entity::Role, role_id)?;
    ensure_exists(conn, Entity::User, user_id)?;

    conn.execute(
        "UPDATE user SET roleID = ?1 WHERE ID = ?2",
        params![role_id, user_id],
    )?;
    log::debug!("User {user_id} now has role {role_id}");
    Ok(())
}

pub fn get_user_by_id(conn: &Connection, id: i64) -> Result<UserView, OperationError> {
    require_id(id, "userID")?;
    conn.query_row(
        "SELECT u.ID, u.username, u.avatar, r.name
         FROM user u LEFT JOIN role r ON r.ID = u.roleID
         WHERE u.ID = ?1",
        params![id],
        |row| {
            Ok(UserView {
                id: row.get(0)?,
                username: row.get(1)?,
                avatar: row.get(2)?,
                role: row.get(3)?,
            })
        },
    )
    .optional()?
    .ok_or_else(|| OperationError::not_found(Entity::User, id))
}

/// Find a user ID by exact username.
pub fn find_user_id(conn: &Connection, username: &str) -> Result<Option<i64>, OperationError> {
    Ok(conn
        .query_row(
            "SELECT ID FROM user WHERE username = ?1",
            params![username],
            |row| row.get(0),
        )
        .optional()?)
}
