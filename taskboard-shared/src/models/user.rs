/// User model and database operations
///
/// Users are login accounts, distinct from [`crate::models::employee`]
/// records: an employee is someone tasks are assigned to, a user is someone
/// who can sign in. Passwords are stored as Argon2id hashes, never in
/// plaintext.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE user_role AS ENUM ('user', 'admin');
///
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     username VARCHAR(255) NOT NULL UNIQUE,
///     password_hash VARCHAR(255) NOT NULL,
///     role user_role NOT NULL DEFAULT 'user',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Role of a login account
///
/// A closed two-variant type: every role check is an exhaustive match, so
/// there is no string-comparison typo class of bug. Admins alone may delete
/// employees and tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
pub enum Role {
    /// Regular user: may view and create/update, never delete
    User,

    /// Admin: additionally deletes employees and tasks
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// User model representing a login account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Login name, unique across all users
    pub username: String,

    /// Argon2id password hash
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Role granted at registration
    pub role: Role,

    /// When the account was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone)]
pub struct CreateUser {
    /// Login name (must be unique)
    pub username: String,

    /// Argon2id password hash (NOT the plaintext password)
    pub password_hash: String,

    /// Role for the new account
    pub role: Role,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if the username already exists (unique constraint
    /// violation) or the database is unreachable.
    pub async fn create(pool: &PgPool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role, created_at
            "#,
        )
        .bind(data.username)
        .bind(data.password_hash)
        .bind(data.role)
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by login name
    ///
    /// # Returns
    ///
    /// The user if found, None otherwise
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }
}
