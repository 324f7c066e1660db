use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgConnection};
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // SHA-256 digest, not exposed in JSON
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub last_login: Option<OffsetDateTime>,
}

impl User {
    /// Find a user by email.
    pub async fn find_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, created_at, last_login
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    /// Find a user whose email and password digest both match.
    pub async fn find_by_credentials(
        conn: &mut PgConnection,
        email: &str,
        password_hash: &str,
    ) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, username, password_hash, created_at, last_login
            FROM users
            WHERE email = $1 AND password_hash = $2
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    /// Create a new user with hashed password.
    pub async fn create(
        conn: &mut PgConnection,
        email: &str,
        password_hash: &str,
        username: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, password_hash, username)
            VALUES ($1, $2, $3)
            RETURNING id, email, username, password_hash, created_at, last_login
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .bind(username)
        .fetch_one(&mut *conn)
        .await?;
        Ok(user)
    }

    /// Stamp last_login after a successful credential check.
    pub async fn touch_last_login(conn: &mut PgConnection, id: i64) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET last_login = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
