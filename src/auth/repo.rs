use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

/// A `users` row. The `password` column holds the argon2 hash and is never
/// serialized out.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub contact_num: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Find a user by exact email match.
    pub async fn find_by_email(db: &PgPool, email: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, contact_num, password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user with an already-hashed password. Email uniqueness
    /// is enforced by the store.
    pub async fn create(
        db: &PgPool,
        email: &str,
        name: &str,
        contact_num: &str,
        password_hash: &str,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, name, contact_num, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, email, name, contact_num, password
            "#,
        )
        .bind(email)
        .bind(name)
        .bind(contact_num)
        .bind(password_hash)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
