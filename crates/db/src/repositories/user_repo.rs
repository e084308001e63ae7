//! Repository for the `users` table.

use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

const COLUMNS: &str = "id, username, password_hash, display_name, role, created_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    pub async fn create(pool: &PgPool, dto: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (username, password_hash, display_name, role) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&dto.username)
            .bind(&dto.password_hash)
            .bind(&dto.display_name)
            .bind(&dto.role)
            .fetch_one(pool)
            .await
    }
}
