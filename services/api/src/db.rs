//! Data Access Layer
//!
//! This module contains all the functions for interacting with the PostgreSQL database.
//! Queries are checked at runtime and mapped onto `FromRow` models.

use anyhow::Result;
use sqlx::PgPool;

use crate::models::{LeaderboardEntry, User};

/// A wrapper around the `PgPool` to provide a clear data access interface.
#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    /// Creates a new `Db` instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs all pending `sqlx` migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Registers a new user. Returns `None` if the email is already taken.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email)
            VALUES ($1, $2)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, name, email, total_points, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, total_points, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Adds `points` to a user's total. Returns `false` if no such user exists.
    pub async fn award_points(&self, user_id: i64, points: i64) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET total_points = total_points + $1 WHERE id = $2")
            .bind(points)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All users ranked by points, highest first.
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>> {
        let entries = sqlx::query_as::<_, LeaderboardEntry>(
            r#"
            SELECT name, total_points
            FROM users
            ORDER BY total_points DESC, name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}
