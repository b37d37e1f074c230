//! Repository for the `post_comments` table.

use sqlx::PgPool;

use atelier_core::types::DbId;

use crate::models::post::{Comment, CreateComment};

/// Canonical column list for `post_comments` rows.
const COLUMNS: &str = "id, post_id, author_name, body, is_approved, created_at";

/// Provides read and moderation operations for post comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a visitor comment. New comments land unapproved and stay out
    /// of public counts until a moderator approves them.
    ///
    /// Returns `None` if the post does not exist (the guarded insert writes
    /// nothing rather than violating the foreign key).
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        input: &CreateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "INSERT INTO post_comments (post_id, author_name, body) \
             SELECT p.id, $2, $3 FROM posts p WHERE p.id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .bind(&input.author_name)
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// List approved comments for a post, oldest first so threads read in
    /// submission order.
    pub async fn list_approved(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM post_comments \
             WHERE post_id = $1 AND is_approved \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// List every comment for a post, pending ones included (admin).
    pub async fn list_all(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM post_comments \
             WHERE post_id = $1 \
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Approve a pending comment. Returns the updated row, or `None` if no
    /// comment with the given id exists.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE post_comments SET is_approved = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM post_comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
