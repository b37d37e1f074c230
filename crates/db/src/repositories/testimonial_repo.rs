//! Repository for the `testimonials` table.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::testimonial::{
    CreateTestimonial, Testimonial, TestimonialGraph, UpdateTestimonial,
    UpsertTestimonialTranslation,
};

/// Canonical column list for plain `testimonials` rows.
const COLUMNS: &str = "id, avatar_url, is_active, created_at, updated_at";

/// Graph column list with locale-filtered, pk-ordered translation aggregate.
const GRAPH_COLUMNS: &str = "\
    m.id, m.avatar_url, m.is_active, m.created_at, m.updated_at, \
    COALESCE((SELECT json_agg(json_build_object(\
            'locale', mt.locale, 'author_name', mt.author_name, \
            'role', mt.role, 'quote', mt.quote) ORDER BY mt.id) \
        FROM testimonial_translations mt \
        WHERE mt.testimonial_id = m.id AND mt.locale = $1), '[]'::json) AS translations";

/// Provides read and CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List active testimonials, newest first.
    pub async fn list_active(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<TestimonialGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM testimonials m \
             WHERE m.is_active \
             ORDER BY m.created_at DESC, m.id DESC"
        );
        sqlx::query_as::<_, TestimonialGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all testimonials for the admin table.
    pub async fn list_all(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<TestimonialGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM testimonials m ORDER BY m.created_at DESC, m.id DESC"
        );
        sqlx::query_as::<_, TestimonialGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one testimonial graph by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<TestimonialGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM testimonials m WHERE m.id = $2");
        sqlx::query_as::<_, TestimonialGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (avatar_url) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.avatar_url)
            .fetch_one(pool)
            .await
    }

    /// Update a testimonial. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                avatar_url = COALESCE($2, avatar_url), \
                is_active = COALESCE($3, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.avatar_url)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a testimonial. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the translation for `(testimonial, locale)`. Returns `false`
    /// if the testimonial does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        testimonial_id: DbId,
        locale: Locale,
        input: &UpsertTestimonialTranslation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO testimonial_translations \
                (testimonial_id, locale, author_name, role, quote) \
             SELECT m.id, $2, $3, $4, $5 FROM testimonials m WHERE m.id = $1 \
             ON CONFLICT (testimonial_id, locale) DO UPDATE SET \
                author_name = EXCLUDED.author_name, \
                role = EXCLUDED.role, \
                quote = EXCLUDED.quote, \
                updated_at = NOW()",
        )
        .bind(testimonial_id)
        .bind(locale.as_str())
        .bind(&input.author_name)
        .bind(&input.role)
        .bind(&input.quote)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
