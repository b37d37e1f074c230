//! Repository for the `experiences` table.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::experience::{
    CreateExperience, Experience, ExperienceGraph, UpdateExperience, UpsertExperienceTranslation,
};

/// Canonical column list for plain `experiences` rows.
const COLUMNS: &str = "\
    id, company_url, started_on, ended_on, is_current, is_active, created_at, updated_at";

/// Graph column list with locale-filtered, pk-ordered translation aggregate.
const GRAPH_COLUMNS: &str = "\
    e.id, e.company_url, e.started_on, e.ended_on, e.is_current, e.is_active, \
    e.created_at, e.updated_at, \
    COALESCE((SELECT json_agg(json_build_object(\
            'locale', et.locale, 'title', et.title, \
            'company', et.company, 'description', et.description) ORDER BY et.id) \
        FROM experience_translations et \
        WHERE et.experience_id = e.id AND et.locale = $1), '[]'::json) AS translations";

/// Provides read and CRUD operations for work experience entries.
pub struct ExperienceRepo;

impl ExperienceRepo {
    /// List active experience entries, newest first.
    pub async fn list_active(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<ExperienceGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM experiences e \
             WHERE e.is_active \
             ORDER BY e.created_at DESC, e.id DESC"
        );
        sqlx::query_as::<_, ExperienceGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all experience entries for the admin table.
    pub async fn list_all(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<ExperienceGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM experiences e ORDER BY e.created_at DESC, e.id DESC"
        );
        sqlx::query_as::<_, ExperienceGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one experience graph by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<ExperienceGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM experiences e WHERE e.id = $2");
        sqlx::query_as::<_, ExperienceGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new experience entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateExperience,
    ) -> Result<Experience, sqlx::Error> {
        let query = format!(
            "INSERT INTO experiences (company_url, started_on, ended_on, is_current) \
             VALUES ($1, $2, $3, COALESCE($4, FALSE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(&input.company_url)
            .bind(input.started_on)
            .bind(input.ended_on)
            .bind(input.is_current)
            .fetch_one(pool)
            .await
    }

    /// Update an experience entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateExperience,
    ) -> Result<Option<Experience>, sqlx::Error> {
        let query = format!(
            "UPDATE experiences SET \
                company_url = COALESCE($2, company_url), \
                started_on = COALESCE($3, started_on), \
                ended_on = COALESCE($4, ended_on), \
                is_current = COALESCE($5, is_current), \
                is_active = COALESCE($6, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Experience>(&query)
            .bind(id)
            .bind(&input.company_url)
            .bind(input.started_on)
            .bind(input.ended_on)
            .bind(input.is_current)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an experience entry. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the translation for `(experience, locale)`. Returns `false`
    /// if the experience does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        experience_id: DbId,
        locale: Locale,
        input: &UpsertExperienceTranslation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO experience_translations \
                (experience_id, locale, title, company, description) \
             SELECT e.id, $2, $3, $4, $5 FROM experiences e WHERE e.id = $1 \
             ON CONFLICT (experience_id, locale) DO UPDATE SET \
                title = EXCLUDED.title, \
                company = EXCLUDED.company, \
                description = EXCLUDED.description, \
                updated_at = NOW()",
        )
        .bind(experience_id)
        .bind(locale.as_str())
        .bind(&input.title)
        .bind(&input.company)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
