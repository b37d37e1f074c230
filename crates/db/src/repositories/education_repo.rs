//! Repository for the `educations` table.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::education::{
    CreateEducation, Education, EducationGraph, UpdateEducation, UpsertEducationTranslation,
};

/// Canonical column list for plain `educations` rows.
const COLUMNS: &str = "id, started_on, ended_on, is_active, created_at, updated_at";

/// Graph column list with locale-filtered, pk-ordered translation aggregate.
const GRAPH_COLUMNS: &str = "\
    d.id, d.started_on, d.ended_on, d.is_active, d.created_at, d.updated_at, \
    COALESCE((SELECT json_agg(json_build_object(\
            'locale', dt.locale, 'institution', dt.institution, \
            'degree', dt.degree, 'description', dt.description) ORDER BY dt.id) \
        FROM education_translations dt \
        WHERE dt.education_id = d.id AND dt.locale = $1), '[]'::json) AS translations";

/// Provides read and CRUD operations for education entries.
pub struct EducationRepo;

impl EducationRepo {
    /// List active education entries, newest first.
    pub async fn list_active(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<EducationGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM educations d \
             WHERE d.is_active \
             ORDER BY d.created_at DESC, d.id DESC"
        );
        sqlx::query_as::<_, EducationGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all education entries for the admin table.
    pub async fn list_all(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<EducationGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM educations d ORDER BY d.created_at DESC, d.id DESC"
        );
        sqlx::query_as::<_, EducationGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one education graph by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<EducationGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM educations d WHERE d.id = $2");
        sqlx::query_as::<_, EducationGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new education entry, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateEducation) -> Result<Education, sqlx::Error> {
        let query = format!(
            "INSERT INTO educations (started_on, ended_on) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(input.started_on)
            .bind(input.ended_on)
            .fetch_one(pool)
            .await
    }

    /// Update an education entry. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEducation,
    ) -> Result<Option<Education>, sqlx::Error> {
        let query = format!(
            "UPDATE educations SET \
                started_on = COALESCE($2, started_on), \
                ended_on = COALESCE($3, ended_on), \
                is_active = COALESCE($4, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Education>(&query)
            .bind(id)
            .bind(input.started_on)
            .bind(input.ended_on)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an education entry. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM educations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the translation for `(education, locale)`. Returns `false`
    /// if the education entry does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        education_id: DbId,
        locale: Locale,
        input: &UpsertEducationTranslation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO education_translations \
                (education_id, locale, institution, degree, description) \
             SELECT d.id, $2, $3, $4, $5 FROM educations d WHERE d.id = $1 \
             ON CONFLICT (education_id, locale) DO UPDATE SET \
                institution = EXCLUDED.institution, \
                degree = EXCLUDED.degree, \
                description = EXCLUDED.description, \
                updated_at = NOW()",
        )
        .bind(education_id)
        .bind(locale.as_str())
        .bind(&input.institution)
        .bind(&input.degree)
        .bind(&input.description)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
