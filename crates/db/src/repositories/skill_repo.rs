//! Repository for the `skills` table.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::skill::{CreateSkill, Skill, SkillGraph, UpdateSkill};
use crate::models::taxonomy::UpsertNameTranslation;

/// Canonical column list for plain `skills` rows.
const COLUMNS: &str = "id, icon_url, level, sort_order, is_active, created_at, updated_at";

/// Graph column list with locale-filtered, pk-ordered translation aggregate.
const GRAPH_COLUMNS: &str = "\
    s.id, s.icon_url, s.level, s.sort_order, s.is_active, s.created_at, s.updated_at, \
    COALESCE((SELECT json_agg(json_build_object('locale', st.locale, 'name', st.name) \
            ORDER BY st.id) \
        FROM skill_translations st \
        WHERE st.skill_id = s.id AND st.locale = $1), '[]'::json) AS translations";

/// Provides read and CRUD operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List active skills, newest first (`created_at DESC`, ties by `id DESC`).
    pub async fn list_active(pool: &PgPool, locale: Locale) -> Result<Vec<SkillGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM skills s \
             WHERE s.is_active \
             ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, SkillGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all skills for the admin table.
    pub async fn list_all(pool: &PgPool, locale: Locale) -> Result<Vec<SkillGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM skills s ORDER BY s.created_at DESC, s.id DESC"
        );
        sqlx::query_as::<_, SkillGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one skill graph by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<SkillGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM skills s WHERE s.id = $2");
        sqlx::query_as::<_, SkillGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new skill, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSkill) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (icon_url, level, sort_order) \
             VALUES ($1, $2, COALESCE($3, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&input.icon_url)
            .bind(input.level)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a skill. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET \
                icon_url = COALESCE($2, icon_url), \
                level = COALESCE($3, level), \
                sort_order = COALESCE($4, sort_order), \
                is_active = COALESCE($5, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.icon_url)
            .bind(input.level)
            .bind(input.sort_order)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a skill. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Upsert the name translation for `(skill, locale)`. Returns `false`
    /// if the skill does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        skill_id: DbId,
        locale: Locale,
        input: &UpsertNameTranslation,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO skill_translations (skill_id, locale, name) \
             SELECT s.id, $2, $3 FROM skills s WHERE s.id = $1 \
             ON CONFLICT (skill_id, locale) DO UPDATE SET \
                name = EXCLUDED.name, \
                updated_at = NOW()",
        )
        .bind(skill_id)
        .bind(locale.as_str())
        .bind(&input.name)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
