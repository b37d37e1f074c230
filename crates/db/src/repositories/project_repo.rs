//! Repository for the `projects` table and its satellite tables.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::project::{
    CreateProject, Project, ProjectGraph, ProjectTranslationRow, UpdateProject,
    UpsertProjectTranslation,
};

/// Canonical column list for plain `projects` rows.
const COLUMNS: &str = "\
    id, slug, image_url, repo_url, live_url, is_active, is_featured, created_at, updated_at";

/// Graph column list: canonical fields plus JSON-aggregated translations and
/// techniques, resolved in one round trip. `$1` is the requested locale.
const GRAPH_COLUMNS: &str = "\
    p.id, p.slug, p.image_url, p.repo_url, p.live_url, p.is_active, p.is_featured, \
    p.created_at, p.updated_at, \
    COALESCE((SELECT json_agg(json_build_object(\
            'locale', pt.locale, 'title', pt.title, 'description', pt.description) \
            ORDER BY pt.id) \
        FROM project_translations pt \
        WHERE pt.project_id = p.id AND pt.locale = $1), '[]'::json) AS translations, \
    COALESCE((SELECT json_agg(json_build_object('id', t.id, 'slug', t.slug, 'translations', \
            COALESCE((SELECT json_agg(json_build_object(\
                    'locale', tt.locale, 'name', tt.name) ORDER BY tt.id) \
                FROM technique_translations tt \
                WHERE tt.technique_id = t.id AND tt.locale = $1), '[]'::json)) ORDER BY t.id) \
        FROM project_techniques px JOIN techniques t ON t.id = px.technique_id \
        WHERE px.project_id = p.id), '[]'::json) AS techniques";

/// Provides read and CRUD operations for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    // -----------------------------------------------------------------------
    // Graph reads (projection inputs)
    // -----------------------------------------------------------------------

    /// List active projects with their graphs, newest first
    /// (`created_at DESC`, ties by `id DESC`).
    pub async fn list_active(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<ProjectGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM projects p \
             WHERE p.is_active \
             ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all projects for the admin table, newest first.
    pub async fn list_all(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<ProjectGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM projects p ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, ProjectGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one active project graph by id.
    pub async fn find_active_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<ProjectGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM projects p WHERE p.id = $2 AND p.is_active"
        );
        sqlx::query_as::<_, ProjectGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one project graph by id regardless of active state (admin).
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<ProjectGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM projects p WHERE p.id = $2");
        sqlx::query_as::<_, ProjectGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Canonical CRUD
    // -----------------------------------------------------------------------

    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (slug, image_url, repo_url, live_url, is_featured) \
             VALUES ($1, $2, $3, $4, COALESCE($5, FALSE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.slug)
            .bind(&input.image_url)
            .bind(&input.repo_url)
            .bind(&input.live_url)
            .bind(input.is_featured)
            .fetch_one(pool)
            .await
    }

    /// Update a project. Only non-`None` fields are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                slug = COALESCE($2, slug), \
                image_url = COALESCE($3, image_url), \
                repo_url = COALESCE($4, repo_url), \
                live_url = COALESCE($5, live_url), \
                is_active = COALESCE($6, is_active), \
                is_featured = COALESCE($7, is_featured), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.image_url)
            .bind(&input.repo_url)
            .bind(&input.live_url)
            .bind(input.is_active)
            .bind(input.is_featured)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Translations and techniques
    // -----------------------------------------------------------------------

    /// Upsert the translation for `(project, locale)`. Returns `None` if the
    /// project does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        project_id: DbId,
        locale: Locale,
        input: &UpsertProjectTranslation,
    ) -> Result<Option<ProjectTranslationRow>, sqlx::Error> {
        sqlx::query_as::<_, ProjectTranslationRow>(
            "INSERT INTO project_translations (project_id, locale, title, description) \
             SELECT p.id, $2, $3, $4 FROM projects p WHERE p.id = $1 \
             ON CONFLICT (project_id, locale) DO UPDATE SET \
                title = EXCLUDED.title, \
                description = EXCLUDED.description, \
                updated_at = NOW() \
             RETURNING id, project_id, locale, title, description, created_at, updated_at",
        )
        .bind(project_id)
        .bind(locale.as_str())
        .bind(&input.title)
        .bind(&input.description)
        .fetch_optional(pool)
        .await
    }

    /// Replace a project's technique set atomically. Returns `false` if the
    /// project does not exist.
    pub async fn set_techniques(
        pool: &PgPool,
        project_id: DbId,
        technique_ids: &[DbId],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1)")
                .bind(project_id)
                .fetch_one(&mut *tx)
                .await?;
        if !exists {
            return Ok(false);
        }

        sqlx::query("DELETE FROM project_techniques WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO project_techniques (project_id, technique_id) \
             SELECT $1, unnest($2::bigint[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(technique_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
