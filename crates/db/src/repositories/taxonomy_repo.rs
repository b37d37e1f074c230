//! Repositories for the taxonomy tables: tags, categories, and techniques.
//!
//! All three share the same shape (slugged row plus per-locale names), so
//! the SQL is built once from table/fk names and each repo delegates with
//! its own constants.

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::taxonomy::{CreateTaxonomyItem, TaxonomyAdminRow, UpsertNameTranslation};

/// Per-kind table names feeding the shared SQL.
struct Tables {
    /// Canonical table, e.g. `tags`.
    entity: &'static str,
    /// Translation table, e.g. `tag_translations`.
    translation: &'static str,
    /// Foreign key column in the translation table, e.g. `tag_id`.
    fk: &'static str,
}

const TAGS: Tables = Tables {
    entity: "tags",
    translation: "tag_translations",
    fk: "tag_id",
};

const CATEGORIES: Tables = Tables {
    entity: "categories",
    translation: "category_translations",
    fk: "category_id",
};

const TECHNIQUES: Tables = Tables {
    entity: "techniques",
    translation: "technique_translations",
    fk: "technique_id",
};

// ---------------------------------------------------------------------------
// Shared SQL
// ---------------------------------------------------------------------------

/// Admin row select with every translation aggregated, pk-ordered.
fn admin_columns(t: &Tables) -> String {
    format!(
        "x.id, x.slug, x.created_at, x.updated_at, \
         COALESCE((SELECT json_agg(json_build_object('locale', tr.locale, 'name', tr.name) \
                ORDER BY tr.id) \
            FROM {translation} tr WHERE tr.{fk} = x.id), '[]'::json) AS translations",
        translation = t.translation,
        fk = t.fk,
    )
}

async fn list(t: &Tables, pool: &PgPool) -> Result<Vec<TaxonomyAdminRow>, sqlx::Error> {
    let query = format!(
        "SELECT {columns} FROM {entity} x ORDER BY x.slug ASC, x.id ASC",
        columns = admin_columns(t),
        entity = t.entity,
    );
    sqlx::query_as::<_, TaxonomyAdminRow>(&query)
        .fetch_all(pool)
        .await
}

async fn find_by_id(
    t: &Tables,
    pool: &PgPool,
    id: DbId,
) -> Result<Option<TaxonomyAdminRow>, sqlx::Error> {
    let query = format!(
        "SELECT {columns} FROM {entity} x WHERE x.id = $1",
        columns = admin_columns(t),
        entity = t.entity,
    );
    sqlx::query_as::<_, TaxonomyAdminRow>(&query)
        .bind(id)
        .fetch_optional(pool)
        .await
}

async fn create(
    t: &Tables,
    pool: &PgPool,
    input: &CreateTaxonomyItem,
) -> Result<TaxonomyAdminRow, sqlx::Error> {
    let query = format!(
        "INSERT INTO {entity} (slug) VALUES ($1) \
         RETURNING id, slug, created_at, updated_at, '[]'::json AS translations",
        entity = t.entity,
    );
    sqlx::query_as::<_, TaxonomyAdminRow>(&query)
        .bind(&input.slug)
        .fetch_one(pool)
        .await
}

async fn delete(t: &Tables, pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
    let query = format!("DELETE FROM {entity} WHERE id = $1", entity = t.entity);
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    Ok(result.rows_affected() > 0)
}

async fn upsert_translation(
    t: &Tables,
    pool: &PgPool,
    id: DbId,
    locale: &str,
    input: &UpsertNameTranslation,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "INSERT INTO {translation} ({fk}, locale, name) \
         SELECT x.id, $2, $3 FROM {entity} x WHERE x.id = $1 \
         ON CONFLICT ({fk}, locale) DO UPDATE SET \
            name = EXCLUDED.name, \
            updated_at = NOW()",
        translation = t.translation,
        fk = t.fk,
        entity = t.entity,
    );
    let result = sqlx::query(&query)
        .bind(id)
        .bind(locale)
        .bind(&input.name)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Public repos
// ---------------------------------------------------------------------------

/// Read and CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// List all tags with their translations, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaxonomyAdminRow>, sqlx::Error> {
        list(&TAGS, pool).await
    }

    /// Fetch one tag by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaxonomyAdminRow>, sqlx::Error> {
        find_by_id(&TAGS, pool, id).await
    }

    /// Insert a new tag, returning it with an empty translation set.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaxonomyItem,
    ) -> Result<TaxonomyAdminRow, sqlx::Error> {
        create(&TAGS, pool, input).await
    }

    /// Permanently delete a tag. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete(&TAGS, pool, id).await
    }

    /// Upsert the name for `(tag, locale)`. Returns `false` if the tag does
    /// not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
        input: &UpsertNameTranslation,
    ) -> Result<bool, sqlx::Error> {
        upsert_translation(&TAGS, pool, id, locale.as_str(), input).await
    }
}

/// Read and CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories with their translations, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaxonomyAdminRow>, sqlx::Error> {
        list(&CATEGORIES, pool).await
    }

    /// Fetch one category by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaxonomyAdminRow>, sqlx::Error> {
        find_by_id(&CATEGORIES, pool, id).await
    }

    /// Insert a new category, returning it with an empty translation set.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaxonomyItem,
    ) -> Result<TaxonomyAdminRow, sqlx::Error> {
        create(&CATEGORIES, pool, input).await
    }

    /// Permanently delete a category. Posts that referenced it keep a null
    /// category via the FK's `ON DELETE SET NULL`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete(&CATEGORIES, pool, id).await
    }

    /// Upsert the name for `(category, locale)`. Returns `false` if the
    /// category does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
        input: &UpsertNameTranslation,
    ) -> Result<bool, sqlx::Error> {
        upsert_translation(&CATEGORIES, pool, id, locale.as_str(), input).await
    }
}

/// Read and CRUD operations for techniques.
pub struct TechniqueRepo;

impl TechniqueRepo {
    /// List all techniques with their translations, ordered by slug.
    pub async fn list(pool: &PgPool) -> Result<Vec<TaxonomyAdminRow>, sqlx::Error> {
        list(&TECHNIQUES, pool).await
    }

    /// Fetch one technique by id.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<TaxonomyAdminRow>, sqlx::Error> {
        find_by_id(&TECHNIQUES, pool, id).await
    }

    /// Insert a new technique, returning it with an empty translation set.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTaxonomyItem,
    ) -> Result<TaxonomyAdminRow, sqlx::Error> {
        create(&TECHNIQUES, pool, input).await
    }

    /// Permanently delete a technique. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        delete(&TECHNIQUES, pool, id).await
    }

    /// Upsert the name for `(technique, locale)`. Returns `false` if the
    /// technique does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
        input: &UpsertNameTranslation,
    ) -> Result<bool, sqlx::Error> {
        upsert_translation(&TECHNIQUES, pool, id, locale.as_str(), input).await
    }
}
