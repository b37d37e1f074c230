//! Repository for the `posts` table and its satellite tables
//! (translations, tags junction, likes).

use sqlx::PgPool;

use atelier_core::locale::Locale;
use atelier_core::types::DbId;

use crate::models::post::{
    CreatePost, Post, PostGraph, PostTranslationRow, UpdatePost, UpsertPostTranslation,
};

/// Canonical column list for plain `posts` rows.
const COLUMNS: &str = "\
    id, slug, cover_image_url, category_id, is_published, published_at, created_at, updated_at";

/// Graph column list: canonical fields plus JSON-aggregated translations,
/// category, tags, and aggregate counts, all resolved in one round trip.
///
/// `$1` is the requested locale. Translation aggregates are pre-filtered by
/// it and ordered by primary key, so the projector's first-in-order
/// tie-break means first by insertion order. Tags keep full cardinality
/// (each tag carries its own locale-filtered translation array, possibly
/// empty) and are ordered by id for stable output. Comment counts only
/// include approved comments.
const GRAPH_COLUMNS: &str = "\
    p.id, p.slug, p.cover_image_url, p.is_published, p.published_at, \
    p.created_at, p.updated_at, \
    COALESCE((SELECT json_agg(json_build_object(\
            'locale', pt.locale, 'title', pt.title, \
            'excerpt', pt.excerpt, 'content', pt.content) ORDER BY pt.id) \
        FROM post_translations pt \
        WHERE pt.post_id = p.id AND pt.locale = $1), '[]'::json) AS translations, \
    (SELECT json_build_object('id', c.id, 'slug', c.slug, 'translations', \
            COALESCE((SELECT json_agg(json_build_object(\
                    'locale', ct.locale, 'name', ct.name) ORDER BY ct.id) \
                FROM category_translations ct \
                WHERE ct.category_id = c.id AND ct.locale = $1), '[]'::json)) \
        FROM categories c WHERE c.id = p.category_id) AS category, \
    COALESCE((SELECT json_agg(json_build_object('id', t.id, 'slug', t.slug, 'translations', \
            COALESCE((SELECT json_agg(json_build_object(\
                    'locale', tt.locale, 'name', tt.name) ORDER BY tt.id) \
                FROM tag_translations tt \
                WHERE tt.tag_id = t.id AND tt.locale = $1), '[]'::json)) ORDER BY t.id) \
        FROM post_tags px JOIN tags t ON t.id = px.tag_id \
        WHERE px.post_id = p.id), '[]'::json) AS tags, \
    (SELECT COUNT(*) FROM post_likes pl WHERE pl.post_id = p.id) AS likes_count, \
    (SELECT COUNT(*) FROM post_comments pc \
        WHERE pc.post_id = p.id AND pc.is_approved) AS comments_count";

/// Provides read and CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    // -----------------------------------------------------------------------
    // Graph reads (projection inputs)
    // -----------------------------------------------------------------------

    /// List published posts with their graphs, newest first
    /// (`published_at DESC`, ties by `id DESC`).
    pub async fn list_published(
        pool: &PgPool,
        locale: Locale,
    ) -> Result<Vec<PostGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM posts p \
             WHERE p.is_published \
             ORDER BY p.published_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// List all posts (drafts included) for the admin table, newest first
    /// by creation time since drafts have no publish time.
    pub async fn list_all(pool: &PgPool, locale: Locale) -> Result<Vec<PostGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM posts p ORDER BY p.created_at DESC, p.id DESC"
        );
        sqlx::query_as::<_, PostGraph>(&query)
            .bind(locale.as_str())
            .fetch_all(pool)
            .await
    }

    /// Fetch one published post graph by id.
    pub async fn find_published_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<PostGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM posts p WHERE p.id = $2 AND p.is_published"
        );
        sqlx::query_as::<_, PostGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one published post graph by slug.
    pub async fn find_published_by_slug(
        pool: &PgPool,
        slug: &str,
        locale: Locale,
    ) -> Result<Option<PostGraph>, sqlx::Error> {
        let query = format!(
            "SELECT {GRAPH_COLUMNS} FROM posts p WHERE p.slug = $2 AND p.is_published"
        );
        sqlx::query_as::<_, PostGraph>(&query)
            .bind(locale.as_str())
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one post graph by id regardless of publish state (admin).
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        locale: Locale,
    ) -> Result<Option<PostGraph>, sqlx::Error> {
        let query = format!("SELECT {GRAPH_COLUMNS} FROM posts p WHERE p.id = $2");
        sqlx::query_as::<_, PostGraph>(&query)
            .bind(locale.as_str())
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Canonical CRUD
    // -----------------------------------------------------------------------

    /// Insert a new post, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (slug, cover_image_url, category_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.slug)
            .bind(&input.cover_image_url)
            .bind(input.category_id)
            .fetch_one(pool)
            .await
    }

    /// Update a post's canonical fields. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET \
                slug = COALESCE($2, slug), \
                cover_image_url = COALESCE($3, cover_image_url), \
                category_id = COALESCE($4, category_id), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.cover_image_url)
            .bind(input.category_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a post. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the publish flag. Publishing stamps `published_at` once; the
    /// original publish time is kept on republish.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        published: bool,
    ) -> Result<Option<Post>, sqlx::Error> {
        let query = format!(
            "UPDATE posts SET \
                is_published = $2, \
                published_at = CASE \
                    WHEN $2 THEN COALESCE(published_at, NOW()) \
                    ELSE published_at END, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .bind(published)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Translations
    // -----------------------------------------------------------------------

    /// Upsert the translation for `(post, locale)`.
    ///
    /// The schema enforces at most one row per pair, so `ON CONFLICT`
    /// replaces the variant fields in place. Returns `None` if the post
    /// itself does not exist.
    pub async fn upsert_translation(
        pool: &PgPool,
        post_id: DbId,
        locale: Locale,
        input: &UpsertPostTranslation,
    ) -> Result<Option<PostTranslationRow>, sqlx::Error> {
        sqlx::query_as::<_, PostTranslationRow>(
            "INSERT INTO post_translations (post_id, locale, title, excerpt, content) \
             SELECT p.id, $2, $3, $4, $5 FROM posts p WHERE p.id = $1 \
             ON CONFLICT (post_id, locale) DO UPDATE SET \
                title = EXCLUDED.title, \
                excerpt = EXCLUDED.excerpt, \
                content = EXCLUDED.content, \
                updated_at = NOW() \
             RETURNING id, post_id, locale, title, excerpt, content, created_at, updated_at",
        )
        .bind(post_id)
        .bind(locale.as_str())
        .bind(&input.title)
        .bind(&input.excerpt)
        .bind(&input.content)
        .fetch_optional(pool)
        .await
    }

    // -----------------------------------------------------------------------
    // Tags
    // -----------------------------------------------------------------------

    /// Replace a post's tag set atomically. Returns `false` if the post
    /// does not exist.
    pub async fn set_tags(
        pool: &PgPool,
        post_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)")
            .bind(post_id)
            .fetch_one(&mut *tx)
            .await?;
        if !exists {
            return Ok(false);
        }

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            "INSERT INTO post_tags (post_id, tag_id) \
             SELECT $1, unnest($2::bigint[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(post_id)
        .bind(tag_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Likes
    // -----------------------------------------------------------------------

    /// Record a like and return the new like count.
    ///
    /// Returns `None` if the post does not exist (the guarded insert writes
    /// nothing rather than violating the foreign key).
    pub async fn like(pool: &PgPool, post_id: DbId) -> Result<Option<i64>, sqlx::Error> {
        let inserted: Option<DbId> = sqlx::query_scalar(
            "INSERT INTO post_likes (post_id) \
             SELECT id FROM posts WHERE id = $1 \
             RETURNING id",
        )
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

        if inserted.is_none() {
            return Ok(None);
        }

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM post_likes WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await?;
        Ok(Some(count))
    }
}
