//! Blog post models, DTOs, and the post projector.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation, Translated};
use atelier_core::types::{DbId, Timestamp};

use crate::models::taxonomy::{CategoryNode, CategoryView, TagNode, TagView};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `posts` table: the canonical, locale-independent core.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub slug: String,
    pub cover_image_url: Option<String>,
    pub category_id: Option<DbId>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A locale-variant row from `post_translations`, as aggregated into graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTranslation {
    pub locale: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl Translated for PostTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// A full `post_translations` row, returned by the admin upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PostTranslationRow {
    pub id: DbId,
    pub post_id: DbId,
    pub locale: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A post with translations, category, tags, and aggregate counts attached,
/// fetched in a single query.
#[derive(Debug, Clone, FromRow)]
pub struct PostGraph {
    pub id: DbId,
    pub slug: String,
    pub cover_image_url: Option<String>,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<PostTranslation>>,
    pub category: Option<Json<CategoryNode>>,
    pub tags: Json<Vec<TagNode>>,
    pub likes_count: i64,
    pub comments_count: i64,
}

/// A row from `post_comments`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_name: String,
    pub body: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// The flat, locale-resolved read model for a post.
///
/// Constructed fresh per request, never persisted. Every localized field
/// carries either the selected translation or its documented fallback, so
/// consumers never see a missing value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub cover_image_url: Option<String>,
    pub category: Option<CategoryView>,
    pub tags: Vec<TagView>,
    pub likes: i64,
    pub comments: i64,
    pub is_published: bool,
    pub published_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl PostGraph {
    /// Project into the read model for `locale`.
    ///
    /// Pure: same `(graph, locale)` always yields the same view. The view's
    /// `locale` is the requested one regardless of which translations exist.
    /// Fallbacks: title → "Untitled", excerpt/content → empty, category →
    /// "Uncategorized", tag names → "Unnamed Tag".
    pub fn project(&self, locale: Locale) -> PostView {
        let tr = select_translation(&self.translations, locale);
        PostView {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: localized(tr, |t| t.title.as_str(), fallback::UNTITLED_POST),
            excerpt: localized(tr, |t| t.excerpt.as_str(), fallback::EMPTY),
            content: localized(tr, |t| t.content.as_str(), fallback::EMPTY),
            cover_image_url: self.cover_image_url.clone(),
            category: self.category.as_ref().map(|c| c.to_view(locale)),
            tags: TagNode::flatten(&self.tags, locale),
            likes: self.likes_count,
            comments: self.comments_count,
            is_published: self.is_published,
            published_at: self.published_at,
            created_at: self.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a post. Translations are attached separately.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePost {
    #[validate(length(min = 1, max = 160))]
    pub slug: String,
    #[validate(url)]
    pub cover_image_url: Option<String>,
    pub category_id: Option<DbId>,
}

/// DTO for updating a post's canonical fields. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePost {
    #[validate(length(min = 1, max = 160))]
    pub slug: Option<String>,
    #[validate(url)]
    pub cover_image_url: Option<String>,
    pub category_id: Option<DbId>,
}

/// DTO for upserting one post translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertPostTranslation {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
}

/// DTO for replacing a post's tag set.
#[derive(Debug, Clone, Deserialize)]
pub struct SetPostTags {
    pub tag_ids: Vec<DbId>,
}

/// DTO for submitting a comment (public; lands unapproved).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, max = 120))]
    pub author_name: String,
    #[validate(length(min = 1, max = 4000))]
    pub body: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::taxonomy::NameTranslation;
    use chrono::{TimeZone, Utc};

    fn graph() -> PostGraph {
        PostGraph {
            id: 1,
            slug: "hello-world".to_string(),
            cover_image_url: Some("https://cdn.example.com/hello.webp".to_string()),
            is_published: true,
            published_at: Some(Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2025, 5, 30, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
            translations: Json(vec![PostTranslation {
                locale: "en".to_string(),
                title: "Hello World".to_string(),
                excerpt: "First post".to_string(),
                content: "Welcome.".to_string(),
            }]),
            category: Some(Json(CategoryNode {
                id: 3,
                slug: "general".to_string(),
                translations: vec![NameTranslation {
                    locale: "en".to_string(),
                    name: "General".to_string(),
                }],
            })),
            tags: Json(vec![
                TagNode {
                    id: 10,
                    slug: "intro".to_string(),
                    translations: vec![NameTranslation {
                        locale: "en".to_string(),
                        name: "Intro".to_string(),
                    }],
                },
                TagNode {
                    id: 11,
                    slug: "meta".to_string(),
                    translations: vec![],
                },
            ]),
            likes_count: 4,
            comments_count: 2,
        }
    }

    #[test]
    fn projects_requested_locale_with_translation() {
        let view = graph().project(Locale::En);
        assert_eq!(view.locale, Locale::En);
        assert_eq!(view.title, "Hello World");
        assert_eq!(view.excerpt, "First post");
        assert_eq!(view.category.as_ref().unwrap().name, "General");
        assert_eq!(view.likes, 4);
        assert_eq!(view.comments, 2);
    }

    #[test]
    fn missing_translation_falls_back_but_keeps_requested_locale() {
        let view = graph().project(Locale::Ar);
        assert_eq!(view.locale, Locale::Ar);
        assert_eq!(view.title, fallback::UNTITLED_POST);
        assert_eq!(view.excerpt, "");
        assert_eq!(view.content, "");
        // Category exists but has no Arabic name.
        assert_eq!(view.category.as_ref().unwrap().name, fallback::UNCATEGORIZED);
    }

    #[test]
    fn tag_cardinality_is_preserved_with_fallback_labels() {
        let view = graph().project(Locale::En);
        assert_eq!(view.tags.len(), 2);
        assert_eq!(view.tags[0].name, "Intro");
        assert_eq!(view.tags[1].name, fallback::UNNAMED_TAG);
    }

    #[test]
    fn entity_with_no_translations_uses_fallbacks_for_every_locale() {
        let mut g = graph();
        g.translations = Json(vec![]);
        for &locale in Locale::SUPPORTED {
            let view = g.project(locale);
            assert_eq!(view.locale, locale);
            assert_eq!(view.title, fallback::UNTITLED_POST);
            assert_eq!(view.excerpt, "");
            assert_eq!(view.content, "");
        }
    }

    #[test]
    fn distinct_translations_differ_across_locales() {
        let mut g = graph();
        g.translations.push(PostTranslation {
            locale: "ar".to_string(),
            title: "مرحبا بالعالم".to_string(),
            excerpt: String::new(),
            content: String::new(),
        });
        let en = g.project(Locale::En);
        let ar = g.project(Locale::Ar);
        assert_eq!(en.locale, Locale::En);
        assert_eq!(ar.locale, Locale::Ar);
        assert_ne!(en.title, ar.title);
    }

    #[test]
    fn projection_is_idempotent() {
        let g = graph();
        assert_eq!(g.project(Locale::En), g.project(Locale::En));
        assert_eq!(g.project(Locale::Ar), g.project(Locale::Ar));
    }

    #[test]
    fn post_without_category_projects_none() {
        let mut g = graph();
        g.category = None;
        assert!(g.project(Locale::En).category.is_none());
    }

    #[test]
    fn duplicate_translation_rows_first_wins() {
        let mut g = graph();
        g.translations.push(PostTranslation {
            locale: "en".to_string(),
            title: "Shadowed".to_string(),
            excerpt: String::new(),
            content: String::new(),
        });
        assert_eq!(g.project(Locale::En).title, "Hello World");
    }
}
