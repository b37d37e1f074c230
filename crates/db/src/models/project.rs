//! Portfolio project models, DTOs, and the project projector.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation, Translated};
use atelier_core::types::{DbId, Timestamp};

use crate::models::taxonomy::{TechniqueNode, TechniqueView};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub slug: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A locale-variant row from `project_translations`, as aggregated into graphs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectTranslation {
    pub locale: String,
    pub title: String,
    pub description: String,
}

impl Translated for ProjectTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// A full `project_translations` row, returned by the admin upsert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectTranslationRow {
    pub id: DbId,
    pub project_id: DbId,
    pub locale: String,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project with translations and techniques attached, fetched in a single query.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectGraph {
    pub id: DbId,
    pub slug: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<ProjectTranslation>>,
    pub techniques: Json<Vec<TechniqueNode>>,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// The flat, locale-resolved read model for a project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub id: DbId,
    pub slug: String,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub techniques: Vec<TechniqueView>,
    pub is_active: bool,
    pub is_featured: bool,
    pub created_at: Timestamp,
}

impl ProjectGraph {
    /// Project into the read model for `locale`.
    ///
    /// Fallbacks: title → "Untitled Project", description → empty,
    /// technique names → "Unnamed Technique".
    pub fn project(&self, locale: Locale) -> ProjectView {
        let tr = select_translation(&self.translations, locale);
        ProjectView {
            id: self.id,
            slug: self.slug.clone(),
            locale,
            title: localized(tr, |t| t.title.as_str(), fallback::UNTITLED_PROJECT),
            description: localized(tr, |t| t.description.as_str(), fallback::EMPTY),
            image_url: self.image_url.clone(),
            repo_url: self.repo_url.clone(),
            live_url: self.live_url.clone(),
            techniques: TechniqueNode::flatten(&self.techniques, locale),
            is_active: self.is_active,
            is_featured: self.is_featured,
            created_at: self.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = 160))]
    pub slug: String,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(url)]
    pub repo_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    pub is_featured: Option<bool>,
}

/// DTO for updating a project. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 160))]
    pub slug: Option<String>,
    #[validate(url)]
    pub image_url: Option<String>,
    #[validate(url)]
    pub repo_url: Option<String>,
    #[validate(url)]
    pub live_url: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
}

/// DTO for upserting one project translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertProjectTranslation {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// DTO for replacing a project's technique set.
#[derive(Debug, Clone, Deserialize)]
pub struct SetProjectTechniques {
    pub technique_ids: Vec<DbId>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::taxonomy::NameTranslation;
    use chrono::{TimeZone, Utc};

    /// One English translation, one relation item with zero translations.
    fn portfolio_graph() -> ProjectGraph {
        ProjectGraph {
            id: 1,
            slug: "p1".to_string(),
            image_url: None,
            repo_url: Some("https://github.com/example/portfolio".to_string()),
            live_url: None,
            is_active: true,
            is_featured: false,
            created_at: Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 4, 1, 8, 0, 0).unwrap(),
            translations: Json(vec![ProjectTranslation {
                locale: "en".to_string(),
                title: "Portfolio".to_string(),
                description: "My site".to_string(),
            }]),
            techniques: Json(vec![TechniqueNode {
                id: 21,
                slug: "t1".to_string(),
                translations: vec![],
            }]),
        }
    }

    #[test]
    fn english_projection_uses_translation_and_labels_bare_relation() {
        let view = portfolio_graph().project(Locale::En);
        assert_eq!(view.locale, Locale::En);
        assert_eq!(view.title, "Portfolio");
        assert_eq!(view.techniques.len(), 1);
        assert_eq!(view.techniques[0].id, 21);
        assert_eq!(view.techniques[0].name, fallback::UNNAMED_TECHNIQUE);
    }

    #[test]
    fn arabic_projection_falls_back_to_untitled_project() {
        let view = portfolio_graph().project(Locale::Ar);
        assert_eq!(view.locale, Locale::Ar);
        assert_eq!(view.title, fallback::UNTITLED_PROJECT);
        assert_eq!(view.description, "");
        assert_eq!(view.techniques.len(), 1);
        assert_eq!(view.techniques[0].name, fallback::UNNAMED_TECHNIQUE);
    }

    #[test]
    fn non_localized_fields_pass_through_unchanged() {
        let g = portfolio_graph();
        let view = g.project(Locale::Ar);
        assert_eq!(view.slug, g.slug);
        assert_eq!(view.repo_url, g.repo_url);
        assert_eq!(view.is_featured, g.is_featured);
        assert_eq!(view.created_at, g.created_at);
    }

    #[test]
    fn technique_order_is_preserved() {
        let mut g = portfolio_graph();
        g.techniques = Json(vec![
            TechniqueNode {
                id: 2,
                slug: "sqlx".to_string(),
                translations: vec![NameTranslation {
                    locale: "en".to_string(),
                    name: "SQLx".to_string(),
                }],
            },
            TechniqueNode {
                id: 1,
                slug: "axum".to_string(),
                translations: vec![NameTranslation {
                    locale: "en".to_string(),
                    name: "Axum".to_string(),
                }],
            },
        ]);
        let view = g.project(Locale::En);
        assert_eq!(view.techniques[0].name, "SQLx");
        assert_eq!(view.techniques[1].name, "Axum");
    }

    #[test]
    fn projection_is_idempotent() {
        let g = portfolio_graph();
        assert_eq!(g.project(Locale::Ar), g.project(Locale::Ar));
    }
}
