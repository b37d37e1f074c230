//! Taxonomy models: tags, categories, and techniques.
//!
//! All three share the same shape — a slugged canonical row plus per-locale
//! name translations — so they share [`NameTranslation`] and differ only in
//! their fallback label.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{
    fallback, flatten_relation, localized, select_translation, Translated,
};
use atelier_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Translation rows
// ---------------------------------------------------------------------------

/// A locale-variant name row, as aggregated into graph queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameTranslation {
    pub locale: String,
    pub name: String,
}

impl Translated for NameTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

// ---------------------------------------------------------------------------
// Nested relation nodes (as embedded in entity graphs)
// ---------------------------------------------------------------------------

/// A tag with its translations, as embedded in a post graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagNode {
    pub id: DbId,
    pub slug: String,
    #[serde(default)]
    pub translations: Vec<NameTranslation>,
}

/// Flat, locale-resolved tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagView {
    pub id: DbId,
    pub slug: String,
    pub name: String,
}

impl TagNode {
    /// Flatten a post's tag relation, preserving order and cardinality.
    pub fn flatten(nodes: &[TagNode], locale: Locale) -> Vec<TagView> {
        flatten_relation(
            nodes,
            locale,
            fallback::UNNAMED_TAG,
            |n| &n.translations,
            |t| t.name.as_str(),
            |n, name| TagView {
                id: n.id,
                slug: n.slug.clone(),
                name,
            },
        )
    }
}

/// A category with its translations, as embedded in a post graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    pub id: DbId,
    pub slug: String,
    #[serde(default)]
    pub translations: Vec<NameTranslation>,
}

/// Flat, locale-resolved category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView {
    pub id: DbId,
    pub slug: String,
    pub name: String,
}

impl CategoryNode {
    pub fn to_view(&self, locale: Locale) -> CategoryView {
        let tr = select_translation(&self.translations, locale);
        CategoryView {
            id: self.id,
            slug: self.slug.clone(),
            name: localized(tr, |t| t.name.as_str(), fallback::UNCATEGORIZED),
        }
    }
}

/// A technique with its translations, as embedded in a project graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueNode {
    pub id: DbId,
    pub slug: String,
    #[serde(default)]
    pub translations: Vec<NameTranslation>,
}

/// Flat, locale-resolved technique.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechniqueView {
    pub id: DbId,
    pub slug: String,
    pub name: String,
}

impl TechniqueNode {
    /// Flatten a project's technique relation, preserving order and cardinality.
    pub fn flatten(nodes: &[TechniqueNode], locale: Locale) -> Vec<TechniqueView> {
        flatten_relation(
            nodes,
            locale,
            fallback::UNNAMED_TECHNIQUE,
            |n| &n.translations,
            |t| t.name.as_str(),
            |n, name| TechniqueView {
                id: n.id,
                slug: n.slug.clone(),
                name,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Admin rows and DTOs
// ---------------------------------------------------------------------------

/// A taxonomy row with all of its translations, for admin tables.
/// Works for tags, categories, and techniques alike.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaxonomyAdminRow {
    pub id: DbId,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<NameTranslation>>,
}

/// DTO for creating a tag, category, or technique.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaxonomyItem {
    #[validate(length(min = 1, max = 80))]
    pub slug: String,
}

/// DTO for upserting a taxonomy name translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertNameTranslation {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: DbId, slug: &str, translations: Vec<NameTranslation>) -> TagNode {
        TagNode {
            id,
            slug: slug.to_string(),
            translations,
        }
    }

    fn tr(locale: &str, name: &str) -> NameTranslation {
        NameTranslation {
            locale: locale.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn category_with_translation_uses_it() {
        let cat = CategoryNode {
            id: 5,
            slug: "web".to_string(),
            translations: vec![tr("ar", "الويب"), tr("en", "Web")],
        };
        assert_eq!(cat.to_view(Locale::En).name, "Web");
        assert_eq!(cat.to_view(Locale::Ar).name, "الويب");
    }

    #[test]
    fn category_without_translation_is_uncategorized() {
        let cat = CategoryNode {
            id: 5,
            slug: "web".to_string(),
            translations: vec![],
        };
        assert_eq!(cat.to_view(Locale::En).name, fallback::UNCATEGORIZED);
    }

    #[test]
    fn tag_flatten_keeps_untranslated_items() {
        let nodes = vec![
            node(1, "rust", vec![tr("en", "Rust")]),
            node(2, "axum", vec![]),
        ];
        let flat = TagNode::flatten(&nodes, Locale::En);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].name, "Rust");
        assert_eq!(flat[1].name, fallback::UNNAMED_TAG);
        assert_eq!(flat[1].slug, "axum");
    }

    #[test]
    fn node_decodes_with_missing_translations_field() {
        // json_build_object always emits the field, but be lenient anyway.
        let node: TagNode = serde_json::from_str(r#"{"id": 7, "slug": "cli"}"#).unwrap();
        assert!(node.translations.is_empty());
    }
}
