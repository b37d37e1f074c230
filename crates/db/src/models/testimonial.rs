//! Testimonial models, DTOs, and projector.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation, Translated};
use atelier_core::types::{DbId, Timestamp};

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A locale-variant row from `testimonial_translations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialTranslation {
    pub locale: String,
    pub author_name: String,
    pub role: String,
    pub quote: String,
}

impl Translated for TestimonialTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// A testimonial with its translations attached.
#[derive(Debug, Clone, FromRow)]
pub struct TestimonialGraph {
    pub id: DbId,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<TestimonialTranslation>>,
}

/// The flat, locale-resolved read model for a testimonial.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestimonialView {
    pub id: DbId,
    pub locale: Locale,
    pub author: String,
    pub role: String,
    pub quote: String,
    pub avatar_url: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl TestimonialGraph {
    /// Project into the read model for `locale`. Author falls back to
    /// "Anonymous"; role and quote fall back to empty.
    pub fn project(&self, locale: Locale) -> TestimonialView {
        let tr = select_translation(&self.translations, locale);
        TestimonialView {
            id: self.id,
            locale,
            author: localized(tr, |t| t.author_name.as_str(), fallback::ANONYMOUS),
            role: localized(tr, |t| t.role.as_str(), fallback::EMPTY),
            quote: localized(tr, |t| t.quote.as_str(), fallback::EMPTY),
            avatar_url: self.avatar_url.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// DTO for creating a testimonial.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(url)]
    pub avatar_url: Option<String>,
}

/// DTO for updating a testimonial. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(url)]
    pub avatar_url: Option<String>,
    pub is_active: Option<bool>,
}

/// DTO for upserting one testimonial translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertTestimonialTranslation {
    #[validate(length(min = 1, max = 120))]
    pub author_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn untranslated_testimonial_is_anonymous_not_null() {
        let g = TestimonialGraph {
            id: 1,
            avatar_url: None,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 2, 2, 0, 0, 0).unwrap(),
            translations: Json(vec![]),
        };
        let view = g.project(Locale::Ar);
        assert_eq!(view.author, fallback::ANONYMOUS);
        assert_eq!(view.role, "");
        assert_eq!(view.quote, "");
        assert_eq!(view.locale, Locale::Ar);
    }
}
