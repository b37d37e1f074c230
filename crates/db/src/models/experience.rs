//! Work experience models, DTOs, and projector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation, Translated};
use atelier_core::types::{DbId, Timestamp};

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub company_url: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_current: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A locale-variant row from `experience_translations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceTranslation {
    pub locale: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

impl Translated for ExperienceTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// An experience entry with its translations attached.
#[derive(Debug, Clone, FromRow)]
pub struct ExperienceGraph {
    pub id: DbId,
    pub company_url: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_current: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<ExperienceTranslation>>,
}

/// The flat, locale-resolved read model for an experience entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceView {
    pub id: DbId,
    pub locale: Locale,
    pub title: String,
    pub company: String,
    pub description: String,
    pub company_url: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_current: bool,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl ExperienceGraph {
    /// Project into the read model for `locale`. Title falls back to
    /// "Untitled Role"; company and description fall back to empty.
    pub fn project(&self, locale: Locale) -> ExperienceView {
        let tr = select_translation(&self.translations, locale);
        ExperienceView {
            id: self.id,
            locale,
            title: localized(tr, |t| t.title.as_str(), fallback::UNTITLED_ROLE),
            company: localized(tr, |t| t.company.as_str(), fallback::EMPTY),
            description: localized(tr, |t| t.description.as_str(), fallback::EMPTY),
            company_url: self.company_url.clone(),
            started_on: self.started_on,
            ended_on: self.ended_on,
            is_current: self.is_current,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// DTO for creating an experience entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateExperience {
    #[validate(url)]
    pub company_url: Option<String>,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_current: Option<bool>,
}

/// DTO for updating an experience entry. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateExperience {
    #[validate(url)]
    pub company_url: Option<String>,
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub is_current: Option<bool>,
    pub is_active: Option<bool>,
}

/// DTO for upserting one experience translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertExperienceTranslation {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub description: String,
}
