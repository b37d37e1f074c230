//! Education models, DTOs, and projector.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation, Translated};
use atelier_core::types::{DbId, Timestamp};

/// A row from the `educations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A locale-variant row from `education_translations`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationTranslation {
    pub locale: String,
    pub institution: String,
    pub degree: String,
    pub description: String,
}

impl Translated for EducationTranslation {
    fn locale(&self) -> &str {
        &self.locale
    }
}

/// An education entry with its translations attached.
#[derive(Debug, Clone, FromRow)]
pub struct EducationGraph {
    pub id: DbId,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<EducationTranslation>>,
}

/// The flat, locale-resolved read model for an education entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationView {
    pub id: DbId,
    pub locale: Locale,
    pub institution: String,
    pub degree: String,
    pub description: String,
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl EducationGraph {
    /// Project into the read model for `locale`. Institution falls back to
    /// "Unknown Institution"; degree and description fall back to empty.
    pub fn project(&self, locale: Locale) -> EducationView {
        let tr = select_translation(&self.translations, locale);
        EducationView {
            id: self.id,
            locale,
            institution: localized(tr, |t| t.institution.as_str(), fallback::UNKNOWN_INSTITUTION),
            degree: localized(tr, |t| t.degree.as_str(), fallback::EMPTY),
            description: localized(tr, |t| t.description.as_str(), fallback::EMPTY),
            started_on: self.started_on,
            ended_on: self.ended_on,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// DTO for creating an education entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEducation {
    pub started_on: NaiveDate,
    pub ended_on: Option<NaiveDate>,
}

/// DTO for updating an education entry. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateEducation {
    pub started_on: Option<NaiveDate>,
    pub ended_on: Option<NaiveDate>,
    pub is_active: Option<bool>,
}

/// DTO for upserting one education translation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpsertEducationTranslation {
    #[validate(length(min = 1, max = 200))]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn institution_falls_back_when_untranslated() {
        let g = EducationGraph {
            id: 2,
            started_on: NaiveDate::from_ymd_opt(2018, 9, 1).unwrap(),
            ended_on: NaiveDate::from_ymd_opt(2022, 6, 30),
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 10, 0, 0, 0).unwrap(),
            translations: Json(vec![EducationTranslation {
                locale: "ar".to_string(),
                institution: "جامعة القاهرة".to_string(),
                degree: "بكالوريوس".to_string(),
                description: String::new(),
            }]),
        };

        assert_eq!(g.project(Locale::Ar).institution, "جامعة القاهرة");
        let en = g.project(Locale::En);
        assert_eq!(en.institution, fallback::UNKNOWN_INSTITUTION);
        assert_eq!(en.degree, "");
    }
}
