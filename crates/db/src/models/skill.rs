//! Skill models, DTOs, and projector.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::Validate;

use atelier_core::locale::Locale;
use atelier_core::projection::{fallback, localized, select_translation};
use atelier_core::types::{DbId, Timestamp};

use crate::models::taxonomy::NameTranslation;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub icon_url: Option<String>,
    pub level: i16,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A skill with its name translations attached.
#[derive(Debug, Clone, FromRow)]
pub struct SkillGraph {
    pub id: DbId,
    pub icon_url: Option<String>,
    pub level: i16,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub translations: Json<Vec<NameTranslation>>,
}

/// The flat, locale-resolved read model for a skill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillView {
    pub id: DbId,
    pub locale: Locale,
    pub name: String,
    pub icon_url: Option<String>,
    pub level: i16,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Timestamp,
}

impl SkillGraph {
    /// Project into the read model for `locale`. Name falls back to
    /// "Unnamed Skill".
    pub fn project(&self, locale: Locale) -> SkillView {
        let tr = select_translation(&self.translations, locale);
        SkillView {
            id: self.id,
            locale,
            name: localized(tr, |t| t.name.as_str(), fallback::UNNAMED_SKILL),
            icon_url: self.icon_url.clone(),
            level: self.level,
            sort_order: self.sort_order,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// DTO for creating a skill.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(url)]
    pub icon_url: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub level: i16,
    pub sort_order: Option<i32>,
}

/// DTO for updating a skill. Only non-`None` fields apply.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(url)]
    pub icon_url: Option<String>,
    #[validate(range(min = 0, max = 100))]
    pub level: Option<i16>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn graph(translations: Vec<NameTranslation>) -> SkillGraph {
        SkillGraph {
            id: 9,
            icon_url: None,
            level: 80,
            sort_order: 2,
            is_active: true,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            translations: Json(translations),
        }
    }

    #[test]
    fn translated_name_is_used() {
        let g = graph(vec![NameTranslation {
            locale: "ar".to_string(),
            name: "رَست".to_string(),
        }]);
        assert_eq!(g.project(Locale::Ar).name, "رَست");
        assert_eq!(g.project(Locale::En).name, fallback::UNNAMED_SKILL);
    }

    #[test]
    fn level_passes_through_unchanged() {
        let g = graph(vec![]);
        assert_eq!(g.project(Locale::En).level, 80);
        assert_eq!(g.project(Locale::En).sort_order, 2);
    }
}
