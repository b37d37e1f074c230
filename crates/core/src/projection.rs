//! The localized content projection engine.
//!
//! Canonical entities store locale-variant fields in translation rows; this
//! module resolves one translation per entity per requested locale and
//! substitutes documented fallback values when none matches. The per-entity
//! projectors in `atelier-db` are thin compositions of these helpers, so the
//! fallback semantics live in exactly one place.

use crate::locale::Locale;

// ---------------------------------------------------------------------------
// Fallback defaults
// ---------------------------------------------------------------------------

/// Placeholder values substituted when a translation is missing.
///
/// These strings are part of the API contract: the frontend and the tests
/// match them literally, so changing one is a breaking change.
pub mod fallback {
    pub const UNTITLED_POST: &str = "Untitled";
    pub const UNTITLED_PROJECT: &str = "Untitled Project";
    pub const UNCATEGORIZED: &str = "Uncategorized";
    pub const UNNAMED_TAG: &str = "Unnamed Tag";
    pub const UNNAMED_TECHNIQUE: &str = "Unnamed Technique";
    pub const UNNAMED_SKILL: &str = "Unnamed Skill";
    pub const ANONYMOUS: &str = "Anonymous";
    pub const UNTITLED_ROLE: &str = "Untitled Role";
    pub const UNKNOWN_INSTITUTION: &str = "Unknown Institution";

    /// Free-text fields (excerpts, descriptions, quotes) fall back to empty
    /// rather than a placeholder, so UIs can collapse them.
    pub const EMPTY: &str = "";
}

// ---------------------------------------------------------------------------
// Translation selection
// ---------------------------------------------------------------------------

/// A locale-tagged translation row.
///
/// The locale is exposed as the raw stored code rather than a parsed
/// [`Locale`]: a row tagged with a code we no longer support simply never
/// matches, instead of failing the whole projection.
pub trait Translated {
    fn locale(&self) -> &str;
}

/// Select the translation for `locale` from an entity's translation rows.
///
/// Absence is normal (a new entity with no translations yet) and propagates
/// as `None`. If more than one row matches — a data integrity anomaly the
/// schema forbids going forward — the first in the sequence's existing order
/// wins; queries aggregate translation rows by primary key, so "first" means
/// first by insertion order. Never "most recently updated": output must be
/// reproducible.
pub fn select_translation<T: Translated>(records: &[T], locale: Locale) -> Option<&T> {
    records.iter().find(|r| r.locale() == locale.as_str())
}

/// Resolve one localized field from an optional selected translation.
///
/// `None` (or a matched row, via `field`) always yields a defined string —
/// the projected views never carry a null where a fallback is documented.
pub fn localized<T>(
    translation: Option<&T>,
    field: impl Fn(&T) -> &str,
    fallback: &str,
) -> String {
    match translation {
        Some(t) => field(t).to_string(),
        None => fallback.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Relation flattening
// ---------------------------------------------------------------------------

/// Flatten a many-valued nested relation into locale-resolved items.
///
/// For each relation item, selects its translation for `locale` and resolves
/// a display name (`name_of` on the match, `fallback_label` otherwise), then
/// hands both to `build`. Guarantees:
///
/// - output cardinality equals input cardinality (untranslated items are
///   labeled, not dropped, so counts stay stable);
/// - input order is preserved (no re-sorting);
/// - items with zero translation rows behave exactly like items whose rows
///   don't cover the locale.
pub fn flatten_relation<I, T, O>(
    items: &[I],
    locale: Locale,
    fallback_label: &str,
    translations: impl Fn(&I) -> &[T],
    name_of: impl Fn(&T) -> &str,
    build: impl Fn(&I, String) -> O,
) -> Vec<O>
where
    T: Translated,
{
    items
        .iter()
        .map(|item| {
            let name = localized(
                select_translation(translations(item), locale),
                &name_of,
                fallback_label,
            );
            build(item, name)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Tr {
        locale: &'static str,
        name: &'static str,
    }

    impl Translated for Tr {
        fn locale(&self) -> &str {
            self.locale
        }
    }

    struct Item {
        id: i64,
        translations: Vec<Tr>,
    }

    fn flatten_names(items: &[Item], locale: Locale) -> Vec<(i64, String)> {
        flatten_relation(
            items,
            locale,
            fallback::UNNAMED_TAG,
            |i| &i.translations,
            |t| t.name,
            |i, name| (i.id, name),
        )
    }

    // -- select_translation ---------------------------------------------------

    #[test]
    fn select_matches_requested_locale() {
        let rows = vec![
            Tr { locale: "en", name: "Home" },
            Tr { locale: "ar", name: "الرئيسية" },
        ];
        assert_eq!(select_translation(&rows, Locale::Ar).unwrap().name, "الرئيسية");
        assert_eq!(select_translation(&rows, Locale::En).unwrap().name, "Home");
    }

    #[test]
    fn select_empty_is_none_not_error() {
        let rows: Vec<Tr> = Vec::new();
        assert!(select_translation(&rows, Locale::En).is_none());
    }

    #[test]
    fn select_missing_locale_is_none() {
        let rows = vec![Tr { locale: "en", name: "Home" }];
        assert!(select_translation(&rows, Locale::Ar).is_none());
    }

    #[test]
    fn select_duplicate_rows_first_in_order_wins() {
        let rows = vec![
            Tr { locale: "en", name: "first" },
            Tr { locale: "en", name: "second" },
        ];
        assert_eq!(select_translation(&rows, Locale::En).unwrap().name, "first");
    }

    #[test]
    fn select_skips_rows_with_unknown_locale_codes() {
        let rows = vec![
            Tr { locale: "fr", name: "Accueil" },
            Tr { locale: "en", name: "Home" },
        ];
        assert_eq!(select_translation(&rows, Locale::En).unwrap().name, "Home");
    }

    // -- localized ------------------------------------------------------------

    #[test]
    fn localized_uses_match_or_fallback() {
        let row = Tr { locale: "en", name: "Home" };
        assert_eq!(localized(Some(&row), |t| t.name, "Untitled"), "Home");
        assert_eq!(localized(None::<&Tr>, |t| t.name, "Untitled"), "Untitled");
    }

    // -- flatten_relation -------------------------------------------------------

    #[test]
    fn flatten_preserves_cardinality_and_order() {
        let items = vec![
            Item { id: 1, translations: vec![Tr { locale: "en", name: "rust" }] },
            Item { id: 2, translations: vec![] },
            Item { id: 3, translations: vec![Tr { locale: "ar", name: "الويب" }] },
        ];

        let flat = flatten_names(&items, Locale::En);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0], (1, "rust".to_string()));
        assert_eq!(flat[1], (2, fallback::UNNAMED_TAG.to_string()));
        assert_eq!(flat[2], (3, fallback::UNNAMED_TAG.to_string()));
    }

    #[test]
    fn flatten_partial_coverage_labels_exactly_the_gaps() {
        // N = 4, k = 2 translated: expect exactly N - k fallback labels.
        let items = vec![
            Item { id: 1, translations: vec![Tr { locale: "ar", name: "أ" }] },
            Item { id: 2, translations: vec![] },
            Item { id: 3, translations: vec![Tr { locale: "ar", name: "ب" }] },
            Item { id: 4, translations: vec![Tr { locale: "en", name: "only-en" }] },
        ];

        let flat = flatten_names(&items, Locale::Ar);
        let fallbacks = flat
            .iter()
            .filter(|(_, name)| name == fallback::UNNAMED_TAG)
            .count();
        assert_eq!(flat.len(), 4);
        assert_eq!(fallbacks, 2);
    }

    #[test]
    fn flatten_empty_relation_is_empty() {
        let items: Vec<Item> = Vec::new();
        assert!(flatten_names(&items, Locale::En).is_empty());
    }
}
