//! Locale resolution against the fixed supported set.
//!
//! Public routes carry a locale as a URL segment; this module only decides
//! whether a token names a supported locale. What to do with an unsupported
//! token (404 vs. fall back to the default) is the caller's policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A supported content locale.
///
/// Serializes as its ISO 639-1 code (`"en"` / `"ar"`), which is what the
/// projected views carry and what the frontend sends back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ar,
}

impl Locale {
    /// Every locale the system will serve, in display order.
    pub const SUPPORTED: &'static [Locale] = &[Locale::En, Locale::Ar];

    /// Validate a raw locale token (typically a URL segment).
    ///
    /// Matching is exact: no region subtags, no case folding. An unknown
    /// token is reported as [`CoreError::UnsupportedLocale`], never silently
    /// mapped to a default.
    pub fn parse(candidate: &str) -> Result<Locale, CoreError> {
        match candidate {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            other => Err(CoreError::UnsupportedLocale(other.to_string())),
        }
    }

    /// The ISO 639-1 code.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    /// Whether text in this locale runs right-to-left.
    pub fn is_rtl(self) -> bool {
        matches!(self, Locale::Ar)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_supported_codes() {
        assert_eq!(Locale::parse("en").unwrap(), Locale::En);
        assert_eq!(Locale::parse("ar").unwrap(), Locale::Ar);
    }

    #[test]
    fn parse_unknown_code_is_rejected() {
        let err = Locale::parse("fr").unwrap_err();
        assert!(matches!(err, CoreError::UnsupportedLocale(ref code) if code == "fr"));
    }

    #[test]
    fn parse_is_exact_no_case_folding() {
        assert!(Locale::parse("EN").is_err());
        assert!(Locale::parse("en-US").is_err());
        assert!(Locale::parse("").is_err());
    }

    #[test]
    fn round_trips_through_code() {
        for &locale in Locale::SUPPORTED {
            assert_eq!(Locale::parse(locale.as_str()).unwrap(), locale);
        }
    }

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Locale::Ar).unwrap(), "\"ar\"");
        assert_eq!(
            serde_json::from_str::<Locale>("\"en\"").unwrap(),
            Locale::En
        );
    }

    #[test]
    fn rtl_flag() {
        assert!(!Locale::En.is_rtl());
        assert!(Locale::Ar.is_rtl());
    }
}
