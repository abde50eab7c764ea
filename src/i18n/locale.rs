//! Supported locales and language tag normalization

use crate::core::LocaleOption;
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Closed set of locales the site ships translations for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedLocale {
    #[default]
    En,
    Es,
}

impl SupportedLocale {
    /// Every supported locale, in picker order
    pub const ALL: [SupportedLocale; 2] = [Self::En, Self::Es];

    /// Locale used for server rendering and as the last translation fallback
    pub const FALLBACK: SupportedLocale = Self::En;

    /// Get the language code for this locale
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parse a bare locale code ("en", "ES"). Region-qualified tags are rejected.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(code))
    }

    /// Parse any language tag by its primary subtag ("en-GB", "es_MX.UTF-8", "es-419")
    pub fn from_tag(tag: &str) -> Option<Self> {
        primary_language(tag).and_then(|language| Self::from_code(&language))
    }

    /// Get the display name for this locale
    pub fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Es => "Espa\u{00F1}ol",
        }
    }

    /// Flag glyph for the language picker
    pub fn flag(self) -> &'static str {
        match self {
            Self::En => "\u{1F1FA}\u{1F1F8}",
            Self::Es => "\u{1F1EA}\u{1F1F8}",
        }
    }

    /// Picker entries for all locales
    pub fn options() -> Vec<LocaleOption> {
        Self::ALL.into_iter().map(LocaleOption::from).collect()
    }
}

impl std::fmt::Display for SupportedLocale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Extract the lowercase primary language subtag of a BCP 47 or POSIX tag
pub(crate) fn primary_language(tag: &str) -> Option<String> {
    // POSIX forms carry an encoding and modifier: "es_MX.UTF-8@euro"
    let tag = tag.trim();
    let tag = tag.split('@').next().unwrap_or(tag);
    let tag = tag.split('.').next().unwrap_or(tag).trim();
    if tag.is_empty() {
        return None;
    }

    let tag = tag.replace('_', "-");
    match tag.parse::<LanguageIdentifier>() {
        Ok(langid) => Some(langid.language.as_str().to_string()),
        Err(_) => tag
            .split('-')
            .next()
            .filter(|primary| !primary.is_empty())
            .map(str::to_ascii_lowercase),
    }
}

/// Whether a tag carries subtags beyond the primary language
pub(crate) fn is_qualified(tag: &str) -> bool {
    tag.trim().contains(|c: char| c == '-' || c == '_')
}
