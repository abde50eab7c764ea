//! Locale detection and persistence
//!
//! Resolution order, first match wins:
//! 1. stored preference
//! 2. host document language tag
//! 3. fallback locale

use super::locale::is_qualified;
use super::SupportedLocale;
use crate::storage::PreferenceStorage;
use std::rc::Rc;

/// Where a detected locale came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionSource {
    Storage,
    DocumentTag,
    Fallback,
}

/// Outcome of [`LocaleDetector::detect`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub locale: SupportedLocale,
    pub source: DetectionSource,
    /// Raw tag the locale was derived from, if any
    pub tag: Option<String>,
}

impl Detection {
    /// Whether the raw tag carried region or other subtags that were dropped
    pub fn was_normalized(&self) -> bool {
        self.tag.as_deref().map(is_qualified).unwrap_or(false)
    }
}

/// Reads and writes the language preference
pub struct LocaleDetector {
    storage: Rc<dyn PreferenceStorage>,
    storage_key: String,
}

impl LocaleDetector {
    pub fn new(storage: Rc<dyn PreferenceStorage>, storage_key: &str) -> Self {
        Self {
            storage,
            storage_key: storage_key.to_string(),
        }
    }

    /// Determine the locale for this session
    pub fn detect(&self, document_lang: Option<&str>) -> Detection {
        if let Some(stored) = self.stored_preference() {
            if let Some(locale) = SupportedLocale::from_tag(&stored) {
                log::debug!("Using stored language preference '{}'", stored);
                return Detection {
                    locale,
                    source: DetectionSource::Storage,
                    tag: Some(stored),
                };
            }
            log::debug!("Ignoring unsupported stored language '{}'", stored);
        }

        if let Some(tag) = document_lang {
            if let Some(locale) = SupportedLocale::from_tag(tag) {
                log::debug!("Using document language tag '{}'", tag);
                return Detection {
                    locale,
                    source: DetectionSource::DocumentTag,
                    tag: Some(tag.to_string()),
                };
            }
            log::debug!("Ignoring unsupported document language '{}'", tag);
        }

        Detection {
            locale: SupportedLocale::FALLBACK,
            source: DetectionSource::Fallback,
            tag: None,
        }
    }

    /// Store the chosen locale, replacing any previous value
    pub fn persist(&self, locale: SupportedLocale) {
        if let Err(e) = self.storage.set_item(&self.storage_key, locale.code()) {
            log::warn!(
                "Failed to persist language '{}' to {} storage: {}",
                locale,
                self.storage.name(),
                e
            );
        }
    }

    fn stored_preference(&self) -> Option<String> {
        match self.storage.get_item(&self.storage_key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!(
                    "Language preference unavailable from {} storage: {}",
                    self.storage.name(),
                    e
                );
                None
            }
        }
    }
}

/// Detect the host language from the environment
pub fn detect_document_lang() -> Option<String> {
    document_lang_from(|var| std::env::var(var).ok())
}

/// First non-empty locale variable, in POSIX precedence order
fn document_lang_from(lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .into_iter()
        .filter_map(lookup)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}
