//! Locale resource store
//!
//! One flat key -> string JSON document per locale, embedded at compile time
//! and parsed once at startup. Tables never change after load.

use super::keys;
use super::SupportedLocale;
use crate::core::{Error, Result};
use std::collections::{BTreeSet, HashMap};

/// Flat key -> string table for one locale
pub type LocaleTable = HashMap<String, String>;

/// Locale documents shipped with the binary
pub const EMBEDDED_DOCUMENTS: &[(&str, &str)] = &[
    ("en", include_str!("../../locales/en.json")),
    ("es", include_str!("../../locales/es.json")),
];

/// Immutable translation tables for every supported locale
#[derive(Debug)]
pub struct ResourceStore {
    tables: HashMap<SupportedLocale, LocaleTable>,
}

impl ResourceStore {
    /// Load the embedded locale documents
    pub fn load() -> Result<Self> {
        Self::from_documents(EMBEDDED_DOCUMENTS)
    }

    /// Build the store from `(code, json)` documents.
    ///
    /// Every [`SupportedLocale`] must have a document. Key gaps between
    /// locales are only logged.
    pub fn from_documents(documents: &[(&str, &str)]) -> Result<Self> {
        let mut tables = HashMap::new();

        for &(code, json) in documents {
            let Some(locale) = SupportedLocale::from_code(code) else {
                log::warn!("Ignoring resource document for unsupported locale '{}'", code);
                continue;
            };

            let table: LocaleTable = serde_json::from_str(json).map_err(|e| {
                Error::Serialization(format!("Invalid resource document for '{}': {}", code, e))
            })?;

            log::debug!("Loaded {} strings for locale {}", table.len(), locale);
            tables.insert(locale, table);
        }

        for locale in SupportedLocale::ALL {
            if !tables.contains_key(&locale) {
                return Err(Error::MissingLocaleTable(locale.code().to_string()));
            }
        }

        let store = Self { tables };
        store.report_key_gaps();

        log::info!("Resource store loaded: {} locales", store.tables.len());
        Ok(store)
    }

    fn report_key_gaps(&self) {
        for locale in SupportedLocale::ALL {
            let missing = self.missing_keys(locale);
            if !missing.is_empty() {
                log::warn!(
                    "Locale {} is missing {} keys present in {}: {:?}",
                    locale,
                    missing.len(),
                    SupportedLocale::FALLBACK,
                    missing
                );
            }

            let table = self.table(locale);
            let undeclared: Vec<&str> = keys::ALL
                .iter()
                .copied()
                .filter(|key| !table.contains_key(*key))
                .collect();
            if !undeclared.is_empty() {
                log::warn!("Locale {} does not cover declared keys: {:?}", locale, undeclared);
            }
        }
    }

    /// Table for a locale
    pub fn table(&self, locale: SupportedLocale) -> &LocaleTable {
        // Every supported locale is checked in from_documents
        &self.tables[&locale]
    }

    /// Look up a key in one locale only
    pub fn get(&self, locale: SupportedLocale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// Keys of the fallback table that `locale` does not define, sorted
    pub fn missing_keys(&self, locale: SupportedLocale) -> Vec<&str> {
        let table = self.table(locale);
        self.table(SupportedLocale::FALLBACK)
            .keys()
            .filter(|key| !table.contains_key(*key))
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Locales held by the store
    pub fn locales(&self) -> Vec<SupportedLocale> {
        let mut locales: Vec<_> = self.tables.keys().copied().collect();
        locales.sort();
        locales
    }
}
