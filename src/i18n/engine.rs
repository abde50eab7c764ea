//! Translation engine
//!
//! Lookups never fail: requested locale, then the fallback locale, then the
//! key itself so a missing string shows up verbatim in the page.

use super::resources::ResourceStore;
use super::SupportedLocale;
use std::sync::Arc;

/// Resolves keys against the resource store
#[derive(Debug, Clone)]
pub struct TranslationEngine {
    store: Arc<ResourceStore>,
}

impl TranslationEngine {
    pub fn new(store: Arc<ResourceStore>) -> Self {
        Self { store }
    }

    /// Resolve a key for a locale
    pub fn resolve<'a>(&'a self, locale: SupportedLocale, key: &'a str) -> &'a str {
        if let Some(value) = self.store.get(locale, key) {
            return value;
        }

        if locale != SupportedLocale::FALLBACK {
            if let Some(value) = self.store.get(SupportedLocale::FALLBACK, key) {
                log::debug!(
                    "Key '{}' not found in {}, using {}",
                    key,
                    locale,
                    SupportedLocale::FALLBACK
                );
                return value;
            }
        }

        log::debug!("Key '{}' not found in any locale", key);
        key
    }

    pub fn store(&self) -> &ResourceStore {
        &self.store
    }
}
