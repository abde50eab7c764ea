//! Common types used across the application

use crate::i18n::SupportedLocale;
use crate::storage::{MemoryStorage, PreferenceStorage};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Language picker entry returned to the frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleOption {
    /// Locale code (e.g., "en", "es")
    pub code: String,
    /// Native display name
    pub display_name: String,
    /// Flag glyph shown in the picker button
    pub flag: String,
}

impl From<SupportedLocale> for LocaleOption {
    fn from(locale: SupportedLocale) -> Self {
        Self {
            code: locale.code().to_string(),
            display_name: locale.display_name().to_string(),
            flag: locale.flag().to_string(),
        }
    }
}

/// What the host runtime hands over once it confirms client execution
#[derive(Clone)]
pub struct ClientEnvironment {
    /// Key/value storage for the language preference
    pub storage: Rc<dyn PreferenceStorage>,
    /// Language tag declared by the host document (`<html lang>`)
    pub document_lang: Option<String>,
}

impl ClientEnvironment {
    pub fn new(storage: Rc<dyn PreferenceStorage>, document_lang: Option<&str>) -> Self {
        Self {
            storage,
            document_lang: document_lang.map(str::to_string),
        }
    }

    /// Environment with fresh in-memory storage
    pub fn in_memory(document_lang: Option<&str>) -> Self {
        Self::new(Rc::new(MemoryStorage::new()), document_lang)
    }
}

impl std::fmt::Debug for ClientEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientEnvironment")
            .field("storage", &self.storage.name())
            .field("document_lang", &self.document_lang)
            .finish()
    }
}
