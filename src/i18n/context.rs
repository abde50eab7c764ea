//! Provider lookup for UI components

use super::provider::LanguageProvider;
use crate::core::{Error, Result};
use std::rc::Rc;

/// Value passed down the component tree from its root
#[derive(Debug, Clone, Default)]
pub struct LanguageContext {
    provider: Option<Rc<LanguageProvider>>,
}

impl LanguageContext {
    pub fn new(provider: Rc<LanguageProvider>) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    /// Context of a tree that was built without a provider
    pub fn empty() -> Self {
        Self::default()
    }

    /// Access the provider. A missing provider is a wiring bug and is never recovered.
    pub fn use_language(&self) -> Result<&LanguageProvider> {
        self.provider.as_deref().ok_or(Error::ProviderMissing)
    }
}
