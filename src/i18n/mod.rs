//! Internationalization module
//!
//! Provides English (en) and Spanish (es) translations for the site with a
//! hydration-safe facade: until the host confirms client execution, lookups
//! are answered from an embedded English table so server and first client
//! render match; afterwards the detected language takes over.

mod bootstrap;
mod context;
mod detector;
mod engine;
pub mod keys;
mod locale;
mod notifier;
mod provider;
mod resources;

pub use bootstrap::BOOTSTRAP_TABLE;
pub use context::LanguageContext;
pub use detector::{detect_document_lang, Detection, DetectionSource, LocaleDetector};
pub use engine::TranslationEngine;
pub use locale::SupportedLocale;
pub use notifier::{LanguageNotifier, Subscription};
pub use provider::{LanguageProvider, MountHandle};
pub use resources::{LocaleTable, ResourceStore, EMBEDDED_DOCUMENTS};
