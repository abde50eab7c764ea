//! Hydration-safe translation facade
//!
//! The provider starts in a pre-hydration state where every lookup is
//! answered from the embedded English bootstrap table, so the server render
//! and the first client render produce identical text. The host runtime
//! flips it to the client-ready state exactly once by consuming the
//! session's [`MountHandle`]; from then on lookups go through the
//! translation engine and language changes are live.

use super::bootstrap;
use super::detector::LocaleDetector;
use super::engine::TranslationEngine;
use super::notifier::{LanguageNotifier, Subscription};
use super::resources::ResourceStore;
use super::SupportedLocale;
use crate::core::{ClientEnvironment, I18nConfig, LocaleOption};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::sync::Arc;

enum HydrationState {
    PreHydration,
    /// `subscription` is `None` once the provider has been unmounted
    ClientReady { subscription: Option<Subscription> },
}

/// Translation facade handed to every UI component
pub struct LanguageProvider {
    state: RefCell<HydrationState>,
    engine: TranslationEngine,
    notifier: LanguageNotifier,
    settings: I18nConfig,
}

impl LanguageProvider {
    /// Create a provider for one session, together with its mount handle
    pub fn new(store: Arc<ResourceStore>, settings: I18nConfig) -> (Rc<Self>, MountHandle) {
        let provider = Rc::new(Self {
            state: RefCell::new(HydrationState::PreHydration),
            engine: TranslationEngine::new(store),
            notifier: LanguageNotifier::new(),
            settings,
        });
        let handle = MountHandle {
            provider: Rc::downgrade(&provider),
        };
        (provider, handle)
    }

    /// Whether the client environment has been confirmed
    pub fn is_client(&self) -> bool {
        matches!(*self.state.borrow(), HydrationState::ClientReady { .. })
    }

    /// Translate a key
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if self.is_client() {
            self.engine.resolve(self.notifier.active(), key)
        } else {
            bootstrap::lookup(key).unwrap_or(key)
        }
    }

    /// Language the UI should present as selected
    pub fn current_language(&self) -> SupportedLocale {
        if self.is_client() {
            self.notifier.active()
        } else {
            SupportedLocale::FALLBACK
        }
    }

    /// Switch language. Ignored until the client is confirmed and after unmount.
    pub fn change_language(&self, code: &str) {
        match &*self.state.borrow() {
            HydrationState::PreHydration => {
                log::debug!("Ignoring language change to '{}' before hydration", code);
                return;
            }
            HydrationState::ClientReady { subscription: None } => {
                log::debug!("Ignoring language change to '{}' after unmount", code);
                return;
            }
            HydrationState::ClientReady { subscription: Some(_) } => {}
        }
        self.notifier.change(code);
    }

    /// Picker entry for the current language
    pub fn current_option(&self) -> LocaleOption {
        LocaleOption::from(self.current_language())
    }

    /// All picker entries
    pub fn languages(&self) -> Vec<LocaleOption> {
        SupportedLocale::options()
    }

    /// Snapshot of every string `t` would currently return
    pub fn translations(&self) -> BTreeMap<String, String> {
        if !self.is_client() {
            return bootstrap::BOOTSTRAP_TABLE
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect();
        }

        let active = self.notifier.active();
        let store = self.engine.store();
        store
            .table(SupportedLocale::FALLBACK)
            .keys()
            .chain(store.table(active).keys())
            .map(|key| (key.clone(), self.engine.resolve(active, key).to_string()))
            .collect()
    }

    /// Session notifier, for components that react to language changes.
    ///
    /// The handle can read the active locale and subscribe, but only the
    /// provider can change it:
    ///
    /// ```compile_fail
    /// use std::sync::Arc;
    /// use portfolio_i18n::core::I18nConfig;
    /// use portfolio_i18n::i18n::{LanguageProvider, ResourceStore};
    ///
    /// let store = Arc::new(ResourceStore::load().unwrap());
    /// let (provider, _mount) = LanguageProvider::new(store, I18nConfig::default());
    /// provider.notifier().change("es");
    /// ```
    pub fn notifier(&self) -> &LanguageNotifier {
        &self.notifier
    }

    /// Stop listening for language changes
    pub fn unmount(&self) {
        if let HydrationState::ClientReady { subscription } = &mut *self.state.borrow_mut() {
            if subscription.take().is_some() {
                log::debug!("Language provider unmounted");
            }
        }
    }

    fn enter_client_ready(&self, env: ClientEnvironment) {
        if self.is_client() {
            log::warn!("Language provider is already hydrated");
            return;
        }

        let detector = Rc::new(LocaleDetector::new(env.storage, &self.settings.storage_key));
        let detection = detector.detect(env.document_lang.as_deref());

        let subscription = self
            .notifier
            .subscribe(|locale| log::debug!("Language provider re-rendering in {}", locale));
        self.notifier.attach_persister(detector);

        *self.state.borrow_mut() = HydrationState::ClientReady {
            subscription: Some(subscription),
        };

        if detection.was_normalized() {
            log::info!(
                "Normalizing detected language '{}' to '{}'",
                detection.tag.as_deref().unwrap_or_default(),
                detection.locale
            );
        }
        log::info!(
            "Language provider hydrated: {} (from {:?})",
            detection.locale,
            detection.source
        );

        self.notifier.set_locale(detection.locale);
    }
}

impl std::fmt::Debug for LanguageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProvider")
            .field("is_client", &self.is_client())
            .field("current_language", &self.current_language())
            .field("notifier", &self.notifier)
            .finish()
    }
}

/// One-shot handle the host runtime consumes after the first render
#[must_use = "a provider is never hydrated unless its handle is mounted"]
pub struct MountHandle {
    provider: Weak<LanguageProvider>,
}

impl MountHandle {
    /// Confirm client execution and hydrate the provider
    pub fn mount(self, env: ClientEnvironment) {
        match self.provider.upgrade() {
            Some(provider) => provider.enter_client_ready(env),
            None => log::debug!("Language provider dropped before mount"),
        }
    }
}

impl std::fmt::Debug for MountHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountHandle").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;
    use crate::storage::{MemoryStorage, PreferenceStorage};

    const KEY: &str = "i18nextLng";

    fn session() -> (Rc<LanguageProvider>, MountHandle) {
        let store = Arc::new(ResourceStore::load().unwrap());
        LanguageProvider::new(store, I18nConfig::default())
    }

    fn environment(stored: Option<&str>, document_lang: Option<&str>) -> (ClientEnvironment, Rc<MemoryStorage>) {
        let storage = Rc::new(match stored {
            Some(value) => MemoryStorage::with_item(KEY, value),
            None => MemoryStorage::new(),
        });
        (ClientEnvironment::new(storage.clone(), document_lang), storage)
    }

    #[test]
    fn test_pre_hydration_serves_bootstrap_strings() {
        let (provider, _handle) = session();
        assert!(!provider.is_client());
        assert_eq!(provider.current_language(), SupportedLocale::En);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Work");
        assert_eq!(provider.t("footer.unknown"), "footer.unknown");
        assert_eq!(provider.current_option().flag, "🇺🇸");
    }

    #[test]
    fn test_hydration_equality_for_english() {
        let (server, _) = session();
        let (client, handle) = session();
        let (env, _) = environment(None, Some("en"));

        let before: Vec<String> = keys::ALL.iter().map(|key| server.t(key).to_string()).collect();
        handle.mount(env);
        assert!(client.is_client());
        assert_eq!(client.current_language(), SupportedLocale::En);

        let after: Vec<String> = keys::ALL.iter().map(|key| client.t(key).to_string()).collect();
        assert_eq!(before, after);
        assert_eq!(server.translations(), client.translations());
    }

    #[test]
    fn test_change_language_before_hydration_is_inert() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("en-US"));

        provider.change_language("es");
        assert_eq!(provider.current_language(), SupportedLocale::En);
        assert_eq!(provider.notifier().active(), SupportedLocale::En);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Work");
        assert_eq!(storage.get_item(KEY).unwrap(), None);

        handle.mount(env);
        assert_eq!(provider.current_language(), SupportedLocale::En);
    }

    #[test]
    fn test_change_language_after_hydration() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("en"));
        handle.mount(env);

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let _listener = provider.notifier().subscribe(move |locale| sink.borrow_mut().push(locale));

        provider.change_language("es");
        assert_eq!(*received.borrow(), vec![SupportedLocale::Es]);
        assert_eq!(provider.current_language(), SupportedLocale::Es);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Trabajo");
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("es"));

        provider.change_language("pt");
        assert_eq!(*received.borrow(), vec![SupportedLocale::Es]);
        assert_eq!(provider.current_language(), SupportedLocale::Es);
    }

    #[test]
    fn test_fresh_session_with_mexican_spanish_host() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("es-MX"));

        let ssr = provider.t(keys::NAVIGATION_WORK).to_string();
        handle.mount(env);

        assert_eq!(provider.current_language(), SupportedLocale::Es);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Trabajo");
        assert_ne!(provider.t(keys::NAVIGATION_WORK), ssr);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("es"));
    }

    #[test]
    fn test_stored_preference_wins_over_host_tag() {
        let (provider, handle) = session();
        let (env, _) = environment(Some("es"), Some("en-GB"));
        handle.mount(env);

        assert_eq!(provider.current_language(), SupportedLocale::Es);
        assert_eq!(provider.current_option().display_name, "Español");
    }

    #[test]
    fn test_region_qualified_english_is_normalized() {
        let (provider, handle) = session();
        let (env, storage) = environment(Some("en-GB"), None);
        handle.mount(env);

        assert_eq!(provider.current_language(), SupportedLocale::En);
        assert_eq!(provider.notifier().active(), SupportedLocale::En);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_unmount_and_drop_deregister() {
        let (provider, handle) = session();
        handle.mount(ClientEnvironment::in_memory(None));
        let notifier = provider.notifier().clone();
        assert_eq!(notifier.subscriber_count(), 1);

        provider.unmount();
        assert_eq!(notifier.subscriber_count(), 0);
        assert!(provider.is_client());

        let (provider, handle) = session();
        handle.mount(ClientEnvironment::in_memory(None));
        let notifier = provider.notifier().clone();
        drop(provider);
        assert_eq!(notifier.subscriber_count(), 0);
        notifier.change("es");
    }

    #[test]
    fn test_component_handles_cannot_change_language_before_mount() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("en"));

        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let listener = provider.notifier().subscribe(move |locale| sink.borrow_mut().push(locale));
        let shared = provider.notifier().clone();
        provider.change_language("es");
        provider.unmount();

        assert!(!provider.is_client());
        assert_eq!(shared.active(), SupportedLocale::En);
        assert!(received.borrow().is_empty());
        assert_eq!(storage.get_item(KEY).unwrap(), None);
        drop(listener);

        handle.mount(env);
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_change_language_after_unmount_is_ignored() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("en"));
        handle.mount(env);

        provider.unmount();
        provider.change_language("es");

        assert_eq!(provider.current_language(), SupportedLocale::En);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Work");
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_reentrant_change_keeps_language_and_text_in_step() {
        let (provider, handle) = session();
        let (env, storage) = environment(None, Some("en"));

        let bouncer = provider.notifier().clone();
        let _bounce = provider.notifier().subscribe(move |locale| {
            if locale == SupportedLocale::Es {
                bouncer.change("en");
            }
        });
        handle.mount(env);

        provider.change_language("es");
        assert_eq!(provider.notifier().active(), SupportedLocale::En);
        assert_eq!(provider.current_language(), SupportedLocale::En);
        assert_eq!(provider.t(keys::NAVIGATION_WORK), "Work");
        assert_eq!(storage.get_item(KEY).unwrap().as_deref(), Some("en"));
    }

    #[test]
    fn test_mount_after_drop_is_harmless() {
        let (provider, handle) = session();
        drop(provider);
        handle.mount(ClientEnvironment::in_memory(Some("es")));
    }

    #[test]
    fn test_sessions_are_independent() {
        let (first, first_handle) = session();
        let (second, second_handle) = session();
        first_handle.mount(ClientEnvironment::in_memory(Some("es")));

        assert!(first.is_client());
        assert!(!second.is_client());
        assert_eq!(second.t(keys::HERO_VIEW_WORK), "View My Work");

        second_handle.mount(ClientEnvironment::in_memory(Some("en")));
        assert_eq!(first.current_language(), SupportedLocale::Es);
        assert_eq!(second.current_language(), SupportedLocale::En);
    }

    #[test]
    fn test_translations_follow_active_locale() {
        let (provider, handle) = session();
        handle.mount(ClientEnvironment::in_memory(Some("es")));

        let table = provider.translations();
        assert_eq!(table.len(), keys::ALL.len());
        assert_eq!(table[keys::ABOUT_TITLE], "Sobre Mí");
    }
}
