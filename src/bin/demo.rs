//! Portfolio i18n - Demo CLI
//!
//! Walks through one visitor session: resource loading, the server render,
//! hydration, a language switch from the picker, and teardown.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use portfolio_i18n::core::{ClientEnvironment, I18nConfig};
use portfolio_i18n::i18n::{keys, LanguageProvider, ResourceStore, SupportedLocale};
use portfolio_i18n::storage::{MemoryStorage, PreferenceStorage};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("==============================================");
    println!("   Portfolio i18n - Demo CLI");
    println!("==============================================\n");

    // 1. Load locale resources
    println!("[1/5] Loading locale resources...");
    let store = Arc::new(ResourceStore::load()?);
    for locale in store.locales() {
        println!(
            "      {} {:<8} {} strings",
            locale.flag(),
            locale.display_name(),
            store.table(locale).len()
        );
    }
    println!();

    // 2. Server render
    println!("[2/5] Server render (pre-hydration)...");
    let settings = I18nConfig {
        storage: "memory".to_string(),
        ..Default::default()
    };
    let (provider, mount) = LanguageProvider::new(Arc::clone(&store), settings.clone());
    println!("      is_client:  {}", provider.is_client());
    println!("      language:   {}", provider.current_language());
    println!("      nav:        {}", provider.t(keys::NAVIGATION_WORK));
    provider.change_language("es");
    println!("      after change_language(\"es\"): {}\n", provider.current_language());

    // 3. Hydrate as a visitor from Mexico with no stored preference
    println!("[3/5] Hydrating with <html lang=\"es-MX\">...");
    let storage = Rc::new(MemoryStorage::new());
    mount.mount(ClientEnvironment::new(storage.clone(), Some("es-MX")));
    println!("      is_client:  {}", provider.is_client());
    println!("      language:   {}", provider.current_language());
    println!("      nav:        {}", provider.t(keys::NAVIGATION_WORK));
    println!(
        "      stored:     {}\n",
        storage
            .get_item(&settings.storage_key)?
            .unwrap_or_else(|| "-".to_string())
    );

    // 4. Switch language from the picker
    println!("[4/5] Switching language from the picker...");
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let listener = provider
        .notifier()
        .subscribe(move |locale: SupportedLocale| sink.borrow_mut().push(locale));

    for option in provider.languages() {
        let marker = if option.code == provider.current_option().code { "*" } else { " " };
        println!("      {} {} {}", marker, option.flag, option.display_name);
    }
    provider.change_language("en");
    provider.change_language("xx");
    println!("      notifications: {:?}", seen.borrow());
    println!(
        "      hero:          {} {}\n",
        provider.t(keys::HERO_TITLE),
        provider.t(keys::HERO_TITLE_HIGHLIGHT)
    );
    listener.unsubscribe();

    // 5. Teardown
    println!("[5/5] Tearing down the session...");
    let notifier = provider.notifier().clone();
    println!("      subscribers before: {}", notifier.subscriber_count());
    drop(provider);
    println!("      subscribers after:  {}", notifier.subscriber_count());

    println!("\n==============================================\n");

    Ok(())
}
