//! Portfolio i18n - Main entry point
//!
//! Prints the site's strings the way a visitor sees them: first the server
//! render, then the hydrated client render in the detected (or requested)
//! language.
//!
//! Usage: `portfolio-i18n [LANG]`

use anyhow::{Context, Result};
use portfolio_i18n::core::{ClientEnvironment, Config};
use portfolio_i18n::i18n::{keys, LanguageContext, LanguageProvider, ResourceStore};
use portfolio_i18n::storage::{MemoryStorage, PreferenceStorage, SqliteStorage};
use std::rc::Rc;
use std::sync::Arc;

/// Page sections and the keys they render, in page order
const SECTIONS: &[(&str, &[&str])] = &[
    (
        "navigation",
        &[keys::NAVIGATION_WORK, keys::NAVIGATION_ABOUT, keys::NAVIGATION_CONTACT],
    ),
    (
        "hero",
        &[
            keys::HERO_TITLE,
            keys::HERO_TITLE_HIGHLIGHT,
            keys::HERO_SUBTITLE,
            keys::HERO_VIEW_WORK,
            keys::HERO_DOWNLOAD_RESUME,
        ],
    ),
    (
        "projects",
        &[
            keys::PROJECTS_TITLE,
            keys::PROJECTS_SUBTITLE,
            keys::PROJECTS_VIEW_PROJECT,
            keys::PROJECTS_VIEW_ALL,
        ],
    ),
    (
        "skills",
        &[
            keys::SKILLS_TITLE,
            keys::SKILLS_FOUNDATIONS,
            keys::SKILLS_ADVANCED,
            keys::SKILLS_EXPERT,
        ],
    ),
    (
        "about",
        &[keys::ABOUT_TITLE, keys::ABOUT_SUBTITLE, keys::ABOUT_PHILOSOPHY],
    ),
];

fn main() -> Result<()> {
    let config = Config::load();
    let log_level = config
        .as_ref()
        .map(|c| c.general.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config: {}. Using defaults.", e);
        Config::default()
    });

    let store = Arc::new(ResourceStore::load().context("Failed to load locale resources")?);

    let (provider, mount) = LanguageProvider::new(store, config.i18n.clone());
    let context = LanguageContext::new(provider);

    print_page("server render", &context)?;

    let storage = open_storage(&config.i18n.storage);
    let document_lang = config.general.resolved_document_lang();
    mount.mount(ClientEnvironment::new(storage, document_lang.as_deref()));

    if let Some(code) = std::env::args().nth(1) {
        context.use_language()?.change_language(&code);
    }

    print_page("client render", &context)?;

    Ok(())
}

/// Open the configured preference backend, degrading to memory
fn open_storage(backend: &str) -> Rc<dyn PreferenceStorage> {
    match backend {
        "sqlite" => match SqliteStorage::new() {
            Ok(storage) => Rc::new(storage),
            Err(e) => {
                log::warn!("SQLite preference storage unavailable: {}. Using memory.", e);
                Rc::new(MemoryStorage::new())
            }
        },
        "memory" => Rc::new(MemoryStorage::new()),
        other => {
            log::warn!("Unknown storage backend '{}'. Using memory.", other);
            Rc::new(MemoryStorage::new())
        }
    }
}

fn print_page(title: &str, context: &LanguageContext) -> Result<()> {
    let language = context.use_language()?;
    let current = language.current_option();

    println!("=== {} [{} {}] ===", title, current.flag, current.code);
    for (section, section_keys) in SECTIONS {
        println!("  [{}]", section);
        for key in *section_keys {
            println!("    {:<28} {}", key, language.t(key));
        }
    }
    println!();

    Ok(())
}
