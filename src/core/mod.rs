//! Core module - Configuration, errors, and common types

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, I18nConfig};
pub use error::{Error, Result};
pub use types::{ClientEnvironment, LocaleOption};
