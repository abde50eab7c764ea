//! Portfolio i18n library
//!
//! Translation layer for the portfolio site: locale resources, detection,
//! language-change notification and the hydration-safe provider.

pub mod core;
pub mod i18n;
pub mod storage;
