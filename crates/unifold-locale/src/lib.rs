#![forbid(unsafe_code)]

//! Locale layer for unifold.
//!
//! Provides the per-locale override tables that take precedence over the
//! base transliteration table, plus helpers for turning POSIX/BCP-47 locale
//! tags and the process environment into the short identifiers the tables
//! are keyed by.

pub mod overrides;
pub mod tag;

pub use overrides::{LocaleOverrides, OverrideError, OverrideLookup, OverrideSet};
pub use tag::{DEFAULT_LOCALE, default_locale, locale_from_env, normalize_tag};
