#![forbid(unsafe_code)]

//! Table-driven Unicode to ASCII transliteration.
//!
//! # Role
//! `unifold` folds non-ASCII characters to ASCII approximations through a
//! large base table, with a small per-locale override layer in front of it
//! (`unifold-locale`). German text can keep its umlauts, Scandinavian text
//! can swap `æ`/`ä` by convention, and everything else falls back to the
//! base table.
//!
//! # Primary responsibilities
//! - **BaseTable**: code point to ASCII replacement, built-in or custom.
//! - **Transliterator**: the per-character resolution over both tables.
//! - **transliterate**: one-call entry point over the built-in tables.
//!
//! # Example
//! ```
//! use unifold::transliterate;
//!
//! assert_eq!(transliterate("café", "en"), "cafe");
//! assert_eq!(transliterate("Müller", "de"), "Müller");
//! assert_eq!(transliterate("Müller", "xx"), "Müller");
//! ```
//!
//! # Feature flags
//! - `normalization`: NFC pre-composition via
//!   [`Transliterator::fold_composed`].

pub(crate) mod data;
pub mod engine;
pub mod table;

pub use engine::{Resolution, Transliterator, transliterate, transliterate_default};
pub use table::{BaseTable, MAX_CODE_POINT, TableError, TableErrorKind};

pub use unifold_locale as locale;
pub use unifold_locale::{LocaleOverrides, OverrideLookup, OverrideSet};
