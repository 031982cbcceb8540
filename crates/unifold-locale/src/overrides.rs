//! Locale override tables.
//!
//! # Invariants
//!
//! 1. **Single-character targets**: every entry redirects one code point to
//!    exactly one `char`. Empty or multi-character replacements belong in the
//!    base table, never here.
//!
//! 2. **No ASCII keys**: ASCII always passes through the engine untouched,
//!    so [`OverrideSet::insert`] rejects keys in `0..=127`.
//!
//! 3. **Last write wins**: inserting a key twice keeps the later target.
//!    Conflicts are settled while the table is built, never during lookup.
//!
//! 4. **Thread safety**: [`LocaleOverrides`] is `Send + Sync` (all data is
//!    immutable after construction).
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown locale | Tag not registered | [`OverrideLookup::UnknownLocale`] |
//! | Missing entry | Locale known, code point absent | [`OverrideLookup::NoOverride`] |
//! | ASCII key | `insert` with a code point below 128 | [`OverrideError::AsciiKey`] |

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

/// Errors from building override tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// An ASCII character was used as an override key.
    AsciiKey(char),
}

impl std::fmt::Display for OverrideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AsciiKey(c) => {
                write!(f, "ASCII character {c:?} (U+{:04X}) cannot be overridden", *c as u32)
            }
        }
    }
}

impl std::error::Error for OverrideError {}

/// Outcome of an override lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideLookup {
    /// The locale has no override table at all.
    UnknownLocale,
    /// The locale is known but has no entry for this code point.
    NoOverride,
    /// The code point is redirected to this character.
    Replace(char),
}

/// Overrides for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    entries: FxHashMap<u32, char>,
}

impl OverrideSet {
    /// Create an empty override set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::AsciiKey`] for the first ASCII key found.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, OverrideError>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut set = Self::new();
        for (from, to) in pairs {
            set.insert(from, to)?;
        }
        Ok(set)
    }

    /// Redirect `from` to `to`, returning the previous target if any.
    ///
    /// # Errors
    ///
    /// Returns [`OverrideError::AsciiKey`] if `from` is ASCII.
    pub fn insert(&mut self, from: char, to: char) -> Result<Option<char>, OverrideError> {
        if from.is_ascii() {
            return Err(OverrideError::AsciiKey(from));
        }
        let previous = self.entries.insert(from as u32, to);
        #[cfg(feature = "tracing")]
        if let Some(old) = previous {
            trace!(from = %from, old = %old, new = %to, "override replaced");
        }
        Ok(previous)
    }

    /// Look up the replacement for a code point.
    #[inline]
    #[must_use]
    pub fn get(&self, code_point: u32) -> Option<char> {
        self.entries.get(&code_point).copied()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, sorted by source code point.
    #[must_use]
    pub fn entries(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> = self
            .entries
            .iter()
            .filter_map(|(&from, &to)| char::from_u32(from).map(|from| (from, to)))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

/// Override tables keyed by locale identifier.
///
/// # Example
///
/// ```
/// use unifold_locale::{LocaleOverrides, OverrideLookup, OverrideSet};
///
/// let mut overrides = LocaleOverrides::new();
/// overrides.insert_locale("sv", OverrideSet::from_pairs([('æ', 'ä')]).unwrap());
/// overrides.insert_locale("en", OverrideSet::new());
///
/// assert_eq!(overrides.resolve("sv", 'æ' as u32), OverrideLookup::Replace('ä'));
/// assert_eq!(overrides.resolve("en", 'æ' as u32), OverrideLookup::NoOverride);
/// assert_eq!(overrides.resolve("xx", 'æ' as u32), OverrideLookup::UnknownLocale);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocaleOverrides {
    locales: FxHashMap<String, OverrideSet>,
}

impl LocaleOverrides {
    /// Create a table with no registered locales.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide built-in table (`fr`, `no`, `da`, `sv`, `de`, `en`).
    ///
    /// Built on first use; later calls return the same instance.
    #[must_use]
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<LocaleOverrides> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let table = build_builtin();
            #[cfg(feature = "tracing")]
            debug!(locales = table.locales.len(), "built-in override table built");
            table
        })
    }

    /// Register (or replace) the override set for a locale.
    pub fn insert_locale(&mut self, locale: impl Into<String>, set: OverrideSet) {
        let locale = locale.into();
        #[cfg(feature = "tracing")]
        if self.locales.contains_key(&locale) {
            trace!(locale = %locale, "override set replaced");
        }
        self.locales.insert(locale, set);
    }

    /// The override set for a locale, if registered.
    #[must_use]
    pub fn get(&self, locale: &str) -> Option<&OverrideSet> {
        self.locales.get(locale)
    }

    /// Whether the locale has a table (possibly empty).
    #[must_use]
    pub fn contains(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Resolve an override for `code_point` under `locale`.
    #[must_use]
    pub fn resolve(&self, locale: &str, code_point: u32) -> OverrideLookup {
        match self.locales.get(locale) {
            None => OverrideLookup::UnknownLocale,
            Some(set) => set
                .get(code_point)
                .map_or(OverrideLookup::NoOverride, OverrideLookup::Replace),
        }
    }

    /// All registered locale tags, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

/// Characters the locale keeps as-is.
fn keep(chars: &[char]) -> impl Iterator<Item = (char, char)> + '_ {
    chars.iter().map(|&c| (c, c))
}

fn set_from(pairs: impl Iterator<Item = (char, char)>) -> OverrideSet {
    let mut set = OverrideSet::new();
    for (from, to) in pairs {
        // Built-in keys are all non-ASCII.
        let _ = set.insert(from, to);
    }
    set
}

fn build_builtin() -> LocaleOverrides {
    const FRENCH: &[char] = &[
        'À', 'à', 'Â', 'â', 'Æ', 'æ', 'Ç', 'ç', 'É', 'é', 'È', 'è', 'Ê', 'ê', 'Ë', 'ë', 'Î', 'î',
        'Ï', 'ï', 'Ô', 'ô', 'Œ', 'œ', 'Ù', 'ù', 'Û', 'û', 'Ü', 'ü',
    ];
    const DANO_NORWEGIAN: &[char] = &['æ', 'ø', 'å', 'Æ', 'Ø', 'Å'];
    const DANO_NORWEGIAN_FOLD: &[(char, char)] =
        &[('ä', 'æ'), ('ö', 'ø'), ('Ä', 'Æ'), ('Ö', 'Ø')];
    const SWEDISH: &[char] = &['å', 'Å', 'ä', 'ö', 'Ä', 'Ö'];
    const SWEDISH_FOLD: &[(char, char)] = &[('æ', 'ä'), ('ø', 'ö'), ('Æ', 'Ä'), ('Ø', 'Ö')];
    const GERMAN: &[char] = &['Ä', 'ä', 'Ö', 'ö', 'Ü', 'ü', 'ß'];

    let dano_norwegian =
        || set_from(keep(DANO_NORWEGIAN).chain(DANO_NORWEGIAN_FOLD.iter().copied()));

    let mut table = LocaleOverrides::new();
    table.insert_locale("fr", set_from(keep(FRENCH)));
    table.insert_locale("no", dano_norwegian());
    table.insert_locale("da", dano_norwegian());
    table.insert_locale(
        "sv",
        set_from(SWEDISH_FOLD.iter().copied().chain(keep(SWEDISH))),
    );
    table.insert_locale("de", set_from(keep(GERMAN)));
    table.insert_locale("en", OverrideSet::new());
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(locale: &str, c: char) -> OverrideLookup {
        LocaleOverrides::builtin().resolve(locale, c as u32)
    }

    #[test]
    fn builtin_locales_registered() {
        assert_eq!(
            LocaleOverrides::builtin().locales(),
            vec!["da", "de", "en", "fr", "no", "sv"]
        );
    }

    #[test]
    fn unknown_locale_is_distinct_from_no_override() {
        assert_eq!(lookup("xx", 'é'), OverrideLookup::UnknownLocale);
        assert_eq!(lookup("en", 'é'), OverrideLookup::NoOverride);
        assert_eq!(lookup("de", 'é'), OverrideLookup::NoOverride);
    }

    #[test]
    fn locale_tags_are_case_sensitive() {
        assert_eq!(lookup("DE", 'ü'), OverrideLookup::UnknownLocale);
        assert_eq!(lookup("", 'ü'), OverrideLookup::UnknownLocale);
    }

    #[test]
    fn english_set_is_empty() {
        let en = LocaleOverrides::builtin().get("en");
        assert!(en.is_some_and(OverrideSet::is_empty));
    }

    #[test]
    fn french_keeps_accents() {
        for c in ['é', 'È', 'ç', 'Œ', 'ü'] {
            assert_eq!(lookup("fr", c), OverrideLookup::Replace(c));
        }
        assert_eq!(LocaleOverrides::builtin().get("fr").map(OverrideSet::len), Some(30));
    }

    #[test]
    fn scandinavian_folds() {
        assert_eq!(lookup("no", 'æ'), OverrideLookup::Replace('æ'));
        assert_eq!(lookup("no", 'ä'), OverrideLookup::Replace('æ'));
        assert_eq!(lookup("da", 'Ö'), OverrideLookup::Replace('Ø'));
        assert_eq!(lookup("sv", 'æ'), OverrideLookup::Replace('ä'));
        assert_eq!(lookup("sv", 'Ø'), OverrideLookup::Replace('Ö'));
        assert_eq!(lookup("sv", 'å'), OverrideLookup::Replace('å'));
    }

    #[test]
    fn norwegian_and_danish_match() {
        let table = LocaleOverrides::builtin();
        assert_eq!(table.get("no"), table.get("da"));
    }

    #[test]
    fn german_keeps_umlauts_and_eszett() {
        for c in ['Ä', 'ö', 'ü', 'ß'] {
            assert_eq!(lookup("de", c), OverrideLookup::Replace(c));
        }
        assert_eq!(lookup("de", 'é'), OverrideLookup::NoOverride);
    }

    #[test]
    fn every_target_is_stable_under_its_locale() {
        let table = LocaleOverrides::builtin();
        for tag in table.locales() {
            let Some(set) = table.get(tag) else { continue };
            for (from, to) in set.entries() {
                assert_eq!(
                    set.get(to as u32),
                    Some(to),
                    "{tag}: {from} -> {to} is not a fixed point"
                );
            }
        }
    }

    #[test]
    fn ascii_key_rejected() {
        let mut set = OverrideSet::new();
        assert_eq!(set.insert('a', 'ä'), Err(OverrideError::AsciiKey('a')));
        assert!(set.is_empty());
        assert!(OverrideSet::from_pairs([('é', 'e'), ('e', 'é')]).is_err());
    }

    #[test]
    fn duplicate_insert_last_write_wins() {
        let mut set = OverrideSet::new();
        assert_eq!(set.insert('æ', 'ä'), Ok(None));
        assert_eq!(set.insert('æ', 'æ'), Ok(Some('ä')));
        assert_eq!(set.get('æ' as u32), Some('æ'));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn insert_locale_replaces_existing() {
        let mut table = LocaleOverrides::new();
        table.insert_locale("x", OverrideSet::from_pairs([('é', 'e')]).unwrap());
        table.insert_locale("x", OverrideSet::new());
        assert_eq!(table.resolve("x", 'é' as u32), OverrideLookup::NoOverride);
    }

    #[test]
    fn out_of_range_code_point_has_no_override() {
        assert_eq!(
            LocaleOverrides::builtin().resolve("fr", 0x11_0000),
            OverrideLookup::NoOverride
        );
    }

    #[test]
    fn error_display() {
        let err = OverrideError::AsciiKey('a');
        assert_eq!(
            err.to_string(),
            "ASCII character 'a' (U+0061) cannot be overridden"
        );
    }
}
