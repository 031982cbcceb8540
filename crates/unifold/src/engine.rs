#![forbid(unsafe_code)]

//! Per-character resolution and the transliteration entry points.
//!
//! # Resolution order
//!
//! For a recognized locale every code point is resolved independently:
//!
//! 1. ASCII is emitted unchanged.
//! 2. A locale override emits its single replacement character.
//! 3. Code points beyond U+10FFFF (and surrogates) are dropped.
//! 4. A base-table entry emits its replacement, possibly empty.
//! 5. Anything else passes through verbatim.
//!
//! An unrecognized locale short-circuits the whole string: the input is
//! returned unchanged.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | Unrecognized locale | Input returned as-is |
//! | Code point beyond U+10FFFF | Dropped |
//! | Non-ASCII with no entry | Passed through |
//! | Empty input | Empty output |

use std::borrow::Cow;

use tracing::debug;
use unifold_locale::{LocaleOverrides, OverrideLookup, default_locale};

use crate::table::{BaseTable, MAX_CODE_POINT};

/// How a single code point was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'t> {
    /// ASCII, emitted unchanged.
    Ascii(char),
    /// Redirected by the locale's override table.
    Override(char),
    /// Not a Unicode scalar value; dropped.
    OutOfRange,
    /// Replaced by a base-table entry (empty means dropped).
    Base(&'t str),
    /// No entry anywhere; emitted unchanged.
    PassThrough(char),
}

impl Resolution<'_> {
    /// Append the resolved output to `out`.
    #[inline]
    pub fn push_to(self, out: &mut String) {
        match self {
            Self::Ascii(c) | Self::Override(c) | Self::PassThrough(c) => out.push(c),
            Self::Base(s) => out.push_str(s),
            Self::OutOfRange => {}
        }
    }
}

/// Transliterator over a base table and a set of locale overrides.
///
/// Holds shared references only, so it is `Copy` and can be used from any
/// number of threads at once.
///
/// # Example
///
/// ```
/// use unifold::Transliterator;
///
/// let t = Transliterator::builtin();
/// assert_eq!(t.transliterate("café", "en"), "cafe");
/// assert_eq!(t.transliterate("Müller", "de"), "Müller");
/// assert_eq!(t.transliterate("Müller", "xx"), "Müller");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Transliterator<'t> {
    base: &'t BaseTable,
    overrides: &'t LocaleOverrides,
}

impl Transliterator<'static> {
    /// Transliterator over the process-wide built-in tables.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BaseTable::builtin(), LocaleOverrides::builtin())
    }
}

impl<'t> Transliterator<'t> {
    /// Transliterator over caller-owned tables.
    #[must_use]
    pub const fn new(base: &'t BaseTable, overrides: &'t LocaleOverrides) -> Self {
        Self { base, overrides }
    }

    /// The base table in use.
    #[must_use]
    pub const fn base(&self) -> &'t BaseTable {
        self.base
    }

    /// The override tables in use.
    #[must_use]
    pub const fn overrides(&self) -> &'t LocaleOverrides {
        self.overrides
    }

    /// Whether `locale` has an override table (possibly empty).
    ///
    /// When this is `false`, [`transliterate`](Self::transliterate) returns
    /// its input unchanged.
    #[must_use]
    pub fn is_recognized(&self, locale: &str) -> bool {
        self.overrides.contains(locale)
    }

    /// Resolve one code point under `locale`.
    ///
    /// Returns `None` when the locale is unrecognized.
    #[must_use]
    pub fn resolve(&self, locale: &str, code_point: u32) -> Option<Resolution<'t>> {
        if code_point <= 0x7F {
            // Fast path still has to report unknown locales.
            if !self.is_recognized(locale) {
                return None;
            }
            return char::from_u32(code_point).map(Resolution::Ascii);
        }
        match self.overrides.resolve(locale, code_point) {
            OverrideLookup::UnknownLocale => None,
            OverrideLookup::Replace(c) => Some(Resolution::Override(c)),
            OverrideLookup::NoOverride => Some(self.resolve_base(code_point)),
        }
    }

    fn resolve_base(&self, code_point: u32) -> Resolution<'t> {
        if code_point > MAX_CODE_POINT {
            return Resolution::OutOfRange;
        }
        if let Some(replacement) = self.base.get(code_point) {
            return Resolution::Base(replacement);
        }
        char::from_u32(code_point).map_or(Resolution::OutOfRange, Resolution::PassThrough)
    }

    /// Transliterate `text` under `locale`, borrowing when nothing can change.
    ///
    /// Borrows for unrecognized locales and pure-ASCII input.
    #[must_use]
    pub fn fold<'a>(&self, text: &'a str, locale: &str) -> Cow<'a, str> {
        let Some(set) = self.overrides.get(locale) else {
            debug!(locale, "unrecognized locale, returning input unchanged");
            return Cow::Borrowed(text);
        };
        if text.is_ascii() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if ch.is_ascii() {
                out.push(ch);
                continue;
            }
            let code_point = ch as u32;
            match set.get(code_point) {
                Some(replacement) => out.push(replacement),
                None => self.resolve_base(code_point).push_to(&mut out),
            }
        }
        Cow::Owned(out)
    }

    /// Transliterate `text` under `locale`.
    ///
    /// Never fails: unrecognized locales return `text` unchanged, unmapped
    /// characters pass through, and dropped characters vanish.
    #[must_use]
    pub fn transliterate(&self, text: &str, locale: &str) -> String {
        self.fold(text, locale).into_owned()
    }

    /// Transliterate raw code points under `locale`.
    ///
    /// Values that are not Unicode scalar values (beyond U+10FFFF, or
    /// surrogates) are dropped. Under an unrecognized locale every valid
    /// scalar is emitted unchanged.
    #[must_use]
    pub fn transliterate_code_points<I>(&self, code_points: I, locale: &str) -> String
    where
        I: IntoIterator<Item = u32>,
    {
        let code_points = code_points.into_iter();
        let mut out = String::with_capacity(code_points.size_hint().0);
        if !self.is_recognized(locale) {
            debug!(locale, "unrecognized locale, emitting code points unchanged");
            out.extend(code_points.filter_map(char::from_u32));
            return out;
        }
        for code_point in code_points {
            if let Some(resolution) = self.resolve(locale, code_point) {
                resolution.push_to(&mut out);
            }
        }
        out
    }

    /// NFC-compose `text` before transliterating it.
    ///
    /// Decomposed input (`e` + U+0301) then meets the same override and
    /// base entries as its precomposed form.
    #[cfg(feature = "normalization")]
    #[must_use]
    pub fn fold_composed(&self, text: &str, locale: &str) -> String {
        use unicode_normalization::UnicodeNormalization;

        if !self.is_recognized(locale) || text.is_ascii() {
            return text.to_owned();
        }
        let composed: String = text.nfc().collect();
        self.transliterate(&composed, locale)
    }
}

/// Transliterate `text` under `locale` with the built-in tables.
///
/// ```
/// assert_eq!(unifold::transliterate("æble", "no"), "æble");
/// assert_eq!(unifold::transliterate("æble", "sv"), "äble");
/// assert_eq!(unifold::transliterate("Straße", "en"), "Strasse");
/// ```
#[must_use]
pub fn transliterate(text: &str, locale: &str) -> String {
    Transliterator::builtin().transliterate(text, locale)
}

/// Transliterate `text` under the locale derived from the environment.
///
/// See [`unifold_locale::default_locale`].
#[must_use]
pub fn transliterate_default(text: &str) -> String {
    transliterate(text, default_locale())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;
    use unifold_locale::OverrideSet;

    fn t(text: &str, locale: &str) -> String {
        transliterate(text, locale)
    }

    #[test]
    fn resolution_order() {
        let tr = Transliterator::builtin();
        assert_eq!(tr.resolve("de", 'a' as u32), Some(Resolution::Ascii('a')));
        assert_eq!(tr.resolve("de", 'ü' as u32), Some(Resolution::Override('ü')));
        assert_eq!(tr.resolve("en", 'ü' as u32), Some(Resolution::Base("u")));
        assert_eq!(tr.resolve("en", 0x0301), Some(Resolution::Base("")));
        assert_eq!(tr.resolve("en", '中' as u32), Some(Resolution::PassThrough('中')));
        assert_eq!(tr.resolve("en", 0x11_0000), Some(Resolution::OutOfRange));
        assert_eq!(tr.resolve("en", 0xDC00), Some(Resolution::OutOfRange));
    }

    #[test]
    fn resolve_unknown_locale() {
        let tr = Transliterator::builtin();
        assert_eq!(tr.resolve("xx", 'a' as u32), None);
        assert_eq!(tr.resolve("xx", 'é' as u32), None);
    }

    #[test]
    fn override_wins_over_base() {
        let tr = Transliterator::builtin();
        assert!(tr.base().contains('æ' as u32));
        assert_eq!(t("æ", "en"), "ae");
        assert_eq!(t("æ", "no"), "æ");
        assert_eq!(t("æ", "sv"), "ä");
    }

    #[test]
    fn fold_borrows_when_unchanged() {
        let tr = Transliterator::builtin();
        assert!(matches!(tr.fold("plain ascii", "fr"), Cow::Borrowed(_)));
        assert!(matches!(tr.fold("Müller", "xx"), Cow::Borrowed(_)));
        assert!(matches!(tr.fold("Müller", "en"), Cow::Owned(_)));
    }

    #[test]
    fn fold_matches_resolve() {
        let tr = Transliterator::builtin();
        let text = "Ærøskøbing · Ångström · Crème brûlée · Øl";
        for locale in tr.overrides().locales() {
            let mut expected = String::new();
            for ch in text.chars() {
                if let Some(r) = tr.resolve(locale, ch as u32) {
                    r.push_to(&mut expected);
                }
            }
            assert_eq!(tr.transliterate(text, locale), expected, "{locale}");
        }
    }

    #[test]
    fn code_points_drop_out_of_range() {
        let tr = Transliterator::builtin();
        let input = [u32::from('a'), 0x11_0000, u32::from('é'), u32::MAX, u32::from('b')];
        assert_eq!(tr.transliterate_code_points(input, "en"), "aeb");
        assert_eq!(tr.transliterate_code_points(input, "fr"), "aéb");
        assert_eq!(tr.transliterate_code_points(input, "xx"), "aéb");
    }

    #[test]
    fn code_points_drop_surrogates() {
        let tr = Transliterator::builtin();
        assert_eq!(tr.transliterate_code_points([0xD83D, 0x41], "en"), "A");
    }

    #[test]
    fn custom_tables() {
        let mut base = BaseTable::new();
        base.insert(0xFC, "ue").unwrap();
        let mut overrides = LocaleOverrides::new();
        overrides.insert_locale("de", OverrideSet::new());
        overrides.insert_locale("x-keep", OverrideSet::from_pairs([('ü', 'ü')]).unwrap());

        let tr = Transliterator::new(&base, &overrides);
        assert_eq!(tr.transliterate("Müller", "de"), "Mueller");
        assert_eq!(tr.transliterate("Müller", "x-keep"), "Müller");
        assert_eq!(tr.transliterate("Müller", "fr"), "Müller");
        assert_eq!(tr.transliterate("Crème", "de"), "Crème");
    }

    #[test]
    fn override_target_may_be_ascii() {
        let base = BaseTable::new();
        let mut overrides = LocaleOverrides::new();
        overrides.insert_locale("x", OverrideSet::from_pairs([('ø', 'o')]).unwrap());
        let tr = Transliterator::new(&base, &overrides);
        assert_eq!(tr.transliterate("Søren", "x"), "Soren");
    }

    #[test]
    #[traced_test]
    fn unrecognized_locale_is_logged() {
        assert_eq!(t("Müller", "de-DE"), "Müller");
        assert!(logs_contain("unrecognized locale"));
    }

    #[test]
    #[traced_test]
    fn recognized_locale_is_quiet() {
        assert_eq!(t("Müller", "de"), "Müller");
        assert!(!logs_contain("unrecognized locale"));
    }

    #[test]
    fn default_locale_entry_point() {
        let text = "plain ascii";
        assert_eq!(transliterate_default(text), text);
    }

    #[cfg(feature = "normalization")]
    #[test]
    fn composed_input_matches_precomposed() {
        let tr = Transliterator::builtin();
        assert_eq!(tr.fold_composed("Mu\u{308}ller", "de"), "Müller");
        assert_eq!(tr.fold_composed("cafe\u{301}", "fr"), "café");
        assert_eq!(tr.fold_composed("cafe\u{301}", "en"), "cafe");
        assert_eq!(tr.fold_composed("cafe\u{301}", "xx"), "cafe\u{301}");
    }
}
