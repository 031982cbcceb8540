//! Locale tag normalization and environment detection.
//!
//! Override tables are keyed by bare language codes (`"de"`, `"sv"`).
//! Process locales arrive in richer forms (`de_DE.UTF-8`, `sv-SE`,
//! `nb_NO@euro`), so this module reduces them to the primary subtag.
//!
//! The engine never normalizes the locale it is handed; these helpers are
//! for callers that derive a locale from the environment.

use std::sync::OnceLock;

/// Locale used when the environment names none.
pub const DEFAULT_LOCALE: &str = "en";

/// Environment variables consulted by [`locale_from_env`], in order.
const ENV_KEYS: [&str; 4] = ["UNIFOLD_LOCALE", "LC_ALL", "LC_CTYPE", "LANG"];

/// Reduce a POSIX or BCP-47 locale tag to its lowercase primary subtag.
///
/// Returns `None` for empty tags and the `C`/`POSIX` pseudo-locales.
///
/// ```
/// use unifold_locale::normalize_tag;
///
/// assert_eq!(normalize_tag("de_DE.UTF-8").as_deref(), Some("de"));
/// assert_eq!(normalize_tag("fr-CA").as_deref(), Some("fr"));
/// assert_eq!(normalize_tag("nb_NO").as_deref(), Some("no"));
/// assert_eq!(normalize_tag("C.UTF-8"), None);
/// ```
#[must_use]
pub fn normalize_tag(raw: &str) -> Option<String> {
    let primary = raw
        .trim()
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default();
    if primary.is_empty() || !primary.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let lower = primary.to_ascii_lowercase();
    match lower.as_str() {
        "c" | "posix" => None,
        // Bokmål and Nynorsk share the Norwegian table.
        "nb" | "nn" => Some("no".to_owned()),
        _ => Some(lower),
    }
}

/// Derive a locale from an environment lookup.
///
/// Tries `UNIFOLD_LOCALE`, `LC_ALL`, `LC_CTYPE`, then `LANG`, returning the
/// first value that normalizes. The lookup is injected so callers (and
/// tests) can supply their own environment.
pub fn locale_from_env<F>(get_env: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    ENV_KEYS
        .iter()
        .filter_map(|&key| get_env(key))
        .find_map(|value| normalize_tag(&value))
}

/// Cached locale from the process environment, or [`DEFAULT_LOCALE`].
#[must_use]
pub fn default_locale() -> &'static str {
    static LOCALE: OnceLock<String> = OnceLock::new();
    LOCALE.get_or_init(|| {
        locale_from_env(|key| std::env::var(key).ok())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let owned: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| {
            owned
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn posix_tags() {
        assert_eq!(normalize_tag("de_DE.UTF-8").as_deref(), Some("de"));
        assert_eq!(normalize_tag("sv_SE@euro").as_deref(), Some("sv"));
        assert_eq!(normalize_tag("da_DK").as_deref(), Some("da"));
    }

    #[test]
    fn bcp47_tags() {
        assert_eq!(normalize_tag("fr-CA").as_deref(), Some("fr"));
        assert_eq!(normalize_tag("EN-us").as_deref(), Some("en"));
    }

    #[test]
    fn norwegian_variants() {
        assert_eq!(normalize_tag("nb_NO.UTF-8").as_deref(), Some("no"));
        assert_eq!(normalize_tag("nn").as_deref(), Some("no"));
        assert_eq!(normalize_tag("no").as_deref(), Some("no"));
    }

    #[test]
    fn pseudo_and_empty_tags() {
        assert_eq!(normalize_tag(""), None);
        assert_eq!(normalize_tag("  "), None);
        assert_eq!(normalize_tag("C"), None);
        assert_eq!(normalize_tag("POSIX"), None);
        assert_eq!(normalize_tag("_DE"), None);
        assert_eq!(normalize_tag("1234"), None);
    }

    #[test]
    fn env_precedence() {
        let get = env(&[
            ("LANG", "fr_FR.UTF-8"),
            ("LC_CTYPE", "de_DE.UTF-8"),
            ("UNIFOLD_LOCALE", "sv"),
        ]);
        assert_eq!(locale_from_env(get).as_deref(), Some("sv"));

        let get = env(&[("LANG", "fr_FR.UTF-8"), ("LC_CTYPE", "de_DE.UTF-8")]);
        assert_eq!(locale_from_env(get).as_deref(), Some("de"));
    }

    #[test]
    fn env_skips_unusable_values() {
        let get = env(&[("LC_ALL", "C"), ("LANG", "da_DK.UTF-8")]);
        assert_eq!(locale_from_env(get).as_deref(), Some("da"));
    }

    #[test]
    fn env_empty() {
        assert_eq!(locale_from_env(env(&[])), None);
    }

    #[test]
    fn default_locale_is_stable() {
        let first = default_locale();
        assert!(!first.is_empty());
        assert!(std::ptr::eq(first, default_locale()));
    }

    proptest! {
        #[test]
        fn normalized_tags_are_lowercase_ascii(raw in "\\PC{0,16}") {
            if let Some(tag) = normalize_tag(&raw) {
                prop_assert!(!tag.is_empty());
                prop_assert!(tag.chars().all(|c| c.is_ascii_lowercase()));
            }
        }

        #[test]
        fn normalization_is_idempotent(raw in "[a-zA-Z]{1,3}([_-][A-Z]{2})?(\\.UTF-8)?") {
            if let Some(tag) = normalize_tag(&raw) {
                prop_assert_eq!(normalize_tag(&tag), Some(tag.clone()));
            }
        }
    }
}
