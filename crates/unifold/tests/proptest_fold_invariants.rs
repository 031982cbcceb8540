//! Property-based invariant tests for transliteration.
//!
//! These hold for any input text and locale:
//!
//! 1. ASCII input is returned unchanged, for every locale.
//! 2. Unrecognized locales are the identity function.
//! 3. Re-running on the output with the same locale is a no-op.
//! 4. Under `en` the output of mapped text is pure ASCII.
//! 5. Override entries win over base-table entries.
//! 6. Out-of-range code points never reach the output and never panic.
//! 7. Transliteration distributes over concatenation (no cross-character state).

use proptest::prelude::*;
use unifold::{LocaleOverrides, MAX_CODE_POINT, Transliterator, transliterate};

// ── Helpers ─────────────────────────────────────────────────────────────

const RECOGNIZED: [&str; 6] = ["fr", "no", "da", "sv", "de", "en"];

fn recognized_locale() -> impl Strategy<Value = &'static str> {
    prop::sample::select(RECOGNIZED.to_vec())
}

fn unrecognized_locale() -> impl Strategy<Value = String> {
    "[a-zA-Z_-]{0,6}".prop_filter("must not be a known locale", |tag| {
        !RECOGNIZED.contains(&tag.as_str())
    })
}

/// Text biased towards characters the tables actually cover.
fn mixed_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        "[a-zA-Z0-9 .,'-]{0,8}",
        "[À-ÿ]{0,4}",
        "[Ā-ſ]{0,4}",
        "[А-я]{0,4}",
        "[α-ω]{0,4}",
        Just("æøåÆØÅäöüÄÖÜß".to_owned()),
        "\\PC{0,4}",
    ];
    proptest::collection::vec(piece, 0..6).prop_map(|parts| parts.concat())
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Identity cases
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn ascii_invariance(text in "[ -~\t\n]{0,64}", locale in recognized_locale()) {
        prop_assert_eq!(transliterate(&text, locale), text);
    }

    #[test]
    fn ascii_invariance_unrecognized(text in "[ -~]{0,64}", locale in unrecognized_locale()) {
        prop_assert_eq!(transliterate(&text, &locale), text);
    }

    #[test]
    fn unrecognized_locale_is_identity(text in mixed_text(), locale in unrecognized_locale()) {
        prop_assert_eq!(transliterate(&text, &locale), text);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Idempotence and ASCII output
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn idempotent(text in mixed_text(), locale in recognized_locale()) {
        let once = transliterate(&text, locale);
        let twice = transliterate(&once, locale);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn english_maps_covered_scripts_to_ascii(
        text in prop_oneof!["[À-ÿ]{0,16}", "[Ā-ſ]{0,16}", "[А-я]{0,16}", "[α-ω]{0,16}"],
    ) {
        let out = transliterate(&text, "en");
        prop_assert!(out.is_ascii(), "{:?} -> {:?}", text, out);
    }

    #[test]
    fn deterministic(text in mixed_text(), locale in recognized_locale()) {
        prop_assert_eq!(transliterate(&text, locale), transliterate(&text, locale));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Override precedence
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn overrides_win_over_base_table() {
    let tr = Transliterator::builtin();
    let overrides = LocaleOverrides::builtin();
    for locale in overrides.locales() {
        let Some(set) = overrides.get(locale) else {
            continue;
        };
        for (from, to) in set.entries() {
            let out = tr.transliterate(&from.to_string(), locale);
            assert_eq!(out, to.to_string(), "{locale}: {from}");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Out-of-range elision
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn out_of_range_never_emitted(
        valid in proptest::collection::vec(any::<char>(), 0..16),
        junk in proptest::collection::vec((MAX_CODE_POINT + 1)..=u32::MAX, 1..4),
        locale in recognized_locale(),
    ) {
        let tr = Transliterator::builtin();
        let clean: Vec<u32> = valid.iter().map(|&c| u32::from(c)).collect();
        let mut dirty = junk.clone();
        dirty.extend(&clean);
        dirty.extend(&junk);

        let expected = tr.transliterate_code_points(clean, locale);
        prop_assert_eq!(tr.transliterate_code_points(dirty, locale), expected);
    }

    #[test]
    fn code_points_agree_with_str(text in mixed_text(), locale in recognized_locale()) {
        let tr = Transliterator::builtin();
        let via_points = tr.transliterate_code_points(text.chars().map(u32::from), locale);
        prop_assert_eq!(via_points, tr.transliterate(&text, locale));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. No cross-character state
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn distributes_over_concatenation(
        left in mixed_text(),
        right in mixed_text(),
        locale in recognized_locale(),
    ) {
        let whole = transliterate(&format!("{left}{right}"), locale);
        let parts = transliterate(&left, locale) + &transliterate(&right, locale);
        prop_assert_eq!(whole, parts);
    }
}
