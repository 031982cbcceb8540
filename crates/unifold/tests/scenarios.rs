//! End-to-end transliteration scenarios over the built-in tables.

use unifold::{Transliterator, transliterate};

#[test]
fn ascii_is_untouched() {
    assert_eq!(transliterate("hello", "fr"), "hello");
}

#[test]
fn english_uses_base_table() {
    assert_eq!(transliterate("café", "en"), "cafe");
    assert_eq!(transliterate("Straße", "en"), "Strasse");
    assert_eq!(transliterate("Ærøskøbing", "en"), "AEroskobing");
}

#[test]
fn norwegian_keeps_ae() {
    assert_eq!(transliterate("æble", "no"), "æble");
    assert_eq!(transliterate("Smörgås", "no"), "Smørgås");
}

#[test]
fn danish_matches_norwegian() {
    let text = "Ærø Ölund æble";
    assert_eq!(transliterate(text, "da"), transliterate(text, "no"));
}

#[test]
fn swedish_folds_to_a_umlaut() {
    assert_eq!(transliterate("æble", "sv"), "äble");
    assert_eq!(transliterate("Øl", "sv"), "Öl");
    assert_eq!(transliterate("Åsa", "sv"), "Åsa");
}

#[test]
fn german_keeps_umlauts() {
    assert_eq!(transliterate("Müller", "de"), "Müller");
    assert_eq!(transliterate("Größe", "de"), "Größe");
    assert_eq!(transliterate("Crème", "de"), "Creme");
}

#[test]
fn french_keeps_accents() {
    assert_eq!(transliterate("Noël à l'hôtel", "fr"), "Noël à l'hôtel");
    assert_eq!(transliterate("Ångström", "fr"), "Angstrom");
}

#[test]
fn unrecognized_locale_is_identity() {
    assert_eq!(transliterate("Müller", "xx"), "Müller");
    assert_eq!(transliterate("Müller", "de-DE"), "Müller");
    assert_eq!(transliterate("Müller", ""), "Müller");
    assert!(!Transliterator::builtin().is_recognized("DE"));
}

#[test]
fn empty_input() {
    for locale in ["fr", "no", "da", "sv", "de", "en", "xx"] {
        assert_eq!(transliterate("", locale), "");
    }
}

#[test]
fn scripts_and_symbols() {
    assert_eq!(transliterate("Москва", "en"), "Moskva");
    assert_eq!(transliterate("Ελλάδα", "en"), "Ellada");
    assert_eq!(transliterate("Tiếng Việt", "en"), "Tieng Viet");
    assert_eq!(transliterate("€5 — “ok”…", "en"), "EUR5 -- \"ok\"...");
    assert_eq!(transliterate("ﬁne ½", "en"), "fine  1/2 ");
}

#[test]
fn dropped_characters() {
    // Combining marks, C1 controls and zero-width characters map to "".
    assert_eq!(transliterate("e\u{301}", "en"), "e");
    assert_eq!(transliterate("a\u{85}b", "en"), "ab");
    assert_eq!(transliterate("a\u{200B}b", "en"), "ab");
}

#[test]
fn unmapped_characters_pass_through() {
    assert_eq!(transliterate("東京 tower", "en"), "東京 tower");
    assert_eq!(transliterate("🦀 rust", "de"), "🦀 rust");
}

#[test]
fn out_of_range_code_points_are_elided() {
    let tr = Transliterator::builtin();
    let input = [0x4D, 0xFC, 0x11_0000, 0x6C, 0xFFFF_FFFF];
    assert_eq!(tr.transliterate_code_points(input, "de"), "Mül");
    assert_eq!(tr.transliterate_code_points(input, "en"), "Mul");
}

#[test]
fn shared_across_threads() {
    let handles: Vec<_> = ["fr", "no", "sv", "de", "en"]
        .into_iter()
        .map(|locale| {
            std::thread::spawn(move || transliterate("Ærøskøbing Müller café", locale))
        })
        .collect();
    let results: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert_eq!(results[3], "AEroskobing Müller cafe");
    assert_eq!(results[4], "AEroskobing Muller cafe");
}
