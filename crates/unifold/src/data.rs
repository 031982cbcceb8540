//! Embedded base transliteration data.
//!
//! Generated from the Unicode character database (compatibility
//! decomposition with combining marks removed) and hand-maintained rows for
//! letters without a decomposition (`ß`, `ø`, `Ł`), Greek, Cyrillic,
//! punctuation and symbols. Conventions follow the classic Unidecode tables.
//!
//! Rows are sorted by code point. Every key is non-ASCII and every
//! replacement is ASCII; an empty replacement drops the character.

/// `(code point, replacement)` rows for the built-in base table.
#[rustfmt::skip]
pub(crate) static BASE_ENTRIES: &[(u32, &str)] = &[
    (0x0080, ""),
    (0x0081, ""),
    (0x0082, ""),
    (0x0083, ""),
    (0x0084, ""),
    (0x0085, ""),
    (0x0086, ""),
    (0x0087, ""),
    (0x0088, ""),
    (0x0089, ""),
    (0x008A, ""),
    (0x008B, ""),
    (0x008C, ""),
    (0x008D, ""),
    (0x008E, ""),
    (0x008F, ""),
    (0x0090, ""),
    (0x0091, ""),
    (0x0092, ""),
    (0x0093, ""),
    (0x0094, ""),
    (0x0095, ""),
    (0x0096, ""),
    (0x0097, ""),
    (0x0098, ""),
    (0x0099, ""),
    (0x009A, ""),
    (0x009B, ""),
    (0x009C, ""),
    (0x009D, ""),
    (0x009E, ""),
    (0x009F, ""),
    (0x00A0, " "),
    (0x00A1, "!"), // ¡
    (0x00A2, "C/"), // ¢
    (0x00A3, "PS"), // £
    (0x00A4, "$?"), // ¤
    (0x00A5, "Y="), // ¥
    (0x00A6, "|"), // ¦
    (0x00A7, "SS"), // §
    (0x00A8, "\""), // ¨
    (0x00A9, "(c)"), // ©
    (0x00AA, "a"), // ª
    (0x00AB, "<<"), // «
    (0x00AC, "!"), // ¬
    (0x00AD, ""),
    (0x00AE, "(r)"), // ®
    (0x00AF, "-"), // ¯
    (0x00B0, "deg"), // °
    (0x00B1, "+-"), // ±
    (0x00B2, "2"), // ²
    (0x00B3, "3"), // ³
    (0x00B4, "'"), // ´
    (0x00B5, "u"), // µ
    (0x00B6, "P"), // ¶
    (0x00B7, "*"), // ·
    (0x00B8, ","), // ¸
    (0x00B9, "1"), // ¹
    (0x00BA, "o"), // º
    (0x00BB, ">>"), // »
    (0x00BC, " 1/4 "), // ¼
    (0x00BD, " 1/2 "), // ½
    (0x00BE, " 3/4 "), // ¾
    (0x00BF, "?"), // ¿
    (0x00C0, "A"), // À
    (0x00C1, "A"), // Á
    (0x00C2, "A"), // Â
    (0x00C3, "A"), // Ã
    (0x00C4, "A"), // Ä
    (0x00C5, "A"), // Å
    (0x00C6, "AE"), // Æ
    (0x00C7, "C"), // Ç
    (0x00C8, "E"), // È
    (0x00C9, "E"), // É
    (0x00CA, "E"), // Ê
    (0x00CB, "E"), // Ë
    (0x00CC, "I"), // Ì
    (0x00CD, "I"), // Í
    (0x00CE, "I"), // Î
    (0x00CF, "I"), // Ï
    (0x00D0, "D"), // Ð
    (0x00D1, "N"), // Ñ
    (0x00D2, "O"), // Ò
    (0x00D3, "O"), // Ó
    (0x00D4, "O"), // Ô
    (0x00D5, "O"), // Õ
    (0x00D6, "O"), // Ö
    (0x00D7, "x"), // ×
    (0x00D8, "O"), // Ø
    (0x00D9, "U"), // Ù
    (0x00DA, "U"), // Ú
    (0x00DB, "U"), // Û
    (0x00DC, "U"), // Ü
    (0x00DD, "Y"), // Ý
    (0x00DE, "Th"), // Þ
    (0x00DF, "ss"), // ß
    (0x00E0, "a"), // à
    (0x00E1, "a"), // á
    (0x00E2, "a"), // â
    (0x00E3, "a"), // ã
    (0x00E4, "a"), // ä
    (0x00E5, "a"), // å
    (0x00E6, "ae"), // æ
    (0x00E7, "c"), // ç
    (0x00E8, "e"), // è
    (0x00E9, "e"), // é
    (0x00EA, "e"), // ê
    (0x00EB, "e"), // ë
    (0x00EC, "i"), // ì
    (0x00ED, "i"), // í
    (0x00EE, "i"), // î
    (0x00EF, "i"), // ï
    (0x00F0, "d"), // ð
    (0x00F1, "n"), // ñ
    (0x00F2, "o"), // ò
    (0x00F3, "o"), // ó
    (0x00F4, "o"), // ô
    (0x00F5, "o"), // õ
    (0x00F6, "o"), // ö
    (0x00F7, "/"), // ÷
    (0x00F8, "o"), // ø
    (0x00F9, "u"), // ù
    (0x00FA, "u"), // ú
    (0x00FB, "u"), // û
    (0x00FC, "u"), // ü
    (0x00FD, "y"), // ý
    (0x00FE, "th"), // þ
    (0x00FF, "y"), // ÿ
    (0x0100, "A"), // Ā
    (0x0101, "a"), // ā
    (0x0102, "A"), // Ă
    (0x0103, "a"), // ă
    (0x0104, "A"), // Ą
    (0x0105, "a"), // ą
    (0x0106, "C"), // Ć
    (0x0107, "c"), // ć
    (0x0108, "C"), // Ĉ
    (0x0109, "c"), // ĉ
    (0x010A, "C"), // Ċ
    (0x010B, "c"), // ċ
    (0x010C, "C"), // Č
    (0x010D, "c"), // č
    (0x010E, "D"), // Ď
    (0x010F, "d"), // ď
    (0x0110, "D"), // Đ
    (0x0111, "d"), // đ
    (0x0112, "E"), // Ē
    (0x0113, "e"), // ē
    (0x0114, "E"), // Ĕ
    (0x0115, "e"), // ĕ
    (0x0116, "E"), // Ė
    (0x0117, "e"), // ė
    (0x0118, "E"), // Ę
    (0x0119, "e"), // ę
    (0x011A, "E"), // Ě
    (0x011B, "e"), // ě
    (0x011C, "G"), // Ĝ
    (0x011D, "g"), // ĝ
    (0x011E, "G"), // Ğ
    (0x011F, "g"), // ğ
    (0x0120, "G"), // Ġ
    (0x0121, "g"), // ġ
    (0x0122, "G"), // Ģ
    (0x0123, "g"), // ģ
    (0x0124, "H"), // Ĥ
    (0x0125, "h"), // ĥ
    (0x0126, "H"), // Ħ
    (0x0127, "h"), // ħ
    (0x0128, "I"), // Ĩ
    (0x0129, "i"), // ĩ
    (0x012A, "I"), // Ī
    (0x012B, "i"), // ī
    (0x012C, "I"), // Ĭ
    (0x012D, "i"), // ĭ
    (0x012E, "I"), // Į
    (0x012F, "i"), // į
    (0x0130, "I"), // İ
    (0x0131, "i"), // ı
    (0x0132, "IJ"), // Ĳ
    (0x0133, "ij"), // ĳ
    (0x0134, "J"), // Ĵ
    (0x0135, "j"), // ĵ
    (0x0136, "K"), // Ķ
    (0x0137, "k"), // ķ
    (0x0138, "q"), // ĸ
    (0x0139, "L"), // Ĺ
    (0x013A, "l"), // ĺ
    (0x013B, "L"), // Ļ
    (0x013C, "l"), // ļ
    (0x013D, "L"), // Ľ
    (0x013E, "l"), // ľ
    (0x013F, "L"), // Ŀ
    (0x0140, "l"), // ŀ
    (0x0141, "L"), // Ł
    (0x0142, "l"), // ł
    (0x0143, "N"), // Ń
    (0x0144, "n"), // ń
    (0x0145, "N"), // Ņ
    (0x0146, "n"), // ņ
    (0x0147, "N"), // Ň
    (0x0148, "n"), // ň
    (0x0149, "'n"), // ŉ
    (0x014A, "Ng"), // Ŋ
    (0x014B, "ng"), // ŋ
    (0x014C, "O"), // Ō
    (0x014D, "o"), // ō
    (0x014E, "O"), // Ŏ
    (0x014F, "o"), // ŏ
    (0x0150, "O"), // Ő
    (0x0151, "o"), // ő
    (0x0152, "OE"), // Œ
    (0x0153, "oe"), // œ
    (0x0154, "R"), // Ŕ
    (0x0155, "r"), // ŕ
    (0x0156, "R"), // Ŗ
    (0x0157, "r"), // ŗ
    (0x0158, "R"), // Ř
    (0x0159, "r"), // ř
    (0x015A, "S"), // Ś
    (0x015B, "s"), // ś
    (0x015C, "S"), // Ŝ
    (0x015D, "s"), // ŝ
    (0x015E, "S"), // Ş
    (0x015F, "s"), // ş
    (0x0160, "S"), // Š
    (0x0161, "s"), // š
    (0x0162, "T"), // Ţ
    (0x0163, "t"), // ţ
    (0x0164, "T"), // Ť
    (0x0165, "t"), // ť
    (0x0166, "T"), // Ŧ
    (0x0167, "t"), // ŧ
    (0x0168, "U"), // Ũ
    (0x0169, "u"), // ũ
    (0x016A, "U"), // Ū
    (0x016B, "u"), // ū
    (0x016C, "U"), // Ŭ
    (0x016D, "u"), // ŭ
    (0x016E, "U"), // Ů
    (0x016F, "u"), // ů
    (0x0170, "U"), // Ű
    (0x0171, "u"), // ű
    (0x0172, "U"), // Ų
    (0x0173, "u"), // ų
    (0x0174, "W"), // Ŵ
    (0x0175, "w"), // ŵ
    (0x0176, "Y"), // Ŷ
    (0x0177, "y"), // ŷ
    (0x0178, "Y"), // Ÿ
    (0x0179, "Z"), // Ź
    (0x017A, "z"), // ź
    (0x017B, "Z"), // Ż
    (0x017C, "z"), // ż
    (0x017D, "Z"), // Ž
    (0x017E, "z"), // ž
    (0x017F, "s"), // ſ
    (0x0180, "b"), // ƀ
    (0x0181, "B"), // Ɓ
    (0x0182, "B"), // Ƃ
    (0x0183, "b"), // ƃ
    (0x0187, "C"), // Ƈ
    (0x0188, "c"), // ƈ
    (0x0189, "D"), // Ɖ
    (0x018A, "D"), // Ɗ
    (0x018B, "D"), // Ƌ
    (0x018C, "d"), // ƌ
    (0x018E, "E"), // Ǝ
    (0x0190, "E"), // Ɛ
    (0x0191, "F"), // Ƒ
    (0x0192, "f"), // ƒ
    (0x0193, "G"), // Ɠ
    (0x0195, "hv"), // ƕ
    (0x0196, "I"), // Ɩ
    (0x0197, "I"), // Ɨ
    (0x0198, "K"), // Ƙ
    (0x0199, "k"), // ƙ
    (0x019A, "l"), // ƚ
    (0x019D, "N"), // Ɲ
    (0x019E, "n"), // ƞ
    (0x019F, "O"), // Ɵ
    (0x01A0, "O"), // Ơ
    (0x01A1, "o"), // ơ
    (0x01A2, "OI"), // Ƣ
    (0x01A3, "oi"), // ƣ
    (0x01A4, "P"), // Ƥ
    (0x01A5, "p"), // ƥ
    (0x01AB, "t"), // ƫ
    (0x01AC, "T"), // Ƭ
    (0x01AD, "t"), // ƭ
    (0x01AE, "T"), // Ʈ
    (0x01AF, "U"), // Ư
    (0x01B0, "u"), // ư
    (0x01B2, "V"), // Ʋ
    (0x01B3, "Y"), // Ƴ
    (0x01B4, "y"), // ƴ
    (0x01B5, "Z"), // Ƶ
    (0x01B6, "z"), // ƶ
    (0x01C4, "DZ"), // Ǆ
    (0x01C5, "Dz"), // ǅ
    (0x01C6, "dz"), // ǆ
    (0x01C7, "LJ"), // Ǉ
    (0x01C8, "Lj"), // ǈ
    (0x01C9, "lj"), // ǉ
    (0x01CA, "NJ"), // Ǌ
    (0x01CB, "Nj"), // ǋ
    (0x01CC, "nj"), // ǌ
    (0x01CD, "A"), // Ǎ
    (0x01CE, "a"), // ǎ
    (0x01CF, "I"), // Ǐ
    (0x01D0, "i"), // ǐ
    (0x01D1, "O"), // Ǒ
    (0x01D2, "o"), // ǒ
    (0x01D3, "U"), // Ǔ
    (0x01D4, "u"), // ǔ
    (0x01D5, "U"), // Ǖ
    (0x01D6, "u"), // ǖ
    (0x01D7, "U"), // Ǘ
    (0x01D8, "u"), // ǘ
    (0x01D9, "U"), // Ǚ
    (0x01DA, "u"), // ǚ
    (0x01DB, "U"), // Ǜ
    (0x01DC, "u"), // ǜ
    (0x01DE, "A"), // Ǟ
    (0x01DF, "a"), // ǟ
    (0x01E0, "A"), // Ǡ
    (0x01E1, "a"), // ǡ
    (0x01E4, "G"), // Ǥ
    (0x01E5, "g"), // ǥ
    (0x01E6, "G"), // Ǧ
    (0x01E7, "g"), // ǧ
    (0x01E8, "K"), // Ǩ
    (0x01E9, "k"), // ǩ
    (0x01EA, "O"), // Ǫ
    (0x01EB, "o"), // ǫ
    (0x01EC, "O"), // Ǭ
    (0x01ED, "o"), // ǭ
    (0x01F0, "j"), // ǰ
    (0x01F1, "DZ"), // Ǳ
    (0x01F2, "Dz"), // ǲ
    (0x01F3, "dz"), // ǳ
    (0x01F4, "G"), // Ǵ
    (0x01F5, "g"), // ǵ
    (0x01F6, "Hv"), // Ƕ
    (0x01F7, "W"), // Ƿ
    (0x01F8, "N"), // Ǹ
    (0x01F9, "n"), // ǹ
    (0x01FA, "A"), // Ǻ
    (0x01FB, "a"), // ǻ
    (0x0200, "A"), // Ȁ
    (0x0201, "a"), // ȁ
    (0x0202, "A"), // Ȃ
    (0x0203, "a"), // ȃ
    (0x0204, "E"), // Ȅ
    (0x0205, "e"), // ȅ
    (0x0206, "E"), // Ȇ
    (0x0207, "e"), // ȇ
    (0x0208, "I"), // Ȉ
    (0x0209, "i"), // ȉ
    (0x020A, "I"), // Ȋ
    (0x020B, "i"), // ȋ
    (0x020C, "O"), // Ȍ
    (0x020D, "o"), // ȍ
    (0x020E, "O"), // Ȏ
    (0x020F, "o"), // ȏ
    (0x0210, "R"), // Ȑ
    (0x0211, "r"), // ȑ
    (0x0212, "R"), // Ȓ
    (0x0213, "r"), // ȓ
    (0x0214, "U"), // Ȕ
    (0x0215, "u"), // ȕ
    (0x0216, "U"), // Ȗ
    (0x0217, "u"), // ȗ
    (0x0218, "S"), // Ș
    (0x0219, "s"), // ș
    (0x021A, "T"), // Ț
    (0x021B, "t"), // ț
    (0x021C, "Y"), // Ȝ
    (0x021D, "y"), // ȝ
    (0x021E, "H"), // Ȟ
    (0x021F, "h"), // ȟ
    (0x0220, "N"), // Ƞ
    (0x0221, "d"), // ȡ
    (0x0224, "Z"), // Ȥ
    (0x0225, "z"), // ȥ
    (0x0226, "A"), // Ȧ
    (0x0227, "a"), // ȧ
    (0x0228, "E"), // Ȩ
    (0x0229, "e"), // ȩ
    (0x022A, "O"), // Ȫ
    (0x022B, "o"), // ȫ
    (0x022C, "O"), // Ȭ
    (0x022D, "o"), // ȭ
    (0x022E, "O"), // Ȯ
    (0x022F, "o"), // ȯ
    (0x0230, "O"), // Ȱ
    (0x0231, "o"), // ȱ
    (0x0232, "Y"), // Ȳ
    (0x0233, "y"), // ȳ
    (0x0234, "l"), // ȴ
    (0x0235, "n"), // ȵ
    (0x0236, "t"), // ȶ
    (0x0237, "j"), // ȷ
    (0x023A, "A"), // Ⱥ
    (0x023B, "C"), // Ȼ
    (0x023C, "c"), // ȼ
    (0x023D, "L"), // Ƚ
    (0x023E, "T"), // Ⱦ
    (0x023F, "s"), // ȿ
    (0x0240, "z"), // ɀ
    (0x0243, "B"), // Ƀ
    (0x0244, "U"), // Ʉ
    (0x0246, "E"), // Ɇ
    (0x0247, "e"), // ɇ
    (0x0248, "J"), // Ɉ
    (0x0249, "j"), // ɉ
    (0x024A, "Q"), // Ɋ
    (0x024B, "q"), // ɋ
    (0x024C, "R"), // Ɍ
    (0x024D, "r"), // ɍ
    (0x024E, "Y"), // Ɏ
    (0x024F, "y"), // ɏ
    (0x02B9, "'"), // ʹ
    (0x02BA, "\""), // ʺ
    (0x02BB, "'"), // ʻ
    (0x02BC, "'"), // ʼ
    (0x02BD, "'"), // ʽ
    (0x02C6, "^"), // ˆ
    (0x02C8, "'"), // ˈ
    (0x02CB, "`"), // ˋ
    (0x02CD, "_"), // ˍ
    (0x02DA, ""), // ˚
    (0x02DC, "~"), // ˜
    (0x0300, ""),
    (0x0301, ""),
    (0x0302, ""),
    (0x0303, ""),
    (0x0304, ""),
    (0x0305, ""),
    (0x0306, ""),
    (0x0307, ""),
    (0x0308, ""),
    (0x0309, ""),
    (0x030A, ""),
    (0x030B, ""),
    (0x030C, ""),
    (0x030D, ""),
    (0x030E, ""),
    (0x030F, ""),
    (0x0310, ""),
    (0x0311, ""),
    (0x0312, ""),
    (0x0313, ""),
    (0x0314, ""),
    (0x0315, ""),
    (0x0316, ""),
    (0x0317, ""),
    (0x0318, ""),
    (0x0319, ""),
    (0x031A, ""),
    (0x031B, ""),
    (0x031C, ""),
    (0x031D, ""),
    (0x031E, ""),
    (0x031F, ""),
    (0x0320, ""),
    (0x0321, ""),
    (0x0322, ""),
    (0x0323, ""),
    (0x0324, ""),
    (0x0325, ""),
    (0x0326, ""),
    (0x0327, ""),
    (0x0328, ""),
    (0x0329, ""),
    (0x032A, ""),
    (0x032B, ""),
    (0x032C, ""),
    (0x032D, ""),
    (0x032E, ""),
    (0x032F, ""),
    (0x0330, ""),
    (0x0331, ""),
    (0x0332, ""),
    (0x0333, ""),
    (0x0334, ""),
    (0x0335, ""),
    (0x0336, ""),
    (0x0337, ""),
    (0x0338, ""),
    (0x0339, ""),
    (0x033A, ""),
    (0x033B, ""),
    (0x033C, ""),
    (0x033D, ""),
    (0x033E, ""),
    (0x033F, ""),
    (0x0340, ""),
    (0x0341, ""),
    (0x0342, ""),
    (0x0343, ""),
    (0x0344, ""),
    (0x0345, ""),
    (0x0346, ""),
    (0x0347, ""),
    (0x0348, ""),
    (0x0349, ""),
    (0x034A, ""),
    (0x034B, ""),
    (0x034C, ""),
    (0x034D, ""),
    (0x034E, ""),
    (0x034F, ""),
    (0x0350, ""),
    (0x0351, ""),
    (0x0352, ""),
    (0x0353, ""),
    (0x0354, ""),
    (0x0355, ""),
    (0x0356, ""),
    (0x0357, ""),
    (0x0358, ""),
    (0x0359, ""),
    (0x035A, ""),
    (0x035B, ""),
    (0x035C, ""),
    (0x035D, ""),
    (0x035E, ""),
    (0x035F, ""),
    (0x0360, ""),
    (0x0361, ""),
    (0x0362, ""),
    (0x0363, ""),
    (0x0364, ""),
    (0x0365, ""),
    (0x0366, ""),
    (0x0367, ""),
    (0x0368, ""),
    (0x0369, ""),
    (0x036A, ""),
    (0x036B, ""),
    (0x036C, ""),
    (0x036D, ""),
    (0x036E, ""),
    (0x036F, ""),
    (0x037E, "?"), // ;
    (0x0386, "A"), // Ά
    (0x0387, ";"), // ·
    (0x0388, "E"), // Έ
    (0x0389, "E"), // Ή
    (0x038A, "I"), // Ί
    (0x038C, "O"), // Ό
    (0x038E, "U"), // Ύ
    (0x038F, "O"), // Ώ
    (0x0390, "i"), // ΐ
    (0x0391, "A"), // Α
    (0x0392, "B"), // Β
    (0x0393, "G"), // Γ
    (0x0394, "D"), // Δ
    (0x0395, "E"), // Ε
    (0x0396, "Z"), // Ζ
    (0x0397, "E"), // Η
    (0x0398, "Th"), // Θ
    (0x0399, "I"), // Ι
    (0x039A, "K"), // Κ
    (0x039B, "L"), // Λ
    (0x039C, "M"), // Μ
    (0x039D, "N"), // Ν
    (0x039E, "X"), // Ξ
    (0x039F, "O"), // Ο
    (0x03A0, "P"), // Π
    (0x03A1, "R"), // Ρ
    (0x03A3, "S"), // Σ
    (0x03A4, "T"), // Τ
    (0x03A5, "U"), // Υ
    (0x03A6, "Ph"), // Φ
    (0x03A7, "Kh"), // Χ
    (0x03A8, "Ps"), // Ψ
    (0x03A9, "O"), // Ω
    (0x03AA, "I"), // Ϊ
    (0x03AB, "U"), // Ϋ
    (0x03AC, "a"), // ά
    (0x03AD, "e"), // έ
    (0x03AE, "e"), // ή
    (0x03AF, "i"), // ί
    (0x03B0, "u"), // ΰ
    (0x03B1, "a"), // α
    (0x03B2, "b"), // β
    (0x03B3, "g"), // γ
    (0x03B4, "d"), // δ
    (0x03B5, "e"), // ε
    (0x03B6, "z"), // ζ
    (0x03B7, "e"), // η
    (0x03B8, "th"), // θ
    (0x03B9, "i"), // ι
    (0x03BA, "k"), // κ
    (0x03BB, "l"), // λ
    (0x03BC, "m"), // μ
    (0x03BD, "n"), // ν
    (0x03BE, "x"), // ξ
    (0x03BF, "o"), // ο
    (0x03C0, "p"), // π
    (0x03C1, "r"), // ρ
    (0x03C2, "s"), // ς
    (0x03C3, "s"), // σ
    (0x03C4, "t"), // τ
    (0x03C5, "u"), // υ
    (0x03C6, "ph"), // φ
    (0x03C7, "kh"), // χ
    (0x03C8, "ps"), // ψ
    (0x03C9, "o"), // ω
    (0x03CA, "i"), // ϊ
    (0x03CB, "u"), // ϋ
    (0x03CC, "o"), // ό
    (0x03CD, "u"), // ύ
    (0x03CE, "o"), // ώ
    (0x0400, "Ie"), // Ѐ
    (0x0401, "Io"), // Ё
    (0x0402, "Dj"), // Ђ
    (0x0403, "Gj"), // Ѓ
    (0x0404, "Ie"), // Є
    (0x0405, "Dz"), // Ѕ
    (0x0406, "I"), // І
    (0x0407, "Yi"), // Ї
    (0x0408, "J"), // Ј
    (0x0409, "Lj"), // Љ
    (0x040A, "Nj"), // Њ
    (0x040B, "Tsh"), // Ћ
    (0x040C, "Kj"), // Ќ
    (0x040D, "I"), // Ѝ
    (0x040E, "U"), // Ў
    (0x040F, "Dzh"), // Џ
    (0x0410, "A"), // А
    (0x0411, "B"), // Б
    (0x0412, "V"), // В
    (0x0413, "G"), // Г
    (0x0414, "D"), // Д
    (0x0415, "E"), // Е
    (0x0416, "Zh"), // Ж
    (0x0417, "Z"), // З
    (0x0418, "I"), // И
    (0x0419, "I"), // Й
    (0x041A, "K"), // К
    (0x041B, "L"), // Л
    (0x041C, "M"), // М
    (0x041D, "N"), // Н
    (0x041E, "O"), // О
    (0x041F, "P"), // П
    (0x0420, "R"), // Р
    (0x0421, "S"), // С
    (0x0422, "T"), // Т
    (0x0423, "U"), // У
    (0x0424, "F"), // Ф
    (0x0425, "Kh"), // Х
    (0x0426, "Ts"), // Ц
    (0x0427, "Ch"), // Ч
    (0x0428, "Sh"), // Ш
    (0x0429, "Shch"), // Щ
    (0x042A, "'"), // Ъ
    (0x042B, "Y"), // Ы
    (0x042C, "'"), // Ь
    (0x042D, "E"), // Э
    (0x042E, "Iu"), // Ю
    (0x042F, "Ia"), // Я
    (0x0430, "a"), // а
    (0x0431, "b"), // б
    (0x0432, "v"), // в
    (0x0433, "g"), // г
    (0x0434, "d"), // д
    (0x0435, "e"), // е
    (0x0436, "zh"), // ж
    (0x0437, "z"), // з
    (0x0438, "i"), // и
    (0x0439, "i"), // й
    (0x043A, "k"), // к
    (0x043B, "l"), // л
    (0x043C, "m"), // м
    (0x043D, "n"), // н
    (0x043E, "o"), // о
    (0x043F, "p"), // п
    (0x0440, "r"), // р
    (0x0441, "s"), // с
    (0x0442, "t"), // т
    (0x0443, "u"), // у
    (0x0444, "f"), // ф
    (0x0445, "kh"), // х
    (0x0446, "ts"), // ц
    (0x0447, "ch"), // ч
    (0x0448, "sh"), // ш
    (0x0449, "shch"), // щ
    (0x044A, "'"), // ъ
    (0x044B, "y"), // ы
    (0x044C, "'"), // ь
    (0x044D, "e"), // э
    (0x044E, "iu"), // ю
    (0x044F, "ia"), // я
    (0x0450, "ie"), // ѐ
    (0x0451, "io"), // ё
    (0x0452, "dj"), // ђ
    (0x0453, "gj"), // ѓ
    (0x0454, "ie"), // є
    (0x0455, "dz"), // ѕ
    (0x0456, "i"), // і
    (0x0457, "yi"), // ї
    (0x0458, "j"), // ј
    (0x0459, "lj"), // љ
    (0x045A, "nj"), // њ
    (0x045B, "tsh"), // ћ
    (0x045C, "kj"), // ќ
    (0x045D, "i"), // ѝ
    (0x045E, "u"), // ў
    (0x045F, "dzh"), // џ
    (0x0490, "G"), // Ґ
    (0x0491, "g"), // ґ
    (0x1E00, "A"), // Ḁ
    (0x1E01, "a"), // ḁ
    (0x1E02, "B"), // Ḃ
    (0x1E03, "b"), // ḃ
    (0x1E04, "B"), // Ḅ
    (0x1E05, "b"), // ḅ
    (0x1E06, "B"), // Ḇ
    (0x1E07, "b"), // ḇ
    (0x1E08, "C"), // Ḉ
    (0x1E09, "c"), // ḉ
    (0x1E0A, "D"), // Ḋ
    (0x1E0B, "d"), // ḋ
    (0x1E0C, "D"), // Ḍ
    (0x1E0D, "d"), // ḍ
    (0x1E0E, "D"), // Ḏ
    (0x1E0F, "d"), // ḏ
    (0x1E10, "D"), // Ḑ
    (0x1E11, "d"), // ḑ
    (0x1E12, "D"), // Ḓ
    (0x1E13, "d"), // ḓ
    (0x1E14, "E"), // Ḕ
    (0x1E15, "e"), // ḕ
    (0x1E16, "E"), // Ḗ
    (0x1E17, "e"), // ḗ
    (0x1E18, "E"), // Ḙ
    (0x1E19, "e"), // ḙ
    (0x1E1A, "E"), // Ḛ
    (0x1E1B, "e"), // ḛ
    (0x1E1C, "E"), // Ḝ
    (0x1E1D, "e"), // ḝ
    (0x1E1E, "F"), // Ḟ
    (0x1E1F, "f"), // ḟ
    (0x1E20, "G"), // Ḡ
    (0x1E21, "g"), // ḡ
    (0x1E22, "H"), // Ḣ
    (0x1E23, "h"), // ḣ
    (0x1E24, "H"), // Ḥ
    (0x1E25, "h"), // ḥ
    (0x1E26, "H"), // Ḧ
    (0x1E27, "h"), // ḧ
    (0x1E28, "H"), // Ḩ
    (0x1E29, "h"), // ḩ
    (0x1E2A, "H"), // Ḫ
    (0x1E2B, "h"), // ḫ
    (0x1E2C, "I"), // Ḭ
    (0x1E2D, "i"), // ḭ
    (0x1E2E, "I"), // Ḯ
    (0x1E2F, "i"), // ḯ
    (0x1E30, "K"), // Ḱ
    (0x1E31, "k"), // ḱ
    (0x1E32, "K"), // Ḳ
    (0x1E33, "k"), // ḳ
    (0x1E34, "K"), // Ḵ
    (0x1E35, "k"), // ḵ
    (0x1E36, "L"), // Ḷ
    (0x1E37, "l"), // ḷ
    (0x1E38, "L"), // Ḹ
    (0x1E39, "l"), // ḹ
    (0x1E3A, "L"), // Ḻ
    (0x1E3B, "l"), // ḻ
    (0x1E3C, "L"), // Ḽ
    (0x1E3D, "l"), // ḽ
    (0x1E3E, "M"), // Ḿ
    (0x1E3F, "m"), // ḿ
    (0x1E40, "M"), // Ṁ
    (0x1E41, "m"), // ṁ
    (0x1E42, "M"), // Ṃ
    (0x1E43, "m"), // ṃ
    (0x1E44, "N"), // Ṅ
    (0x1E45, "n"), // ṅ
    (0x1E46, "N"), // Ṇ
    (0x1E47, "n"), // ṇ
    (0x1E48, "N"), // Ṉ
    (0x1E49, "n"), // ṉ
    (0x1E4A, "N"), // Ṋ
    (0x1E4B, "n"), // ṋ
    (0x1E4C, "O"), // Ṍ
    (0x1E4D, "o"), // ṍ
    (0x1E4E, "O"), // Ṏ
    (0x1E4F, "o"), // ṏ
    (0x1E50, "O"), // Ṑ
    (0x1E51, "o"), // ṑ
    (0x1E52, "O"), // Ṓ
    (0x1E53, "o"), // ṓ
    (0x1E54, "P"), // Ṕ
    (0x1E55, "p"), // ṕ
    (0x1E56, "P"), // Ṗ
    (0x1E57, "p"), // ṗ
    (0x1E58, "R"), // Ṙ
    (0x1E59, "r"), // ṙ
    (0x1E5A, "R"), // Ṛ
    (0x1E5B, "r"), // ṛ
    (0x1E5C, "R"), // Ṝ
    (0x1E5D, "r"), // ṝ
    (0x1E5E, "R"), // Ṟ
    (0x1E5F, "r"), // ṟ
    (0x1E60, "S"), // Ṡ
    (0x1E61, "s"), // ṡ
    (0x1E62, "S"), // Ṣ
    (0x1E63, "s"), // ṣ
    (0x1E64, "S"), // Ṥ
    (0x1E65, "s"), // ṥ
    (0x1E66, "S"), // Ṧ
    (0x1E67, "s"), // ṧ
    (0x1E68, "S"), // Ṩ
    (0x1E69, "s"), // ṩ
    (0x1E6A, "T"), // Ṫ
    (0x1E6B, "t"), // ṫ
    (0x1E6C, "T"), // Ṭ
    (0x1E6D, "t"), // ṭ
    (0x1E6E, "T"), // Ṯ
    (0x1E6F, "t"), // ṯ
    (0x1E70, "T"), // Ṱ
    (0x1E71, "t"), // ṱ
    (0x1E72, "U"), // Ṳ
    (0x1E73, "u"), // ṳ
    (0x1E74, "U"), // Ṵ
    (0x1E75, "u"), // ṵ
    (0x1E76, "U"), // Ṷ
    (0x1E77, "u"), // ṷ
    (0x1E78, "U"), // Ṹ
    (0x1E79, "u"), // ṹ
    (0x1E7A, "U"), // Ṻ
    (0x1E7B, "u"), // ṻ
    (0x1E7C, "V"), // Ṽ
    (0x1E7D, "v"), // ṽ
    (0x1E7E, "V"), // Ṿ
    (0x1E7F, "v"), // ṿ
    (0x1E80, "W"), // Ẁ
    (0x1E81, "w"), // ẁ
    (0x1E82, "W"), // Ẃ
    (0x1E83, "w"), // ẃ
    (0x1E84, "W"), // Ẅ
    (0x1E85, "w"), // ẅ
    (0x1E86, "W"), // Ẇ
    (0x1E87, "w"), // ẇ
    (0x1E88, "W"), // Ẉ
    (0x1E89, "w"), // ẉ
    (0x1E8A, "X"), // Ẋ
    (0x1E8B, "x"), // ẋ
    (0x1E8C, "X"), // Ẍ
    (0x1E8D, "x"), // ẍ
    (0x1E8E, "Y"), // Ẏ
    (0x1E8F, "y"), // ẏ
    (0x1E90, "Z"), // Ẑ
    (0x1E91, "z"), // ẑ
    (0x1E92, "Z"), // Ẓ
    (0x1E93, "z"), // ẓ
    (0x1E94, "Z"), // Ẕ
    (0x1E95, "z"), // ẕ
    (0x1E96, "h"), // ẖ
    (0x1E97, "t"), // ẗ
    (0x1E98, "w"), // ẘ
    (0x1E99, "y"), // ẙ
    (0x1E9B, "s"), // ẛ
    (0x1E9E, "Ss"), // ẞ
    (0x1EA0, "A"), // Ạ
    (0x1EA1, "a"), // ạ
    (0x1EA2, "A"), // Ả
    (0x1EA3, "a"), // ả
    (0x1EA4, "A"), // Ấ
    (0x1EA5, "a"), // ấ
    (0x1EA6, "A"), // Ầ
    (0x1EA7, "a"), // ầ
    (0x1EA8, "A"), // Ẩ
    (0x1EA9, "a"), // ẩ
    (0x1EAA, "A"), // Ẫ
    (0x1EAB, "a"), // ẫ
    (0x1EAC, "A"), // Ậ
    (0x1EAD, "a"), // ậ
    (0x1EAE, "A"), // Ắ
    (0x1EAF, "a"), // ắ
    (0x1EB0, "A"), // Ằ
    (0x1EB1, "a"), // ằ
    (0x1EB2, "A"), // Ẳ
    (0x1EB3, "a"), // ẳ
    (0x1EB4, "A"), // Ẵ
    (0x1EB5, "a"), // ẵ
    (0x1EB6, "A"), // Ặ
    (0x1EB7, "a"), // ặ
    (0x1EB8, "E"), // Ẹ
    (0x1EB9, "e"), // ẹ
    (0x1EBA, "E"), // Ẻ
    (0x1EBB, "e"), // ẻ
    (0x1EBC, "E"), // Ẽ
    (0x1EBD, "e"), // ẽ
    (0x1EBE, "E"), // Ế
    (0x1EBF, "e"), // ế
    (0x1EC0, "E"), // Ề
    (0x1EC1, "e"), // ề
    (0x1EC2, "E"), // Ể
    (0x1EC3, "e"), // ể
    (0x1EC4, "E"), // Ễ
    (0x1EC5, "e"), // ễ
    (0x1EC6, "E"), // Ệ
    (0x1EC7, "e"), // ệ
    (0x1EC8, "I"), // Ỉ
    (0x1EC9, "i"), // ỉ
    (0x1ECA, "I"), // Ị
    (0x1ECB, "i"), // ị
    (0x1ECC, "O"), // Ọ
    (0x1ECD, "o"), // ọ
    (0x1ECE, "O"), // Ỏ
    (0x1ECF, "o"), // ỏ
    (0x1ED0, "O"), // Ố
    (0x1ED1, "o"), // ố
    (0x1ED2, "O"), // Ồ
    (0x1ED3, "o"), // ồ
    (0x1ED4, "O"), // Ổ
    (0x1ED5, "o"), // ổ
    (0x1ED6, "O"), // Ỗ
    (0x1ED7, "o"), // ỗ
    (0x1ED8, "O"), // Ộ
    (0x1ED9, "o"), // ộ
    (0x1EDA, "O"), // Ớ
    (0x1EDB, "o"), // ớ
    (0x1EDC, "O"), // Ờ
    (0x1EDD, "o"), // ờ
    (0x1EDE, "O"), // Ở
    (0x1EDF, "o"), // ở
    (0x1EE0, "O"), // Ỡ
    (0x1EE1, "o"), // ỡ
    (0x1EE2, "O"), // Ợ
    (0x1EE3, "o"), // ợ
    (0x1EE4, "U"), // Ụ
    (0x1EE5, "u"), // ụ
    (0x1EE6, "U"), // Ủ
    (0x1EE7, "u"), // ủ
    (0x1EE8, "U"), // Ứ
    (0x1EE9, "u"), // ứ
    (0x1EEA, "U"), // Ừ
    (0x1EEB, "u"), // ừ
    (0x1EEC, "U"), // Ử
    (0x1EED, "u"), // ử
    (0x1EEE, "U"), // Ữ
    (0x1EEF, "u"), // ữ
    (0x1EF0, "U"), // Ự
    (0x1EF1, "u"), // ự
    (0x1EF2, "Y"), // Ỳ
    (0x1EF3, "y"), // ỳ
    (0x1EF4, "Y"), // Ỵ
    (0x1EF5, "y"), // ỵ
    (0x1EF6, "Y"), // Ỷ
    (0x1EF7, "y"), // ỷ
    (0x1EF8, "Y"), // Ỹ
    (0x1EF9, "y"), // ỹ
    (0x2000, " "),
    (0x2001, " "),
    (0x2002, " "),
    (0x2003, " "),
    (0x2004, " "),
    (0x2005, " "),
    (0x2006, " "),
    (0x2007, " "),
    (0x2008, " "),
    (0x2009, " "),
    (0x200A, " "),
    (0x200B, ""),
    (0x200C, ""),
    (0x200D, ""),
    (0x200E, ""),
    (0x200F, ""),
    (0x2010, "-"), // ‐
    (0x2011, "-"), // ‑
    (0x2012, "-"), // ‒
    (0x2013, "-"), // –
    (0x2014, "--"), // —
    (0x2015, "--"), // ―
    (0x2016, "||"), // ‖
    (0x2017, "_"), // ‗
    (0x2018, "'"), // ‘
    (0x2019, "'"), // ’
    (0x201A, ","), // ‚
    (0x201B, "'"), // ‛
    (0x201C, "\""), // “
    (0x201D, "\""), // ”
    (0x201E, ",,"), // „
    (0x201F, "\""), // ‟
    (0x2020, "+"), // †
    (0x2021, "++"), // ‡
    (0x2022, "*"), // •
    (0x2023, "*>"), // ‣
    (0x2024, "."), // ․
    (0x2025, ".."), // ‥
    (0x2026, "..."), // …
    (0x2027, "."), // ‧
    (0x2028, "\n"),
    (0x2029, "\n\n"),
    (0x202A, ""),
    (0x202B, ""),
    (0x202C, ""),
    (0x202D, ""),
    (0x202E, ""),
    (0x202F, " "),
    (0x2030, "%0"), // ‰
    (0x2031, "%00"), // ‱
    (0x2032, "'"), // ′
    (0x2033, "''"), // ″
    (0x2034, "'''"), // ‴
    (0x2035, "`"), // ‵
    (0x2036, "``"), // ‶
    (0x2037, "```"), // ‷
    (0x2038, "^"), // ‸
    (0x2039, "<"), // ‹
    (0x203A, ">"), // ›
    (0x203B, "*"), // ※
    (0x203C, "!!"), // ‼
    (0x203D, "!?"), // ‽
    (0x2043, "-"), // ⁃
    (0x2044, "/"), // ⁄
    (0x2047, "??"), // ⁇
    (0x2048, "?!"), // ⁈
    (0x2049, "!?"), // ⁉
    (0x204E, "*"), // ⁎
    (0x205F, " "),
    (0x2060, ""),
    (0x2061, ""),
    (0x2062, ""),
    (0x2063, ""),
    (0x2064, ""),
    (0x2070, "0"), // ⁰
    (0x2071, "i"), // ⁱ
    (0x2074, "4"), // ⁴
    (0x2075, "5"), // ⁵
    (0x2076, "6"), // ⁶
    (0x2077, "7"), // ⁷
    (0x2078, "8"), // ⁸
    (0x2079, "9"), // ⁹
    (0x207A, "+"), // ⁺
    (0x207C, "="), // ⁼
    (0x207D, "("), // ⁽
    (0x207E, ")"), // ⁾
    (0x207F, "n"), // ⁿ
    (0x2080, "0"), // ₀
    (0x2081, "1"), // ₁
    (0x2082, "2"), // ₂
    (0x2083, "3"), // ₃
    (0x2084, "4"), // ₄
    (0x2085, "5"), // ₅
    (0x2086, "6"), // ₆
    (0x2087, "7"), // ₇
    (0x2088, "8"), // ₈
    (0x2089, "9"), // ₉
    (0x208A, "+"), // ₊
    (0x208C, "="), // ₌
    (0x208D, "("), // ₍
    (0x208E, ")"), // ₎
    (0x2090, "a"), // ₐ
    (0x2091, "e"), // ₑ
    (0x2092, "o"), // ₒ
    (0x2093, "x"), // ₓ
    (0x2095, "h"), // ₕ
    (0x2096, "k"), // ₖ
    (0x2097, "l"), // ₗ
    (0x2098, "m"), // ₘ
    (0x2099, "n"), // ₙ
    (0x209A, "p"), // ₚ
    (0x209B, "s"), // ₛ
    (0x209C, "t"), // ₜ
    (0x20A0, "CE"), // ₠
    (0x20A1, "C="), // ₡
    (0x20A2, "Cr"), // ₢
    (0x20A3, "Fr."), // ₣
    (0x20A4, "L."), // ₤
    (0x20A5, "mil"), // ₥
    (0x20A6, "N"), // ₦
    (0x20A7, "Pts"), // ₧
    (0x20A8, "Rs"), // ₨
    (0x20A9, "W"), // ₩
    (0x20AA, "NS"), // ₪
    (0x20AB, "D"), // ₫
    (0x20AC, "EUR"), // €
    (0x20AD, "K"), // ₭
    (0x20AE, "T"), // ₮
    (0x20AF, "Dr"), // ₯
    (0x20B1, "P"), // ₱
    (0x20B2, "G"), // ₲
    (0x20B4, "UAH"), // ₴
    (0x20B5, "C"), // ₵
    (0x20B8, "T"), // ₸
    (0x20B9, "Rs"), // ₹
    (0x20BA, "TL"), // ₺
    (0x20BD, "RUB"), // ₽
    (0x20BF, "BTC"), // ₿
    (0x2100, "a/c"), // ℀
    (0x2101, "a/s"), // ℁
    (0x2102, "C"), // ℂ
    (0x2103, "degC"), // ℃
    (0x2105, "c/o"), // ℅
    (0x2106, "c/u"), // ℆
    (0x2109, "degF"), // ℉
    (0x210A, "g"), // ℊ
    (0x210B, "H"), // ℋ
    (0x210C, "H"), // ℌ
    (0x210D, "H"), // ℍ
    (0x210E, "h"), // ℎ
    (0x2110, "I"), // ℐ
    (0x2111, "I"), // ℑ
    (0x2112, "L"), // ℒ
    (0x2113, "l"), // ℓ
    (0x2115, "N"), // ℕ
    (0x2116, "No"), // №
    (0x2117, "(p)"), // ℗
    (0x2119, "P"), // ℙ
    (0x211A, "Q"), // ℚ
    (0x211B, "R"), // ℛ
    (0x211C, "R"), // ℜ
    (0x211D, "R"), // ℝ
    (0x2120, "SM"), // ℠
    (0x2121, "TEL"), // ℡
    (0x2122, "TM"), // ™
    (0x2124, "Z"), // ℤ
    (0x2126, "O"), // Ω
    (0x2128, "Z"), // ℨ
    (0x212A, "K"), // K
    (0x212B, "A"), // Å
    (0x212C, "B"), // ℬ
    (0x212D, "C"), // ℭ
    (0x212E, "e"), // ℮
    (0x212F, "e"), // ℯ
    (0x2130, "E"), // ℰ
    (0x2131, "F"), // ℱ
    (0x2133, "M"), // ℳ
    (0x2134, "o"), // ℴ
    (0x2139, "i"), // ℹ
    (0x213B, "FAX"), // ℻
    (0x2145, "D"), // ⅅ
    (0x2146, "d"), // ⅆ
    (0x2147, "e"), // ⅇ
    (0x2148, "i"), // ⅈ
    (0x2149, "j"), // ⅉ
    (0x2150, "1/7"), // ⅐
    (0x2151, "1/9"), // ⅑
    (0x2152, "1/10"), // ⅒
    (0x2153, "1/3"), // ⅓
    (0x2154, "2/3"), // ⅔
    (0x2155, "1/5"), // ⅕
    (0x2156, "2/5"), // ⅖
    (0x2157, "3/5"), // ⅗
    (0x2158, "4/5"), // ⅘
    (0x2159, "1/6"), // ⅙
    (0x215A, "5/6"), // ⅚
    (0x215B, "1/8"), // ⅛
    (0x215C, "3/8"), // ⅜
    (0x215D, "5/8"), // ⅝
    (0x215E, "7/8"), // ⅞
    (0x215F, "1/"), // ⅟
    (0x2160, "I"), // Ⅰ
    (0x2161, "II"), // Ⅱ
    (0x2162, "III"), // Ⅲ
    (0x2163, "IV"), // Ⅳ
    (0x2164, "V"), // Ⅴ
    (0x2165, "VI"), // Ⅵ
    (0x2166, "VII"), // Ⅶ
    (0x2167, "VIII"), // Ⅷ
    (0x2168, "IX"), // Ⅸ
    (0x2169, "X"), // Ⅹ
    (0x216A, "XI"), // Ⅺ
    (0x216B, "XII"), // Ⅻ
    (0x216C, "L"), // Ⅼ
    (0x216D, "C"), // Ⅽ
    (0x216E, "D"), // Ⅾ
    (0x216F, "M"), // Ⅿ
    (0x2170, "i"), // ⅰ
    (0x2171, "ii"), // ⅱ
    (0x2172, "iii"), // ⅲ
    (0x2173, "iv"), // ⅳ
    (0x2174, "v"), // ⅴ
    (0x2175, "vi"), // ⅵ
    (0x2176, "vii"), // ⅶ
    (0x2177, "viii"), // ⅷ
    (0x2178, "ix"), // ⅸ
    (0x2179, "x"), // ⅹ
    (0x217A, "xi"), // ⅺ
    (0x217B, "xii"), // ⅻ
    (0x217C, "l"), // ⅼ
    (0x217D, "c"), // ⅽ
    (0x217E, "d"), // ⅾ
    (0x217F, "m"), // ⅿ
    (0x2189, "0/3"), // ↉
    (0x2190, "<-"), // ←
    (0x2191, "^"), // ↑
    (0x2192, "->"), // →
    (0x2193, "v"), // ↓
    (0x2194, "<->"), // ↔
    (0x2195, "|"), // ↕
    (0x21D0, "<="), // ⇐
    (0x21D2, "=>"), // ⇒
    (0x21D4, "<=>"), // ⇔
    (0x2212, "-"), // −
    (0x2213, "-+"), // ∓
    (0x2215, "/"), // ∕
    (0x2216, "\\"), // ∖
    (0x2217, "*"), // ∗
    (0x2219, "."), // ∙
    (0x221E, "inf"), // ∞
    (0x2223, "|"), // ∣
    (0x2225, "||"), // ∥
    (0x2236, ":"), // ∶
    (0x223C, "~"), // ∼
    (0x2248, "~="), // ≈
    (0x2260, "!="), // ≠
    (0x2261, "=="), // ≡
    (0x2264, "<="), // ≤
    (0x2265, ">="), // ≥
    (0x226A, "<<"), // ≪
    (0x226B, ">>"), // ≫
    (0x22C5, "."), // ⋅
    (0x2460, "1"), // ①
    (0x2461, "2"), // ②
    (0x2462, "3"), // ③
    (0x2463, "4"), // ④
    (0x2464, "5"), // ⑤
    (0x2465, "6"), // ⑥
    (0x2466, "7"), // ⑦
    (0x2467, "8"), // ⑧
    (0x2468, "9"), // ⑨
    (0x2469, "10"), // ⑩
    (0x246A, "11"), // ⑪
    (0x246B, "12"), // ⑫
    (0x246C, "13"), // ⑬
    (0x246D, "14"), // ⑭
    (0x246E, "15"), // ⑮
    (0x246F, "16"), // ⑯
    (0x2470, "17"), // ⑰
    (0x2471, "18"), // ⑱
    (0x2472, "19"), // ⑲
    (0x2473, "20"), // ⑳
    (0x2474, "(1)"), // ⑴
    (0x2475, "(2)"), // ⑵
    (0x2476, "(3)"), // ⑶
    (0x2477, "(4)"), // ⑷
    (0x2478, "(5)"), // ⑸
    (0x2479, "(6)"), // ⑹
    (0x247A, "(7)"), // ⑺
    (0x247B, "(8)"), // ⑻
    (0x247C, "(9)"), // ⑼
    (0x247D, "(10)"), // ⑽
    (0x247E, "(11)"), // ⑾
    (0x247F, "(12)"), // ⑿
    (0x2480, "(13)"), // ⒀
    (0x2481, "(14)"), // ⒁
    (0x2482, "(15)"), // ⒂
    (0x2483, "(16)"), // ⒃
    (0x2484, "(17)"), // ⒄
    (0x2485, "(18)"), // ⒅
    (0x2486, "(19)"), // ⒆
    (0x2487, "(20)"), // ⒇
    (0x2488, "1."), // ⒈
    (0x2489, "2."), // ⒉
    (0x248A, "3."), // ⒊
    (0x248B, "4."), // ⒋
    (0x248C, "5."), // ⒌
    (0x248D, "6."), // ⒍
    (0x248E, "7."), // ⒎
    (0x248F, "8."), // ⒏
    (0x2490, "9."), // ⒐
    (0x2491, "10."), // ⒑
    (0x2492, "11."), // ⒒
    (0x2493, "12."), // ⒓
    (0x2494, "13."), // ⒔
    (0x2495, "14."), // ⒕
    (0x2496, "15."), // ⒖
    (0x2497, "16."), // ⒗
    (0x2498, "17."), // ⒘
    (0x2499, "18."), // ⒙
    (0x249A, "19."), // ⒚
    (0x249B, "20."), // ⒛
    (0x249C, "(a)"), // ⒜
    (0x249D, "(b)"), // ⒝
    (0x249E, "(c)"), // ⒞
    (0x249F, "(d)"), // ⒟
    (0x24A0, "(e)"), // ⒠
    (0x24A1, "(f)"), // ⒡
    (0x24A2, "(g)"), // ⒢
    (0x24A3, "(h)"), // ⒣
    (0x24A4, "(i)"), // ⒤
    (0x24A5, "(j)"), // ⒥
    (0x24A6, "(k)"), // ⒦
    (0x24A7, "(l)"), // ⒧
    (0x24A8, "(m)"), // ⒨
    (0x24A9, "(n)"), // ⒩
    (0x24AA, "(o)"), // ⒪
    (0x24AB, "(p)"), // ⒫
    (0x24AC, "(q)"), // ⒬
    (0x24AD, "(r)"), // ⒭
    (0x24AE, "(s)"), // ⒮
    (0x24AF, "(t)"), // ⒯
    (0x24B0, "(u)"), // ⒰
    (0x24B1, "(v)"), // ⒱
    (0x24B2, "(w)"), // ⒲
    (0x24B3, "(x)"), // ⒳
    (0x24B4, "(y)"), // ⒴
    (0x24B5, "(z)"), // ⒵
    (0x24B6, "A"), // Ⓐ
    (0x24B7, "B"), // Ⓑ
    (0x24B8, "C"), // Ⓒ
    (0x24B9, "D"), // Ⓓ
    (0x24BA, "E"), // Ⓔ
    (0x24BB, "F"), // Ⓕ
    (0x24BC, "G"), // Ⓖ
    (0x24BD, "H"), // Ⓗ
    (0x24BE, "I"), // Ⓘ
    (0x24BF, "J"), // Ⓙ
    (0x24C0, "K"), // Ⓚ
    (0x24C1, "L"), // Ⓛ
    (0x24C2, "M"), // Ⓜ
    (0x24C3, "N"), // Ⓝ
    (0x24C4, "O"), // Ⓞ
    (0x24C5, "P"), // Ⓟ
    (0x24C6, "Q"), // Ⓠ
    (0x24C7, "R"), // Ⓡ
    (0x24C8, "S"), // Ⓢ
    (0x24C9, "T"), // Ⓣ
    (0x24CA, "U"), // Ⓤ
    (0x24CB, "V"), // Ⓥ
    (0x24CC, "W"), // Ⓦ
    (0x24CD, "X"), // Ⓧ
    (0x24CE, "Y"), // Ⓨ
    (0x24CF, "Z"), // Ⓩ
    (0x24D0, "a"), // ⓐ
    (0x24D1, "b"), // ⓑ
    (0x24D2, "c"), // ⓒ
    (0x24D3, "d"), // ⓓ
    (0x24D4, "e"), // ⓔ
    (0x24D5, "f"), // ⓕ
    (0x24D6, "g"), // ⓖ
    (0x24D7, "h"), // ⓗ
    (0x24D8, "i"), // ⓘ
    (0x24D9, "j"), // ⓙ
    (0x24DA, "k"), // ⓚ
    (0x24DB, "l"), // ⓛ
    (0x24DC, "m"), // ⓜ
    (0x24DD, "n"), // ⓝ
    (0x24DE, "o"), // ⓞ
    (0x24DF, "p"), // ⓟ
    (0x24E0, "q"), // ⓠ
    (0x24E1, "r"), // ⓡ
    (0x24E2, "s"), // ⓢ
    (0x24E3, "t"), // ⓣ
    (0x24E4, "u"), // ⓤ
    (0x24E5, "v"), // ⓥ
    (0x24E6, "w"), // ⓦ
    (0x24E7, "x"), // ⓧ
    (0x24E8, "y"), // ⓨ
    (0x24E9, "z"), // ⓩ
    (0x24EA, "0"), // ⓪
    (0x3000, " "),
    (0xFB00, "ff"), // ﬀ
    (0xFB01, "fi"), // ﬁ
    (0xFB02, "fl"), // ﬂ
    (0xFB03, "ffi"), // ﬃ
    (0xFB04, "ffl"), // ﬄ
    (0xFB05, "st"), // ﬅ
    (0xFB06, "st"), // ﬆ
    (0xFEFF, ""),
    (0xFF01, "!"), // ！
    (0xFF02, "\""), // ＂
    (0xFF03, "#"), // ＃
    (0xFF04, "$"), // ＄
    (0xFF05, "%"), // ％
    (0xFF06, "&"), // ＆
    (0xFF07, "'"), // ＇
    (0xFF08, "("), // （
    (0xFF09, ")"), // ）
    (0xFF0A, "*"), // ＊
    (0xFF0B, "+"), // ＋
    (0xFF0C, ","), // ，
    (0xFF0D, "-"), // －
    (0xFF0E, "."), // ．
    (0xFF0F, "/"), // ／
    (0xFF10, "0"), // ０
    (0xFF11, "1"), // １
    (0xFF12, "2"), // ２
    (0xFF13, "3"), // ３
    (0xFF14, "4"), // ４
    (0xFF15, "5"), // ５
    (0xFF16, "6"), // ６
    (0xFF17, "7"), // ７
    (0xFF18, "8"), // ８
    (0xFF19, "9"), // ９
    (0xFF1A, ":"), // ：
    (0xFF1B, ";"), // ；
    (0xFF1C, "<"), // ＜
    (0xFF1D, "="), // ＝
    (0xFF1E, ">"), // ＞
    (0xFF1F, "?"), // ？
    (0xFF20, "@"), // ＠
    (0xFF21, "A"), // Ａ
    (0xFF22, "B"), // Ｂ
    (0xFF23, "C"), // Ｃ
    (0xFF24, "D"), // Ｄ
    (0xFF25, "E"), // Ｅ
    (0xFF26, "F"), // Ｆ
    (0xFF27, "G"), // Ｇ
    (0xFF28, "H"), // Ｈ
    (0xFF29, "I"), // Ｉ
    (0xFF2A, "J"), // Ｊ
    (0xFF2B, "K"), // Ｋ
    (0xFF2C, "L"), // Ｌ
    (0xFF2D, "M"), // Ｍ
    (0xFF2E, "N"), // Ｎ
    (0xFF2F, "O"), // Ｏ
    (0xFF30, "P"), // Ｐ
    (0xFF31, "Q"), // Ｑ
    (0xFF32, "R"), // Ｒ
    (0xFF33, "S"), // Ｓ
    (0xFF34, "T"), // Ｔ
    (0xFF35, "U"), // Ｕ
    (0xFF36, "V"), // Ｖ
    (0xFF37, "W"), // Ｗ
    (0xFF38, "X"), // Ｘ
    (0xFF39, "Y"), // Ｙ
    (0xFF3A, "Z"), // Ｚ
    (0xFF3B, "["), // ［
    (0xFF3C, "\\"), // ＼
    (0xFF3D, "]"), // ］
    (0xFF3E, "^"), // ＾
    (0xFF3F, "_"), // ＿
    (0xFF40, "`"), // ｀
    (0xFF41, "a"), // ａ
    (0xFF42, "b"), // ｂ
    (0xFF43, "c"), // ｃ
    (0xFF44, "d"), // ｄ
    (0xFF45, "e"), // ｅ
    (0xFF46, "f"), // ｆ
    (0xFF47, "g"), // ｇ
    (0xFF48, "h"), // ｈ
    (0xFF49, "i"), // ｉ
    (0xFF4A, "j"), // ｊ
    (0xFF4B, "k"), // ｋ
    (0xFF4C, "l"), // ｌ
    (0xFF4D, "m"), // ｍ
    (0xFF4E, "n"), // ｎ
    (0xFF4F, "o"), // ｏ
    (0xFF50, "p"), // ｐ
    (0xFF51, "q"), // ｑ
    (0xFF52, "r"), // ｒ
    (0xFF53, "s"), // ｓ
    (0xFF54, "t"), // ｔ
    (0xFF55, "u"), // ｕ
    (0xFF56, "v"), // ｖ
    (0xFF57, "w"), // ｗ
    (0xFF58, "x"), // ｘ
    (0xFF59, "y"), // ｙ
    (0xFF5A, "z"), // ｚ
    (0xFF5B, "{"), // ｛
    (0xFF5C, "|"), // ｜
    (0xFF5D, "}"), // ｝
    (0xFF5E, "~"), // ～
];
