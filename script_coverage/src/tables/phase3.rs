// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase 3 overrides and CLDR punctuation.

use super::{
    Entry, ARABIC_MATH, ASCII_DIGITS, CJK_NOT_REQUIRED, COPTIC_EPACT, EXTRA_INDIC, RUMI_NUMERALS,
    URDU_EXTRA, URDU_RANGES,
};
use crate::ScriptTag;

/// Punctuation used by each script's locales, as generated by `script_coverage_gen punct`.
///
/// `LGC` is not listed: it is always the union of the `Latn`, `Grek` and `Cyrl` entries.
#[rustfmt::skip]
pub const SCRIPT_TO_PUNCT: &[(ScriptTag, &str)] = &[
    // ,|«|»|،|؟|U+200F|‘|’|“|”|…|‹|›
    (ScriptTag::from_str_unchecked("Arab"), "002C,00AB,00BB,060C,061F,200F,2018..2019,201C..201D,2026,2039..203A"),
    // ,|?|«|»|…
    (ScriptTag::from_str_unchecked("Armn"), "002C,003F,00AB,00BB,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Beng"), "002C,003F,2018..2019,201C..201D,2026"),
    // ‘|’|“|”
    (ScriptTag::from_str_unchecked("Cher"), "2018..2019,201C..201D"),
    // "|,|?|«|»|‘|’|‚|“|”|„|…|‹|›
    (ScriptTag::from_str_unchecked("Cyrl"), "0022,002C,003F,00AB,00BB,2018..201A,201C..201E,2026,2039..203A"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Deva"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|?|«|»|‘|’|“|”|…|‹|›
    (ScriptTag::from_str_unchecked("Ethi"), "002C,003F,00AB,00BB,2018..2019,201C..201D,2026,2039..203A"),
    // ,|?|«|»|“|„|…
    (ScriptTag::from_str_unchecked("Geor"), "002C,003F,00AB,00BB,201C,201E,2026"),
    // "|,|;|«|»|…
    (ScriptTag::from_str_unchecked("Grek"), "0022,002C,003B,00AB,00BB,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Gujr"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Guru"), "002C,003F,2018..2019,201C..201D,2026"),
    // ‘|’|“|”|…|、|？
    (ScriptTag::from_str_unchecked("Hans"), "2018..2019,201C..201D,2026,3001,FF1F"),
    // …|、|「|」|『|』|？
    (ScriptTag::from_str_unchecked("Hant"), "2026,3001,300C..300F,FF1F"),
    // "|'|,|?|…
    (ScriptTag::from_str_unchecked("Hebr"), "0022,0027,002C,003F,2026"),
    // ?|…|、|「|」|『|』
    (ScriptTag::from_str_unchecked("Jpan"), "003F,2026,3001,300C..300F"),
    // ,|?|U+200B|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Khmr"), "002C,003F,200B,2018..2019,201C..201D,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Knda"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Kore"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Laoo"), "002C,2018..2019,201C..201D,2026"),
    // "|'|(|)|,|-|.|?|[|]|«|»|‘|’|‚|“|”|„|…|‹|›
    (ScriptTag::from_str_unchecked("Latn"), "0022,0027..0029,002C..002E,003F,005B,005D,00AB,00BB,2018..201A,201C..201E,2026,2039..203A"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Mlym"), "002C,003F,2018..2019,201C..201D,2026"),
    // ‘|’|“|”
    (ScriptTag::from_str_unchecked("Mymr"), "2018..2019,201C..201D"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Sinh"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Taml"), "002C,003F,2018..2019,201C..201D,2026"),
    // ,|?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Telu"), "002C,003F,2018..2019,201C..201D,2026"),
    // «|»|”|„
    (ScriptTag::from_str_unchecked("Tfng"), "00AB,00BB,201D..201E"),
    // ?|‘|’|“|”|…
    (ScriptTag::from_str_unchecked("Thai"), "003F,2018..2019,201C..201D,2026"),
    // ?|‘|’|“|”
    (ScriptTag::from_str_unchecked("Tibt"), "003F,2018..2019,201C..201D"),
    // ‘|’|“|”
    (ScriptTag::from_str_unchecked("Vaii"), "2018..2019,201C..201D"),
];

/// Characters outside a script's own repertoire that its fonts must also cover.
pub const EXTRA_CHARACTERS_NEEDED: &[Entry] = &[
    // Nothing additional outside the block.
    (ScriptTag::from_str_unchecked("Ahom"), &[]),
    // Punctuation and digits used with, and interacting with, Arabic letters.
    (
        ScriptTag::from_str_unchecked("Arab"),
        &[
            ASCII_DIGITS,
            "
            0021 002C 002E 003A 00A0 00AB 00BB  # punct, no-break space, guillemets
            061C  # Arabic letter mark
            06DD  # Arabic end of ayah
            2010-2011  # hyphen and non-breaking hyphen need different shapes
            204F 2E41  # for Sindhi
            FD3E-FD3F  # ornate parentheses
            ",
        ],
    ),
    // Like Arabic, but Sindhi is not written in Nastaliq.
    (
        ScriptTag::from_str_unchecked("Aran"),
        &[URDU_RANGES, URDU_EXTRA],
    ),
    // The Armenian encoding cross reference, see
    // http://www.unicode.org/L2/L2010/10354-n3924-armeternity.pdf
    (
        ScriptTag::from_str_unchecked("Armn"),
        &["0028-0029 002C-002E 00A0 00A7 00AB 00BB 0589 2010 2014 2026"],
    ),
    // www.unicode.org/L2/L2007/07006r-n3197r-avestan.pdf
    (ScriptTag::from_str_unchecked("Avst"), &["200C 2E30-2E31"]),
    (ScriptTag::from_str_unchecked("Beng"), &[EXTRA_INDIC]),
    // From http://www.unicode.org/L2/L2014/14064r-n4537r-cherokee.pdf section 8
    (
        ScriptTag::from_str_unchecked("Cher"),
        &["0300-0302 0304 030B-030C 0323-0324 0330-0331"],
    ),
    // From the core specification and http://std.dkuug.dk/JTC1/SC2/WG2/docs/n2636.pdf
    (
        ScriptTag::from_str_unchecked("Copt"),
        &["
            002D-002E 003A-003B 00B7  # hyphen-minus, period, colon, semicolon, middle dot
            0300-0302 0304-0305 0307-0308 033F  # combining marks
            0374-0375  # Greek numeral signs
            2010 2019 2E17  # hyphen, apostrophe, oblique double hyphen
            FE24-FE26  # combining macrons
        "],
    ),
    (ScriptTag::from_str_unchecked("Deva"), &[EXTRA_INDIC]),
    // Combining overbar and the Greek numerals, see
    // http://www.unicode.org/L2/L2011/11050-n3985-elbasan.pdf
    (
        ScriptTag::from_str_unchecked("Elba"),
        &["00B7 0305 0391-03A0 03DA 03DD-03DE"],
    ),
    // Keyboard standard punctuation plus what Amharic web sites use.
    (
        ScriptTag::from_str_unchecked("Ethi"),
        &["
            0021 0028-0029 002B-002F 003D 003F 00AB 00BB
            0308  # combining diaeresis, for scholarly use
            2010 2018-2019 201C-201D 2026 22EE
        "],
    ),
    (
        ScriptTag::from_str_unchecked("Geor"),
        &["
            0021 0025 0028-0029 002C-002E 003A-003B 00A0 00B7
            10FB  # Georgian paragraph separator
            2014 201C 201E 2026
            2056-205E 2E2A-2E2D 2E31  # archaic punctuation
        "],
    ),
    (ScriptTag::from_str_unchecked("Gujr"), &[EXTRA_INDIC]),
    (ScriptTag::from_str_unchecked("Guru"), &[EXTRA_INDIC]),
    // Single and double vertical line, ZWNJ in case ligatures need breaking.
    // See http://www.unicode.org/L2/L2012/12312-n4324-hatran.pdf
    (ScriptTag::from_str_unchecked("Hatr"), &["007C 200C 2016"]),
    // No-break space, ZWNJ, ZWJ, new sheqel sign
    (ScriptTag::from_str_unchecked("Hebr"), &["00A0 200C-200D 20AA"]),
    // http://www.unicode.org/L2/L2012/12213-n4282-anatolian.pdf
    (ScriptTag::from_str_unchecked("Hluw"), &["200B"]),
    // http://www.unicode.org/L2/L2012/12168r-n4268r-oldhungarian.pdf
    (
        ScriptTag::from_str_unchecked("Hung"),
        &["
            0021 002C-002E 003A  # standard European punctuation
            200D 2010 201F 204F 205A 205D-205E
            2E2E 2E31 2E41-2E42  # reversed punctuation
        "],
    ),
    // Fractions should be horizontal, see http://www.unicode.org/L2/L2015/15243-kannada-frac.pdf
    (
        ScriptTag::from_str_unchecked("Knda"),
        &["A830-A835", EXTRA_INDIC],
    ),
    // Common characters and modifiers from a number of blocks.
    (
        ScriptTag::LGC,
        &["
            0020-0040 005B-0060 007B-007E  # basic latin
            00A0-00A9 00AB-00B9 00BB-00BF 00D7 00F7  # latin 1 supplement
            02B9-02DF 02E5-02FF  # spacing modifier letters
            0300-036F  # combining diacritical marks
            0374 037E 0385 0387  # Greek and Coptic
            0485-0486  # Cyrillic
            1AB0-1ABE  # combining diacritical marks extended
            1C80-1C88  # Cyrillic Extended-C
            1DC0-1DFF  # combining diacritical marks supplement
            2000-2029 202A-206F  # general punctuation
            2070 2074-209C  # superscript and subscript
            20A0-20BE  # currency symbols
            2105  # care of
            2113  # script small l
            2116-2117  # numero sign, sound recording copyright
            2120-2122 213B  # service mark, telephone sign, trade mark, fax sign
            2190-2195  # arrows: left up right down, left-right, up-down
            25A0-25A1  # black and white square
            25CA-25CC  # lozenge, white circle, dotted circle
            25CF 25D8  # black circle, inverse bullet
            25D9 25E6  # inverse white circle, white bullet
            A717-A71F  # modifier tone letters
            A720-A721 A788-A78A  # latin extended-d
            AB5B  # latin extended-e
            FB00-FB06  # alphabetic presentation forms
            FE20-FE2F  # combining half marks
            FFFC-FFFD  # object replacement, replacement
        "],
    ),
    // From the core specification
    (ScriptTag::from_str_unchecked("Lisu"), &["02BC 02CD"]),
    // Colon, horizontal ellipsis, tricolon.
    // See http://www.unicode.org/L2/L2009/09188r-n3646-meroitic.pdf
    (ScriptTag::from_str_unchecked("Merc"), &["003A 2026 205D"]),
    // Digits are unified with Gurmukhi, see http://www.unicode.org/L2/L2012/12316-multani.pdf
    (ScriptTag::from_str_unchecked("Mult"), &["0A66-0A6F"]),
    (ScriptTag::from_str_unchecked("Orya"), &[EXTRA_INDIC]),
    (ScriptTag::from_str_unchecked("Sgnw"), &[]),
    // http://www.unicode.org/L2/L2009/09074-sharada.pdf
    (ScriptTag::from_str_unchecked("Shrd"), &[]),
    // http://www.unicode.org/L2/L2012/12234r-n4294-siddham.pdf
    (ScriptTag::from_str_unchecked("Sidd"), &[]),
    (ScriptTag::from_str_unchecked("Sinh"), &[EXTRA_INDIC]),
    // From the core specification
    (ScriptTag::from_str_unchecked("Sylo"), &["2055"]),
    (
        ScriptTag::from_str_unchecked("Syrc"),
        &["
            0303-0304 0307-0308 030A 0320 0323-0325 032D-032E 0330
            060C 061B 061F 0640 064B-0652
        "],
    ),
    // From the core specification and http://www.unicode.org/L2/L2001/01369-n2372.pdf
    (
        ScriptTag::from_str_unchecked("Tale"),
        &["0300-0301 0307-0308 030C"],
    ),
    // From the core specification and http://www.unicode.org/L2/L2010/10407-ext-tamil-follow2.pdf
    (
        ScriptTag::from_str_unchecked("Taml"),
        &["00B2-00B3 2074 2082-2084", EXTRA_INDIC],
    ),
    // From the core specification and http://www.unicode.org/L2/L2010/10451-patani-proposal.pdf
    (
        ScriptTag::from_str_unchecked("Thai"),
        &["02BC 02D7 0303 0331 0E3F"],
    ),
    (ScriptTag::from_str_unchecked("Tibt"), &["007C 0FD5-0FD8"]),
    (
        ScriptTag::from_str_unchecked("Zmth"),
        &[
            "
            00B2-00B3 00B9 00BC-00BE  # superscript 2, 3, 1, 1/4, 1/2, 3/4
            2070-208E  # superscripts and subscripts
            2150-215E 2189  # vulgar fractions
            2200-22FF  # mathematical operators
            27C0-27EF  # miscellaneous mathematical symbols-A
            2980-29FF  # miscellaneous mathematical symbols-B
            2A00-2AFF  # supplemental mathematical operators
            ",
            ARABIC_MATH,
        ],
    ),
    // Coptic epact is used with Arabic but does not belong in the Arabic fonts.
    (
        ScriptTag::from_str_unchecked("Zsym"),
        &[
            "
            20D0-20F0  # combining diacritical marks for symbols
            2100-214F  # letterlike symbols
            2160-2188  # roman numerals
            2190-21FF  # arrows
            2300-23FE  # miscellaneous technical
            2400-2426  # control pictures
            2440-244A  # OCR
            2460-24FF  # enclosed alphanumerics
            2500-257F  # box drawing
            2580-259F  # block elements
            25A0-25FF  # geometric shapes
            2600-26FF  # miscellaneous symbols
            2700-27BF  # dingbats
            27F0-27FF  # supplemental arrows-A
            2800-28FF  # braille patterns
            2900-297F  # supplemental arrows-B
            2B00-2BEF  # miscellaneous symbols and arrows
            2E00-2E44  # supplemental punctuation
            4DC0-4DFF  # yijing hexagram symbols
            A700-A71F  # modifier tone letters, used with both CJK and latin
            FFF0-FFFD  # specials
            10100-1013F  # Aegean numbers
            10140-1018F  # ancient Greek numbers
            10190-101CF  # ancient symbols
            101D0-101FF  # Phaistos disc
            1D000-1D0FF  # Byzantine musical symbols
            1D100-1D1FF  # musical symbols
            1D200-1D24F  # ancient Greek musical notation
            1D300-1D35F  # Tai Xuan Jing symbols
            1D360-1D37F  # counting rod numerals
            1D400-1D7FF  # mathematical alphanumeric symbols
            1F000-1F02F  # mahjong tiles
            1F030-1F09F  # domino tiles
            1F0A0-1F0FF  # playing cards
            1F100-1F1FF  # enclosed alphanumeric supplement
            1F200-1F2FF  # enclosed ideographic supplement
            1F700-1F77F  # alchemical symbols
            ",
            COPTIC_EPACT,
        ],
    ),
];

/// Devanagari marks and roman numerals (which live in the symbol fonts), except reversed C.
pub const LGC_CHARACTERS_NOT_NEEDED: &str = "
    0951-0952  # devanagari marks
    2160-2183 2185-2188  # roman numerals
";

/// Characters in a script's repertoire that its fonts need not cover.
pub const CHARACTERS_NOT_NEEDED: &[Entry] = &[
    (
        ScriptTag::from_str_unchecked("Arab"),
        &[RUMI_NUMERALS, COPTIC_EPACT, ARABIC_MATH],
    ),
    (ScriptTag::from_str_unchecked("Copt"), &[COPTIC_EPACT]),
    (ScriptTag::from_str_unchecked("Hans"), &[CJK_NOT_REQUIRED]),
    (ScriptTag::from_str_unchecked("Hant"), &[CJK_NOT_REQUIRED]),
    (ScriptTag::from_str_unchecked("Jpan"), &[CJK_NOT_REQUIRED]),
    (ScriptTag::from_str_unchecked("Kore"), &[CJK_NOT_REQUIRED]),
    (ScriptTag::LGC, &[LGC_CHARACTERS_NOT_NEEDED]),
    (ScriptTag::LATIN, &[LGC_CHARACTERS_NOT_NEEDED]),
];
