// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curated coverage data.
//!
//! Per-script tables are lists of [`Entry`] values. An entry's code points are the union of
//! its range text pieces, each of which is parsed on its own, so a shared piece such as
//! [`EXTRA_INDIC`] can be reused without breaking the ascending order rule of range text.
//! Everything here is validated when a [`CoveragePolicy`](crate::CoveragePolicy) is built.

pub mod blocks;
pub mod phase2;
pub mod phase3;

use crate::ScriptTag;

/// A per-script table entry: the script and its range text pieces.
pub type Entry = (ScriptTag, &'static [&'static str]);

/// `0`–`9`.
pub const ASCII_DIGITS: &str = "0030-0039";

/// Coptic Epact numbers.
pub const COPTIC_EPACT: &str = "102E0-102FB";

/// Arabic Mathematical Alphabetic Symbols.
pub const ARABIC_MATH: &str = "1EE00-1EEF1";

/// Rumi numeral symbols.
pub const RUMI_NUMERALS: &str = "10E60-10E7E";

/// CJK Unified Ideographs Extension B and beyond.
pub const CJK_NOT_REQUIRED: &str = "20000-2FFFF  # CJK ideograph extension-b";

/// Extra characters added to Indic fonts: mostly punctuation, plus the Indian rupee sign.
pub const EXTRA_INDIC: &str = "
    0021-0023 0025 0027-002C 002D-002F 0030-0039 003A-003E
    005B-005F 007B-007E 00AD 00AF 00D7 00F7 02BC 2013-2014
    20B9 2212
";

/// Tier 1 of the Nastaliq requirements.
pub const URDU_RANGES: &str = "
    0600-0604 060B-0614 061B 061C 061E-061F 0620 0621-063A
    0640-0659 065E-066D 0670-0673 0679 067A-067B 067C 067D
    067E 067F-0680 0681 0683-0684 0685-0686 0687 0688-0689
    068A 068B 068C-068D 068E 068F 0691 0693 0696 0698 0699
    069A 069E 06A6 06A9 06AB 06AF-06B0 06B1 06B3 06B7 06BA
    06BB 06BC 06BE 06C0-06C4 06CC-06CD 06D0 06D2-06D5
    06DD-06DE 06E9 06EE-06EF 06F0-06F9 06FF 0759 075C 0763
    0767-0769 076B-077D 08FF FBB2-FBC1 FD3E-FD3F FDF2
    FDFA-FDFD
";

/// Punctuation Urdu shares with Arabic, with guillemets as used for Persian.
pub const URDU_EXTRA: &str = "
    0021 002C 002E 003A 00AB 00BB  # punct
    061C  # Arabic letter mark
    2010-2011  # hyphen, non-breaking hyphen
";

/// Legacy private use characters required for Android emoji.
pub const EMOJI_PUA: &str = "FE4E5-FE4EE FE82C FE82E-FE837";

/// NUL, CR and space, required in every font.
pub const REQUIRED_CHARS: &str = "0000 000D 0020";

/// ZWNJ, ZWJ and dotted circle, required in complex script fonts from phase 3 on.
pub const COMPLEX_REQUIRED_CHARS: &str = "200C-200D 25CC";

/// Scripts that need a shaping engine beyond simple glyph mapping.
pub const COMPLEX_SCRIPTS: &[ScriptTag] = &[
    ScriptTag::from_str_unchecked("Arab"),
    ScriptTag::from_str_unchecked("Aran"),
    ScriptTag::from_str_unchecked("Bali"),
    ScriptTag::from_str_unchecked("Batk"),
    ScriptTag::from_str_unchecked("Beng"),
    ScriptTag::from_str_unchecked("Brah"),
    ScriptTag::from_str_unchecked("Bugi"),
    ScriptTag::from_str_unchecked("Buhd"),
    ScriptTag::from_str_unchecked("Cakm"),
    ScriptTag::from_str_unchecked("Cham"),
    ScriptTag::from_str_unchecked("Deva"),
    ScriptTag::from_str_unchecked("Dupl"),
    ScriptTag::from_str_unchecked("Egyp"),
    ScriptTag::from_str_unchecked("Gran"),
    ScriptTag::from_str_unchecked("Gujr"),
    ScriptTag::from_str_unchecked("Guru"),
    ScriptTag::from_str_unchecked("Hang"),
    ScriptTag::from_str_unchecked("Hano"),
    ScriptTag::from_str_unchecked("Hebr"),
    ScriptTag::from_str_unchecked("Hmng"),
    ScriptTag::from_str_unchecked("Java"),
    ScriptTag::from_str_unchecked("Kali"),
    ScriptTag::from_str_unchecked("Khar"),
    ScriptTag::from_str_unchecked("Khmr"),
    ScriptTag::from_str_unchecked("Khoj"),
    ScriptTag::from_str_unchecked("Knda"),
    ScriptTag::from_str_unchecked("Kthi"),
    ScriptTag::from_str_unchecked("Lana"),
    ScriptTag::from_str_unchecked("Laoo"),
    ScriptTag::from_str_unchecked("Lepc"),
    ScriptTag::from_str_unchecked("Limb"),
    ScriptTag::from_str_unchecked("Mahj"),
    ScriptTag::from_str_unchecked("Mand"),
    ScriptTag::from_str_unchecked("Mani"),
    ScriptTag::from_str_unchecked("Mlym"),
    ScriptTag::from_str_unchecked("Modi"),
    ScriptTag::from_str_unchecked("Mong"),
    ScriptTag::from_str_unchecked("Mtei"),
    ScriptTag::from_str_unchecked("Mymr"),
    ScriptTag::from_str_unchecked("Nkoo"),
    ScriptTag::from_str_unchecked("Orya"),
    ScriptTag::from_str_unchecked("Phag"),
    ScriptTag::from_str_unchecked("Phlp"),
    ScriptTag::from_str_unchecked("Rjng"),
    ScriptTag::from_str_unchecked("Saur"),
    ScriptTag::from_str_unchecked("Shrd"),
    ScriptTag::from_str_unchecked("Sidd"),
    ScriptTag::from_str_unchecked("Sind"),
    ScriptTag::from_str_unchecked("Sinh"),
    ScriptTag::from_str_unchecked("Sund"),
    ScriptTag::from_str_unchecked("Sylo"),
    ScriptTag::from_str_unchecked("Syrc"),
    ScriptTag::from_str_unchecked("Tagb"),
    ScriptTag::from_str_unchecked("Takr"),
    ScriptTag::from_str_unchecked("Tale"),
    ScriptTag::from_str_unchecked("Talu"),
    ScriptTag::from_str_unchecked("Taml"),
    ScriptTag::from_str_unchecked("Tavt"),
    ScriptTag::from_str_unchecked("Telu"),
    ScriptTag::from_str_unchecked("Tfng"),
    ScriptTag::from_str_unchecked("Tglg"),
    ScriptTag::from_str_unchecked("Thai"),
    ScriptTag::from_str_unchecked("Tibt"),
    ScriptTag::from_str_unchecked("Tirh"),
];

/// Scripts whose regular fonts are deemed suitable for UI use.
pub const DEEMED_UI_SCRIPTS: &[ScriptTag] = &[
    ScriptTag::from_str_unchecked("Armn"),
    ScriptTag::from_str_unchecked("Cher"),
    ScriptTag::from_str_unchecked("Ethi"),
    ScriptTag::from_str_unchecked("Geor"),
    ScriptTag::from_str_unchecked("Hebr"),
    ScriptTag::from_str_unchecked("Sinh"),
    ScriptTag::from_str_unchecked("Zsye"),
];

/// Pseudo-scripts that are not Unicode Script values.
pub const CUSTOM_SCRIPTS: &[ScriptTag] = &[
    ScriptTag::from_str_unchecked("Aran"),
    ScriptTag::from_str_unchecked("Hans"),
    ScriptTag::from_str_unchecked("Hant"),
    ScriptTag::from_str_unchecked("Jpan"),
    ScriptTag::from_str_unchecked("Kore"),
    ScriptTag::LGC,
    ScriptTag::from_str_unchecked("Piqd"),
    ScriptTag::from_str_unchecked("Zmth"),
    ScriptTag::from_str_unchecked("Zsye"),
    ScriptTag::from_str_unchecked("Zsym"),
];

/// The scripts covered by the phase 2 release.
pub const PHASE_TWO_SCRIPTS: &[ScriptTag] = &[
    ScriptTag::from_str_unchecked("Arab"),
    ScriptTag::from_str_unchecked("Aran"),
    ScriptTag::from_str_unchecked("Armi"),
    ScriptTag::from_str_unchecked("Armn"),
    ScriptTag::from_str_unchecked("Avst"),
    ScriptTag::from_str_unchecked("Bali"),
    ScriptTag::from_str_unchecked("Bamu"),
    ScriptTag::from_str_unchecked("Batk"),
    ScriptTag::from_str_unchecked("Beng"),
    ScriptTag::from_str_unchecked("Brah"),
    ScriptTag::from_str_unchecked("Bugi"),
    ScriptTag::from_str_unchecked("Buhd"),
    ScriptTag::from_str_unchecked("Cans"),
    ScriptTag::from_str_unchecked("Cari"),
    ScriptTag::from_str_unchecked("Cham"),
    ScriptTag::from_str_unchecked("Cher"),
    ScriptTag::from_str_unchecked("Copt"),
    ScriptTag::from_str_unchecked("Cprt"),
    ScriptTag::from_str_unchecked("Deva"),
    ScriptTag::from_str_unchecked("Dsrt"),
    ScriptTag::from_str_unchecked("Egyp"),
    ScriptTag::from_str_unchecked("Ethi"),
    ScriptTag::from_str_unchecked("Geor"),
    ScriptTag::from_str_unchecked("Glag"),
    ScriptTag::from_str_unchecked("Goth"),
    ScriptTag::from_str_unchecked("Gujr"),
    ScriptTag::from_str_unchecked("Guru"),
    ScriptTag::from_str_unchecked("Hano"),
    ScriptTag::from_str_unchecked("Hans"),
    ScriptTag::from_str_unchecked("Hant"),
    ScriptTag::from_str_unchecked("Hebr"),
    ScriptTag::from_str_unchecked("Ital"),
    ScriptTag::from_str_unchecked("Java"),
    ScriptTag::from_str_unchecked("Jpan"),
    ScriptTag::from_str_unchecked("Kali"),
    ScriptTag::from_str_unchecked("Khar"),
    ScriptTag::from_str_unchecked("Khmr"),
    ScriptTag::from_str_unchecked("Knda"),
    ScriptTag::from_str_unchecked("Kore"),
    ScriptTag::from_str_unchecked("Kthi"),
    ScriptTag::LGC,
    ScriptTag::from_str_unchecked("Lana"),
    ScriptTag::from_str_unchecked("Laoo"),
    ScriptTag::from_str_unchecked("Lepc"),
    ScriptTag::from_str_unchecked("Limb"),
    ScriptTag::from_str_unchecked("Linb"),
    ScriptTag::from_str_unchecked("Lisu"),
    ScriptTag::from_str_unchecked("Lyci"),
    ScriptTag::from_str_unchecked("Lydi"),
    ScriptTag::from_str_unchecked("Mand"),
    ScriptTag::from_str_unchecked("Mlym"),
    ScriptTag::from_str_unchecked("Mong"),
    ScriptTag::from_str_unchecked("Mtei"),
    ScriptTag::from_str_unchecked("Mymr"),
    ScriptTag::from_str_unchecked("Nkoo"),
    ScriptTag::from_str_unchecked("Ogam"),
    ScriptTag::from_str_unchecked("Olck"),
    ScriptTag::from_str_unchecked("Orkh"),
    ScriptTag::from_str_unchecked("Orya"),
    ScriptTag::from_str_unchecked("Osma"),
    ScriptTag::from_str_unchecked("Phag"),
    ScriptTag::from_str_unchecked("Phli"),
    ScriptTag::from_str_unchecked("Phnx"),
    ScriptTag::from_str_unchecked("Prti"),
    ScriptTag::from_str_unchecked("Qaae"),
    ScriptTag::from_str_unchecked("Rjng"),
    ScriptTag::from_str_unchecked("Runr"),
    ScriptTag::from_str_unchecked("Samr"),
    ScriptTag::from_str_unchecked("Sarb"),
    ScriptTag::from_str_unchecked("Saur"),
    ScriptTag::from_str_unchecked("Shaw"),
    ScriptTag::from_str_unchecked("Sinh"),
    ScriptTag::from_str_unchecked("Sund"),
    ScriptTag::from_str_unchecked("Sylo"),
    ScriptTag::from_str_unchecked("Syrc"),
    ScriptTag::from_str_unchecked("Tagb"),
    ScriptTag::from_str_unchecked("Tale"),
    ScriptTag::from_str_unchecked("Talu"),
    ScriptTag::from_str_unchecked("Taml"),
    ScriptTag::from_str_unchecked("Tavt"),
    ScriptTag::from_str_unchecked("Telu"),
    ScriptTag::from_str_unchecked("Tfng"),
    ScriptTag::from_str_unchecked("Tglg"),
    ScriptTag::from_str_unchecked("Thaa"),
    ScriptTag::from_str_unchecked("Thai"),
    ScriptTag::from_str_unchecked("Tibt"),
    ScriptTag::from_str_unchecked("Ugar"),
    ScriptTag::from_str_unchecked("Vaii"),
    ScriptTag::from_str_unchecked("Xpeo"),
    ScriptTag::from_str_unchecked("Xsux"),
    ScriptTag::from_str_unchecked("Yiii"),
    ScriptTag::from_str_unchecked("Zsym"),
];

#[cfg(test)]
mod tests {
    use super::{
        blocks, phase2, phase3, Entry, COMPLEX_SCRIPTS, CUSTOM_SCRIPTS, DEEMED_UI_SCRIPTS,
        PHASE_TWO_SCRIPTS,
    };
    use crate::ScriptTag;

    fn assert_sorted(name: &str, scripts: impl Iterator<Item = ScriptTag>) {
        let scripts: Vec<_> = scripts.collect();
        for w in scripts.windows(2) {
            let &[prev, curr] = w else { unreachable!() };
            assert!(prev < curr, "{name}: {prev} must sort before {curr}");
        }
    }

    fn keys(table: &[Entry]) -> impl Iterator<Item = ScriptTag> + '_ {
        table.iter().map(|entry| entry.0)
    }

    #[test]
    fn script_lists_are_sorted() {
        assert_sorted("COMPLEX_SCRIPTS", COMPLEX_SCRIPTS.iter().copied());
        assert_sorted("DEEMED_UI_SCRIPTS", DEEMED_UI_SCRIPTS.iter().copied());
        assert_sorted("CUSTOM_SCRIPTS", CUSTOM_SCRIPTS.iter().copied());
        assert_sorted("PHASE_TWO_SCRIPTS", PHASE_TWO_SCRIPTS.iter().copied());
    }

    #[test]
    fn tables_are_sorted() {
        assert_sorted("phase2 extra", keys(phase2::EXTRA_CHARACTERS_NEEDED));
        assert_sorted("phase2 not needed", keys(phase2::CHARACTERS_NOT_NEEDED));
        assert_sorted("phase3 extra", keys(phase3::EXTRA_CHARACTERS_NEEDED));
        assert_sorted("phase3 not needed", keys(phase3::CHARACTERS_NOT_NEEDED));
        assert_sorted(
            "phase3 punct",
            phase3::SCRIPT_TO_PUNCT.iter().map(|entry| entry.0),
        );
    }

    #[test]
    fn blocks_are_well_formed() {
        for block in blocks::CJK_BLOCKS.iter().chain(blocks::SYMBOL_BLOCKS) {
            assert!(block.first < block.last, "{}", block.name);
        }
    }
}
