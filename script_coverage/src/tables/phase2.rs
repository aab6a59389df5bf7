// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Phase 2 overrides.

use super::{Entry, RUMI_NUMERALS};
use crate::ScriptTag;

/// Characters outside a script's own repertoire that its fonts must also cover.
pub const EXTRA_CHARACTERS_NEEDED: &[Entry] = &[
    (
        ScriptTag::from_str_unchecked("Arab"),
        &["
            2010-2011  # hyphen and non-breaking hyphen need different shapes
            204F 2E41  # for Sindhi
        "],
    ),
    // From the core specification and NamesList.txt
    (ScriptTag::from_str_unchecked("Avst"), &["2E30-2E31"]),
    // From http://www.unicode.org/L2/L2014/14064r-n4537r-cherokee.pdf section 8
    (
        ScriptTag::from_str_unchecked("Cher"),
        &["0300-0302 0304 030B-030C 0323-0324 0330-0331"],
    ),
    // From the core specification
    (
        ScriptTag::from_str_unchecked("Copt"),
        &["0300 0304-0305 0307 033F 0374-0375 FE24-FE26"],
    ),
    // Latin-1
    (ScriptTag::LGC, &["0020-007E 00A0-00FF"]),
    // From the core specification
    (ScriptTag::from_str_unchecked("Lisu"), &["02BC 02CD"]),
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
        &["00B2-00B3 2074 2082-2084"],
    ),
    // From the core specification and http://www.unicode.org/L2/L2010/10451-patani-proposal.pdf
    (ScriptTag::from_str_unchecked("Thai"), &["02BC 02D7 0303 0331"]),
    // Azerbaijani manat, Russian ruble, Georgian lari
    (ScriptTag::from_str_unchecked("Zsym"), &["20BC-20BE"]),
];

/// Latin, Greek and Cyrillic characters left out of the LGC fonts.
pub const LGC_CHARACTERS_NOT_NEEDED: &str = "
    0370-0373 0376-0377 03CF 0951-0952 1E9C-1E9D 1E9F 1EFA-1EFF
    2071 2095-209C
    2160-2183 2185-2188  # roman numerals, except reversed C
    2C6E-2C70 2C78-2C7F 2DE0-2DFF
    A640-A673 A67C-A697 A722-A787 A78D-A78E A790-A791 A7A0-A7A9 A7FA-A7FF
    A92E FB00 FB05-FB06
";

/// Characters in a script's repertoire that its fonts need not cover.
pub const CHARACTERS_NOT_NEEDED: &[Entry] = &[
    (ScriptTag::from_str_unchecked("Arab"), &[RUMI_NUMERALS]),
    (ScriptTag::LGC, &[LGC_CHARACTERS_NOT_NEEDED]),
    (ScriptTag::LATIN, &[LGC_CHARACTERS_NOT_NEEDED]),
];
