// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The full set of characters a font for a script must contain.

use crate::{CodePointSet, CoveragePolicy, Phase, ScriptTag, UnicodeRepertoire};

/// Options for [`required_characters`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequiredOptions {
    /// Report only the script's Unicode repertoire, ignoring every override table.
    pub unicode_only: bool,
}

/// Composes the characters required for `script` under `phase`.
///
/// The base set comes from the script's Unicode repertoire (or its CJK blocks, emoji or
/// symbol tables for the pseudo-scripts). Unless [`RequiredOptions::unicode_only`] is set,
/// the phase's extra characters are then added, its not-needed characters removed, and the
/// always-required characters and punctuation added. The result only holds assigned code
/// points.
///
/// Unknown scripts start from an empty repertoire; this never fails.
pub fn required_characters(
    policy: &CoveragePolicy,
    repertoire: &impl UnicodeRepertoire,
    script: ScriptTag,
    phase: Phase,
    options: RequiredOptions,
) -> CodePointSet {
    let unicode_only = options.unicode_only;
    let symbols = policy.extra_characters_needed(ScriptTag::from_str_unchecked("Zsym"), phase);
    let mut needed = match script.as_str() {
        "Zsye" if unicode_only => CodePointSet::new(),
        "Zsye" => policy.emoji_pua().clone(),
        "Zsym" if unicode_only => CodePointSet::new(),
        "Zsym" => symbols.clone(),
        "LGC" => {
            let mut lgc = CodePointSet::new();
            for part in [ScriptTag::LATIN, ScriptTag::GREEK, ScriptTag::CYRILLIC] {
                lgc.union_with(&repertoire.script_characters(part));
            }
            if !unicode_only {
                lgc.subtract(symbols);
                lgc.subtract(policy.cjk_set());
            }
            lgc
        }
        "Aran" if unicode_only => {
            repertoire.script_characters(ScriptTag::from_str_unchecked("Arab"))
        }
        // The override table supplies the whole Nastaliq repertoire.
        "Aran" => CodePointSet::new(),
        "Hans" | "Hant" | "Jpan" | "Kore" => policy.cjk_set().clone(),
        _ => {
            let mut chars = repertoire.script_characters(script);
            if !unicode_only {
                chars.subtract(symbols);
            }
            chars
        }
    };

    if !unicode_only {
        needed.union_with(policy.extra_characters_needed(script, phase));
        needed.subtract(policy.characters_not_needed(script, phase));
        needed.union_with(policy.required_chars());
        needed.union_with(&policy.script_to_punct(script, phase));
        if phase >= Phase::Three && policy.is_complex_script(script) {
            needed.union_with(policy.complex_required_chars());
        }
    }

    needed.retain(|cp| repertoire.is_assigned(cp));
    needed
}
