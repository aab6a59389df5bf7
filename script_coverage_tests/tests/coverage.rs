// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Required coverage composed against the ICU repertoire.

use script_coverage::{
    required_characters, CoverageFilter, CoverageMap, CoveragePolicy, IcuClassifier, Phase,
    RequiredOptions, ScriptTag, UnicodeRepertoire,
};

use crate::util::tag;

const FULL: RequiredOptions = RequiredOptions {
    unicode_only: false,
};
const UNICODE_ONLY: RequiredOptions = RequiredOptions { unicode_only: true };

#[test]
fn coverage_unicode_only_is_the_script_repertoire() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let grek = required_characters(policy, &icu, ScriptTag::GREEK, Phase::Three, UNICODE_ONLY);
    assert_eq!(grek, icu.script_characters(ScriptTag::GREEK));
    assert!(grek.contains(0x03B1));
    assert!(!grek.contains(0x0020));
}

#[test]
fn coverage_latin_phase_three() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let latn = required_characters(policy, &icu, ScriptTag::LATIN, Phase::Three, FULL);
    for cp in [0x0000, 0x000D, 0x0020, 0x0041, 0x00E9, 0x2026, 0x201E] {
        assert!(latn.contains(cp), "U+{cp:04X}");
    }
    // Roman numerals are Latin but live in the symbol fonts.
    assert!(!latn.contains(0x2160));
    // Latin is not a complex script.
    assert!(!latn.contains(0x25CC));
}

#[test]
fn coverage_lgc_leaves_out_symbols() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let lgc = required_characters(policy, &icu, ScriptTag::LGC, Phase::Three, FULL);
    assert!(lgc.contains(0x0041));
    assert!(lgc.contains(0x03B1));
    assert!(lgc.contains(0x0430));
    // Added by the LGC override table.
    assert!(lgc.contains(0x25CC));
    assert!(lgc.contains(0x20AC));
    // Full-width Latin is in the CJK blocks.
    assert!(!lgc.contains(0xFF21));
}

#[test]
fn coverage_complex_scripts_get_joiners_from_phase_three() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let deva = tag("Deva");
    let p2 = required_characters(policy, &icu, deva, Phase::Two, FULL);
    let p3 = required_characters(policy, &icu, deva, Phase::Three, FULL);
    assert!(p2.contains(0x0915) && p3.contains(0x0915));
    assert!(!p2.contains(0x25CC));
    for cp in [0x200C, 0x200D, 0x25CC, 0x20B9] {
        assert!(p3.contains(cp), "U+{cp:04X}");
    }
}

#[test]
fn coverage_nastaliq_comes_from_the_tables() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let aran = tag("Aran");
    let full = required_characters(policy, &icu, aran, Phase::Three, FULL);
    assert!(full.contains(0x0628));
    // Arabic letters outside the Nastaliq tier 1 list are not required.
    assert!(!full.contains(0x08A0));
    let unicode = required_characters(policy, &icu, aran, Phase::Three, UNICODE_ONLY);
    assert!(unicode.contains(0x08A0));
}

#[test]
fn coverage_cjk_leaves_out_extension_b() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let hans = required_characters(policy, &icu, tag("Hans"), Phase::Three, FULL);
    assert!(hans.contains(0x4E00));
    assert!(hans.contains(0x3001));
    assert!(!hans.contains(0x20000));
}

#[test]
fn coverage_maps_survive_the_text_form() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let map: CoverageMap = [ScriptTag::GREEK, tag("Armn"), tag("Zsye")]
        .into_iter()
        .map(|script| {
            let chars = required_characters(policy, &icu, script, Phase::Three, FULL);
            (script, chars)
        })
        .collect();
    let parsed = CoverageMap::parse(&map.to_string()).unwrap();
    assert_eq!(parsed, map);
    // Emoji fonts need the legacy private use characters.
    assert!(parsed.get(tag("Zsye")).unwrap().contains(0xFE4E5));

    let deltas = map.compare(&parsed, &CoverageFilter::default());
    assert_eq!(deltas.len(), 3);
    assert!(deltas.values().all(|delta| delta.is_unchanged()));
}

#[test]
fn coverage_phases_differ() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let phase = |phase| {
        [ScriptTag::LGC, tag("Arab")]
            .into_iter()
            .map(|script| {
                let chars = required_characters(policy, &icu, script, phase, FULL);
                (script, chars)
            })
            .collect::<CoverageMap>()
    };
    let deltas = phase(Phase::Two).compare(&phase(Phase::Three), &CoverageFilter::default());
    let arab = &deltas[&tag("Arab")];
    assert!(arab.added.contains(0x00AB));
    assert!(arab.added.contains(0x25CC));
    assert!(!arab.added.contains(0x0628));
}

#[test]
fn coverage_phase_three_lists_every_unicode_script() {
    let icu = IcuClassifier::new();
    let policy = CoveragePolicy::builtin();
    let scripts = policy.scripts(Phase::Three, &icu);
    // None of these is named by a phase 3 override table.
    for script in ["Mong", "Bamu", "Yiii", "Runr", "Hira"] {
        assert!(scripts.contains(&tag(script)), "{script}");
    }
    for script in ["LGC", "Jpan", "Zsye", "Zsym"] {
        assert!(scripts.contains(&tag(script)), "{script}");
    }
    assert!(scripts.len() > 150, "only {} scripts", scripts.len());
    assert!(!scripts.contains(&ScriptTag::UNKNOWN));

    let phase_two = policy.scripts(Phase::Two, &icu);
    assert!(!phase_two.contains(&tag("Hira")));
}
