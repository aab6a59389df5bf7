// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The coverage query surface.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::tables::blocks::{self, Block};
use crate::tables::{self, phase2, phase3, Entry};
use crate::{parse_ranges, CodePointSet, Phase, PolicyError, ScriptTag, UnicodeRepertoire};

static EMPTY: CodePointSet = CodePointSet::new();

static BUILTIN: OnceLock<CoveragePolicy> = OnceLock::new();

type ScriptMap = BTreeMap<ScriptTag, CodePointSet>;

/// The parsed override tables of one phase.
#[derive(Clone, Debug, Default)]
struct PhaseTables {
    extra: ScriptMap,
    not_needed: ScriptMap,
    punct: ScriptMap,
}

impl PhaseTables {
    fn load(
        phase: Phase,
        extra: &[Entry],
        not_needed: &[Entry],
        punct: &[(ScriptTag, &'static str)],
    ) -> Result<Self, PolicyError> {
        let tables = Self {
            extra: load_entries("extra characters needed", extra)?,
            not_needed: load_entries("characters not needed", not_needed)?,
            punct: load_punct(punct)?,
        };
        for (&script, extra) in &tables.extra {
            let Some(not_needed) = tables.not_needed.get(&script) else {
                continue;
            };
            if !extra.is_disjoint(not_needed) {
                return Err(PolicyError::Overlap {
                    script,
                    phase,
                    points: extra.intersection(not_needed),
                });
            }
        }
        log::debug!(
            "loaded {phase} tables: {} extra, {} not needed, {} punctuation entries",
            tables.extra.len(),
            tables.not_needed.len(),
            tables.punct.len()
        );
        Ok(tables)
    }
}

/// Per-script coverage overrides for every phase.
///
/// Every query is total over script tags: a script the tables do not mention gets the empty
/// set (or `false`), never an error.
#[derive(Clone, Debug)]
pub struct CoveragePolicy {
    phase2: PhaseTables,
    phase3: PhaseTables,
    cjk: CodePointSet,
    emoji_pua: CodePointSet,
    required: CodePointSet,
    complex_required: CodePointSet,
}

impl CoveragePolicy {
    /// Parses and validates the compiled-in tables.
    ///
    /// Fails if any range text is malformed, or if a script's extra and not-needed sets
    /// share code points within a phase. Blocks must be well formed and must not overlap,
    /// within or across the CJK and symbol tables.
    pub fn new() -> Result<Self, PolicyError> {
        let mut claimed = CodePointSet::new();
        let cjk = load_blocks("CJK blocks", blocks::CJK_BLOCKS, &mut claimed)?;
        load_blocks("symbol blocks", blocks::SYMBOL_BLOCKS, &mut claimed)?;
        let fixed = |table: &'static str, text: &str| {
            parse_ranges(text).map_err(|error| PolicyError::Range {
                table,
                script: None,
                error,
            })
        };
        Ok(Self {
            phase2: PhaseTables::load(
                Phase::Two,
                phase2::EXTRA_CHARACTERS_NEEDED,
                phase2::CHARACTERS_NOT_NEEDED,
                &[],
            )?,
            phase3: PhaseTables::load(
                Phase::Three,
                phase3::EXTRA_CHARACTERS_NEEDED,
                phase3::CHARACTERS_NOT_NEEDED,
                phase3::SCRIPT_TO_PUNCT,
            )?,
            cjk,
            emoji_pua: fixed("emoji PUA", tables::EMOJI_PUA)?,
            required: fixed("required characters", tables::REQUIRED_CHARS)?,
            complex_required: fixed(
                "complex script required characters",
                tables::COMPLEX_REQUIRED_CHARS,
            )?,
        })
    }

    /// The shared policy built from the compiled-in tables.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in tables fail validation. They are checked by this crate's
    /// tests, so this only happens after a bad edit to the tables.
    pub fn builtin() -> &'static Self {
        BUILTIN.get_or_init(|| match Self::new() {
            Ok(policy) => policy,
            Err(err) => panic!("built-in coverage tables are invalid: {err}"),
        })
    }

    fn phase(&self, phase: Phase) -> &PhaseTables {
        match phase {
            Phase::Two => &self.phase2,
            Phase::Three => &self.phase3,
        }
    }

    /// Characters outside the script's own repertoire that its fonts must also cover.
    pub fn extra_characters_needed(&self, script: ScriptTag, phase: Phase) -> &CodePointSet {
        self.phase(phase).extra.get(&script).unwrap_or(&EMPTY)
    }

    /// Characters of the script's repertoire that its fonts need not cover.
    pub fn characters_not_needed(&self, script: ScriptTag, phase: Phase) -> &CodePointSet {
        self.phase(phase).not_needed.get(&script).unwrap_or(&EMPTY)
    }

    /// Punctuation used by the script's locales.
    ///
    /// Only phase 3 has punctuation data. For `LGC` this is the union of the `Latn`, `Grek`
    /// and `Cyrl` entries.
    pub fn script_to_punct(&self, script: ScriptTag, phase: Phase) -> Cow<'_, CodePointSet> {
        let punct = &self.phase(phase).punct;
        if script.is_lgc() {
            let mut union = CodePointSet::new();
            for part in [ScriptTag::LATIN, ScriptTag::GREEK, ScriptTag::CYRILLIC] {
                if let Some(set) = punct.get(&part) {
                    union.union_with(set);
                }
            }
            return Cow::Owned(union);
        }
        Cow::Borrowed(punct.get(&script).unwrap_or(&EMPTY))
    }

    /// Returns `true` if the script needs a shaping engine.
    pub fn is_complex_script(&self, script: ScriptTag) -> bool {
        tables::COMPLEX_SCRIPTS.binary_search(&script).is_ok()
    }

    /// Returns `true` if the script's regular fonts are deemed suitable for UI use.
    pub fn is_deemed_ui_script(&self, script: ScriptTag) -> bool {
        tables::DEEMED_UI_SCRIPTS.binary_search(&script).is_ok()
    }

    /// The scripts a release of the given phase covers, in ascending order.
    ///
    /// Phase 2 is a fixed list. Phase 3 is every script of the Unicode repertoire plus the
    /// custom pseudo-scripts.
    pub fn scripts(&self, phase: Phase, repertoire: &impl UnicodeRepertoire) -> Vec<ScriptTag> {
        match phase {
            Phase::Two => tables::PHASE_TWO_SCRIPTS.to_vec(),
            Phase::Three => {
                let mut scripts = repertoire.all_scripts();
                scripts.extend(tables::CUSTOM_SCRIPTS);
                scripts.into_iter().collect()
            }
        }
    }

    /// Every code point of the CJK base blocks.
    pub fn cjk_set(&self) -> &CodePointSet {
        &self.cjk
    }

    /// The legacy private use characters required for Android emoji.
    pub fn emoji_pua(&self) -> &CodePointSet {
        &self.emoji_pua
    }

    /// Characters required in every font.
    pub fn required_chars(&self) -> &CodePointSet {
        &self.required
    }

    /// Characters required in complex script fonts from phase 3 on.
    pub fn complex_required_chars(&self) -> &CodePointSet {
        &self.complex_required
    }
}

fn load_entries(table: &'static str, entries: &[Entry]) -> Result<ScriptMap, PolicyError> {
    let mut map = ScriptMap::new();
    for &(script, pieces) in entries {
        let set = map.entry(script).or_default();
        for piece in pieces {
            let parsed = parse_ranges(piece).map_err(|error| PolicyError::Range {
                table,
                script: Some(script),
                error,
            })?;
            set.union_with(&parsed);
        }
    }
    Ok(map)
}

// `claimed` collects the code points of every block loaded so far.
fn load_blocks(
    table: &'static str,
    blocks: &[Block],
    claimed: &mut CodePointSet,
) -> Result<CodePointSet, PolicyError> {
    let mut set = CodePointSet::new();
    for block in blocks {
        if block.first >= block.last || block.last > u32::from(char::MAX) {
            return Err(PolicyError::InvalidBlock {
                table,
                block: block.name,
            });
        }
        let points = CodePointSet::from_range(block.first..=block.last);
        if !points.is_disjoint(claimed) {
            return Err(PolicyError::BlockOverlap {
                table,
                block: block.name,
                points: points.intersection(claimed),
            });
        }
        claimed.union_with(&points);
        set.union_with(&points);
    }
    Ok(set)
}

// LGC is always synthesized on query, so a stored LGC entry is dropped.
fn load_punct(entries: &[(ScriptTag, &'static str)]) -> Result<ScriptMap, PolicyError> {
    let mut map = ScriptMap::new();
    for &(script, text) in entries.iter().filter(|(script, _)| !script.is_lgc()) {
        let set = parse_ranges(text).map_err(|error| PolicyError::Range {
            table: "script to punctuation",
            script: Some(script),
            error,
        })?;
        map.entry(script).or_default().union_with(&set);
    }
    Ok(map)
}
