// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-script coverage maps and their comparison.
//!
//! The text form has one line per script: the tag, a tab, and the script's code points in
//! range notation. Blank lines and lines starting with `#` are ignored.
//!
//! ```
//! use script_coverage::{CoverageFilter, CoverageMap, ScriptTag};
//!
//! let base: CoverageMap = "Latn\t0041..005A\n".parse().unwrap();
//! let target: CoverageMap = "Latn\t0041..005B\n".parse().unwrap();
//! let deltas = base.compare(&target, &CoverageFilter::default());
//! assert_eq!(deltas[&ScriptTag::LATIN].added.to_string(), "005B");
//! ```

use core::fmt;
use core::str::FromStr;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

use crate::{parse_ranges, CodePointSet, CoverageMapError, CoverageMapErrorKind, ScriptTag};

/// An ordered mapping from script to code points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageMap {
    scripts: BTreeMap<ScriptTag, CodePointSet>,
}

impl CoverageMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the text form.
    pub fn parse(text: &str) -> Result<Self, CoverageMapError> {
        let mut map = Self::new();
        for (ix, line) in text.lines().enumerate() {
            let line_number = ix + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (tag, ranges) = line
                .split_once(|c: char| c.is_ascii_whitespace())
                .unwrap_or((line, ""));
            let script = ScriptTag::parse(tag).map_err(|err| {
                CoverageMapError::new(line_number, CoverageMapErrorKind::Script(err))
            })?;
            let chars = parse_ranges(ranges).map_err(|err| {
                CoverageMapError::new(line_number, CoverageMapErrorKind::Range(err))
            })?;
            if map.scripts.insert(script, chars).is_some() {
                return Err(CoverageMapError::new(
                    line_number,
                    CoverageMapErrorKind::Duplicate(script),
                ));
            }
        }
        Ok(map)
    }

    /// Sets the code points of a script, returning the previous ones.
    pub fn insert(&mut self, script: ScriptTag, chars: CodePointSet) -> Option<CodePointSet> {
        self.scripts.insert(script, chars)
    }

    /// The code points of a script, if it is present.
    pub fn get(&self, script: ScriptTag) -> Option<&CodePointSet> {
        self.scripts.get(&script)
    }

    /// Number of scripts in the map.
    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    /// Returns `true` if the map has no scripts.
    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Iterates the scripts and their code points in ascending script order.
    pub fn iter(&self) -> btree_map::Iter<'_, ScriptTag, CodePointSet> {
        self.scripts.iter()
    }

    /// Compares this map, as the base, with `target`.
    ///
    /// Only scripts present in both maps are compared. Every compared script gets a
    /// [`CoverageDelta`], which is empty when nothing changed.
    pub fn compare(
        &self,
        target: &Self,
        filter: &CoverageFilter,
    ) -> BTreeMap<ScriptTag, CoverageDelta> {
        let mut deltas = BTreeMap::new();
        for (&script, base) in &self.scripts {
            if !filter.includes_script(script) {
                continue;
            }
            let Some(target) = target.scripts.get(&script) else {
                continue;
            };
            let base = filter.restrict(base);
            let target = filter.restrict(target);
            let mut delta = CoverageDelta::default();
            if !filter.no_additions {
                delta.added = target.difference(&base);
            }
            if !filter.no_removals {
                delta.removed = base.difference(&target);
            }
            deltas.insert(script, delta);
        }
        deltas
    }
}

impl fmt::Display for CoverageMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (script, chars) in &self.scripts {
            writeln!(f, "{script}\t{chars}")?;
        }
        Ok(())
    }
}

impl FromStr for CoverageMap {
    type Err = CoverageMapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl FromIterator<(ScriptTag, CodePointSet)> for CoverageMap {
    fn from_iter<I: IntoIterator<Item = (ScriptTag, CodePointSet)>>(iter: I) -> Self {
        Self {
            scripts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CoverageMap {
    type Item = (&'a ScriptTag, &'a CodePointSet);
    type IntoIter = btree_map::Iter<'a, ScriptTag, CodePointSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Restrictions on a [`CoverageMap::compare`].
#[derive(Clone, Debug, Default)]
pub struct CoverageFilter {
    /// Only compare these scripts.
    pub scripts: Option<BTreeSet<ScriptTag>>,
    /// Never compare these scripts.
    pub except_scripts: BTreeSet<ScriptTag>,
    /// Only compare these code points.
    pub code_points: Option<CodePointSet>,
    /// Never compare these code points.
    pub except_code_points: CodePointSet,
    /// Leave [`CoverageDelta::added`] empty.
    pub no_additions: bool,
    /// Leave [`CoverageDelta::removed`] empty.
    pub no_removals: bool,
}

impl CoverageFilter {
    fn includes_script(&self, script: ScriptTag) -> bool {
        !self.except_scripts.contains(&script)
            && self
                .scripts
                .as_ref()
                .is_none_or(|scripts| scripts.contains(&script))
    }

    fn restrict(&self, chars: &CodePointSet) -> CodePointSet {
        let mut chars = match &self.code_points {
            Some(only) => chars.intersection(only),
            None => chars.clone(),
        };
        chars.subtract(&self.except_code_points);
        chars
    }
}

/// The change in one script's coverage between two maps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageDelta {
    /// Code points in the target but not the base.
    pub added: CodePointSet,
    /// Code points in the base but not the target.
    pub removed: CodePointSet,
}

impl CoverageDelta {
    /// Returns `true` if nothing was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{CoverageFilter, CoverageMap};
    use crate::{CoverageMapErrorKind, ParseScriptError, RangeErrorKind, ScriptTag};

    const BASE: &str = "
# base coverage
Grek\t0391..03A1,03A3..03A9
LGC\t0020..007E
Latn\t0041..005A,0061..007A
";

    fn map(text: &str) -> CoverageMap {
        text.parse().unwrap()
    }

    #[test]
    fn parses_and_formats() {
        let base = map(BASE);
        assert_eq!(base.len(), 3);
        assert_eq!(
            base.get(ScriptTag::LGC).map(ToString::to_string).as_deref(),
            Some("0020..007E")
        );
        // `LGC` sorts before the four-letter tags starting with `L`.
        assert_eq!(
            base.to_string(),
            "Grek\t0391..03A1,03A3..03A9\nLGC\t0020..007E\nLatn\t0041..005A,0061..007A\n"
        );
        assert_eq!(map(&base.to_string()), base);
    }

    #[test]
    fn accepts_spaces_and_empty_sets() {
        let parsed = map("Cyrl   0410-044F\nArab\n");
        assert_eq!(parsed.len(), 2);
        assert!(parsed.get(ScriptTag::parse("Arab").unwrap()).unwrap().is_empty());
        assert_eq!(parsed.to_string(), "Arab\t\nCyrl\t0410..044F\n");
    }

    #[test]
    fn reports_line_numbers() {
        let err = CoverageMap::parse("Latn\t0041\nLatin\t0042\n").unwrap_err();
        assert_eq!(err.line(), 2);
        assert_eq!(
            err.kind(),
            &CoverageMapErrorKind::Script(ParseScriptError::InvalidLength)
        );

        let err = CoverageMap::parse("\nLatn\t0042 0041\n").unwrap_err();
        assert_eq!(err.line(), 2);
        let CoverageMapErrorKind::Range(range) = err.kind() else {
            panic!("expected a range error, got {err:?}");
        };
        assert!(matches!(range.kind(), RangeErrorKind::OutOfOrder { .. }));

        let err = CoverageMap::parse("Latn\t0041\nlatn\t0042\n").unwrap_err();
        assert_eq!(
            err.kind(),
            &CoverageMapErrorKind::Duplicate(ScriptTag::LATIN)
        );
    }

    #[test]
    fn compares_common_scripts() {
        let base = map(BASE);
        let target = map("Grek\t0391..03A9\nLatn\t0041..005A\nCyrl\t0410..044F\n");
        let deltas = base.compare(&target, &CoverageFilter::default());
        // LGC is missing from the target and Cyrl from the base.
        assert_eq!(
            deltas.keys().copied().collect::<Vec<_>>(),
            vec![ScriptTag::GREEK, ScriptTag::LATIN]
        );
        let grek = &deltas[&ScriptTag::GREEK];
        assert_eq!(grek.added.to_string(), "03A2");
        assert!(grek.removed.is_empty());
        let latn = &deltas[&ScriptTag::LATIN];
        assert!(latn.added.is_empty());
        assert_eq!(latn.removed.to_string(), "0061..007A");
    }

    #[test]
    fn unchanged_scripts_are_reported_empty() {
        let base = map(BASE);
        let deltas = base.compare(&base, &CoverageFilter::default());
        assert_eq!(deltas.len(), 3);
        assert!(deltas.values().all(|delta| delta.is_unchanged()));
    }

    #[test]
    fn filters_scripts_and_code_points() {
        let base = map(BASE);
        let target = map("Grek\t0391..03A9\nLatn\t0041..005A\nLGC\t0021..007F\n");

        let filter = CoverageFilter {
            scripts: Some(BTreeSet::from([ScriptTag::LGC, ScriptTag::LATIN])),
            except_scripts: BTreeSet::from([ScriptTag::LATIN]),
            ..CoverageFilter::default()
        };
        let deltas = base.compare(&target, &filter);
        assert_eq!(deltas.len(), 1);
        let lgc = &deltas[&ScriptTag::LGC];
        assert_eq!(lgc.added.to_string(), "007F");
        assert_eq!(lgc.removed.to_string(), "0020");

        let filter = CoverageFilter {
            code_points: Some("0020-0070".parse().unwrap()),
            except_code_points: "0020".parse().unwrap(),
            no_removals: true,
            ..CoverageFilter::default()
        };
        let deltas = base.compare(&target, &filter);
        assert!(deltas[&ScriptTag::LGC].is_unchanged());
        // Greek is outside the code point filter.
        assert!(deltas[&ScriptTag::GREEK].is_unchanged());
        // Removals are suppressed.
        assert!(deltas[&ScriptTag::LATIN].is_unchanged());

        let filter = CoverageFilter {
            no_additions: true,
            ..CoverageFilter::default()
        };
        let deltas = base.compare(&target, &filter);
        assert!(deltas[&ScriptTag::GREEK].is_unchanged());
        assert_eq!(deltas[&ScriptTag::LGC].removed.to_string(), "0020");
    }
}
