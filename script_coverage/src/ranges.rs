// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Code point sets and their compact range notation.
//!
//! Range text is a list of tokens separated by commas and/or whitespace. Each token is a
//! hexadecimal code point (optionally prefixed with `U+` or `0x`) or two of them joined by
//! `-` or `..`. A `#` starts a comment that runs to the end of the line.
//!
//! ```
//! use script_coverage::{parse_ranges, write_ranges};
//!
//! let set = parse_ranges("0041-0043 # A..C\n0045").unwrap();
//! assert_eq!(write_ranges(&set), "0041..0043,0045");
//! ```

use core::fmt::{self, Write as _};
use core::iter::{Copied, Peekable};
use core::ops::RangeInclusive;
use core::str::FromStr;
use std::collections::btree_set::{self, BTreeSet};

use crate::{RangeError, RangeErrorKind};

/// The highest Unicode code point.
const MAX_CODE_POINT: u32 = 0x10FFFF;

/// A set of Unicode code points.
///
/// Ranges are only produced on demand (see [`CodePointSet::ranges`]), so the set itself can
/// never hold overlapping or unmerged intervals.
///
/// Values above `U+10FFFF` are not code points and are never stored: inserting one is a
/// no-op, and ranges are clipped to the code point space.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CodePointSet {
    points: BTreeSet<u32>,
}

impl CodePointSet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            points: BTreeSet::new(),
        }
    }

    /// Creates a set holding every code point in `range`.
    #[must_use]
    pub fn from_range(range: RangeInclusive<u32>) -> Self {
        let mut set = Self::new();
        set.insert_range(range);
        set
    }

    /// Adds a code point, returning `true` if it was not already present.
    ///
    /// Returns `false` without inserting if `cp` is above `U+10FFFF`.
    pub fn insert(&mut self, cp: u32) -> bool {
        cp <= MAX_CODE_POINT && self.points.insert(cp)
    }

    /// Adds every code point in `range`, ignoring the part above `U+10FFFF`.
    pub fn insert_range(&mut self, range: RangeInclusive<u32>) {
        let (start, end) = range.into_inner();
        self.points.extend(start..=end.min(MAX_CODE_POINT));
    }

    /// Returns `true` if the set contains `cp`.
    pub fn contains(&self, cp: u32) -> bool {
        self.points.contains(&cp)
    }

    /// Number of code points in the set.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the set holds no code points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the code points in ascending order.
    pub fn iter(&self) -> Copied<btree_set::Iter<'_, u32>> {
        self.points.iter().copied()
    }

    /// Iterates the code points that are valid `char`s, in ascending order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().filter_map(char::from_u32)
    }

    /// Iterates the maximal runs of consecutive code points in ascending order.
    pub fn ranges(&self) -> Ranges<'_> {
        Ranges {
            points: self.iter().peekable(),
        }
    }

    /// Adds every code point of `other`.
    pub fn union_with(&mut self, other: &Self) {
        self.points.extend(other.iter());
    }

    /// Removes every code point of `other`.
    pub fn subtract(&mut self, other: &Self) {
        if other.len() < self.len() {
            for cp in other.iter() {
                self.points.remove(&cp);
            }
        } else {
            self.points.retain(|cp| !other.contains(*cp));
        }
    }

    /// Keeps only the code points for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(u32) -> bool) {
        self.points.retain(|cp| f(*cp));
    }

    /// Returns the union of two sets.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.union_with(other);
        result
    }

    /// Returns the code points of `self` that are not in `other`.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        self.points.difference(&other.points).copied().collect()
    }

    /// Returns the code points present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.points.intersection(&other.points).copied().collect()
    }

    /// Returns `true` if the sets share no code points.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.points.is_disjoint(&other.points)
    }
}

impl fmt::Debug for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodePointSet")
            .field(&format_args!("{self}"))
            .finish()
    }
}

/// Formats the set in canonical range notation, as [`write_ranges`] does.
impl fmt::Display for CodePointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (ix, range) in self.ranges().enumerate() {
            if ix != 0 {
                f.write_char(',')?;
            }
            let (start, end) = range.into_inner();
            if start == end {
                write!(f, "{start:04X}")?;
            } else {
                write!(f, "{start:04X}..{end:04X}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for CodePointSet {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ranges(s)
    }
}

impl FromIterator<u32> for CodePointSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u32> for CodePointSet {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.points
            .extend(iter.into_iter().filter(|&cp| cp <= MAX_CODE_POINT));
    }
}

impl<'a> IntoIterator for &'a CodePointSet {
    type Item = u32;
    type IntoIter = Copied<btree_set::Iter<'a, u32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the maximal runs of a [`CodePointSet`].
#[derive(Clone, Debug)]
pub struct Ranges<'a> {
    points: Peekable<Copied<btree_set::Iter<'a, u32>>>,
}

impl Iterator for Ranges<'_> {
    type Item = RangeInclusive<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.points.next()?;
        let mut end = start;
        while let Some(next) = end
            .checked_add(1)
            .and_then(|succ| self.points.next_if_eq(&succ))
        {
            end = next;
        }
        Some(start..=end)
    }
}

/// Parses range text into a set of code points.
///
/// Tokens must be strictly increasing and disjoint in input order: each token has to start
/// after the end of the one before it, and a two-endpoint range must end after it starts.
pub fn parse_ranges(text: &str) -> Result<CodePointSet, RangeError> {
    let mut set = CodePointSet::new();
    let mut previous_end: Option<u32> = None;
    for line in text.lines() {
        let line = line.split_once('#').map_or(line, |(content, _)| content);
        let tokens = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty());
        for token in tokens {
            let (start, end) = parse_token(token)?;
            if let Some(previous_end) = previous_end {
                if start <= previous_end {
                    return Err(RangeError::new(
                        RangeErrorKind::OutOfOrder {
                            start,
                            previous_end,
                        },
                        token,
                    ));
                }
            }
            set.insert_range(start..=end);
            previous_end = Some(end);
        }
    }
    Ok(set)
}

/// Serializes a set in canonical range notation.
///
/// Runs of consecutive code points become `start..end`, lone code points are bare, and the
/// parts are joined by `,`. All values are upper case hexadecimal, at least four digits.
pub fn write_ranges(set: &CodePointSet) -> String {
    set.to_string()
}

fn parse_token(token: &str) -> Result<(u32, u32), RangeError> {
    match token.split_once("..").or_else(|| token.split_once('-')) {
        None => {
            let cp = parse_code_point(token, token)?;
            Ok((cp, cp))
        }
        Some((start, end)) => {
            let start = parse_code_point(start, token)?;
            let end = parse_code_point(end, token)?;
            if end <= start {
                return Err(RangeError::new(
                    RangeErrorKind::EmptyRange { start, end },
                    token,
                ));
            }
            Ok((start, end))
        }
    }
}

fn parse_code_point(text: &str, token: &str) -> Result<u32, RangeError> {
    let digits = ["U+", "u+", "0x", "0X"]
        .iter()
        .find_map(|prefix| text.strip_prefix(prefix))
        .unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RangeError::new(RangeErrorKind::InvalidNumber, token));
    }
    let value = u32::from_str_radix(digits, 16)
        .map_err(|_| RangeError::new(RangeErrorKind::InvalidNumber, token))?;
    if value > MAX_CODE_POINT {
        return Err(RangeError::new(RangeErrorKind::OutOfBounds(value), token));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{parse_ranges, write_ranges, CodePointSet};
    use crate::RangeErrorKind;

    #[test]
    fn merges_adjacent_points() {
        let set: CodePointSet = [0x41, 0x42, 0x43, 0x45].into_iter().collect();
        assert_eq!(write_ranges(&set), "0041..0043,0045");
    }

    #[test]
    fn writes_empty_set() {
        assert_eq!(write_ranges(&CodePointSet::new()), "");
        assert!(parse_ranges("").unwrap().is_empty());
    }

    #[test]
    fn accepts_both_separators_and_comments() {
        let set = parse_ranges(
            "
            0020-0022  # space, exclamation, quote
            0030..0031, 0041

            # a whole comment line
            1F600
            ",
        )
        .unwrap();
        let expected: CodePointSet = [0x20, 0x21, 0x22, 0x30, 0x31, 0x41, 0x1F600]
            .into_iter()
            .collect();
        assert_eq!(set, expected);
    }

    #[test]
    fn accepts_prefixes_and_lower_case() {
        let set = parse_ranges("U+00e9,0x0100-0x0101").unwrap();
        assert_eq!(write_ranges(&set), "00E9,0100..0101");
    }

    #[test]
    fn adjacent_input_ranges_are_merged_on_output() {
        let set = parse_ranges("2000-2029 202A-206F").unwrap();
        assert_eq!(write_ranges(&set), "2000..206F");
    }

    #[test]
    fn rejects_out_of_order_ranges() {
        let err = parse_ranges("0050-0060,0040-0045").unwrap_err();
        assert_eq!(
            err.kind(),
            RangeErrorKind::OutOfOrder {
                start: 0x40,
                previous_end: 0x60
            }
        );
        assert_eq!(err.token(), "0040-0045");
    }

    #[test]
    fn rejects_duplicates_and_overlap() {
        assert!(parse_ranges("0041 0041").is_err());
        assert!(parse_ranges("0041-0045 0045").is_err());
    }

    #[test]
    fn rejects_empty_ranges() {
        let err = parse_ranges("0045-0045").unwrap_err();
        assert_eq!(
            err.kind(),
            RangeErrorKind::EmptyRange {
                start: 0x45,
                end: 0x45
            }
        );
        assert!(parse_ranges("0046..0045").is_err());
    }

    #[test]
    fn rejects_bad_numbers() {
        for text in ["00G1", "0041..", "-0041", "0041-0042-0043", "U+"] {
            let err = parse_ranges(text).unwrap_err();
            assert_eq!(err.kind(), RangeErrorKind::InvalidNumber, "{text}");
        }
        assert_eq!(
            parse_ranges("110000").unwrap_err().kind(),
            RangeErrorKind::OutOfBounds(0x110000)
        );
    }

    #[test]
    fn round_trips() {
        let mut set = CodePointSet::new();
        set.insert(0);
        set.insert_range(0x300..=0x36F);
        set.insert(0x2026);
        set.insert_range(0x20000..=0x2FFFF);
        set.insert(0x10FFFF);
        assert_eq!(parse_ranges(&write_ranges(&set)).unwrap(), set);
    }

    #[test]
    fn values_above_the_code_point_space_are_ignored() {
        let mut set = CodePointSet::new();
        assert!(set.insert(0x10FFFF));
        assert!(!set.insert(0x110000));
        assert!(!set.insert(u32::MAX));
        set.insert_range(0x10FFF0..=u32::MAX);
        assert_eq!(write_ranges(&set), "10FFF0..10FFFF");
        assert_eq!(parse_ranges(&write_ranges(&set)).unwrap(), set);

        let collected: CodePointSet = [0x41, 0x110000, u32::MAX].into_iter().collect();
        assert_eq!(write_ranges(&collected), "0041");
        assert!(!collected.contains(u32::MAX));
    }

    #[test]
    fn set_operations() {
        let a = parse_ranges("0041-0045").unwrap();
        let b = parse_ranges("0044-0048").unwrap();
        assert_eq!(write_ranges(&a.union(&b)), "0041..0048");
        assert_eq!(write_ranges(&a.difference(&b)), "0041..0043");
        assert_eq!(write_ranges(&a.intersection(&b)), "0044..0045");
        assert!(!a.is_disjoint(&b));

        let mut c = a.clone();
        c.subtract(&b);
        assert_eq!(c, a.difference(&b));
    }

    #[test]
    fn ranges_iterator() {
        let set = parse_ranges("0041-0043 0045 0047-0048").unwrap();
        let ranges: Vec<_> = set.ranges().collect();
        assert_eq!(ranges, vec![0x41..=0x43, 0x45..=0x45, 0x47..=0x48]);
    }
}
