// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use crate::{write_ranges, CodePointSet, ParseScriptError, Phase, ScriptTag};

/// Range text that violates the ordering or interval contract.
///
/// Carries a non-exhaustive [`RangeErrorKind`] plus the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    kind: RangeErrorKind,
    token: Box<str>,
}

impl RangeError {
    pub(crate) fn new(kind: RangeErrorKind, token: &str) -> Self {
        Self {
            kind,
            token: token.into(),
        }
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> RangeErrorKind {
        self.kind
    }

    /// The token that failed to parse.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl core::fmt::Display for RangeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "malformed range token `{}`: ", self.token)?;
        match self.kind {
            RangeErrorKind::InvalidNumber => f.write_str("not a hexadecimal code point"),
            RangeErrorKind::OutOfBounds(value) => {
                write!(f, "{value:#X} is beyond U+10FFFF")
            }
            RangeErrorKind::EmptyRange { start, end } => {
                write!(f, "end {end:04X} is not after start {start:04X}")
            }
            RangeErrorKind::OutOfOrder {
                start,
                previous_end,
            } => write!(
                f,
                "start {start:04X} is not after the previous end {previous_end:04X}"
            ),
        }
    }
}

impl core::error::Error for RangeError {}

/// The non-exhaustive category of a [`RangeError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RangeErrorKind {
    /// The token (or one of its endpoints) is not a hexadecimal integer.
    InvalidNumber,

    /// The value is above the Unicode code space.
    OutOfBounds(u32),

    /// A two-endpoint range whose end is not greater than its start.
    EmptyRange {
        /// First endpoint.
        start: u32,
        /// Second endpoint.
        end: u32,
    },

    /// The token does not start after the end of the previous token.
    OutOfOrder {
        /// Start of the offending token.
        start: u32,
        /// End of the token before it.
        previous_end: u32,
    },
}

/// A compiled-in coverage table failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolicyError {
    /// A table entry has malformed range text.
    Range {
        /// Name of the table.
        table: &'static str,
        /// The entry's script, if the table is keyed by script.
        script: Option<ScriptTag>,
        /// The parse failure.
        error: RangeError,
    },
    /// A script's extra and not-needed sets share code points.
    Overlap {
        /// The script.
        script: ScriptTag,
        /// The phase of both tables.
        phase: Phase,
        /// The shared code points.
        points: CodePointSet,
    },
    /// A block ends before it starts, or past the last code point.
    InvalidBlock {
        /// Name of the block table.
        table: &'static str,
        /// Name of the block.
        block: &'static str,
    },
    /// A block shares code points with a block listed before it.
    BlockOverlap {
        /// Name of the block table.
        table: &'static str,
        /// Name of the later block.
        block: &'static str,
        /// The shared code points.
        points: CodePointSet,
    },
}

impl core::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Range {
                table,
                script: Some(script),
                error,
            } => write!(f, "table {table}, entry {script}: {error}"),
            Self::Range {
                table,
                script: None,
                error,
            } => write!(f, "table {table}: {error}"),
            Self::Overlap {
                script,
                phase,
                points,
            } => write!(
                f,
                "{script} ({phase}) both needs and excludes {}",
                write_ranges(points)
            ),
            Self::InvalidBlock { table, block } => {
                write!(f, "table {table}: block {block} has invalid bounds")
            }
            Self::BlockOverlap {
                table,
                block,
                points,
            } => write!(
                f,
                "table {table}: block {block} overlaps an earlier block at {}",
                write_ranges(points)
            ),
        }
    }
}

impl core::error::Error for PolicyError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Range { error, .. } => Some(error),
            Self::Overlap { .. } | Self::InvalidBlock { .. } | Self::BlockOverlap { .. } => None,
        }
    }
}

/// Failure while reading the locale corpus.
#[derive(Debug)]
#[non_exhaustive]
pub enum CollectError {
    /// A file or directory could not be read.
    Io {
        /// The path being read.
        path: PathBuf,
        /// The underlying failure.
        error: std::io::Error,
    },
    /// A locale document is not well-formed XML.
    Xml {
        /// The document's path.
        path: PathBuf,
        /// The underlying failure.
        error: roxmltree::Error,
    },
}

impl core::fmt::Display for CollectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io { path, error } => write!(f, "failed to read {}: {error}", path.display()),
            Self::Xml { path, error } => write!(f, "failed to parse {}: {error}", path.display()),
        }
    }
}

impl core::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            Self::Xml { error, .. } => Some(error),
        }
    }
}

/// Failure while parsing the text form of a [`CoverageMap`](crate::CoverageMap).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageMapError {
    line: usize,
    kind: CoverageMapErrorKind,
}

impl CoverageMapError {
    pub(crate) fn new(line: usize, kind: CoverageMapErrorKind) -> Self {
        Self { line, kind }
    }

    /// The one-based line number of the failure.
    pub fn line(&self) -> usize {
        self.line
    }

    /// What went wrong.
    pub fn kind(&self) -> &CoverageMapErrorKind {
        &self.kind
    }
}

impl core::fmt::Display for CoverageMapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            CoverageMapErrorKind::Script(err) => write!(f, "{err}"),
            CoverageMapErrorKind::Range(err) => write!(f, "{err}"),
            CoverageMapErrorKind::Duplicate(script) => write!(f, "{script} listed twice"),
        }
    }
}

impl core::error::Error for CoverageMapError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match &self.kind {
            CoverageMapErrorKind::Script(err) => Some(err),
            CoverageMapErrorKind::Range(err) => Some(err),
            CoverageMapErrorKind::Duplicate(_) => None,
        }
    }
}

/// The category of a [`CoverageMapError`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoverageMapErrorKind {
    /// The line does not start with a valid script tag.
    Script(ParseScriptError),
    /// The range text after the tag is malformed.
    Range(RangeError),
    /// A script appears on more than one line.
    Duplicate(ScriptTag),
}
