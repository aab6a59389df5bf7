// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

/// A script identifier used as a key into the coverage tables.
///
/// This is either an ISO 15924 code (four ASCII letters, stored in canonical `Titlecase`
/// form such as `Latn` or `Cyrl`) or the synthetic [`ScriptTag::LGC`] tag, which stands for
/// Latin, Greek and Cyrillic together.
///
/// Tags are opaque: they are not validated against the ISO 15924 registry.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptTag {
    // Three-letter tags are padded with a trailing NUL.
    raw: [u8; 4],
}

impl ScriptTag {
    /// The “unknown” script (`Zzzz`).
    pub const UNKNOWN: Self = Self::from_bytes(*b"Zzzz");

    /// The “common” script (`Zyyy`).
    pub const COMMON: Self = Self::from_bytes(*b"Zyyy");

    /// The “inherited” script (`Zinh`).
    pub const INHERITED: Self = Self::from_bytes(*b"Zinh");

    /// Latin, Greek and Cyrillic combined (`LGC`).
    pub const LGC: Self = Self::from_bytes(*b"LGC\0");

    /// Latin (`Latn`).
    pub const LATIN: Self = Self::from_bytes(*b"Latn");

    /// Greek (`Grek`).
    pub const GREEK: Self = Self::from_bytes(*b"Grek");

    /// Cyrillic (`Cyrl`).
    pub const CYRILLIC: Self = Self::from_bytes(*b"Cyrl");

    /// Creates a `ScriptTag` from raw bytes.
    ///
    /// The input must be four ASCII bytes in canonical form, or three followed by a NUL.
    /// This function does not validate.
    #[must_use]
    #[inline(always)]
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        Self { raw }
    }

    /// Creates a `ScriptTag` from a 3 or 4 byte string literal.
    ///
    /// This is intended for `const` construction and does not validate the input.
    #[must_use]
    pub const fn from_str_unchecked(s: &str) -> Self {
        let bytes = s.as_bytes();
        let last = if bytes.len() > 3 { bytes[3] } else { 0 };
        Self::from_bytes([bytes[0], bytes[1], bytes[2], last])
    }

    /// Returns the canonical string form (e.g. `Latn` or `LGC`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        let len = if self.raw[3] == 0 { 3 } else { 4 };
        core::str::from_utf8(&self.raw[..len]).unwrap_or("Zzzz")
    }

    /// Parses a script tag.
    ///
    /// Parsing is case-insensitive; four-letter output is normalized to `Titlecase`
    /// (e.g. `LATN` → `Latn`), and `lgc` becomes `LGC`.
    #[inline(always)]
    pub fn parse(s: &str) -> Result<Self, ParseScriptError> {
        s.parse()
    }

    /// Returns `true` for the synthetic Latin + Greek + Cyrillic tag.
    pub fn is_lgc(self) -> bool {
        self == Self::LGC
    }
}

impl fmt::Debug for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScriptTag").field(&self.as_str()).finish()
    }
}

impl fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScriptTag {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() == 3 {
            return if s.eq_ignore_ascii_case("LGC") {
                Ok(Self::LGC)
            } else {
                Err(ParseScriptError::InvalidLength)
            };
        }
        if bytes.len() != 4 {
            return Err(ParseScriptError::InvalidLength);
        }
        if !bytes.iter().all(|b| b.is_ascii_alphabetic()) {
            return Err(ParseScriptError::InvalidBytes);
        }
        let mut raw = [0_u8; 4];
        raw[0] = bytes[0].to_ascii_uppercase();
        raw[1] = bytes[1].to_ascii_lowercase();
        raw[2] = bytes[2].to_ascii_lowercase();
        raw[3] = bytes[3].to_ascii_lowercase();
        Ok(Self { raw })
    }
}

/// An error returned from parsing a [`ScriptTag`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptError {
    /// The input was not a four letter code or `LGC`.
    InvalidLength,
    /// The input contained non-ASCII alphabetic bytes.
    InvalidBytes,
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("invalid script length"),
            Self::InvalidBytes => f.write_str("invalid script bytes"),
        }
    }
}

impl core::error::Error for ParseScriptError {}

/// A coverage policy generation.
///
/// Each phase has its own tables of extra and excluded characters. Only phase 3 carries
/// CLDR punctuation data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    /// The phase 2 policy.
    Two = 2,
    /// The phase 3 policy.
    Three = 3,
}

impl Phase {
    /// All phases, oldest first.
    pub const ALL: [Self; 2] = [Self::Two, Self::Three];

    /// Returns the phase for its number, if there is one.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// The phase number.
    pub fn number(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "phase {}", self.number())
    }
}

impl TryFrom<u8> for Phase {
    type Error = ParsePhaseError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_number(n).ok_or(ParsePhaseError)
    }
}

impl FromStr for Phase {
    type Err = ParsePhaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_number)
            .ok_or(ParsePhaseError)
    }
}

/// An error returned when a phase number is not 2 or 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParsePhaseError;

impl fmt::Display for ParsePhaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("phase must be 2 or 3")
    }
}

impl core::error::Error for ParsePhaseError {}
