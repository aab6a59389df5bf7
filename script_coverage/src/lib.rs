// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-script character coverage requirements for font families.
//!
//! This crate answers “which code points must a font for this script contain?”. It combines
//! three sources:
//!
//! - punctuation usage mined from the CLDR locale corpus (see [`punct`]);
//! - curated per-script tables of extra and excluded characters (see [`tables`]);
//! - the coverage policy in force, selected by [`Phase`].
//!
//! The [`CoveragePolicy`] value object is the query surface. It is built once from the
//! compiled-in tables, which are validated on construction.
//!
//! ## Features
//!
//! - `icu` (enabled by default): Provides [`IcuClassifier`], a [`ScriptClassifier`] and
//!   [`UnicodeRepertoire`] backed by compiled ICU4X data.
//!
//! ## Example
//!
//! ```
//! use script_coverage::{CoveragePolicy, Phase, ScriptTag};
//!
//! let policy = CoveragePolicy::builtin();
//! let arab = ScriptTag::parse("Arab").unwrap();
//! assert!(policy.is_complex_script(arab));
//! assert!(policy.extra_characters_needed(arab, Phase::Three).contains(0x061C));
//! assert!(policy.script_to_punct(arab, Phase::Two).is_empty());
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]

mod classifier;
pub mod coverage_map;
mod error;
mod policy;
pub mod punct;
mod ranges;
pub mod required;
mod script;
pub mod tables;

#[cfg(feature = "icu")]
pub use classifier::IcuClassifier;
pub use classifier::{ScriptClassifier, UnicodeRepertoire};
pub use coverage_map::{CoverageDelta, CoverageFilter, CoverageMap};
pub use error::{
    CollectError, CoverageMapError, CoverageMapErrorKind, PolicyError, RangeError, RangeErrorKind,
};
pub use policy::CoveragePolicy;
pub use ranges::{parse_ranges, write_ranges, CodePointSet, Ranges};
pub use required::{required_characters, RequiredOptions};
pub use script::{ParsePhaseError, ParseScriptError, Phase, ScriptTag};
