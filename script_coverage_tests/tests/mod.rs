// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `script_coverage`.
//!
//! - These tests run against the compiled ICU4X data, through `IcuClassifier`.
//! - The `util` module locates the fixture corpora under `fixtures/`. The `cldr` corpus is a
//!   handful of trimmed CLDR locale documents laid out like a CLDR checkout.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, so that they can share `util`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod collect;
mod coverage;
mod util;
