// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use script_coverage::ScriptTag;

/// Root of the named fixture corpus.
pub(crate) fn fixture_root(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

pub(crate) fn tag(s: &str) -> ScriptTag {
    ScriptTag::parse(s).unwrap()
}
