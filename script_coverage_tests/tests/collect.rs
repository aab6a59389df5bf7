// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Punctuation collection over the fixture CLDR tree.

use script_coverage::{punct, CollectError, IcuClassifier, ScriptTag};

use crate::util::{fixture_root, tag};

#[test]
fn collect_lists_sorted_xml_documents() {
    let paths = punct::locale_documents(&fixture_root("cldr")).unwrap();
    let names: Vec<_> = paths
        .iter()
        .map(|path| path.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(
        names,
        [
            "el.xml",
            "en.xml",
            "fr.xml",
            "haw.xml",
            "ja.xml",
            "root.xml",
            "ru.xml",
            "zh_Hant.xml"
        ]
    );
}

#[test]
fn collect_buckets_by_likely_script() {
    let by_script =
        punct::collect_by_script(&fixture_root("cldr"), &IcuClassifier::new()).unwrap();
    let scripts: Vec<_> = by_script.keys().map(ScriptTag::as_str).collect();
    // `root` has no likely script and `haw` has no punctuation.
    assert_eq!(scripts, ["Cyrl", "Grek", "Hant", "Jpan", "LGC", "Latn"]);

    let ranges = |s: &str| by_script[&tag(s)].to_string();
    assert_eq!(
        ranges("Latn"),
        "002C,003F,00AB,00BB,2018..2019,201C..201D,2026"
    );
    assert_eq!(ranges("Grek"), "003B,00AB,00BB,201C..201D");
    assert_eq!(ranges("Cyrl"), "00AB,00BB,201C,201E");
    assert_eq!(ranges("Jpan"), "2026,300C..300F");
    assert_eq!(ranges("Hant"), "3001,300C..300D");
    assert_eq!(
        ranges("LGC"),
        "002C,003B,003F,00AB,00BB,2018..2019,201C..201E,2026"
    );
    assert!(by_script.values().all(|chars| !chars.contains(0x00A1)));
}

#[test]
fn collect_is_deterministic() {
    let classifier = IcuClassifier::new();
    let first = punct::collect_by_script(&fixture_root("cldr"), &classifier).unwrap();
    let second = punct::collect_by_script(&fixture_root("cldr"), &classifier).unwrap();
    assert_eq!(first, second);
    assert_eq!(punct::render_table(&first), punct::render_table(&second));
}

#[test]
fn collect_renders_table_entries() {
    let by_script =
        punct::collect_by_script(&fixture_root("cldr"), &IcuClassifier::new()).unwrap();
    let table = punct::render_table(&by_script);
    let lines: Vec<_> = table.lines().collect();
    // Two lines per script, without `LGC`.
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "    // «|»|“|„");
    assert_eq!(
        lines[1],
        "    (ScriptTag::from_str_unchecked(\"Cyrl\"), \"00AB,00BB,201C,201E\"),"
    );
    assert!(!table.contains("LGC"));
}

#[test]
fn collect_reports_missing_corpus() {
    let root = fixture_root("does-not-exist");
    let err = punct::collect_by_script(&root, &IcuClassifier::new()).unwrap_err();
    let CollectError::Io { path, .. } = &err else {
        panic!("expected an I/O error, got {err:?}");
    };
    assert!(path.ends_with("common/main"));
}

#[test]
fn collect_fails_on_malformed_documents() {
    let err = punct::collect_by_script(&fixture_root("broken"), &IcuClassifier::new())
        .unwrap_err();
    let CollectError::Xml { path, .. } = &err else {
        panic!("expected an XML error, got {err:?}");
    };
    assert!(path.ends_with("xx.xml"));
    assert!(err.to_string().contains("xx.xml"));
}
