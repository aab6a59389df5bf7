// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Punctuation usage mined from CLDR locale data.
//!
//! Each locale document contributes the script-common characters of its ellipsis,
//! “more information”, quotation delimiter and list pattern values. These are bucketed by the
//! likely script of the locale, producing the data behind
//! [`phase3::SCRIPT_TO_PUNCT`](crate::tables::phase3::SCRIPT_TO_PUNCT).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node, ParsingOptions};

use crate::{CodePointSet, CollectError, ScriptClassifier, ScriptTag};

/// Extracts the script-common characters used by one locale document.
///
/// `{…}` placeholders and spaces are skipped. Braces do not nest: `{` starts skipping and `}`
/// stops it.
pub fn extract_common_chars(
    doc: &Document<'_>,
    classifier: &impl ScriptClassifier,
) -> CodePointSet {
    let mut chars = CodePointSet::new();
    for text in punctuation_texts(doc.root_element()) {
        add_text(&mut chars, text, classifier);
    }
    chars
}

/// Parses a locale document and extracts its script-common characters.
pub fn extract_from_str(
    xml: &str,
    classifier: &impl ScriptClassifier,
) -> Result<CodePointSet, roxmltree::Error> {
    let doc = parse_document(xml)?;
    Ok(extract_common_chars(&doc, classifier))
}

/// Lists the locale documents of a CLDR tree, in path order.
///
/// These are the `.xml` files directly under `<cldr_root>/common/main`.
pub fn locale_documents(cldr_root: &Path) -> Result<Vec<PathBuf>, CollectError> {
    let dir = cldr_root.join("common").join("main");
    let io_error = |error| CollectError::Io {
        path: dir.clone(),
        error,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(&dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "xml") && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_unstable();
    Ok(paths)
}

/// Buckets the punctuation of every locale document in a CLDR tree by likely script.
///
/// Locales whose likely script is unknown are logged and left out. The `LGC` bucket is the
/// union of the `Latn`, `Grek` and `Cyrl` buckets.
pub fn collect_by_script(
    cldr_root: &Path,
    classifier: &impl ScriptClassifier,
) -> Result<BTreeMap<ScriptTag, CodePointSet>, CollectError> {
    let mut by_script: BTreeMap<ScriptTag, CodePointSet> = BTreeMap::new();
    for path in locale_documents(cldr_root)? {
        let text = std::fs::read_to_string(&path).map_err(|error| CollectError::Io {
            path: path.clone(),
            error,
        })?;
        let chars = extract_from_str(&text, classifier).map_err(|error| CollectError::Xml {
            path: path.clone(),
            error,
        })?;
        log::debug!("{}: {} characters", path.display(), chars.len());
        if chars.is_empty() {
            continue;
        }
        let Some(locale) = path.file_stem().and_then(|stem| stem.to_str()) else {
            continue;
        };
        let script = classifier.likely_script_of(locale);
        if script == ScriptTag::UNKNOWN {
            log::warn!("no likely script for locale {locale}");
            continue;
        }
        by_script.entry(script).or_default().union_with(&chars);
    }

    let mut lgc = CodePointSet::new();
    for part in [ScriptTag::LATIN, ScriptTag::GREEK, ScriptTag::CYRILLIC] {
        if let Some(set) = by_script.get(&part) {
            lgc.union_with(set);
        }
    }
    by_script.insert(ScriptTag::LGC, lgc);
    Ok(by_script)
}

/// Formats collected punctuation as entries of the `SCRIPT_TO_PUNCT` table.
///
/// Each script gets a comment listing its characters, joined by `|`, followed by the entry
/// itself. Scripts appear in ascending order. `LGC` is left out, since it is derived from
/// its parts whenever the table is queried.
pub fn render_table(by_script: &BTreeMap<ScriptTag, CodePointSet>) -> String {
    let mut out = String::new();
    for (script, chars) in by_script {
        if script.is_lgc() {
            continue;
        }
        let literal = chars
            .chars()
            .map(display_char)
            .collect::<Vec<_>>()
            .join("|");
        out.push_str(&format!(
            "    // {literal}\n    (ScriptTag::from_str_unchecked(\"{script}\"), \"{chars}\"),\n"
        ));
    }
    out
}

fn parse_document(xml: &str) -> Result<Document<'_>, roxmltree::Error> {
    // CLDR documents start with a DOCTYPE.
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Document::parse_with_options(xml, options)
}

fn punctuation_texts<'a>(root: Node<'a, '_>) -> Vec<&'a str> {
    let characters = children_named(root, "characters")
        .flat_map(|node| node.children())
        .filter(|node| matches!(node.tag_name().name(), "ellipsis" | "moreInformation"));
    let delimiters = children_named(root, "delimiters")
        .flat_map(|node| node.children())
        .filter(|node| node.is_element());
    let list_parts = children_named(root, "listPatterns")
        .flat_map(|node| children_named(node, "listPattern"))
        .flat_map(|node| children_named(node, "listPatternPart"));
    characters
        .chain(delimiters)
        .chain(list_parts)
        .filter_map(|node| node.text())
        .collect()
}

fn children_named<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

fn add_text(chars: &mut CodePointSet, text: &str, classifier: &impl ScriptClassifier) {
    let mut skip = false;
    for ch in text.chars() {
        match ch {
            '{' => skip = true,
            '}' => skip = false,
            ' ' => {}
            _ if skip => {}
            _ => {
                let cp = ch as u32;
                if classifier.script_of(cp) == ScriptTag::COMMON {
                    chars.insert(cp);
                }
            }
        }
    }
}

fn display_char(ch: char) -> String {
    let invisible = ch.is_control()
        || ch.is_whitespace()
        || matches!(ch, '\u{200B}'..='\u{200F}' | '\u{2060}'..='\u{206F}' | '\u{FEFF}');
    if invisible {
        format!("U+{:04X}", ch as u32)
    } else {
        ch.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::{extract_from_str, render_table};
    use crate::classifier::fake::FakeClassifier;
    use crate::{CodePointSet, ScriptTag};

    fn ldml(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" ?>\n\
             <!DOCTYPE ldml SYSTEM \"../../common/dtd/ldml.dtd\">\n\
             <ldml><identity><version number=\"$Revision$\"/></identity>{body}</ldml>"
        )
    }

    fn chars(set: &CodePointSet) -> String {
        set.chars().collect()
    }

    #[test]
    fn skips_placeholders_and_script_letters() {
        let xml = ldml("<characters><ellipsis type=\"final\">a{0}b…</ellipsis></characters>");
        let set = extract_from_str(&xml, &FakeClassifier::new()).unwrap();
        // `a` and `b` are Latin, and `0` is inside the placeholder.
        assert_eq!(chars(&set), "…");
    }

    #[test]
    fn skips_spaces() {
        let xml = ldml(
            "<listPatterns><listPattern>\
             <listPatternPart type=\"2\">{0} , {1}</listPatternPart>\
             </listPattern></listPatterns>",
        );
        let set = extract_from_str(&xml, &FakeClassifier::new()).unwrap();
        assert_eq!(chars(&set), ",");
    }

    #[test]
    fn braces_do_not_nest() {
        let xml = ldml("<characters><moreInformation>{{x}?}</moreInformation></characters>");
        let set = extract_from_str(&xml, &FakeClassifier::new()).unwrap();
        // The first `}` ends skipping, so `?` is kept.
        assert_eq!(chars(&set), "?");
    }

    #[test]
    fn reads_every_element_group() {
        let xml = ldml(
            "<characters>\
               <exemplarCharacters>[a b c]</exemplarCharacters>\
               <ellipsis type=\"initial\">…{0}</ellipsis>\
               <moreInformation>?</moreInformation>\
             </characters>\
             <delimiters>\
               <quotationStart>“</quotationStart>\
               <quotationEnd>”</quotationEnd>\
             </delimiters>\
             <listPatterns><listPattern type=\"or\">\
               <listPatternPart type=\"end\">{0}; {1}</listPatternPart>\
             </listPattern></listPatterns>\
             <numbers><symbols><decimal>.</decimal></symbols></numbers>",
        );
        let set = extract_from_str(&xml, &FakeClassifier::new()).unwrap();
        assert_eq!(chars(&set), ";?“”…");
    }

    #[test]
    fn empty_elements_are_ignored() {
        let xml = ldml("<delimiters><quotationStart/></delimiters>");
        let set = extract_from_str(&xml, &FakeClassifier::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn malformed_documents_fail() {
        assert!(extract_from_str("<ldml><characters>", &FakeClassifier::new()).is_err());
    }

    #[test]
    fn renders_sorted_entries_without_lgc() {
        let mut by_script = BTreeMap::new();
        by_script.insert(ScriptTag::LATIN, "0022,2018..2019".parse().unwrap());
        by_script.insert(
            ScriptTag::from_str_unchecked("Khmr"),
            "002C,200B".parse().unwrap(),
        );
        by_script.insert(ScriptTag::LGC, "0022".parse().unwrap());
        let expected = "    // ,|U+200B\n    \
             (ScriptTag::from_str_unchecked(\"Khmr\"), \"002C,200B\"),\n    \
             // \"|‘|’\n    \
             (ScriptTag::from_str_unchecked(\"Latn\"), \"0022,2018..2019\"),\n";
        assert_eq!(render_table(&by_script), expected);
    }
}
