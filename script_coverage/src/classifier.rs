// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode property oracles.
//!
//! The coverage code never carries its own copy of the Unicode script database. It asks
//! these traits instead, so tests can substitute a small fixture table.

use std::collections::BTreeSet;

use crate::{CodePointSet, ScriptTag};

/// Answers script questions about code points and locales.
pub trait ScriptClassifier {
    /// Returns the Unicode Script property of `cp`.
    ///
    /// Script-common characters report [`ScriptTag::COMMON`]; unassigned or invalid code
    /// points report [`ScriptTag::UNKNOWN`].
    fn script_of(&self, cp: u32) -> ScriptTag;

    /// Returns the likely script of a locale identifier such as `sr_Latn` or `ja`.
    ///
    /// Both `_` and `-` separators are accepted. Identifiers that cannot be resolved report
    /// [`ScriptTag::UNKNOWN`].
    fn likely_script_of(&self, locale: &str) -> ScriptTag;
}

/// Enumerates the code points of the Unicode repertoire.
pub trait UnicodeRepertoire {
    /// Every code point whose Script property is `script`.
    ///
    /// Tags that are not Unicode Script values (including `LGC` and the CJK locale scripts
    /// such as `Jpan`) yield the empty set.
    fn script_characters(&self, script: ScriptTag) -> CodePointSet;

    /// Returns `true` unless `cp` has general category `Cn` (unassigned).
    fn is_assigned(&self, cp: u32) -> bool;

    /// Every Script property value that at least one code point has.
    ///
    /// This includes `Zyyy` and `Zinh` but never `Zzzz`.
    fn all_scripts(&self) -> BTreeSet<ScriptTag>;
}

impl<T: ScriptClassifier + ?Sized> ScriptClassifier for &T {
    fn script_of(&self, cp: u32) -> ScriptTag {
        (**self).script_of(cp)
    }

    fn likely_script_of(&self, locale: &str) -> ScriptTag {
        (**self).likely_script_of(locale)
    }
}

impl<T: UnicodeRepertoire + ?Sized> UnicodeRepertoire for &T {
    fn script_characters(&self, script: ScriptTag) -> CodePointSet {
        (**self).script_characters(script)
    }

    fn is_assigned(&self, cp: u32) -> bool {
        (**self).is_assigned(cp)
    }

    fn all_scripts(&self) -> BTreeSet<ScriptTag> {
        (**self).all_scripts()
    }
}

#[cfg(feature = "icu")]
pub use icu::IcuClassifier;

#[cfg(feature = "icu")]
mod icu {
    use std::collections::BTreeSet;

    use icu_locale::LocaleExpander;
    use icu_locale_core::LanguageIdentifier;
    use icu_properties::props::{GeneralCategory, Script};
    use icu_properties::{
        CodePointMapData, CodePointMapDataBorrowed, PropertyNamesShort,
        PropertyNamesShortBorrowed, PropertyParser, PropertyParserBorrowed,
    };

    use super::{ScriptClassifier, UnicodeRepertoire};
    use crate::{CodePointSet, ScriptTag};

    /// Classifier backed by compiled ICU4X data.
    pub struct IcuClassifier {
        scripts: CodePointMapDataBorrowed<'static, Script>,
        categories: CodePointMapDataBorrowed<'static, GeneralCategory>,
        short_names: PropertyNamesShortBorrowed<'static, Script>,
        parser: PropertyParserBorrowed<'static, Script>,
        expander: LocaleExpander,
    }

    impl IcuClassifier {
        /// Creates a classifier over the compiled data, including the extended likely
        /// subtags so that rare CLDR locales resolve.
        pub fn new() -> Self {
            Self {
                scripts: CodePointMapData::<Script>::new(),
                categories: CodePointMapData::<GeneralCategory>::new(),
                short_names: PropertyNamesShort::<Script>::new(),
                parser: PropertyParser::<Script>::new(),
                expander: LocaleExpander::new_extended(),
            }
        }

        fn tag_for(&self, script: Script) -> ScriptTag {
            self.short_names
                .get_locale_script(script)
                .map_or(ScriptTag::UNKNOWN, |s| ScriptTag::from_bytes(s.into_raw()))
        }
    }

    impl Default for IcuClassifier {
        fn default() -> Self {
            Self::new()
        }
    }

    impl core::fmt::Debug for IcuClassifier {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("IcuClassifier").finish_non_exhaustive()
        }
    }

    impl ScriptClassifier for IcuClassifier {
        fn script_of(&self, cp: u32) -> ScriptTag {
            self.tag_for(self.scripts.get32(cp))
        }

        fn likely_script_of(&self, locale: &str) -> ScriptTag {
            let normalized = locale.replace('_', "-");
            let Ok(mut langid) = LanguageIdentifier::try_from_str(&normalized) else {
                return ScriptTag::UNKNOWN;
            };
            // `und` would otherwise maximize to English.
            if langid.language.as_str() == "und" && langid.script.is_none() {
                return ScriptTag::UNKNOWN;
            }
            self.expander.maximize(&mut langid);
            langid
                .script
                .map_or(ScriptTag::UNKNOWN, |s| ScriptTag::from_bytes(s.into_raw()))
        }
    }

    impl UnicodeRepertoire for IcuClassifier {
        fn script_characters(&self, script: ScriptTag) -> CodePointSet {
            if script.is_lgc() {
                return CodePointSet::new();
            }
            let Some(value) = self.parser.get_strict(script.as_str()) else {
                return CodePointSet::new();
            };
            let mut set = CodePointSet::new();
            for range in self.scripts.iter_ranges_for_value(value) {
                set.insert_range(range);
            }
            set
        }

        fn is_assigned(&self, cp: u32) -> bool {
            self.categories.get32(cp) != GeneralCategory::Unassigned
        }

        fn all_scripts(&self) -> BTreeSet<ScriptTag> {
            self.scripts
                .iter_ranges()
                .map(|range| self.tag_for(range.value))
                .filter(|&script| script != ScriptTag::UNKNOWN)
                .collect()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::IcuClassifier;
        use crate::{ScriptClassifier, ScriptTag, UnicodeRepertoire};

        #[test]
        fn scripts_of_code_points() {
            let icu = IcuClassifier::new();
            assert_eq!(icu.script_of('a' as u32), ScriptTag::LATIN);
            assert_eq!(icu.script_of('…' as u32), ScriptTag::COMMON);
            assert_eq!(icu.script_of(0x0628), ScriptTag::parse("Arab").unwrap());
            assert_eq!(icu.script_of(0x0301), ScriptTag::INHERITED);
        }

        #[test]
        fn likely_scripts_of_locales() {
            let icu = IcuClassifier::new();
            assert_eq!(icu.likely_script_of("en"), ScriptTag::LATIN);
            assert_eq!(icu.likely_script_of("ru_RU"), ScriptTag::CYRILLIC);
            assert_eq!(icu.likely_script_of("sr_Latn"), ScriptTag::LATIN);
            assert_eq!(icu.likely_script_of("ja"), ScriptTag::parse("Jpan").unwrap());
            assert_eq!(icu.likely_script_of("zh_Hant"), ScriptTag::parse("Hant").unwrap());
            assert_eq!(icu.likely_script_of("root"), ScriptTag::UNKNOWN);
            assert_eq!(icu.likely_script_of("und"), ScriptTag::UNKNOWN);
            assert_eq!(icu.likely_script_of("not a locale"), ScriptTag::UNKNOWN);
        }

        #[test]
        fn repertoire() {
            let icu = IcuClassifier::new();
            let greek = icu.script_characters(ScriptTag::GREEK);
            assert!(greek.contains(0x03B1));
            assert!(!greek.contains('a' as u32));
            assert!(icu.script_characters(ScriptTag::LGC).is_empty());
            assert!(icu
                .script_characters(ScriptTag::parse("Jpan").unwrap())
                .is_empty());
            assert!(icu.is_assigned('a' as u32));
            assert!(!icu.is_assigned(0x0378));
        }

        #[test]
        fn every_script_is_listed() {
            let scripts = IcuClassifier::new().all_scripts();
            for script in ["Latn", "Mong", "Bamu", "Yiii", "Runr", "Hira", "Zyyy", "Zinh"] {
                assert!(scripts.contains(&ScriptTag::parse(script).unwrap()), "{script}");
            }
            assert!(!scripts.contains(&ScriptTag::UNKNOWN));
            // Locale scripts are not Script property values.
            assert!(!scripts.contains(&ScriptTag::parse("Jpan").unwrap()));
        }
    }
}
