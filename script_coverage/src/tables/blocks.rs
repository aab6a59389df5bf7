// Copyright 2026 the Script Coverage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode blocks that seed the block-derived scripts.

/// A named Unicode block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// First code point of the block.
    pub first: u32,
    /// Last code point of the block, inclusive.
    pub last: u32,
    /// The block name.
    pub name: &'static str,
}

impl Block {
    const fn new(first: u32, last: u32, name: &'static str) -> Self {
        Self { first, last, name }
    }

    /// Returns `true` if `cp` is in the block.
    pub fn contains(&self, cp: u32) -> bool {
        (self.first..=self.last).contains(&cp)
    }
}

/// Finds the CJK or symbol block holding `cp`.
pub fn find_block(cp: u32) -> Option<&'static Block> {
    CJK_BLOCKS
        .iter()
        .chain(SYMBOL_BLOCKS)
        .find(|block| block.contains(cp))
}

/// Blocks provided by the CJK fonts.
pub const CJK_BLOCKS: &[Block] = &[
    // Core
    Block::new(0x3400, 0x4DBF, "CJK Unified Ideographs Extension A"),
    Block::new(0x4E00, 0x9FFF, "CJK Unified Ideographs"),
    Block::new(0xF900, 0xFAFF, "CJK Compatibility Ideographs"),
    Block::new(0x20000, 0x2A6DF, "CJK Unified Ideographs Extension B"),
    Block::new(0x2A700, 0x2B73F, "CJK Unified Ideographs Extension C"),
    Block::new(0x2B740, 0x2B81F, "CJK Unified Ideographs Extension D"),
    Block::new(0x2F800, 0x2FA1F, "CJK Compatibility Ideographs Supplement"),
    Block::new(0xAC00, 0xD7AF, "Hangul Syllables"),
    Block::new(0x1100, 0x11FF, "Hangul Jamo"),
    Block::new(0xA960, 0xA97F, "Hangul Jamo Extended-A"),
    Block::new(0xD7B0, 0xD7FF, "Hangul Jamo Extended-B"),
    Block::new(0x3130, 0x318F, "Hangul Compatibility Jamo"),
    Block::new(0x3040, 0x309F, "Hiragana"),
    Block::new(0x1B000, 0x1B0FF, "Kana Supplement"),
    Block::new(0x30A0, 0x30FF, "Katakana"),
    Block::new(0x31F0, 0x31FF, "Katakana Phonetic Extensions"),
    Block::new(0x3100, 0x312F, "Bopomofo"),
    Block::new(0x31A0, 0x31BF, "Bopomofo Extended"),
    // Others
    Block::new(0x3000, 0x303F, "CJK Symbols and Punctuation"),
    Block::new(0x3190, 0x319F, "Kanbun"),
    Block::new(0x31C0, 0x31EF, "CJK Strokes"),
    Block::new(0x3200, 0x32FF, "Enclosed CJK Letters and Months"),
    Block::new(0xFE10, 0xFE1F, "Vertical Forms"),
    Block::new(0xFE30, 0xFE4F, "CJK Compatibility Forms"),
    Block::new(0xFE50, 0xFE6F, "Small Form Variants"),
    Block::new(0xFF00, 0xFFEF, "Halfwidth and Fullwidth Forms"),
    Block::new(0x3300, 0x33FF, "CJK Compatibility"),
    Block::new(0x2FF0, 0x2FFF, "Ideographic Description Characters"),
    Block::new(0x2E80, 0x2EFF, "CJK Radicals Supplement"),
    Block::new(0x2F00, 0x2FDF, "Kangxi Radicals"),
];

/// Blocks provided by the symbol fonts.
pub const SYMBOL_BLOCKS: &[Block] = &[
    Block::new(0x20A0, 0x20CF, "Currency Symbols"),
    Block::new(0x20D0, 0x20FF, "Combining Diacritical Marks for Symbols"),
    Block::new(0x2100, 0x214F, "Letterlike Symbols"),
    Block::new(0x2190, 0x21FF, "Arrows"),
    Block::new(0x2200, 0x22FF, "Mathematical Operators"),
    Block::new(0x2300, 0x23FF, "Miscellaneous Technical"),
    Block::new(0x2400, 0x243F, "Control Pictures"),
    Block::new(0x2440, 0x245F, "Optical Character Recognition"),
    Block::new(0x2460, 0x24FF, "Enclosed Alphanumerics"),
    Block::new(0x2500, 0x257F, "Box Drawing"),
    Block::new(0x2580, 0x259F, "Block Elements"),
    Block::new(0x25A0, 0x25FF, "Geometric Shapes"),
    Block::new(0x2600, 0x26FF, "Miscellaneous Symbols"),
    Block::new(0x2700, 0x27BF, "Dingbats"),
    Block::new(0x27C0, 0x27EF, "Miscellaneous Mathematical Symbols-A"),
    Block::new(0x27F0, 0x27FF, "Supplemental Arrows-A"),
    Block::new(0x2800, 0x28FF, "Braille Patterns"),
    Block::new(0x2900, 0x297F, "Supplemental Arrows-B"),
    Block::new(0x2980, 0x29FF, "Miscellaneous Mathematical Symbols-B"),
    Block::new(0x2A00, 0x2AFF, "Supplemental Mathematical Operators"),
    Block::new(0x2B00, 0x2BFF, "Miscellaneous Symbols and Arrows"),
    Block::new(0x2E00, 0x2E7F, "Supplemental Punctuation"),
    Block::new(0x4DC0, 0x4DFF, "Yijing Hexagram Symbols"),
    Block::new(0xA700, 0xA71F, "Modifier Tone Letters"),
    Block::new(0xFFF0, 0xFFFF, "Specials"),
    Block::new(0x10100, 0x1013F, "Aegean Numbers"),
    Block::new(0x10140, 0x1018F, "Ancient Greek Numbers"),
    Block::new(0x10190, 0x101CF, "Ancient Symbols"),
    Block::new(0x101D0, 0x101FF, "Phaistos Disc"),
    Block::new(0x1D000, 0x1D0FF, "Byzantine Musical Symbols"),
    Block::new(0x1D100, 0x1D1FF, "Musical Symbols"),
    Block::new(0x1D200, 0x1D24F, "Ancient Greek Musical Notation"),
    Block::new(0x1D300, 0x1D35F, "Tai Xuan Jing Symbols"),
    Block::new(0x1D360, 0x1D37F, "Counting Rod Numerals"),
    Block::new(0x1D400, 0x1D7FF, "Mathematical Alphanumeric Symbols"),
    Block::new(0x1F000, 0x1F02F, "Mahjong Tiles"),
    Block::new(0x1F030, 0x1F09F, "Domino Tiles"),
    Block::new(0x1F0A0, 0x1F0FF, "Playing Cards"),
    Block::new(0x1F100, 0x1F1FF, "Enclosed Alphanumeric Supplement"),
    Block::new(0x1F200, 0x1F2FF, "Enclosed Ideographic Supplement"),
    Block::new(0x1F700, 0x1F77F, "Alchemical Symbols"),
];
