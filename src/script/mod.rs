//! Character classification for Proto-Altekhsnan romanization.
//!
//! Both raw Latin input and the private-use symbols produced by digraph
//! normalization are classified here, so the segmenter and the glyph
//! selector agree on what counts as a consonant or a vowel.

pub mod digraph;

use serde::Serialize;

pub use digraph::{normalize, romanize, Digraph};

/// Explicit cluster separator.
pub const SEPARATOR: char = '=';

/// Vowel-removal sign; stacks under a consonant like a vowel.
pub const VOWEL_REMOVAL: char = '-';

/// `é`, typed directly or produced from `ee`.
pub const E_ACUTE: char = '\u{e9}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GraphemeCategory {
    /// The default vowel `a`, never written explicitly after a consonant.
    VowelA,
    VowelNonA,
    Consonant,
    VowelRemoval,
    Separator,
    Other,
}

pub fn classify(c: char) -> GraphemeCategory {
    use digraph::{EU, HH, NG, NN, NY, TH};

    match c {
        'a' => GraphemeCategory::VowelA,
        'e' | 'i' | 'o' | 'u' | E_ACUTE | HH | NN | TH | EU => GraphemeCategory::VowelNonA,
        'b' | 'c' | 'd' | 'f' | 'g' | 'h' | 'j' | 'k' | 'l' | 'm' | 'n' | 'p' | 'q' | 'r'
        | 's' | 't' | 'v' | 'w' | 'x' | 'y' | 'z' | NG | NY => GraphemeCategory::Consonant,
        VOWEL_REMOVAL => GraphemeCategory::VowelRemoval,
        SEPARATOR => GraphemeCategory::Separator,
        _ => GraphemeCategory::Other,
    }
}

pub fn is_consonant(c: char) -> bool {
    classify(c) == GraphemeCategory::Consonant
}

/// Non-`a` vowels and the vowel-removal sign: everything that can sit
/// below a consonant in a vertical stack.
pub fn is_vowel_mark(c: char) -> bool {
    matches!(
        classify(c),
        GraphemeCategory::VowelNonA | GraphemeCategory::VowelRemoval
    )
}

/// Any character that can open a syllable in the script.
pub fn is_script_letter(c: char) -> bool {
    !matches!(
        classify(c),
        GraphemeCategory::Separator | GraphemeCategory::Other
    )
}
