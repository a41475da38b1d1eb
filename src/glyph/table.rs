//! Glyph code point tables for the Proto-Altekhsnan font.
//!
//! Keys are normalized symbols (see [`crate::script::digraph`]). Letters that
//! share a glyph (`f`/`h`, `k`/`q`, `l`/`r`, `v`/`w`) appear as separate keys.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{Orientation, Tier};
use crate::script::digraph::{EU, HH, NG, NN, NY, TH};

/// Symbols with a full-size base glyph. At full size the normalized symbol
/// is its own code point.
pub const FULL_SIZE_ALPHABET: &[char] = &[
    'a', 'e', 'i', 'o', 'u', 'é', HH, NN, TH, EU, '-', 'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k',
    'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x', 'y', 'z', NG, NY,
];

#[rustfmt::skip]
pub const HALF_HORIZONTAL: &[(char, char)] = &[
    ('a', '\u{e006}'), ('e', '\u{e007}'), ('i', '\u{e008}'), ('o', '\u{e009}'), ('u', '\u{e00a}'),
    ('é', '\u{e00b}'), (HH, '\u{e00c}'), (NN, '\u{e00d}'), (TH, '\u{e00e}'), (EU, '\u{e00f}'),
    ('b', '\u{e016}'), ('c', '\u{e017}'), ('d', '\u{e018}'),
    ('f', '\u{e019}'), ('h', '\u{e019}'),
    ('g', '\u{e01a}'), ('j', '\u{e01b}'),
    ('k', '\u{e01c}'), ('q', '\u{e01c}'),
    ('l', '\u{e01d}'), ('r', '\u{e01d}'),
    ('m', '\u{e01e}'), ('n', '\u{e01f}'), ('p', '\u{e020}'), ('s', '\u{e021}'),
    ('x', '\u{e022}'), ('t', '\u{e023}'),
    ('v', '\u{e024}'), ('w', '\u{e024}'),
    ('y', '\u{e025}'), (NG, '\u{e026}'), (NY, '\u{e027}'),
];

#[rustfmt::skip]
pub const HALF_VERTICAL: &[(char, char)] = &[
    ('e', '\u{e010}'), ('i', '\u{e011}'), ('o', '\u{e012}'), ('u', '\u{e013}'), ('-', '\u{e015}'),
    ('é', '\u{e014}'), (HH, '\u{e03a}'), (NN, '\u{e03b}'), (TH, '\u{e03c}'), (EU, '\u{e03d}'),
    ('b', '\u{e028}'), ('c', '\u{e029}'), ('d', '\u{e02a}'),
    ('f', '\u{e02b}'), ('h', '\u{e02b}'),
    ('g', '\u{e02c}'), ('j', '\u{e02d}'),
    ('k', '\u{e02e}'), ('q', '\u{e02e}'),
    ('l', '\u{e02f}'), ('r', '\u{e02f}'),
    ('m', '\u{e030}'), ('n', '\u{e031}'), ('p', '\u{e032}'), ('s', '\u{e033}'),
    ('x', '\u{e034}'), ('t', '\u{e035}'),
    ('v', '\u{e036}'), ('w', '\u{e036}'),
    ('y', '\u{e037}'), (NG, '\u{e038}'), (NY, '\u{e039}'),
];

#[rustfmt::skip]
pub const QUARTER_VERTICAL: &[(char, char)] = &[
    ('e', '\u{e03e}'), ('i', '\u{e03f}'), ('o', '\u{e040}'), ('u', '\u{e041}'), ('-', '\u{e059}'),
    ('é', '\u{e042}'), (HH, '\u{e043}'), (NN, '\u{e044}'), (TH, '\u{e045}'), (EU, '\u{e046}'),
    ('b', '\u{e047}'), ('c', '\u{e048}'), ('d', '\u{e049}'),
    ('f', '\u{e04a}'), ('h', '\u{e04a}'),
    ('g', '\u{e04b}'), ('j', '\u{e04c}'),
    ('k', '\u{e04d}'), ('q', '\u{e04d}'),
    ('l', '\u{e04e}'), ('r', '\u{e04e}'),
    ('m', '\u{e04f}'), ('n', '\u{e050}'), ('p', '\u{e051}'), ('s', '\u{e052}'),
    ('x', '\u{e053}'), ('t', '\u{e054}'),
    ('v', '\u{e055}'), ('w', '\u{e055}'),
    ('y', '\u{e056}'), (NG, '\u{e057}'), (NY, '\u{e058}'),
];

#[rustfmt::skip]
pub const THIRD_HORIZONTAL: &[(char, char)] = &[
    ('a', '\u{e05a}'), ('e', '\u{e05b}'), ('i', '\u{e05c}'), ('o', '\u{e05d}'), ('u', '\u{e05e}'),
    ('é', '\u{e05f}'), (HH, '\u{e060}'), (NN, '\u{e061}'), (TH, '\u{e062}'), (EU, '\u{e063}'),
    ('b', '\u{e064}'), ('c', '\u{e065}'), ('d', '\u{e066}'),
    ('f', '\u{e067}'), ('h', '\u{e067}'),
    ('g', '\u{e068}'), ('j', '\u{e069}'),
    ('k', '\u{e06a}'), ('q', '\u{e06a}'),
    ('l', '\u{e06b}'), ('r', '\u{e06b}'),
    ('m', '\u{e06c}'), ('n', '\u{e06d}'), ('p', '\u{e06e}'), ('s', '\u{e06f}'),
    ('x', '\u{e072}'), ('t', '\u{e070}'),
    ('v', '\u{e071}'), ('w', '\u{e071}'),
    ('y', '\u{e073}'), (NG, '\u{e074}'), (NY, '\u{e075}'),
];

#[rustfmt::skip]
pub const THIRD_VERTICAL: &[(char, char)] = &[
    ('e', '\u{e076}'), ('i', '\u{e077}'), ('o', '\u{e078}'), ('u', '\u{e079}'), ('-', '\u{e091}'),
    ('é', '\u{e07a}'), (HH, '\u{e07b}'), (NN, '\u{e07c}'), (TH, '\u{e07d}'), (EU, '\u{e07e}'),
    ('b', '\u{e07f}'), ('c', '\u{e080}'), ('d', '\u{e081}'),
    ('f', '\u{e082}'), ('h', '\u{e082}'),
    ('g', '\u{e083}'), ('j', '\u{e084}'),
    ('k', '\u{e085}'), ('q', '\u{e085}'),
    ('l', '\u{e086}'), ('r', '\u{e086}'),
    ('m', '\u{e087}'), ('n', '\u{e088}'), ('p', '\u{e089}'), ('s', '\u{e08a}'),
    ('x', '\u{e08c}'), ('t', '\u{e08b}'),
    ('v', '\u{e08d}'), ('w', '\u{e08d}'),
    ('y', '\u{e08e}'), (NG, '\u{e08f}'), (NY, '\u{e090}'),
];

/// Alternate full-size code points expected by Scrivener for the three
/// absorbable special vowels.
pub const SCRIVENER_ALTERNATES: &[(char, char)] = &[
    (HH, '\u{e092}'),
    (NN, '\u{e093}'),
    (TH, '\u{e094}'),
];

/// All tier tables, indexed by (tier, orientation).
pub struct GlyphTable {
    maps: HashMap<(Tier, Orientation), HashMap<char, char>>,
}

impl GlyphTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static GlyphTable {
        static INSTANCE: OnceLock<GlyphTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let mut maps: HashMap<(Tier, Orientation), HashMap<char, char>> = HashMap::new();
            maps.insert(
                (Tier::Full, Orientation::Horizontal),
                FULL_SIZE_ALPHABET.iter().map(|&c| (c, c)).collect(),
            );
            let tables: [(Tier, Orientation, &[(char, char)]); 5] = [
                (Tier::Half, Orientation::Horizontal, HALF_HORIZONTAL),
                (Tier::Half, Orientation::Vertical, HALF_VERTICAL),
                (Tier::Quarter, Orientation::Vertical, QUARTER_VERTICAL),
                (Tier::Third, Orientation::Horizontal, THIRD_HORIZONTAL),
                (Tier::Third, Orientation::Vertical, THIRD_VERTICAL),
            ];
            for (tier, orientation, entries) in tables {
                maps.insert((tier, orientation), entries.iter().copied().collect());
            }
            GlyphTable { maps }
        })
    }

    pub fn lookup(&self, tier: Tier, orientation: Orientation, symbol: char) -> Option<char> {
        self.maps
            .get(&(tier, orientation))
            .and_then(|m| m.get(&symbol))
            .copied()
    }

    pub fn scrivener_alternate(symbol: char) -> Option<char> {
        SCRIVENER_ALTERNATES
            .iter()
            .find(|(from, _)| *from == symbol)
            .map(|&(_, to)| to)
    }
}
