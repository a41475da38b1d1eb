//! Grouping a word's syllables into glyph clusters.

use std::fmt;

use tracing::{debug, debug_span};

use crate::segmenter::{Segment, Syllable};

/// Greedy grouping takes three syllables when they hold at most this many
/// symbols.
pub const DEFAULT_CHAR_BUDGET: usize = 4;

const GREEDY_WIDE: usize = 3;
const GREEDY_NARROW: usize = 2;

/// Syllables rendered together at one size tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    syllables: Vec<Syllable>,
}

impl Cluster {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    pub fn syllables(&self) -> &[Syllable] {
        &self.syllables
    }

    /// Number of syllables; this alone picks the glyph tier.
    pub fn size(&self) -> usize {
        self.syllables.len()
    }

    pub fn symbol_count(&self) -> usize {
        self.syllables.iter().map(Syllable::symbol_count).sum()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.syllables {
            write!(f, "{s}")?;
        }
        Ok(())
    }
}

/// Group one word's segments into clusters.
///
/// Explicit separators take priority: when any is present the word is cut
/// at every separator and each non-empty piece becomes one cluster, however
/// many syllables it holds. Otherwise syllables are grouped greedily by
/// three (when they fit `char_budget`) or two.
pub fn group_syllables(segments: &[Segment], char_budget: usize) -> Vec<Cluster> {
    let _span = debug_span!("group_syllables", segments = segments.len()).entered();

    let clusters = if segments.contains(&Segment::Separator) {
        split_at_separators(segments)
    } else {
        let syllables: Vec<Syllable> = segments
            .iter()
            .filter_map(Segment::as_syllable)
            .cloned()
            .collect();
        group_greedy(syllables, char_budget)
    };

    debug!(
        cluster_count = clusters.len(),
        sizes = ?clusters.iter().map(Cluster::size).collect::<Vec<_>>()
    );
    clusters
}

fn split_at_separators(segments: &[Segment]) -> Vec<Cluster> {
    segments
        .split(|s| *s == Segment::Separator)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            Cluster::new(
                piece
                    .iter()
                    .filter_map(Segment::as_syllable)
                    .cloned()
                    .collect(),
            )
        })
        .collect()
}

fn group_greedy(syllables: Vec<Syllable>, char_budget: usize) -> Vec<Cluster> {
    let mut clusters = Vec::new();
    let mut rest = syllables.as_slice();

    while !rest.is_empty() {
        let wide = rest.len().min(GREEDY_WIDE);
        let wide_chars: usize = rest[..wide].iter().map(Syllable::symbol_count).sum();
        let take = if wide_chars <= char_budget {
            wide
        } else {
            rest.len().min(GREEDY_NARROW)
        };
        clusters.push(Cluster::new(rest[..take].to_vec()));
        rest = &rest[take..];
    }

    clusters
}
