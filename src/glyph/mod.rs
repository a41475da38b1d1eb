//! Glyph selection: one cluster in, code points out.
//!
//! A cluster's syllable count picks the size tier for everything inside it.
//! Each syllable is then drawn either as a single horizontal glyph or as a
//! consonant with its vowel stacked beneath (vertical orientation).

mod table;

use std::fmt;

use serde::Serialize;

pub use table::GlyphTable;

use crate::cluster::Cluster;
use crate::script;
use crate::segmenter::Syllable;
use crate::unicode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Full,
    Half,
    Third,
    Quarter,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Full => "full",
            Tier::Half => "half",
            Tier::Third => "third",
            Tier::Quarter => "quarter",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlyphError {
    #[error("cluster holds {0} syllables; glyph tiers exist for 1 to 3")]
    ClusterSize(usize),

    #[error("no {tier} {orientation} glyph for {key:?}")]
    MissingGlyph {
        tier: Tier,
        orientation: Orientation,
        key: String,
    },
}

/// How a syllable is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyllableShape {
    /// One horizontal glyph keyed by the whole syllable.
    Standalone,
    /// Consonant glyph followed by a stacked non-`a` vowel or `-`.
    Stacked,
    /// Neither shape; contributes no output.
    Unshaped,
}

pub fn shape_of(syllable: &Syllable) -> SyllableShape {
    let mut symbols = syllable.symbols();
    let Some(first) = symbols.next() else {
        return SyllableShape::Unshaped;
    };
    let stacked_vowel = symbols.next().is_some_and(script::is_vowel_mark);

    if script::is_script_letter(first) && !stacked_vowel {
        SyllableShape::Standalone
    } else if script::is_consonant(first) && stacked_vowel {
        SyllableShape::Stacked
    } else {
        SyllableShape::Unshaped
    }
}

/// Tiers used by a cluster of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPlan {
    pub horizontal: Tier,
    pub vertical: Tier,
}

impl TierPlan {
    pub fn for_size(size: usize) -> Result<Self, GlyphError> {
        let (horizontal, vertical) = match size {
            1 => (Tier::Full, Tier::Half),
            2 => (Tier::Half, Tier::Quarter),
            3 => (Tier::Third, Tier::Third),
            n => return Err(GlyphError::ClusterSize(n)),
        };
        Ok(Self {
            horizontal,
            vertical,
        })
    }
}

/// One syllable's output and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSyllable {
    pub shape: SyllableShape,
    pub tier: Option<Tier>,
    pub orientation: Option<Orientation>,
    pub glyphs: String,
}

pub fn render_syllable(
    syllable: &Syllable,
    plan: TierPlan,
    scrivener: bool,
) -> Result<RenderedSyllable, GlyphError> {
    let table = GlyphTable::global();
    let shape = shape_of(syllable);

    let (tier, orientation, glyphs) = match shape {
        SyllableShape::Standalone => {
            let tier = plan.horizontal;
            let missing = || GlyphError::MissingGlyph {
                tier,
                orientation: Orientation::Horizontal,
                key: syllable.to_string(),
            };
            let mut symbols = syllable.symbols();
            let (Some(symbol), None) = (symbols.next(), symbols.next()) else {
                return Err(missing());
            };
            let alternate = if scrivener && tier == Tier::Full {
                GlyphTable::scrivener_alternate(symbol)
            } else {
                None
            };
            let glyph = match alternate {
                Some(g) => g,
                None => table
                    .lookup(tier, Orientation::Horizontal, symbol)
                    .ok_or_else(missing)?,
            };
            (Some(tier), Some(Orientation::Horizontal), glyph.to_string())
        }
        SyllableShape::Stacked => {
            let tier = plan.vertical;
            let mut glyphs = String::new();
            // Symbols past the vowel have no stacked position and are ignored.
            for symbol in syllable.symbols().take(2) {
                let glyph = table
                    .lookup(tier, Orientation::Vertical, symbol)
                    .ok_or_else(|| GlyphError::MissingGlyph {
                        tier,
                        orientation: Orientation::Vertical,
                        key: symbol.to_string(),
                    })?;
                glyphs.push(glyph);
            }
            (Some(tier), Some(Orientation::Vertical), glyphs)
        }
        SyllableShape::Unshaped => (None, None, String::new()),
    };

    Ok(RenderedSyllable {
        shape,
        tier,
        orientation,
        glyphs,
    })
}

/// Glyph output of one cluster, without its boundary marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClusterGlyphs {
    pub glyphs: String,
    pub transcript: String,
}

/// Map every syllable of `cluster`. Either the whole cluster maps or an
/// error is returned; partial output is never produced.
pub fn select_glyphs(cluster: &Cluster, scrivener: bool) -> Result<ClusterGlyphs, GlyphError> {
    let plan = TierPlan::for_size(cluster.size())?;
    let mut glyphs = String::new();
    for syllable in cluster.syllables() {
        glyphs.push_str(&render_syllable(syllable, plan, scrivener)?.glyphs);
    }
    Ok(ClusterGlyphs {
        transcript: unicode::transcript(&glyphs),
        glyphs,
    })
}
