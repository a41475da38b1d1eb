//! Conversion pipeline: text in, glyph string and transcript out.
//!
//! Each space-separated word is segmented, grouped into clusters and mapped
//! to glyphs cluster by cluster. The glyph stream carries a boundary marker
//! after every cluster; the transcript does not.

pub mod explain;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, warn};

use crate::cluster::{self, Cluster, DEFAULT_CHAR_BUDGET};
use crate::glyph::{self, GlyphError};
use crate::segmenter;
use crate::settings::Settings;

/// Appended to the glyph stream after every cluster.
pub const BOUNDARY_MARKER: &str = "==";

const WORD_SEPARATOR: char = ' ';

/// What to do with a cluster that has no glyph mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappablePolicy {
    /// Drop the cluster's glyphs but keep its boundary marker.
    #[default]
    Skip,
    /// Fail the conversion.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub scrivener: bool,
    pub unmappable: UnmappablePolicy,
    pub boundary_marker: String,
    pub char_budget: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scrivener: false,
            unmappable: UnmappablePolicy::Skip,
            boundary_marker: BOUNDARY_MARKER.to_string(),
            char_budget: DEFAULT_CHAR_BUDGET,
        }
    }
}

impl From<&Settings> for ConvertOptions {
    fn from(s: &Settings) -> Self {
        Self {
            scrivener: s.conversion.scrivener,
            unmappable: s.conversion.unmappable,
            boundary_marker: s.conversion.boundary_marker.clone(),
            char_budget: s.grouping.char_budget,
        }
    }
}

impl ConvertOptions {
    pub fn with_scrivener(mut self, scrivener: bool) -> Self {
        self.scrivener = scrivener;
        self
    }
}

/// The two output streams of one conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub glyphs: String,
    pub transcript: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error("cluster {cluster:?} in word {word:?} has no glyph mapping")]
    UnmappableCluster {
        word: String,
        cluster: String,
        #[source]
        source: GlyphError,
    },
}

/// Lower-case `text` and split it on single spaces. Consecutive spaces
/// yield empty words; empty input is one empty word.
pub fn split_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(WORD_SEPARATOR)
        .map(str::to_string)
        .collect()
}

/// Clusters of one word. A non-empty word without syllables still yields
/// one empty cluster so that it emits a boundary marker.
pub(crate) fn word_clusters(word: &str, char_budget: usize) -> Vec<Cluster> {
    if word.is_empty() {
        return Vec::new();
    }
    let segments = segmenter::segment_word(word);
    let clusters = cluster::group_syllables(&segments, char_budget);
    if clusters.is_empty() {
        vec![Cluster::new(Vec::new())]
    } else {
        clusters
    }
}

/// Run the pipeline, handing every unmappable cluster to `on_unmappable`.
/// Returning `Err` from the callback aborts the conversion.
fn run<F>(
    text: &str,
    options: &ConvertOptions,
    mut on_unmappable: F,
) -> Result<ConversionResult, ConvertError>
where
    F: FnMut(ConvertError) -> Result<(), ConvertError>,
{
    let _span = debug_span!("convert", text_len = text.len(), scrivener = options.scrivener)
        .entered();

    let mut result = ConversionResult::default();
    for (i, word) in split_words(text).iter().enumerate() {
        if i > 0 {
            result.glyphs.push(WORD_SEPARATOR);
            result.transcript.push(WORD_SEPARATOR);
        }
        for cluster in word_clusters(word, options.char_budget) {
            // A word with no syllables contributes only its marker.
            if cluster.size() > 0 {
                match glyph::select_glyphs(&cluster, options.scrivener) {
                    Ok(out) => {
                        debug!(cluster = %cluster, glyphs = %out.transcript);
                        result.glyphs.push_str(&out.glyphs);
                        result.transcript.push_str(&out.transcript);
                    }
                    Err(source) => on_unmappable(ConvertError::UnmappableCluster {
                        word: word.clone(),
                        cluster: cluster.to_string(),
                        source,
                    })?,
                }
            }
            result.glyphs.push_str(&options.boundary_marker);
        }
    }
    Ok(result)
}

/// Convert with default options. Unmappable clusters are skipped.
pub fn convert(text: &str, scrivener: bool) -> ConversionResult {
    convert_with(text, &ConvertOptions::default().with_scrivener(scrivener))
}

/// Convert with `options`, skipping unmappable clusters whatever the policy.
pub fn convert_with(text: &str, options: &ConvertOptions) -> ConversionResult {
    let outcome = run(text, options, |err| {
        warn!(%err, "skipping unmappable cluster");
        Ok(())
    });
    // The callback never fails, so neither does the run.
    outcome.unwrap_or_default()
}

/// Convert with `options`, honoring its [`UnmappablePolicy`].
pub fn try_convert(text: &str, options: &ConvertOptions) -> Result<ConversionResult, ConvertError> {
    run(text, options, |err| match options.unmappable {
        UnmappablePolicy::Skip => {
            warn!(%err, "skipping unmappable cluster");
            Ok(())
        }
        UnmappablePolicy::Error => Err(err),
    })
}
