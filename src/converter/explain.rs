use serde::Serialize;
use tracing::debug_span;

use crate::cluster::Cluster;
use crate::glyph::{self, Orientation, SyllableShape, Tier, TierPlan};
use crate::script::romanize;
use crate::unicode;

use super::{convert_with, split_words, word_clusters, ConversionResult, ConvertOptions};

/// Full diagnostic result for one input text.
#[derive(Debug, Serialize)]
pub struct ExplainResult {
    pub text: String,
    pub scrivener: bool,
    pub words: Vec<ExplainWord>,
    pub result: ConversionResult,
}

#[derive(Debug, Serialize)]
pub struct ExplainWord {
    pub word: String,
    pub clusters: Vec<ExplainCluster>,
}

#[derive(Debug, Serialize)]
pub struct ExplainCluster {
    /// Romanized syllables joined, e.g. `kli`.
    pub text: String,
    pub size: usize,
    pub syllables: Vec<ExplainSyllable>,
    pub transcript: String,
    /// Set when the cluster has no glyph mapping.
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainSyllable {
    pub text: String,
    pub shape: SyllableShape,
    pub tier: Option<Tier>,
    pub orientation: Option<Orientation>,
    /// `None` when this syllable has no glyph at its tier.
    pub transcript: Option<String>,
}

fn explain_cluster(cluster: &Cluster, scrivener: bool) -> ExplainCluster {
    let plan = TierPlan::for_size(cluster.size()).ok();
    let syllables = cluster
        .syllables()
        .iter()
        .map(|s| {
            let rendered = plan.and_then(|p| glyph::render_syllable(s, p, scrivener).ok());
            ExplainSyllable {
                text: romanize(s.as_str()),
                shape: glyph::shape_of(s),
                tier: rendered.as_ref().and_then(|r| r.tier),
                orientation: rendered.as_ref().and_then(|r| r.orientation),
                transcript: rendered.map(|r| unicode::transcript(&r.glyphs)),
            }
        })
        .collect();

    let (transcript, error) = if cluster.size() == 0 {
        (String::new(), None)
    } else {
        match glyph::select_glyphs(cluster, scrivener) {
            Ok(out) => (out.transcript, None),
            Err(e) => (String::new(), Some(e.to_string())),
        }
    };

    ExplainCluster {
        text: romanize(&cluster.to_string()),
        size: cluster.size(),
        syllables,
        transcript,
        error,
    }
}

/// Break a conversion down word by word and cluster by cluster.
pub fn explain(text: &str, options: &ConvertOptions) -> ExplainResult {
    let _span = debug_span!("explain", text_len = text.len()).entered();

    let words = split_words(text)
        .into_iter()
        .map(|word| {
            let clusters = word_clusters(&word, options.char_budget)
                .iter()
                .map(|c| explain_cluster(c, options.scrivener))
                .collect();
            ExplainWord { word, clusters }
        })
        .collect();

    ExplainResult {
        text: text.to_string(),
        scrivener: options.scrivener,
        words,
        result: convert_with(text, options),
    }
}

fn pad(label: &str, width: usize) -> String {
    use unicode_width::UnicodeWidthStr;
    let display_width = UnicodeWidthStr::width(label);
    if display_width < width {
        format!("{}{}", label, " ".repeat(width - display_width))
    } else {
        label.to_string()
    }
}

/// Format an ExplainResult as human-readable text.
pub fn format_text(result: &ExplainResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Explain \"{}\" ({} words, scrivener={}) ===\n",
        result.text,
        result.words.len(),
        if result.scrivener { "on" } else { "off" },
    ));

    for (i, word) in result.words.iter().enumerate() {
        out.push_str(&format!("\n  Word {}: \"{}\"\n", i + 1, word.word));
        if word.clusters.is_empty() {
            out.push_str("    (empty)\n");
            continue;
        }
        for (j, cluster) in word.clusters.iter().enumerate() {
            out.push_str(&format!(
                "    Cluster {} [{}] size={}\n",
                j + 1,
                cluster.text,
                cluster.size,
            ));
            if cluster.size == 0 {
                out.push_str("      (no syllables)\n");
            }
            for s in &cluster.syllables {
                let placement = match (s.tier, s.orientation) {
                    (Some(t), Some(o)) => format!("{t} {o}"),
                    _ => "-".to_string(),
                };
                let shape = match s.shape {
                    SyllableShape::Standalone => "standalone",
                    SyllableShape::Stacked => "stacked",
                    SyllableShape::Unshaped => "unshaped",
                };
                out.push_str(&format!(
                    "      {} {} {} {}\n",
                    pad(&s.text, 8),
                    pad(shape, 11),
                    pad(&placement, 16),
                    s.transcript.as_deref().unwrap_or("?"),
                ));
            }
            if let Some(e) = &cluster.error {
                out.push_str(&format!("      ! {e}\n"));
            }
        }
    }

    out.push_str("\n=== Output ===\n");
    out.push_str(&format!("  glyphs:     {}\n", result.result.glyphs));
    out.push_str(&format!("  transcript: {}\n", result.result.transcript));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explain_separated_word() {
        let result = explain("c-=la", &ConvertOptions::default());
        assert_eq!(result.words.len(), 1);
        let clusters = &result.words[0].clusters;
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].text, "c-");
        assert_eq!(clusters[0].syllables[0].shape, SyllableShape::Stacked);
        assert_eq!(clusters[0].syllables[0].tier, Some(Tier::Half));
        assert_eq!(
            clusters[0].syllables[0].orientation,
            Some(Orientation::Vertical)
        );
        assert_eq!(clusters[0].transcript, "\\ue029\\ue015");
        assert_eq!(clusters[1].transcript, "\\u6c");
        assert_eq!(result.result.glyphs, "\u{e029}\u{e015}==l==");
    }

    #[test]
    fn test_explain_romanizes_special_symbols() {
        let result = explain("kahh", &ConvertOptions::default());
        assert_eq!(result.words[0].clusters[0].text, "khh");
    }

    #[test]
    fn test_explain_reports_unmappable_cluster() {
        // `-` alone has no half-size horizontal glyph.
        let result = explain("a-", &ConvertOptions::default());
        let cluster = &result.words[0].clusters[0];
        assert_eq!(cluster.size, 2);
        assert!(cluster.error.is_some());
        assert_eq!(cluster.syllables[0].transcript.as_deref(), Some("\\ue006"));
        assert_eq!(cluster.syllables[1].transcript, None);
        assert_eq!(result.result.glyphs, "==");
    }

    #[test]
    fn test_explain_empty_and_bare_words() {
        let result = explain("a  b", &ConvertOptions::default());
        assert_eq!(result.words.len(), 3);
        assert!(result.words[1].clusters.is_empty());
        assert_eq!(result.words[2].clusters.len(), 1);
        assert_eq!(result.words[2].clusters[0].size, 0);
        assert_eq!(result.words[2].clusters[0].error, None);
    }

    #[test]
    fn test_format_text() {
        let result = explain("c-=la", &ConvertOptions::default());
        let text = format_text(&result);
        assert!(text.contains("=== Explain \"c-=la\" (1 words, scrivener=off) ==="));
        assert!(text.contains("Cluster 1 [c-] size=1"));
        assert!(text.contains("half vertical"));
        assert!(text.contains("full horizontal"));
        assert!(text.contains("transcript: \\ue029\\ue015\\u6c"));
    }

    #[test]
    fn test_format_text_marks_errors() {
        let result = explain("a-", &ConvertOptions::default());
        let text = format_text(&result);
        assert!(text.contains("! no half horizontal glyph"));
    }

    #[test]
    fn test_serializes_to_json() {
        let result = explain("th", &ConvertOptions::default().with_scrivener(true));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["scrivener"], true);
        assert_eq!(json["words"][0]["clusters"][0]["syllables"][0]["shape"], "standalone");
        assert_eq!(json["words"][0]["clusters"][0]["syllables"][0]["tier"], "full");
        assert_eq!(json["result"]["glyphs"], "\u{e094}==");
    }
}
