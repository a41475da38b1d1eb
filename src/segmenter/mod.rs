//! Word → syllable segmentation.
//!
//! Scans a lower-cased word with the ordered rules in [`rules`], normalizes
//! each token's digraphs, elides the implicit default vowel and lets a lone
//! consonant absorb a following `hh`/`nn`/`th` vowel. Characters no rule
//! matches are dropped without error.

mod rules;

use std::fmt;

use tracing::{debug, debug_span, trace};

use crate::script::digraph::{HH, NN, TH};
use crate::script::{self, SEPARATOR};

/// One segmentation unit: normalized symbols, normally one or two.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable(String);

impl Syllable {
    /// Normalize a matched token and drop its trailing default vowel.
    fn from_token(token: &str) -> Self {
        let mut symbols = script::normalize(token);
        if symbols.chars().count() > 1
            && symbols.chars().any(script::is_consonant)
            && symbols.ends_with('a')
        {
            symbols.pop();
        }
        Syllable(symbols)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn symbol_count(&self) -> usize {
        self.0.chars().count()
    }

    /// `hh`, `nn` or `th`, standing alone.
    pub fn is_absorbable_special_vowel(&self) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(HH | NN | TH), None))
    }

    fn is_single_consonant(&self) -> bool {
        let mut chars = self.0.chars();
        matches!((chars.next(), chars.next()), (Some(c), None) if script::is_consonant(c))
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
impl From<&str> for Syllable {
    fn from(symbols: &str) -> Self {
        Syllable(symbols.to_string())
    }
}

/// Segmenter output: a syllable or an explicit `=` boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Syllable(Syllable),
    Separator,
}

impl Segment {
    pub fn as_syllable(&self) -> Option<&Syllable> {
        match self {
            Segment::Syllable(s) => Some(s),
            Segment::Separator => None,
        }
    }
}

/// Segment one lower-cased word.
pub fn segment_word(word: &str) -> Vec<Segment> {
    let chars: Vec<char> = word.chars().collect();
    let _span = debug_span!("segment_word", char_count = chars.len()).entered();

    let mut segments = Vec::new();
    let mut pos = 0;
    while pos < chars.len() {
        if chars[pos] == SEPARATOR {
            segments.push(Segment::Separator);
            pos += 1;
            continue;
        }
        match rules::match_at(&chars, pos) {
            Some((rule, len)) => {
                let token: String = chars[pos..pos + len].iter().collect();
                trace!(rule = rule.name, token = %token, pos);
                push_syllable(&mut segments, Syllable::from_token(&token));
                pos += len;
            }
            None => {
                trace!(dropped = %chars[pos], pos);
                pos += 1;
            }
        }
    }

    debug!(segment_count = segments.len());
    segments
}

/// Append `syllable`, merging it into a preceding lone consonant when it is
/// an absorbable special vowel (`ka` + `hh` → `k` + `hh` symbol).
fn push_syllable(segments: &mut Vec<Segment>, syllable: Syllable) {
    if syllable.is_absorbable_special_vowel() {
        if let Some(Segment::Syllable(prev)) = segments.last_mut() {
            if prev.is_single_consonant() {
                trace!(consonant = %prev, vowel = %syllable, "merge");
                prev.0.push_str(&syllable.0);
                return;
            }
        }
    }
    segments.push(Segment::Syllable(syllable));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::digraph::{NG, NN};

    fn seg(word: &str) -> Vec<String> {
        segment_word(word)
            .iter()
            .map(|s| match s {
                Segment::Syllable(s) => s.to_string(),
                Segment::Separator => "=".to_string(),
            })
            .collect()
    }

    #[test]
    fn test_default_vowel_elided() {
        assert_eq!(seg("ka"), vec!["k"]);
        assert_eq!(seg("kala"), vec!["k", "l"]);
    }

    #[test]
    fn test_lone_vowel_a_kept() {
        assert_eq!(seg("a"), vec!["a"]);
        assert_eq!(seg("aa"), vec!["a", "a"]);
    }

    #[test]
    fn test_consonant_with_vowel() {
        assert_eq!(seg("ki"), vec!["ki"]);
        assert_eq!(seg("c-"), vec!["c-"]);
        assert_eq!(seg("kee"), vec!["ké"]);
    }

    #[test]
    fn test_special_consonants_normalized() {
        assert_eq!(seg("nga"), vec![NG.to_string()]);
        assert_eq!(seg("sya"), vec!["x"]);
        assert_eq!(seg("sa"), vec!["s"]);
    }

    #[test]
    fn test_every_digraph_in_token_normalized() {
        assert_eq!(seg("ngee"), vec![format!("{NG}é")]);
        assert_eq!(seg("synn"), vec![format!("x{NN}")]);
    }

    #[test]
    fn test_th_is_one_syllable() {
        assert_eq!(seg("th"), vec![TH.to_string()]);
        // `tha` is `th` followed by a separate `a`.
        assert_eq!(seg("tha"), vec![TH.to_string(), "a".to_string()]);
    }

    #[test]
    fn test_separator_kept() {
        assert_eq!(seg("c-=la"), vec!["c-", "=", "l"]);
    }

    #[test]
    fn test_merge_consonant_and_special_vowel() {
        assert_eq!(seg("kahh"), vec![format!("k{HH}")]);
        assert_eq!(seg("kann"), vec![format!("k{NN}")]);
        assert_eq!(seg("kath"), vec![format!("k{TH}")]);
        // Only one absorption per consonant.
        assert_eq!(
            seg("kahhhh"),
            vec![format!("k{HH}")],
            "second hh continues the run and is not a fresh vowel"
        );
    }

    #[test]
    fn test_no_merge_across_separator() {
        assert_eq!(seg("ka=hh"), vec!["k".to_string(), "=".into(), HH.to_string()]);
    }

    #[test]
    fn test_no_merge_after_vowel() {
        assert_eq!(seg("ohh"), vec!["o".to_string(), HH.to_string()]);
    }

    #[test]
    fn test_successive_merges() {
        assert_eq!(
            seg("kahhbann"),
            vec![format!("k{HH}"), format!("b{NN}")]
        );
    }

    #[test]
    fn test_unmatched_characters_dropped() {
        assert_eq!(seg("a<"), vec!["a"]);
        assert_eq!(seg("<a"), vec!["a"]);
        assert_eq!(seg("b"), Vec::<String>::new());
        assert_eq!(seg("123"), Vec::<String>::new());
        assert_eq!(seg(""), Vec::<String>::new());
    }

    #[test]
    fn test_lone_t_n_s_dropped() {
        assert_eq!(seg("otlium"), vec!["o", "li", "u"]);
        assert_eq!(seg("an"), vec!["a"]);
        assert_eq!(seg("as"), vec!["a"]);
    }

    #[test]
    fn test_run_of_n() {
        assert_eq!(seg("nnna"), vec![NN.to_string(), "n".to_string()]);
    }

    #[test]
    fn test_absorbable_property() {
        assert!(Syllable::from(HH.to_string().as_str()).is_absorbable_special_vowel());
        assert!(Syllable::from(TH.to_string().as_str()).is_absorbable_special_vowel());
        assert!(!Syllable::from(NG.to_string().as_str()).is_absorbable_special_vowel());
        assert!(!Syllable::from("e").is_absorbable_special_vowel());
    }
}
