//! Ordered syllable matchers.
//!
//! Each matcher looks at the word from a scan position and returns how many
//! characters it consumes. Matchers may look one character behind the scan
//! position (`nn`/`hh` are not vowels when they continue a run of the same
//! letter), so they take the whole word plus a position rather than a suffix.

use crate::script::{is_consonant, E_ACUTE, VOWEL_REMOVAL};

type Matcher = fn(&[char], usize) -> Option<usize>;

pub(super) struct MatchRule {
    pub name: &'static str,
    pub matcher: Matcher,
}

/// Tried in order at every scan position; the first match wins.
pub(super) const RULES: &[MatchRule] = &[
    MatchRule {
        name: "special-consonant+vowel",
        matcher: match_special_consonant_syllable,
    },
    MatchRule {
        name: "t+vowel",
        matcher: match_t_syllable,
    },
    MatchRule {
        name: "consonant+vowel",
        matcher: match_consonant_syllable,
    },
    MatchRule {
        name: "vowel",
        matcher: match_vowel_group,
    },
];

/// First rule matching at `pos`, with the number of characters it consumes.
pub(super) fn match_at(cs: &[char], pos: usize) -> Option<(&'static MatchRule, usize)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(cs, pos).map(|len| (rule, len)))
}

fn is_simple_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'o' | 'u' | E_ACUTE | VOWEL_REMOVAL)
}

fn match_many(cs: &[char], pos: usize, f: impl Fn(char) -> bool) -> usize {
    cs.get(pos..)
        .map_or(0, |rest| rest.iter().take_while(|&&c| f(c)).count())
}

/// `e` followed by any run of `e`/`u`.
fn match_e_run(cs: &[char], pos: usize) -> Option<usize> {
    match cs.get(pos) {
        Some('e') => Some(1 + match_many(cs, pos + 1, |c| c == 'e' || c == 'u')),
        _ => None,
    }
}

/// `cc` where the character before `pos` is not `c`.
fn match_fresh_double(cs: &[char], pos: usize, c: char) -> Option<usize> {
    let preceded = pos > 0 && cs[pos - 1] == c;
    if !preceded && cs.get(pos) == Some(&c) && cs.get(pos + 1) == Some(&c) {
        Some(2)
    } else {
        None
    }
}

pub(super) fn match_vowel_group(cs: &[char], pos: usize) -> Option<usize> {
    match *cs.get(pos)? {
        'e' => match_e_run(cs, pos),
        'n' => match_fresh_double(cs, pos, 'n'),
        'h' => match_fresh_double(cs, pos, 'h'),
        c if is_simple_vowel(c) => Some(1),
        _ => None,
    }
}

/// `n` with any `g`/`y` run, or `s` with any `y` run, then a vowel group.
fn match_special_consonant_syllable(cs: &[char], pos: usize) -> Option<usize> {
    let lead = match *cs.get(pos)? {
        'n' => 1 + match_many(cs, pos + 1, |c| c == 'g' || c == 'y'),
        's' => 1 + match_many(cs, pos + 1, |c| c == 'y'),
        _ => return None,
    };
    Some(lead + match_vowel_group(cs, pos + lead)?)
}

/// `t` followed by an `e` run, `nn`, or a single vowel / `h`. The `h` case
/// is what turns `th` into one token.
fn match_t_syllable(cs: &[char], pos: usize) -> Option<usize> {
    if cs.get(pos) != Some(&'t') {
        return None;
    }
    let tail = match *cs.get(pos + 1)? {
        'e' => match_e_run(cs, pos + 1)?,
        'n' if cs.get(pos + 2) == Some(&'n') => 2,
        'h' => 1,
        c if is_simple_vowel(c) => 1,
        _ => return None,
    };
    Some(1 + tail)
}

/// Any consonant the two rules above do not own, then a vowel group.
fn match_consonant_syllable(cs: &[char], pos: usize) -> Option<usize> {
    let c = *cs.get(pos)?;
    if !is_consonant(c) || matches!(c, 'n' | 's' | 't') {
        return None;
    }
    Some(1 + match_vowel_group(cs, pos + 1)?)
}
