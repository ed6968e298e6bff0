//! Dictionary-driven Indonesian stemmer.
//!
//! Affixes are only removed when doing so reaches a known root word. Words
//! already in the dictionary are returned untouched, so stems are fixed points.

use std::collections::HashSet;

const BUILTIN_ROOTS: &str = include_str!("../data/kata_dasar.txt");

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];
// Every matching suffix is tried, "kan" before "an" (masak-an vs. masa-kan).
const DERIVATIONAL_SUFFIXES: &[&str] = &["kan", "an", "i"];

/// Prefix layers a single word may carry, e.g. `di-per-baik-i`.
const MAX_PREFIX_DEPTH: usize = 3;

/// Words this short are never stemmed.
const MIN_STEMMABLE_LEN: usize = 4;

#[derive(Debug, Clone)]
pub struct IndonesianStemmer {
    roots: HashSet<String>,
}

impl Default for IndonesianStemmer {
    fn default() -> Self {
        Self::new()
    }
}

impl IndonesianStemmer {
    /// Stemmer backed by the built-in root dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: parse_word_list(BUILTIN_ROOTS).collect(),
        }
    }

    /// Register additional root words (e.g. lexicon terms that must never be reduced).
    #[must_use]
    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.roots.extend(
            roots
                .into_iter()
                .map(|r| r.as_ref().trim().to_lowercase())
                .filter(|r| !r.is_empty()),
        );
        self
    }

    #[must_use]
    pub fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    #[must_use]
    pub fn root_count(&self) -> usize {
        self.roots.len()
    }

    /// Stem every whitespace-separated word, preserving order.
    #[must_use]
    pub fn stem_text(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|word| self.stem_word(word))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Reduce one lowercase word to its root, or return it unchanged.
    #[must_use]
    pub fn stem_word(&self, word: &str) -> String {
        if word.len() < MIN_STEMMABLE_LEN || self.is_root(word) {
            return word.to_string();
        }

        // Most-stripped forms first; fall back to progressively less stripped ones
        // so a suffix-looking ending that belongs to the root can be kept.
        let without_particle = strip_any_suffix(word, PARTICLES);
        let without_possessive = strip_any_suffix(without_particle, POSSESSIVES);

        let mut forms: Vec<&str> = DERIVATIONAL_SUFFIXES
            .iter()
            .filter_map(|suffix| strip_suffix_keeping_base(without_possessive, suffix))
            .collect();
        for form in [without_possessive, without_particle, word] {
            if !forms.contains(&form) {
                forms.push(form);
            }
        }

        for form in forms {
            if self.is_root(form) {
                return form.to_string();
            }
            if let Some(root) = self.strip_prefixes(form, MAX_PREFIX_DEPTH) {
                return root;
            }
        }

        word.to_string()
    }

    fn strip_prefixes(&self, form: &str, depth: usize) -> Option<String> {
        if depth == 0 {
            return None;
        }
        let candidates = prefix_candidates(form);
        for candidate in &candidates {
            if self.is_root(candidate) {
                return Some(candidate.clone());
            }
        }
        candidates
            .iter()
            .find_map(|candidate| self.strip_prefixes(candidate, depth - 1))
    }
}

pub(crate) fn parse_word_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}

fn strip_suffix_keeping_base<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    word.strip_suffix(suffix).filter(|rest| rest.len() >= 3)
}

/// Strip the first matching suffix, leaving at least a few characters behind.
fn strip_any_suffix<'a>(word: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| strip_suffix_keeping_base(word, suffix))
        .unwrap_or(word)
}

fn starts_with_vowel(s: &str) -> bool {
    s.starts_with(['a', 'e', 'i', 'o', 'u'])
}

fn starts_with_any(s: &str, initials: &[char]) -> bool {
    s.starts_with(initials)
}

/// All plausible words left after removing one derivational prefix, including
/// the recoded initial consonant that nasal prefixes swallow (`meny-apu` -> `sapu`).
fn prefix_candidates(word: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |s: String| {
        if s.len() >= 3 && !out.contains(&s) {
            out.push(s);
        }
    };

    for plain in ["di", "ke", "se", "ter", "ber", "per"] {
        if let Some(rest) = word.strip_prefix(plain) {
            push(rest.to_string());
        }
    }
    if let Some(rest) = word.strip_prefix("be") {
        // be-kerja, be-ternak
        if !rest.starts_with('r') {
            push(rest.to_string());
        }
    }

    for (nasal, recoded) in [("meny", "s"), ("peny", "s")] {
        if let Some(rest) = word.strip_prefix(nasal) {
            if starts_with_vowel(rest) {
                push(format!("{recoded}{rest}"));
            }
        }
    }

    for prefix in ["meng", "peng"] {
        if let Some(rest) = word.strip_prefix(prefix) {
            push(rest.to_string());
            if starts_with_vowel(rest) {
                push(format!("k{rest}"));
            }
        }
    }

    for prefix in ["mem", "pem"] {
        if let Some(rest) = word.strip_prefix(prefix) {
            if starts_with_any(rest, &['b', 'f', 'v', 'p']) {
                push(rest.to_string());
            } else if starts_with_vowel(rest) {
                push(format!("p{rest}"));
            }
        }
    }

    for prefix in ["men", "pen"] {
        if let Some(rest) = word.strip_prefix(prefix) {
            if starts_with_any(rest, &['c', 'd', 'j', 'z', 's']) {
                push(rest.to_string());
            } else if starts_with_vowel(rest) {
                push(format!("t{rest}"));
            }
        }
    }

    for prefix in ["me", "pe"] {
        if let Some(rest) = word.strip_prefix(prefix) {
            if starts_with_any(rest, &['l', 'r', 'w', 'y', 'm', 'n']) {
                push(rest.to_string());
            } else if prefix == "pe" && !starts_with_vowel(rest) {
                // pe-kerja, pe-tani
                push(rest.to_string());
            }
        }
    }

    out
}
