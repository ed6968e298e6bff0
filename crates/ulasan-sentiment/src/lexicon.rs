//! Lexicon store: immutable marker-term sets per scored category.
//!
//! Single-word entries match one token exactly. Multi-word entries (mostly
//! negations such as `tidak enak`) match a contiguous window of tokens; the
//! window is consumed so its words are not scored again on their own.

use std::collections::HashSet;
use std::path::Path;

use ulasan_core::LexiconsFile;

use crate::error::SentimentError;
use crate::types::Category;

#[derive(Debug, Clone)]
pub struct Lexicon {
    category: Category,
    words: HashSet<String>,
    phrases: HashSet<Vec<String>>,
    longest_phrase: usize,
}

impl Lexicon {
    /// Build a lexicon from entries; phrases are split on whitespace, duplicates collapse.
    pub fn new<I, S>(category: Category, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = HashSet::new();
        let mut phrases = HashSet::new();

        for entry in entries {
            let parts: Vec<String> = entry
                .as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            match parts.len() {
                0 => {}
                1 => {
                    words.extend(parts);
                }
                _ => {
                    phrases.insert(parts);
                }
            }
        }

        let longest_phrase = phrases.iter().map(Vec::len).max().unwrap_or(1);

        Self {
            category,
            words,
            phrases,
            longest_phrase,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn contains_word(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[must_use]
    pub fn contains_phrase(&self, window: &[String]) -> bool {
        window.len() > 1 && self.phrases.contains(window)
    }

    /// Number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len() + self.phrases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct single words, including the words inside phrases.
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> {
        self.words
            .iter()
            .map(String::as_str)
            .chain(self.phrases.iter().flatten().map(String::as_str))
    }
}

/// Raw hit counts per scored category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TermCounts {
    pub positive: usize,
    pub negative: usize,
    pub suggestion: usize,
}

impl TermCounts {
    fn bump(&mut self, category: Category) {
        match category {
            Category::Positive => self.positive += 1,
            Category::Negative => self.negative += 1,
            Category::Suggestion => self.suggestion += 1,
            Category::Unclassified => {}
        }
    }
}

/// The three lexicons, fixed in positive, negative, suggestion order.
#[derive(Debug, Clone)]
pub struct Lexicons {
    positive: Lexicon,
    negative: Lexicon,
    suggestion: Lexicon,
}

impl Lexicons {
    #[must_use]
    pub fn new(positive: Lexicon, negative: Lexicon, suggestion: Lexicon) -> Self {
        Self {
            positive,
            negative,
            suggestion,
        }
    }

    #[must_use]
    pub fn from_file(file: &LexiconsFile) -> Self {
        Self::new(
            Lexicon::new(Category::Positive, &file.positive),
            Lexicon::new(Category::Negative, &file.negative),
            Lexicon::new(Category::Suggestion, &file.suggestion),
        )
    }

    /// The lexicons shipped with the repository.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] if the embedded file is invalid.
    pub fn builtin() -> Result<Self, SentimentError> {
        Ok(Self::from_file(&LexiconsFile::builtin()?))
    }

    /// Load from `path`, or fall back to the built-in lexicons when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Lexicon`] if the file cannot be read or validated.
    pub fn load(path: Option<&Path>) -> Result<Self, SentimentError> {
        match path {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading lexicons from file");
                Ok(Self::from_file(&ulasan_core::load_lexicons(path)?))
            }
            None => Self::builtin(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Lexicon> {
        [&self.positive, &self.negative, &self.suggestion].into_iter()
    }

    #[must_use]
    pub fn get(&self, category: Category) -> Option<&Lexicon> {
        match category {
            Category::Positive => Some(&self.positive),
            Category::Negative => Some(&self.negative),
            Category::Suggestion => Some(&self.suggestion),
            Category::Unclassified => None,
        }
    }

    /// Every word any lexicon entry uses, sorted and deduplicated.
    #[must_use]
    pub fn vocabulary(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.iter().flat_map(|l| l.vocabulary()).collect();
        words.sort_unstable();
        words.dedup();
        words
    }

    /// Count lexicon hits in a token sequence.
    ///
    /// Scans left to right. At each position the longest phrase found in any
    /// lexicon wins and its tokens are consumed; otherwise the single token
    /// scores once in every lexicon containing it.
    #[must_use]
    pub fn count_hits(&self, tokens: &[String]) -> TermCounts {
        let longest = self.iter().map(|l| l.longest_phrase).max().unwrap_or(1);
        let mut counts = TermCounts::default();
        let mut i = 0;

        'scan: while i < tokens.len() {
            for len in (2..=longest.min(tokens.len() - i)).rev() {
                let window = &tokens[i..i + len];
                let mut matched = false;
                for lexicon in self.iter().filter(|l| l.contains_phrase(window)) {
                    counts.bump(lexicon.category);
                    matched = true;
                }
                if matched {
                    i += len;
                    continue 'scan;
                }
            }

            for lexicon in self.iter().filter(|l| l.contains_word(&tokens[i])) {
                counts.bump(lexicon.category);
            }
            i += 1;
        }

        counts
    }
}
