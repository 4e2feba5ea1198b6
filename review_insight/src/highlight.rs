//! Keyword highlighting for review text.
//!
//! Each polarity has a curated vocabulary. A review is split into plain and
//! emphasized fragments by matching the vocabulary of the review's own
//! polarity only, case-insensitively and on whole-word boundaries.
//!
//! ```rust
//! use review_insight::highlight::{highlight, Fragment};
//! use review_insight::Polarity;
//!
//! let fragments = highlight("I LOVE it", Polarity::Positive);
//! assert_eq!(fragments[1], Fragment::Emphasized("LOVE".into()));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::types::Polarity;

/// Built-in vocabulary for positive reviews.
pub const POSITIVE_KEYWORDS: &[&str] = &[
    "love",
    "loved",
    "loves",
    "great",
    "amazing",
    "excellent",
    "perfect",
    "perfectly",
    "fantastic",
    "awesome",
    "best",
    "happy",
    "recommend",
    "highly recommend",
    "works great",
    "easy to use",
    "worth every penny",
    "beautiful",
    "comfortable",
    "fast",
    "reliable",
    "impressed",
    "wonderful",
    "good",
    "delighted",
    "exceeded my expectations",
];

/// Built-in vocabulary for negative reviews.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "waste of money",
    "terrible",
    "awful",
    "horrible",
    "broke",
    "broken",
    "disappointed",
    "disappointing",
    "worst",
    "poor",
    "bad",
    "hate",
    "useless",
    "cheap",
    "defective",
    "returned",
    "refund",
    "slow",
    "never again",
    "not worth",
    "stopped working",
    "flimsy",
    "doesn't work",
];

static BUILTIN: Lazy<Highlighter> =
    Lazy::new(|| Highlighter::new(POSITIVE_KEYWORDS, NEGATIVE_KEYWORDS));

/// A contiguous run of review text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "lowercase")]
pub enum Fragment {
    Plain(String),
    Emphasized(String),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Plain(text) | Fragment::Emphasized(text) => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Fragment::Emphasized(_))
    }
}

/// Compiled per-polarity keyword matchers.
#[derive(Clone, Debug)]
pub struct Highlighter {
    positive: Option<Regex>,
    negative: Option<Regex>,
}

impl Default for Highlighter {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl Highlighter {
    /// Build a highlighter from explicit vocabularies.
    pub fn new<P, N>(positive: P, negative: N) -> Self
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        Self {
            positive: compile(positive),
            negative: compile(negative),
        }
    }

    /// The shared highlighter over the built-in vocabularies.
    pub fn builtin() -> &'static Highlighter {
        &BUILTIN
    }

    /// Built-in vocabularies extended with extra keywords (from config).
    pub fn with_extra_keywords(positive: &[String], negative: &[String]) -> Self {
        if positive.is_empty() && negative.is_empty() {
            return Self::default();
        }
        let pos = POSITIVE_KEYWORDS
            .iter()
            .map(|s| s.to_string())
            .chain(positive.iter().cloned());
        let neg = NEGATIVE_KEYWORDS
            .iter()
            .map(|s| s.to_string())
            .chain(negative.iter().cloned());
        Self::new(pos, neg)
    }

    /// Split `text` into fragments, emphasizing keywords of `polarity`.
    ///
    /// Concatenating the fragment texts always yields `text` again.
    pub fn highlight(&self, text: &str, polarity: Polarity) -> Vec<Fragment> {
        if text.is_empty() {
            return Vec::new();
        }
        let pattern = match polarity {
            Polarity::Positive => self.positive.as_ref(),
            Polarity::Negative => self.negative.as_ref(),
        };
        let Some(pattern) = pattern else {
            return vec![Fragment::Plain(text.to_string())];
        };

        let mut fragments = Vec::new();
        let mut cursor = 0;
        for found in pattern.find_iter(text) {
            if found.start() > cursor {
                fragments.push(Fragment::Plain(text[cursor..found.start()].to_string()));
            }
            fragments.push(Fragment::Emphasized(found.as_str().to_string()));
            cursor = found.end();
        }
        if cursor < text.len() {
            fragments.push(Fragment::Plain(text[cursor..].to_string()));
        }
        fragments
    }
}

/// Highlight with the built-in vocabularies.
pub fn highlight(text: &str, polarity: Polarity) -> Vec<Fragment> {
    Highlighter::builtin().highlight(text, polarity)
}

/// Compile a vocabulary into one alternation. Longer phrases come first so a
/// phrase wins over a keyword starting at the same position.
fn compile<I>(keywords: I) -> Option<Regex>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut words: Vec<String> = Vec::new();
    for keyword in keywords {
        let keyword = keyword.as_ref().trim();
        if keyword.is_empty() {
            continue;
        }
        if !words.iter().any(|w| w.eq_ignore_ascii_case(keyword)) {
            words.push(keyword.to_string());
        }
    }
    if words.is_empty() {
        return None;
    }
    words.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

    let alternatives: Vec<String> = words.iter().map(|w| bounded(w)).collect();
    let pattern = format!("(?i)(?:{})", alternatives.join("|"));
    match Regex::new(&pattern) {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!("keyword pattern rejected, highlighting disabled: {err}");
            None
        }
    }
}

/// Escape a phrase and anchor its outer edges on word boundaries. An edge
/// that is not a word character gets no anchor since `\b` could never match
/// there the way a reader expects.
fn bounded(phrase: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let starts_word = phrase.chars().next().is_some_and(is_word);
    let ends_word = phrase.chars().last().is_some_and(is_word);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        regex::escape(phrase),
        if ends_word { r"\b" } else { "" },
    )
}
