//! Core data types shared by the session, the views and the exporters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ClassifierError;

/// Coarse sentiment direction assigned by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Polarity {
    /// `POSITIVE`
    Positive,
    /// `NEGATIVE`
    Negative,
}

impl Polarity {
    /// Wire label, as emitted by the classifier and written to CSV.
    pub fn as_label(self) -> &'static str {
        match self {
            Polarity::Positive => "POSITIVE",
            Polarity::Negative => "NEGATIVE",
        }
    }

    /// Human readable name used in legends and headings.
    pub fn display_name(self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
        }
    }

    /// CSS variant class (`positive` / `negative`).
    pub fn variant(self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
        }
    }

    /// Slice colour used by the chart (green-500 / red-500).
    pub fn color(self) -> &'static str {
        match self {
            Polarity::Positive => "#22c55e",
            Polarity::Negative => "#ef4444",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl FromStr for Polarity {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "POSITIVE" => Ok(Polarity::Positive),
            "NEGATIVE" => Ok(Polarity::Negative),
            _ => Err(ClassifierError::UnknownLabel(s.to_string())),
        }
    }
}

/// Raw classifier verdict for one input line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: Polarity,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

impl Classification {
    pub fn new(label: Polarity, score: f64) -> Self {
        Self { label, score }
    }
}

/// One analysed review line.
///
/// Produced only by the session once the classifier has answered; the text is
/// the original line, kept verbatim.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewResult {
    pub text: String,
    pub label: Polarity,
    pub score: f64,
}

impl ReviewResult {
    pub fn new(text: impl Into<String>, label: Polarity, score: f64) -> Self {
        Self {
            text: text.into(),
            label,
            score,
        }
    }

    /// Score formatted the way the lists show it (two decimals).
    pub fn formatted_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

/// Anything carrying a sentiment label; lets the chart accept raw
/// classifications as well as full results.
pub trait Labeled {
    fn polarity(&self) -> Polarity;
}

impl Labeled for ReviewResult {
    fn polarity(&self) -> Polarity {
        self.label
    }
}

impl Labeled for Classification {
    fn polarity(&self) -> Polarity {
        self.label
    }
}
