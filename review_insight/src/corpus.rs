//! Curated example reviews for the "load example" action.

use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Fixed corpus the example loader samples from.
pub const EXAMPLE_REVIEWS: &[&str] = &[
    "I love this product! It's amazing and works perfectly.",
    "This was a complete waste of money. It broke after two days.",
    "The battery life is excellent, easily lasts a full day.",
    "Terrible customer service, they never answered my emails.",
    "Fast shipping and the packaging was beautiful.",
    "The screen is too dim and the colors look washed out.",
    "Honestly the best purchase I've made this year.",
    "It stopped working after a week. Very disappointed.",
    "Comfortable to wear all day, I highly recommend it.",
    "The instructions were confusing and parts were missing.",
    "Great value for the price, would buy again.",
    "Cheap plastic that feels flimsy. Not worth it.",
    "My kids are delighted with it, easy to use even for them.",
    "The app keeps crashing and the sync is painfully slow.",
    "Exceeded my expectations in every way.",
    "Returned it the same day, the sound quality is awful.",
    "Reliable, quiet and looks fantastic on my desk.",
    "Arrived with a cracked case and the refund took a month.",
    "Wonderful little gadget, it does exactly what it promises.",
    "Worst headphones I have ever owned, never again.",
];

/// Inclusive bounds on how many examples one load picks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleRange {
    pub min: usize,
    pub max: usize,
}

impl Default for ExampleRange {
    fn default() -> Self {
        Self { min: 3, max: 6 }
    }
}

impl ExampleRange {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min == 0 || self.min > self.max {
            return Err(ConfigError::InvalidExampleRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Pick distinct lines from `corpus`, in random order.
///
/// The sample size is drawn from `range` and capped at the corpus size, so a
/// call never returns more lines than the corpus holds nor the same line twice.
pub fn sample_from<'a, R>(corpus: &[&'a str], range: ExampleRange, rng: &mut R) -> Vec<&'a str>
where
    R: Rng + ?Sized,
{
    let hi = range.max.min(corpus.len());
    let lo = range.min.min(hi);
    if hi == 0 {
        return Vec::new();
    }
    let amount = rng.gen_range(lo..=hi);
    index::sample(rng, corpus.len(), amount)
        .into_iter()
        .map(|i| corpus[i])
        .collect()
}

/// Sample the built-in corpus and join the picks into input text.
pub fn example_text<R>(range: ExampleRange, rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    sample_from(EXAMPLE_REVIEWS, range, rng).join("\n")
}
