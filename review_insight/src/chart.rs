//! Sentiment pie chart: counts, whole-number percentages and SVG geometry.
//!
//! Renderers (browser app, static report) only draw what [`PieChart`]
//! describes; all arithmetic lives here.

use std::f64::consts::PI;

use serde::Serialize;

use crate::types::{Labeled, Polarity};

/// Positive and negative counts over a result set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    pub positive: usize,
    pub negative: usize,
}

impl ChartSummary {
    pub fn from_items<'a, T, I>(items: I) -> Self
    where
        T: Labeled + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items
            .into_iter()
            .fold(Self::default(), |mut acc, item| {
                match item.polarity() {
                    Polarity::Positive => acc.positive += 1,
                    Polarity::Negative => acc.negative += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn count(&self, polarity: Polarity) -> usize {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
        }
    }

    /// Whole-number percentages `(positive, negative)`, always summing to 100.
    /// `None` for the empty state.
    pub fn percentages(&self) -> Option<(u32, u32)> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        // round half up on positive, negative takes the remainder
        let positive = ((self.positive * 200 + total) / (2 * total)) as u32;
        Some((positive, 100 - positive))
    }

    /// Pie geometry for an SVG of `size` x `size` user units.
    pub fn pie(&self, size: f64) -> Option<PieChart> {
        let (pos_pct, neg_pct) = self.percentages()?;
        let center = size / 2.0;
        let radius = size * 0.4;
        let total = self.total() as f64;

        let mut slices = Vec::with_capacity(2);
        let mut start = -PI / 2.0;
        for (polarity, percent) in [(Polarity::Positive, pos_pct), (Polarity::Negative, neg_pct)] {
            let count = self.count(polarity);
            if count == 0 {
                continue;
            }
            let sweep = 2.0 * PI * count as f64 / total;
            let end = start + sweep;
            let mid = start + sweep / 2.0;
            let shape = if count == self.total() {
                SliceShape::Circle
            } else {
                SliceShape::Arc(arc_path(center, radius, start, end))
            };
            let (label_x, label_y) = if count == self.total() {
                (center, center)
            } else {
                point(center, radius * 0.5, mid)
            };
            slices.push(PieSlice {
                polarity,
                count,
                percent,
                color: polarity.color(),
                shape,
                label_x,
                label_y,
            });
            start = end;
        }

        Some(PieChart {
            size,
            center,
            radius,
            slices,
            legend: [
                LegendEntry::new(Polarity::Positive, self.positive, pos_pct),
                LegendEntry::new(Polarity::Negative, self.negative, neg_pct),
            ],
        })
    }
}

/// Drawable pie chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieChart {
    pub size: f64,
    pub center: f64,
    pub radius: f64,
    /// Non-empty slices, positive first, clockwise from 12 o'clock.
    pub slices: Vec<PieSlice>,
    /// Both polarities, including zero-count ones.
    pub legend: [LegendEntry; 2],
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub polarity: Polarity,
    pub count: usize,
    pub percent: u32,
    pub color: &'static str,
    pub shape: SliceShape,
    pub label_x: f64,
    pub label_y: f64,
}

impl PieSlice {
    /// Label drawn inside the slice, e.g. `75%`.
    pub fn label(&self) -> String {
        format!("{}%", self.percent)
    }
}

/// SVG shape of a slice. A single slice covering the whole pie cannot be
/// drawn as an arc and becomes a circle.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum SliceShape {
    Circle,
    Arc(String),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub polarity: Polarity,
    pub name: &'static str,
    pub count: usize,
    pub percent: u32,
    pub color: &'static str,
}

impl LegendEntry {
    fn new(polarity: Polarity, count: usize, percent: u32) -> Self {
        Self {
            polarity,
            name: polarity.display_name(),
            count,
            percent,
            color: polarity.color(),
        }
    }
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center + radius * angle.sin())
}

fn arc_path(center: f64, radius: f64, start: f64, end: f64) -> String {
    let (x0, y0) = point(center, radius, start);
    let (x1, y1) = point(center, radius, end);
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {center:.2} {center:.2} L {x0:.2} {y0:.2} A {radius:.2} {radius:.2} 0 {large_arc} 1 {x1:.2} {y1:.2} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Classification, ReviewResult};
    use pretty_assertions::assert_eq;

    fn summary(positive: usize, negative: usize) -> ChartSummary {
        ChartSummary { positive, negative }
    }

    #[test]
    fn counts_labels() {
        let data = vec![
            Classification::new(Polarity::Positive, 0.9),
            Classification::new(Polarity::Negative, 0.6),
            Classification::new(Polarity::Positive, 0.7),
        ];
        assert_eq!(ChartSummary::from_items(&data), summary(2, 1));

        let results = vec![ReviewResult::new("meh", Polarity::Negative, 0.5)];
        assert_eq!(ChartSummary::from_items(&results), summary(0, 1));
    }

    #[test]
    fn empty_state_has_no_chart() {
        assert_eq!(summary(0, 0).percentages(), None);
        assert!(summary(0, 0).pie(200.0).is_none());
    }

    #[test]
    fn three_to_one_is_75_25() {
        assert_eq!(summary(3, 1).percentages(), Some((75, 25)));
    }

    #[test]
    fn percentages_always_sum_to_100() {
        for pos in 0..12 {
            for neg in 0..12 {
                if let Some((p, n)) = summary(pos, neg).percentages() {
                    assert_eq!(p + n, 100, "{pos}/{neg}");
                }
            }
        }
        assert_eq!(summary(1, 2).percentages(), Some((33, 67)));
        assert_eq!(summary(1, 1).percentages(), Some((50, 50)));
    }

    #[test]
    fn single_polarity_is_a_full_circle() {
        let pie = summary(4, 0).pie(200.0).unwrap();
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].shape, SliceShape::Circle);
        assert_eq!(pie.slices[0].label(), "100%");
        assert_eq!(pie.legend[1].count, 0);
        assert_eq!(pie.legend[1].percent, 0);
    }

    #[test]
    fn majority_slice_uses_large_arc_flag() {
        let pie = summary(3, 1).pie(200.0).unwrap();
        assert_eq!(pie.slices.len(), 2);
        match &pie.slices[0].shape {
            SliceShape::Arc(path) => {
                assert!(path.starts_with("M 100.00 100.00 L 100.00 20.00"));
                assert!(path.contains(" 0 1 1 "));
            }
            other => panic!("unexpected shape {other:?}"),
        }
        match &pie.slices[1].shape {
            SliceShape::Arc(path) => assert!(path.contains(" 0 0 1 ")),
            other => panic!("unexpected shape {other:?}"),
        }
    }
}
