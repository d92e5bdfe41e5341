//! Style tokens, legends, and the fixed precedence that maps markers to styles.
//!
//! The engine never touches drawing state. For every element it hands the render surface a
//! [`ColorToken`], computed by [`Markers::style_at`]; the surface decides what the token looks like.

use crate::step::Markers;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The style of a single element in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorToken {
    /// Not yet in its final position.
    Unsorted,
    /// Before the sorted boundary.
    Sorted,
    /// At the tracked marker (current minimum, key being inserted, ...).
    Best,
    /// At the compared marker.
    Compared,
}

impl Markers {
    /// Style of the element at `index`.
    ///
    /// Always evaluated in the same order, each rule overriding the previous one:
    /// unsorted, then sorted, then best, then compared.
    pub fn style_at(&self, index: usize) -> ColorToken {
        let mut token = ColorToken::Unsorted;
        if index < self.sorted {
            token = ColorToken::Sorted;
        }
        if self.best == Some(index) {
            token = ColorToken::Best;
        }
        if self.compared == Some(index) {
            token = ColorToken::Compared;
        }
        token
    }
}

/// Explains what a [`ColorToken`] means for one algorithm.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: ColorToken,
    pub name: String,
}

impl LegendEntry {
    pub fn new(color: ColorToken, name: impl Into<String>) -> Self {
        Self {
            color,
            name: name.into(),
        }
    }
}

/// An ordered, read-only list of legend entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legend {
    entries: SmallVec<[LegendEntry; 4]>,
}

impl Legend {
    pub fn new(entries: impl IntoIterator<Item = LegendEntry>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Builds the usual four-entry legend from the labels of each token, in display order.
    pub fn standard(unsorted: &str, sorted: &str, best: &str, compared: &str) -> Self {
        Self::new([
            LegendEntry::new(ColorToken::Unsorted, unsorted),
            LegendEntry::new(ColorToken::Sorted, sorted),
            LegendEntry::new(ColorToken::Best, best),
            LegendEntry::new(ColorToken::Compared, compared),
        ])
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_is_compared_over_best_over_sorted() {
        let markers = Markers::new(3, Some(1), Some(1));
        assert_eq!(markers.style_at(1), ColorToken::Compared);

        let markers = Markers::new(3, Some(4), Some(1));
        assert_eq!(markers.style_at(1), ColorToken::Best);
        assert_eq!(markers.style_at(0), ColorToken::Sorted);
        assert_eq!(markers.style_at(4), ColorToken::Compared);
        assert_eq!(markers.style_at(5), ColorToken::Unsorted);
    }

    #[test]
    fn no_markers_means_sorted_prefix_only() {
        let markers = Markers::new(2, None, None);
        let styles: Vec<_> = (0..4).map(|i| markers.style_at(i)).collect();
        assert_eq!(
            styles,
            [
                ColorToken::Sorted,
                ColorToken::Sorted,
                ColorToken::Unsorted,
                ColorToken::Unsorted
            ]
        );
    }

    #[test]
    fn legend_keeps_order_and_names() {
        let legend = Legend::standard("unsorted", "sorted", "minimum", "compared");
        assert_eq!(legend.len(), 4);
        assert_eq!(legend.entries()[2].color, ColorToken::Best);
        assert_eq!(legend.entries()[2].name, "minimum");
        assert!(Legend::default().is_empty());
    }
}
