use alloc::vec::Vec;

use crate::Edge;

/// Running offsets over a height map: `offsets[i]` is the top of item `i` and
/// `offsets[len]` is the total height.
///
/// Rebuilt in one pass whenever the height map changes; every query afterwards compares against
/// the same stored sums, so `position_of_top(i)` and `index_at(position_of_top(i), Forward)`
/// always agree.
#[derive(Clone, Debug)]
pub(crate) struct PrefixSums {
    offsets: Vec<f64>,
}

impl PrefixSums {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            offsets: alloc::vec![0.0; n + 1],
        }
    }

    pub(crate) fn rebuild(&mut self, heights: &[f64]) {
        self.offsets.clear();
        self.offsets.reserve_exact(heights.len() + 1);
        let mut acc = 0.0;
        self.offsets.push(acc);
        for &h in heights {
            acc += h;
            self.offsets.push(acc);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.offsets.len().saturating_sub(1)
    }

    /// Sum of the first `count` heights (clamped to `len`).
    pub(crate) fn prefix_sum(&self, count: usize) -> f64 {
        self.offsets[count.min(self.len())]
    }

    pub(crate) fn total(&self) -> f64 {
        self.prefix_sum(self.len())
    }

    /// Returns the index of the first item whose bottom is past `position`
    /// (`>` for [`Edge::Forward`], `>=` for [`Edge::Backward`]).
    ///
    /// Returns `len` when no item qualifies. Callers are expected to have range-checked
    /// `position` first.
    pub(crate) fn search(&self, position: f64, edge: Edge) -> usize {
        let bottoms = &self.offsets[1..];
        match edge {
            Edge::Forward => bottoms.partition_point(|&b| b <= position),
            Edge::Backward => bottoms.partition_point(|&b| b < position),
        }
    }
}
