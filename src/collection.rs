use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::item::Item;
use crate::prefix::PrefixSums;
use crate::{CollectionId, Edge, ItemHandle, Notifier, VisibleRange, Window};

/// The ordered set of items plus their height bookkeeping.
///
/// Every slot of the height map holds either the item's measured height (once the item has been
/// observed) or the running estimate: the mean measured height over all observed items. The
/// item count is fixed for the collection's lifetime.
///
/// Mutations go through [`Collection::initialize`] and [`Collection::report_height`]; both keep
/// `total_height == Σ heights()` and never un-observe an index.
#[derive(Clone, Debug)]
pub struct Collection<T = ()> {
    id: CollectionId,
    items: Vec<Item<T>>,
    height_map: Vec<f64>,
    sums: PrefixSums,
    total_height: f64,
    observed: Vec<bool>,
    observed_count: usize,
    observed_sum: f64,
    initialized: bool,
}

impl<T> Collection<T> {
    pub fn new(items: impl IntoIterator<Item = Item<T>>) -> Self {
        let items: Vec<Item<T>> = items.into_iter().collect();
        let n = items.len();
        Self {
            id: CollectionId::next(),
            items,
            height_map: alloc::vec![0.0; n],
            sums: PrefixSums::new(n),
            total_height: 0.0,
            observed: alloc::vec![false; n],
            observed_count: 0,
            observed_sum: 0.0,
            initialized: false,
        }
    }

    pub fn id(&self) -> CollectionId {
        self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn items(&self) -> &[Item<T>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item<T>> {
        self.items.get(index)
    }

    /// Mutable access to an item's payload. Heights stay read-only; use `report_height`.
    pub fn payload_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)?.payload_mut()
    }

    /// The height map: measured heights for observed items, the estimate for the rest.
    pub fn heights(&self) -> &[f64] {
        &self.height_map
    }

    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    pub fn is_observed(&self, index: usize) -> bool {
        self.observed.get(index).copied().unwrap_or(false)
    }

    pub fn observed_count(&self) -> usize {
        self.observed_count
    }

    pub fn observed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.observed
            .iter()
            .enumerate()
            .filter_map(|(i, &seen)| seen.then_some(i))
    }

    /// Mean measured height over the observed items, or `0.0` when nothing is observed yet.
    pub fn estimate(&self) -> f64 {
        if self.observed_count == 0 {
            return 0.0;
        }
        self.observed_sum / self.observed_count as f64
    }

    /// Re-estimates every unobserved slot and recomputes the total height.
    ///
    /// Fires `height_map_changed` for each slot whose value moved and `total_height_changed`
    /// once with the new total.
    pub fn recompute_heights<N: Notifier + ?Sized>(&mut self, notifier: &mut N) {
        // Resync the running sum so incremental updates cannot drift.
        self.observed_sum = self
            .height_map
            .iter()
            .zip(&self.observed)
            .filter_map(|(&h, &seen)| seen.then_some(h))
            .sum();
        let estimate = self.estimate();
        for (i, slot) in self.height_map.iter_mut().enumerate() {
            if self.observed[i] || *slot == estimate {
                continue;
            }
            *slot = estimate;
            notifier.height_map_changed(i, estimate);
        }
        self.sums.rebuild(&self.height_map);
        self.total_height = self.sums.total();
        notifier.total_height_changed(self.total_height);
    }

    /// Offset of the top of item `index`. Indexes past the end yield the total height.
    pub fn position_of_top(&self, index: usize) -> f64 {
        self.sums.prefix_sum(index)
    }

    /// Offset of the bottom of item `index`. Indexes past the end yield the total height.
    pub fn position_of_bottom(&self, index: usize) -> f64 {
        self.sums.prefix_sum(index.saturating_add(1))
    }

    /// Resolves `position` to the index of the item whose span contains it.
    ///
    /// See [`Edge`] for how boundaries are attributed. `total_height` itself resolves to the
    /// last item for [`Edge::Forward`], and `0` resolves to the first item for
    /// [`Edge::Backward`].
    pub fn index_at_position(&self, position: f64, edge: Edge) -> Result<usize> {
        let n = self.items.len();
        if n == 0 || position.is_nan() || position < 0.0 || position > self.total_height {
            return Err(Error::OutOfRange {
                position,
                total_height: self.total_height,
            });
        }
        debug_assert_eq!(self.sums.len(), n);
        Ok(self.sums.search(position, edge).min(n - 1))
    }

    pub fn item_at_position(&self, position: f64, edge: Edge) -> Result<&Item<T>> {
        let index = self.index_at_position(position, edge)?;
        Ok(&self.items[index])
    }

    /// Returns the inclusive range of items overlapping `window`.
    ///
    /// The window's bottom edge is clamped to the total height (content shorter than the
    /// viewport). When the total height is zero every item sits at offset zero and the whole
    /// collection is reported visible.
    pub fn visible_index_range(&self, window: &Window) -> Result<VisibleRange> {
        let n = self.items.len();
        if n > 0 && self.total_height <= 0.0 {
            return Ok(VisibleRange {
                first: 0,
                last: n - 1,
            });
        }

        let top = window.top();
        let low = self.index_at_position(top, Edge::Forward)?;
        let bottom = window.bottom().min(self.total_height);
        let high = if bottom <= top {
            low
        } else {
            self.index_at_position(bottom, Edge::Backward)?
        };

        if low > high {
            return Err(Error::InvertedRange { low, high });
        }
        Ok(VisibleRange {
            first: low,
            last: high,
        })
    }

    /// Returns items `first..=last`.
    pub fn items_in_range(&self, first: usize, last: usize) -> Result<&[Item<T>]> {
        if first > last {
            return Err(Error::InvertedRange {
                low: first,
                high: last,
            });
        }
        if last >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index: last,
                count: self.items.len(),
            });
        }
        Ok(&self.items[first..=last])
    }

    /// Stamps index and owner onto every item, measures one viewport's worth of items starting
    /// at `start_index`, estimates the rest, then scrolls `window` to the start item.
    ///
    /// `start_index` is clamped to the last item.
    pub fn initialize<N: Notifier + ?Sized>(
        &mut self,
        window: &mut Window,
        start_index: usize,
        notifier: &mut N,
    ) {
        let id = self.id;
        for (i, item) in self.items.iter_mut().enumerate() {
            item.attach(id, i);
        }

        let n = self.items.len();
        let start = start_index.min(n.saturating_sub(1));
        if start != start_index {
            vwarn!(start_index, count = n, "initialize: start index clamped");
        }

        let mut offset = 0.0;
        let mut i = start;
        while i < n && offset <= window.height() {
            let height = self.items[i].height();
            self.mark_measured(i, height, notifier);
            offset += height;
            i += 1;
        }
        vdebug!(
            count = n,
            start,
            observed = self.observed_count,
            viewport = window.height(),
            "Collection::initialize"
        );

        self.initialized = true;
        self.recompute_heights(notifier);
        let target = self.position_of_top(start);
        window.scroll_to(self, notifier, target, true);
    }

    /// Records an authoritative height for item `index`.
    ///
    /// If the item sits before the item at the window's top (and the window is not pinned at
    /// either end of its range), the window is shifted by the same amount the item grew or
    /// shrank, so content currently on screen does not move.
    pub fn report_height<N: Notifier + ?Sized>(
        &mut self,
        window: &mut Window,
        index: usize,
        height: f64,
        notifier: &mut N,
    ) -> Result<()> {
        self.report_heights(window, core::iter::once((index, height)), notifier)
    }

    /// Routes a report through an item handle, rejecting handles minted by another collection.
    pub fn report_item_height<N: Notifier + ?Sized>(
        &mut self,
        window: &mut Window,
        handle: ItemHandle,
        height: f64,
        notifier: &mut N,
    ) -> Result<()> {
        if handle.owner != self.id {
            return Err(Error::ForeignItem {
                index: handle.index,
            });
        }
        self.report_height(window, handle.index, height, notifier)
    }

    /// Applies several reports in order, stopping at the first error.
    ///
    /// Reports before the failing one stay applied. Anchoring is decided per report against the
    /// layout the batch started from, and the accumulated shift is applied once, after a single
    /// recompute.
    pub fn report_heights<N: Notifier + ?Sized>(
        &mut self,
        window: &mut Window,
        reports: impl IntoIterator<Item = (usize, f64)>,
        notifier: &mut N,
    ) -> Result<()> {
        if !self.initialized {
            return Err(Error::NotInitialized);
        }

        let mut applied = 0usize;
        let mut changed = false;
        let mut shift = 0.0;
        let mut result = Ok(());
        for (index, height) in reports {
            if let Err(err) = self.check_report(index, height) {
                result = Err(err);
                break;
            }
            let delta = height - self.height_map[index];
            let anchor = delta != 0.0 && self.is_before_window_top(window, index);
            vtrace!(index, height, delta, anchor, "report_height");
            if anchor {
                shift += delta;
            }
            changed |= delta != 0.0;

            self.items[index].set_height(height);
            self.mark_measured(index, height, notifier);
            applied += 1;
        }
        if applied == 0 {
            return result;
        }

        self.recompute_heights(notifier);
        if shift != 0.0 {
            window.scroll_by(self, notifier, shift, false);
        } else if window.scroll_top() > window.max_scroll(self) {
            window.scroll_to(self, notifier, window.scroll_top(), false);
        }
        if changed {
            notifier.visible_range_changed();
        }
        result
    }

    fn check_report(&self, index: usize, height: f64) -> Result<()> {
        if index >= self.items.len() {
            return Err(Error::IndexOutOfBounds {
                index,
                count: self.items.len(),
            });
        }
        if !height.is_finite() || height < 0.0 {
            vwarn!(index, height, "report_height: rejected height");
            return Err(Error::InvalidHeight { index, height });
        }
        Ok(())
    }

    fn is_before_window_top(&self, window: &Window, index: usize) -> bool {
        let top = window.top();
        if top <= 0.0 || top >= window.max_scroll(self) {
            return false;
        }
        match self.index_at_position(top, Edge::Forward) {
            Ok(top_index) => index < top_index,
            Err(_) => false,
        }
    }

    fn mark_measured<N: Notifier + ?Sized>(
        &mut self,
        index: usize,
        height: f64,
        notifier: &mut N,
    ) {
        if self.observed[index] {
            self.observed_sum += height - self.height_map[index];
        } else {
            self.observed[index] = true;
            self.observed_count += 1;
            self.observed_sum += height;
        }
        if self.height_map[index] != height {
            self.height_map[index] = height;
            notifier.height_map_changed(index, height);
        }
    }
}
