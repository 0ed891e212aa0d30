use alloc::vec::Vec;

use crate::{Collection, Notifier};

/// The viewing region over a [`Collection`]: a height and a scroll offset.
///
/// Every scroll operation clamps into `[0, max_scroll]`; none of them fail. With
/// `remeasure = true` a scroll is followed by a remeasure pass: every item in the new visible
/// range re-reports its current height, which is how estimated items that scroll into view get
/// replaced by measured ones. With `remeasure = false` only the notifier's `scrolled` hook runs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Window {
    height: f64,
    scroll_top: f64,
}

impl Window {
    /// Creates a window at offset zero. Negative or non-finite heights are coerced to `0.0`.
    pub fn new(height: f64) -> Self {
        Self {
            height: crate::item::sanitize_height(height),
            scroll_top: 0.0,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    pub fn top(&self) -> f64 {
        self.scroll_top
    }

    pub fn bottom(&self) -> f64 {
        self.scroll_top + self.height
    }

    pub fn max_scroll<T>(&self, collection: &Collection<T>) -> f64 {
        (collection.total_height() - self.height).max(0.0)
    }

    /// Scroll position as a fraction of the scroll range.
    ///
    /// Returns `0.0` when the content fits in the window (`max_scroll == 0`).
    pub fn percentage<T>(&self, collection: &Collection<T>) -> f64 {
        let max = self.max_scroll(collection);
        if max <= 0.0 {
            return 0.0;
        }
        self.scroll_top / max
    }

    pub fn scroll_to<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        position: f64,
        remeasure: bool,
    ) {
        let position = if position.is_nan() { 0.0 } else { position };
        let clamped = position.clamp(0.0, self.max_scroll(collection));
        vtrace!(position, clamped, remeasure, "Window::scroll_to");
        self.scroll_top = clamped;
        if remeasure {
            self.remeasure(collection, notifier);
        } else {
            notifier.scrolled(clamped);
        }
    }

    pub fn scroll_by<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        delta: f64,
        remeasure: bool,
    ) {
        let target = self.scroll_top + delta;
        self.scroll_to(collection, notifier, target, remeasure);
    }

    /// Scrolls to `percentage * max_scroll` (`0.0` = top, `1.0` = bottom).
    pub fn scroll_to_percentage<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        percentage: f64,
        remeasure: bool,
    ) {
        let target = percentage * self.max_scroll(collection);
        self.scroll_to(collection, notifier, target, remeasure);
    }

    /// Aligns the top of item `index` with the top of the window, or scrolls to the end if the
    /// remaining content is shorter than the window.
    pub fn scroll_to_item_top<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        index: usize,
        remeasure: bool,
    ) {
        let target = collection
            .position_of_top(index)
            .min(self.max_scroll(collection));
        self.scroll_to(collection, notifier, target, remeasure);
    }

    /// Scrolls so the window's top sits at the bottom of item `index` (clamped).
    pub fn scroll_to_item_bottom<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        index: usize,
        remeasure: bool,
    ) {
        let target = collection
            .position_of_bottom(index)
            .min(self.max_scroll(collection));
        self.scroll_to(collection, notifier, target, remeasure);
    }

    /// Resizes the window, re-clamps the scroll offset and runs a remeasure pass.
    pub fn set_height<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
        height: f64,
    ) {
        self.height = crate::item::sanitize_height(height);
        vtrace!(height = self.height, "Window::set_height");
        let top = self.scroll_top;
        self.scroll_to(collection, notifier, top, true);
    }

    fn remeasure<T, N: Notifier + ?Sized>(
        &mut self,
        collection: &mut Collection<T>,
        notifier: &mut N,
    ) {
        notifier.visible_range_changed();
        if collection.is_empty() || !collection.is_initialized() {
            return;
        }

        let range = match collection.visible_index_range(self) {
            Ok(range) => range,
            Err(err) => {
                vwarn!(%err, scroll_top = self.scroll_top, "remeasure: no visible range");
                debug_assert!(false, "remeasure: no visible range ({err})");
                return;
            }
        };

        let reports: Vec<(usize, f64)> = range
            .indexes()
            .filter_map(|index| Some((index, collection.item(index)?.height())))
            .collect();
        if let Err(err) = collection.report_heights(self, reports, notifier) {
            vwarn!(%err, "remeasure: report failed");
            debug_assert!(false, "remeasure: report failed ({err})");
        }
    }
}
