use crate::error::Result;
use crate::{
    Collection, Edge, Item, ItemHandle, ListOptions, NoopNotifier, Notifier, VisibleRange, Window,
    WindowState,
};

/// A headless virtual list: one [`Collection`], the [`Window`] over it, and the host's
/// [`Notifier`].
///
/// This is the type most hosts should hold. It does not render or measure anything:
/// - the host scrolls/resizes it when UI events occur,
/// - reads [`VirtualList::visible_range`] / [`VirtualList::visible_items`] to decide what to draw,
/// - and reports measured heights back with [`VirtualList::report_height`].
///
/// All operations are synchronous. Notifier hooks run inside the call that triggered them and
/// must not call back into the list.
#[derive(Clone, Debug)]
pub struct VirtualList<T = (), N = NoopNotifier> {
    collection: Collection<T>,
    window: Window,
    notifier: N,
}

impl<N: Notifier> VirtualList<(), N> {
    /// Convenience constructor for payload-free lists.
    pub fn from_heights(heights: impl IntoIterator<Item = f64>, options: ListOptions<N>) -> Self {
        Self::new(heights.into_iter().map(Item::new), options)
    }
}

impl<T, N: Notifier> VirtualList<T, N> {
    /// Builds the collection and window and initializes them from `options.initial_index`.
    pub fn new(items: impl IntoIterator<Item = Item<T>>, options: ListOptions<N>) -> Self {
        let ListOptions {
            viewport_height,
            initial_index,
            notifier,
        } = options;
        let mut list = Self {
            collection: Collection::new(items),
            window: Window::new(viewport_height),
            notifier,
        };
        vdebug!(
            count = list.collection.len(),
            viewport = list.window.height(),
            initial_index,
            "VirtualList::new"
        );
        list.collection
            .initialize(&mut list.window, initial_index, &mut list.notifier);
        list
    }

    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn into_parts(self) -> (Collection<T>, Window, N) {
        (self.collection, self.window, self.notifier)
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&Item<T>> {
        self.collection.item(index)
    }

    pub fn payload_mut(&mut self, index: usize) -> Option<&mut T> {
        self.collection.payload_mut(index)
    }

    pub fn heights(&self) -> &[f64] {
        self.collection.heights()
    }

    pub fn total_height(&self) -> f64 {
        self.collection.total_height()
    }

    pub fn estimate(&self) -> f64 {
        self.collection.estimate()
    }

    pub fn is_observed(&self, index: usize) -> bool {
        self.collection.is_observed(index)
    }

    pub fn scroll_top(&self) -> f64 {
        self.window.scroll_top()
    }

    pub fn max_scroll(&self) -> f64 {
        self.window.max_scroll(&self.collection)
    }

    pub fn percentage(&self) -> f64 {
        self.window.percentage(&self.collection)
    }

    pub fn position_of_top(&self, index: usize) -> f64 {
        self.collection.position_of_top(index)
    }

    pub fn position_of_bottom(&self, index: usize) -> f64 {
        self.collection.position_of_bottom(index)
    }

    pub fn index_at_position(&self, position: f64, edge: Edge) -> Result<usize> {
        self.collection.index_at_position(position, edge)
    }

    pub fn item_at_position(&self, position: f64, edge: Edge) -> Result<&Item<T>> {
        self.collection.item_at_position(position, edge)
    }

    pub fn visible_range(&self) -> Result<VisibleRange> {
        self.collection.visible_index_range(&self.window)
    }

    pub fn visible_items(&self) -> Result<&[Item<T>]> {
        let range = self.visible_range()?;
        self.collection.items_in_range(range.first, range.last)
    }

    pub fn items_in_range(&self, first: usize, last: usize) -> Result<&[Item<T>]> {
        self.collection.items_in_range(first, last)
    }

    pub fn scroll_to(&mut self, position: f64, remeasure: bool) {
        self.window
            .scroll_to(&mut self.collection, &mut self.notifier, position, remeasure);
    }

    pub fn scroll_by(&mut self, delta: f64, remeasure: bool) {
        self.window
            .scroll_by(&mut self.collection, &mut self.notifier, delta, remeasure);
    }

    pub fn scroll_to_percentage(&mut self, percentage: f64, remeasure: bool) {
        self.window.scroll_to_percentage(
            &mut self.collection,
            &mut self.notifier,
            percentage,
            remeasure,
        );
    }

    pub fn scroll_to_item_top(&mut self, index: usize, remeasure: bool) {
        self.window
            .scroll_to_item_top(&mut self.collection, &mut self.notifier, index, remeasure);
    }

    pub fn scroll_to_item_bottom(&mut self, index: usize, remeasure: bool) {
        self.window
            .scroll_to_item_bottom(&mut self.collection, &mut self.notifier, index, remeasure);
    }

    /// Jumps to the top of item `index` and remeasures what becomes visible.
    pub fn jump_to_index(&mut self, index: usize) {
        self.scroll_to_item_top(index, true);
    }

    pub fn set_height(&mut self, height: f64) {
        self.window
            .set_height(&mut self.collection, &mut self.notifier, height);
    }

    pub fn report_height(&mut self, index: usize, height: f64) -> Result<()> {
        self.collection
            .report_height(&mut self.window, index, height, &mut self.notifier)
    }

    pub fn report_item_height(&mut self, handle: ItemHandle, height: f64) -> Result<()> {
        self.collection
            .report_item_height(&mut self.window, handle, height, &mut self.notifier)
    }

    pub fn report_heights(&mut self, reports: impl IntoIterator<Item = (usize, f64)>) -> Result<()> {
        self.collection
            .report_heights(&mut self.window, reports, &mut self.notifier)
    }

    /// Re-reports item `index` with the height it already carries, marking it observed.
    pub fn reload_item(&mut self, index: usize) -> Result<()> {
        let height = match self.collection.item(index) {
            Some(item) => item.height(),
            None => {
                return Err(crate::Error::IndexOutOfBounds {
                    index,
                    count: self.collection.len(),
                });
            }
        };
        self.report_height(index, height)
    }

    /// Returns a lightweight snapshot of the window geometry.
    pub fn window_state(&self) -> WindowState {
        WindowState {
            height: self.window.height(),
            scroll_top: self.window.scroll_top(),
        }
    }

    /// Restores a snapshot: resizes the window, then scrolls (clamped, with remeasure).
    pub fn restore_window_state(&mut self, state: WindowState) {
        self.set_height(state.height);
        self.scroll_to(state.scroll_top, true);
    }
}
