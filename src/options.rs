use crate::{NoopNotifier, Notifier};

/// Configuration for [`crate::VirtualList`].
///
/// ```
/// use estimating_virtualizer::{Callbacks, ListOptions};
///
/// let options = ListOptions::new(480.0)
///     .with_initial_index(10)
///     .with_notifier(Callbacks::new().with_on_scroll(|_| {}));
/// assert_eq!(options.initial_index, 10);
/// ```
#[derive(Clone)]
pub struct ListOptions<N = NoopNotifier> {
    /// Height of the viewing region.
    pub viewport_height: f64,
    /// The item the list starts at: measurement is seeded from here and the window is scrolled
    /// to its top.
    pub initial_index: usize,
    pub notifier: N,
}

impl ListOptions<NoopNotifier> {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height,
            initial_index: 0,
            notifier: NoopNotifier,
        }
    }
}

impl<N: Notifier> ListOptions<N> {
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    pub fn with_initial_index(mut self, initial_index: usize) -> Self {
        self.initial_index = initial_index;
        self
    }

    /// Replaces the notifier (and with it, the notifier type).
    pub fn with_notifier<M: Notifier>(self, notifier: M) -> ListOptions<M> {
        ListOptions {
            viewport_height: self.viewport_height,
            initial_index: self.initial_index,
            notifier,
        }
    }
}

impl<N> core::fmt::Debug for ListOptions<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListOptions")
            .field("viewport_height", &self.viewport_height)
            .field("initial_index", &self.initial_index)
            .finish_non_exhaustive()
    }
}
