use alloc::sync::Arc;

/// Hooks the engine calls so a host can re-render, reposition or resize its visuals.
///
/// Every method has a no-op default, so implementors only override what they care about.
/// Hooks are called synchronously from inside engine operations and must not call back into
/// the engine.
pub trait Notifier {
    /// The set of visible items may have changed. The host re-derives the range itself.
    fn visible_range_changed(&mut self) {}

    /// The scroll offset changed without a remeasure pass (e.g. an anchoring shift).
    fn scrolled(&mut self, _position: f64) {}

    /// The total height was recomputed.
    fn total_height_changed(&mut self, _total: f64) {}

    /// A single height-map slot (measured or estimated) changed.
    fn height_map_changed(&mut self, _index: usize, _height: f64) {}
}

/// A notifier that ignores every hook.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn visible_range_changed(&mut self) {
        (**self).visible_range_changed();
    }

    fn scrolled(&mut self, position: f64) {
        (**self).scrolled(position);
    }

    fn total_height_changed(&mut self, total: f64) {
        (**self).total_height_changed(total);
    }

    fn height_map_changed(&mut self, index: usize, height: f64) {
        (**self).height_map_changed(index, height);
    }
}

pub type VisibleRangeCallback = Arc<dyn Fn() + Send + Sync>;
pub type ScrollCallback = Arc<dyn Fn(f64) + Send + Sync>;
pub type TotalHeightCallback = Arc<dyn Fn(f64) + Send + Sync>;
pub type HeightMapCallback = Arc<dyn Fn(usize, f64) + Send + Sync>;

/// A closure-backed [`Notifier`]: each hook is an optional callback.
///
/// Cheap to clone; callbacks are stored in `Arc`s.
#[derive(Clone, Default)]
pub struct Callbacks {
    pub on_visible_range_changed: Option<VisibleRangeCallback>,
    pub on_scroll: Option<ScrollCallback>,
    pub on_total_height_changed: Option<TotalHeightCallback>,
    pub on_height_map_changed: Option<HeightMapCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_on_visible_range_changed(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_visible_range_changed = Some(Arc::new(f));
        self
    }

    pub fn with_on_scroll(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_scroll = Some(Arc::new(f));
        self
    }

    pub fn with_on_total_height_changed(mut self, f: impl Fn(f64) + Send + Sync + 'static) -> Self {
        self.on_total_height_changed = Some(Arc::new(f));
        self
    }

    pub fn with_on_height_map_changed(
        mut self,
        f: impl Fn(usize, f64) + Send + Sync + 'static,
    ) -> Self {
        self.on_height_map_changed = Some(Arc::new(f));
        self
    }
}

impl Notifier for Callbacks {
    fn visible_range_changed(&mut self) {
        if let Some(cb) = &self.on_visible_range_changed {
            cb();
        }
    }

    fn scrolled(&mut self, position: f64) {
        if let Some(cb) = &self.on_scroll {
            cb(position);
        }
    }

    fn total_height_changed(&mut self, total: f64) {
        if let Some(cb) = &self.on_total_height_changed {
            cb(total);
        }
    }

    fn height_map_changed(&mut self, index: usize, height: f64) {
        if let Some(cb) = &self.on_height_map_changed {
            cb(index, height);
        }
    }
}

impl core::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Callbacks")
            .field(
                "on_visible_range_changed",
                &self.on_visible_range_changed.is_some(),
            )
            .field("on_scroll", &self.on_scroll.is_some())
            .field(
                "on_total_height_changed",
                &self.on_total_height_changed.is_some(),
            )
            .field("on_height_map_changed", &self.on_height_map_changed.is_some())
            .finish()
    }
}
