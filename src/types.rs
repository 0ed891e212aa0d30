use core::sync::atomic::{AtomicUsize, Ordering};

/// Which side of a span boundary a position belongs to.
///
/// Spans are half-open. A position exactly on the boundary between two items resolves to the
/// later item with [`Edge::Forward`] and to the earlier item with [`Edge::Backward`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    /// `[offset, offset + height)`: used for the top edge of a window.
    Forward,
    /// `(offset, offset + height]`: used for the bottom edge of a window.
    Backward,
}

/// An inclusive range of item indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub first: usize,
    pub last: usize, // inclusive
}

impl VisibleRange {
    /// Number of indexes in the range (never zero).
    pub fn count(&self) -> usize {
        self.last.saturating_sub(self.first).saturating_add(1)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }

    pub fn indexes(&self) -> core::ops::RangeInclusive<usize> {
        self.first..=self.last
    }
}

/// Identity of a [`crate::Collection`], stamped into every item it owns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionId(usize);

static NEXT_COLLECTION_ID: AtomicUsize = AtomicUsize::new(1);

impl CollectionId {
    #[cfg(target_has_atomic = "ptr")]
    pub(crate) fn next() -> Self {
        Self(NEXT_COLLECTION_ID.fetch_add(1, Ordering::Relaxed))
    }

    // No compare-and-swap on this target (thumbv6m, riscv32imc): load/store only.
    #[cfg(not(target_has_atomic = "ptr"))]
    pub(crate) fn next() -> Self {
        let id = NEXT_COLLECTION_ID.load(Ordering::Relaxed);
        NEXT_COLLECTION_ID.store(id.wrapping_add(1), Ordering::Relaxed);
        Self(id)
    }

    pub fn get(self) -> usize {
        self.0
    }
}
