use crate::CollectionId;

/// One slot of a virtualized list.
///
/// An item carries the host's latest known height for its content plus an opaque payload the
/// engine never inspects. Its index and owner are stamped exactly once, when the owning
/// [`crate::Collection`] is initialized, and never change afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Item<T = ()> {
    height: f64,
    index: Option<usize>,
    payload: Option<T>,
    owner: Option<CollectionId>,
}

/// A non-owning reference to an item: the owning collection plus the item's index.
///
/// Hosts keep these next to their rendered views and hand them back with a measurement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    pub owner: CollectionId,
    pub index: usize,
}

impl<T> Item<T> {
    /// Creates an item with no payload.
    ///
    /// Non-finite and negative heights are coerced to `0.0`.
    pub fn new(height: f64) -> Self {
        Self {
            height: sanitize_height(height),
            index: None,
            payload: None,
            owner: None,
        }
    }

    pub fn with_payload(height: f64, payload: T) -> Self {
        Self {
            payload: Some(payload),
            ..Self::new(height)
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The item's position in its collection, or `None` before initialization.
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn owner(&self) -> Option<CollectionId> {
        self.owner
    }

    pub fn handle(&self) -> Option<ItemHandle> {
        Some(ItemHandle {
            owner: self.owner?,
            index: self.index?,
        })
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn payload_mut(&mut self) -> Option<&mut T> {
        self.payload.as_mut()
    }

    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    pub(crate) fn attach(&mut self, owner: CollectionId, index: usize) {
        debug_assert!(
            self.owner.is_none_or(|o| o == owner) && self.index.is_none_or(|i| i == index),
            "item reattached (index={index})"
        );
        self.owner = Some(owner);
        self.index = Some(index);
    }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = height;
    }
}

pub(crate) fn sanitize_height(height: f64) -> f64 {
    if height.is_finite() && height > 0.0 {
        height
    } else {
        0.0
    }
}
