//! A headless windowing engine for very long lists of variably sized, lazily measured items.
//!
//! Only a bounded slice of items is ever measured. Everything else is sized by a running
//! estimate (the mean of the measured heights), so scrollbar geometry and item offsets are
//! available before the whole list has been laid out, and get more accurate as the host reports
//! real heights.
//!
//! The engine never renders or measures. A host is expected to:
//! - scroll and resize the [`Window`] (usually through [`VirtualList`]),
//! - render the items in the visible range,
//! - call [`VirtualList::report_height`] once an item's real height is known.
//!
//! When a report changes the height of an item above the top of the window, the scroll offset is
//! shifted by the same amount ("anchoring"), so content already on screen does not jump.
//!
//! ```
//! use estimating_virtualizer::{ListOptions, VirtualList};
//!
//! let mut list = VirtualList::from_heights([200.0, 200.0, 200.0, 1000.0], ListOptions::new(500.0));
//! assert_eq!(list.estimate(), 200.0);
//! assert_eq!(list.total_height(), 800.0);
//!
//! list.report_height(3, 1000.0).unwrap();
//! assert_eq!(list.total_height(), 1600.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod collection;
mod error;
mod item;
mod list;
mod notifier;
mod options;
mod prefix;
mod state;
mod types;
mod window;


pub use collection::Collection;
pub use error::{Error, Result};
pub use item::{Item, ItemHandle};
pub use list::VirtualList;
pub use notifier::{
    Callbacks, HeightMapCallback, NoopNotifier, Notifier, ScrollCallback, TotalHeightCallback,
    VisibleRangeCallback,
};
pub use options::ListOptions;
pub use state::WindowState;
pub use types::{CollectionId, Edge, VisibleRange};
pub use window::Window;
