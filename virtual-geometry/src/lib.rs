//! A headless geometry engine for virtualized lists.
//!
//! For host-side utilities (scroll controller, settle timer, per-index caches), see the
//! `virtual-geometry-adapter` crate.
//!
//! The engine maps an item index to its offset and size along the scroll axis, finds the index
//! range visible for a scroll offset and viewport size, and computes the scroll offset that
//! brings an index into view. Item sizes may be uniform, given per index, or computed by a
//! callback; they are measured lazily, in index order, only as far as a query needs.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - the viewport size along the scroll axis
//! - the live scroll offset
//! - a deterministic size source, and explicit invalidation via `reset_item` when sizes change
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod error;
mod estimate;
mod geometry;
mod options;
mod range;
mod scroll_to;
mod types;


pub use cache::MeasurementCache;
pub use error::{GeometryError, Result};
pub use estimate::{DEFAULT_ESTIMATED_ITEM_SIZE, Estimator};
pub use geometry::ListGeometry;
pub use options::{ConfigUpdate, GeometryOptions, ItemSize, SizeGetter};
pub use types::{Align, ItemMetadata, VisibleRange};
