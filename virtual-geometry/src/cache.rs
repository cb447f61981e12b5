use alloc::vec::Vec;

use crate::ItemMetadata;
use crate::error::{GeometryError, Result};
use crate::estimate::{Estimator, is_valid_size};
use crate::options::ItemSize;

/// Lazily filled `(offset, size)` table for a list of items.
///
/// Metadata is valid and contiguous for `0..measured_len()`. Indexes past that have never been
/// measured (or were invalidated by [`Self::reset_item`]) and are accounted for by the
/// [`Estimator`] only.
///
/// Entries past `item_count` are kept when the list shrinks, but every query treats them as
/// unmeasured. Growing the list again makes them visible, which is sound as long as the size
/// source is deterministic.
#[derive(Clone, Debug)]
pub struct MeasurementCache {
    items: Vec<ItemMetadata>,
    item_count: usize,
    item_size: ItemSize,
    estimator: Estimator,
}

impl MeasurementCache {
    pub fn new(item_count: usize, item_size: ItemSize, estimator: Estimator) -> Self {
        Self {
            items: Vec::new(),
            item_count,
            item_size,
            estimator,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn estimator(&self) -> Estimator {
        self.estimator
    }

    pub fn estimated_item_size(&self) -> f64 {
        self.estimator.size()
    }

    pub fn item_size(&self) -> &ItemSize {
        &self.item_size
    }

    pub(crate) fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
    }

    pub(crate) fn set_estimator(&mut self, estimator: Estimator) {
        self.estimator = estimator;
    }

    pub(crate) fn set_item_size(&mut self, item_size: ItemSize) {
        self.item_size = item_size;
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.items.reserve(additional);
    }

    /// Number of measured items visible under the current `item_count`.
    pub fn measured_len(&self) -> usize {
        self.items.len().min(self.item_count)
    }

    /// Highest measured index, or `None` when nothing is measured.
    pub fn last_measured_index(&self) -> Option<usize> {
        self.measured_len().checked_sub(1)
    }

    pub fn is_measured(&self, index: usize) -> bool {
        index < self.measured_len()
    }

    /// Metadata of the last measured item, or [`ItemMetadata::ZERO`].
    pub fn last_measured(&self) -> ItemMetadata {
        match self.last_measured_index() {
            Some(i) => self.items[i],
            None => ItemMetadata::ZERO,
        }
    }

    /// The measured prefix.
    pub fn measured(&self) -> &[ItemMetadata] {
        &self.items[..self.measured_len()]
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.item_count {
            return Err(GeometryError::IndexOutOfRange {
                index,
                item_count: self.item_count,
            });
        }
        Ok(())
    }

    /// Measures every item up to and including `index`.
    ///
    /// This is a no-op when `index` is already measured. On failure the cache is left exactly
    /// as it was before the call.
    ///
    /// # Errors
    ///
    /// - [`GeometryError::IndexOutOfRange`] when `index >= item_count`.
    /// - [`GeometryError::InvalidSize`] when the size source returns a non-positive, non-finite
    ///   or missing size for any index in the extended range.
    pub fn ensure_measured(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let from = self.measured_len();
        if index < from {
            return Ok(());
        }

        self.items.reserve(index + 1 - from);

        let mut offset = self.last_measured().end();
        for j in from..=index {
            let size = self.item_size.size_of(j);
            if !is_valid_size(size) {
                vwarn!(index = j, size, "ensure_measured: invalid item size");
                self.items.truncate(from);
                return Err(GeometryError::InvalidSize { index: j, size });
            }
            self.items.push(ItemMetadata { offset, size });
            offset += size;
        }

        vtrace!(from, to = index, "ensure_measured");
        Ok(())
    }

    /// Returns the offset and size of `index`, measuring up to it first.
    ///
    /// # Errors
    ///
    /// See [`Self::ensure_measured`].
    pub fn size_and_position(&mut self, index: usize) -> Result<ItemMetadata> {
        self.ensure_measured(index)?;
        Ok(self.items[index])
    }

    /// Discards metadata at and after `start_index`.
    ///
    /// `start_index` is clamped to `[0, item_count)`. Offsets before it do not depend on the
    /// discarded sizes and are kept.
    pub fn reset_item(&mut self, start_index: usize) {
        let start = start_index.min(self.item_count.saturating_sub(1));
        if start < self.items.len() {
            vdebug!(start, measured = self.items.len(), "reset_item");
            self.items.truncate(start);
        }
    }

    /// Predicted total extent of the list.
    ///
    /// The measured prefix contributes its exact extent; every unmeasured item contributes the
    /// estimate. The value is refined as more items are measured.
    pub fn total_size(&self) -> f64 {
        let unmeasured = self.item_count - self.measured_len();
        self.last_measured().end() + self.estimator.extent_of(unmeasured)
    }
}
