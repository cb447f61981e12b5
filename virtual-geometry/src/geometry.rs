use crate::cache::MeasurementCache;
use crate::error::Result;
use crate::estimate::Estimator;
use crate::options::{ConfigUpdate, GeometryOptions, ItemSize};
use crate::{Align, ItemMetadata, VisibleRange, range, scroll_to};

/// A headless geometry engine for one virtualized list.
///
/// This type is UI-agnostic:
/// - It holds no UI objects and performs no scrolling itself.
/// - Item sizes are pulled lazily from the configured [`ItemSize`] source, in index order, only
///   as far as a query needs them.
/// - Queries take `&mut self` because they may extend the measured prefix.
///
/// For scroll state, settle debouncing and per-index caches, see the `virtual-geometry-adapter`
/// crate.
#[derive(Clone, Debug)]
pub struct ListGeometry {
    options: GeometryOptions,
    cache: MeasurementCache,
}

impl ListGeometry {
    /// Creates an empty geometry cache for `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::InvalidConfig`] when an explicit estimate is supplied
    /// and is not a finite, positive number.
    pub fn new(options: GeometryOptions) -> Result<Self> {
        if let Some(estimate) = options.estimated_item_size {
            Estimator::new(estimate)?;
        }
        let estimator = Estimator::resolve(options.estimated_item_size, &options.item_size);
        vdebug!(
            item_count = options.item_count,
            estimated_item_size = estimator.size(),
            "ListGeometry::new"
        );
        let cache = MeasurementCache::new(
            options.item_count,
            options.item_size.clone(),
            estimator,
        );
        Ok(Self { options, cache })
    }

    pub fn options(&self) -> &GeometryOptions {
        &self.options
    }

    pub fn cache(&self) -> &MeasurementCache {
        &self.cache
    }

    pub fn item_count(&self) -> usize {
        self.cache.item_count()
    }

    /// The effective estimate used for unmeasured items.
    pub fn estimated_item_size(&self) -> f64 {
        self.cache.estimated_item_size()
    }

    /// Merges a partial configuration change.
    ///
    /// Measured metadata is kept. When item sizes actually change, call [`Self::reset_item`]
    /// as well.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeometryError::InvalidConfig`] for a non-positive or non-finite
    /// estimate. Nothing is applied in that case.
    pub fn update_config(&mut self, update: ConfigUpdate) -> Result<()> {
        if let Some(estimate) = update.estimated_item_size {
            Estimator::new(estimate)?;
            self.options.estimated_item_size = Some(estimate);
        }
        if let Some(item_count) = update.item_count {
            self.options.item_count = item_count;
            self.cache.set_item_count(item_count);
        }
        self.resolve_estimate();
        vdebug!(
            item_count = self.cache.item_count(),
            estimated_item_size = self.cache.estimated_item_size(),
            "update_config"
        );
        Ok(())
    }

    /// Replaces the item size source.
    ///
    /// Like [`Self::update_config`], this does not invalidate measured metadata.
    pub fn set_item_size(&mut self, item_size: impl Into<ItemSize>) {
        let item_size = item_size.into();
        self.options.item_size = item_size.clone();
        self.cache.set_item_size(item_size);
        self.resolve_estimate();
    }

    fn resolve_estimate(&mut self) {
        let estimator =
            Estimator::resolve(self.options.estimated_item_size, &self.options.item_size);
        self.cache.set_estimator(estimator);
    }

    /// Discards metadata at and after `start_index` (clamped to the list bounds).
    pub fn reset_item(&mut self, start_index: usize) {
        self.cache.reset_item(start_index);
    }

    /// Measures every item up to and including `index`.
    ///
    /// # Errors
    ///
    /// See [`MeasurementCache::ensure_measured`].
    pub fn ensure_measured(&mut self, index: usize) -> Result<()> {
        self.cache.ensure_measured(index)
    }

    /// Returns the offset and size of the item at `index`.
    ///
    /// # Errors
    ///
    /// See [`MeasurementCache::ensure_measured`].
    pub fn size_and_position(&mut self, index: usize) -> Result<ItemMetadata> {
        self.cache.size_and_position(index)
    }

    pub fn last_measured(&self) -> ItemMetadata {
        self.cache.last_measured()
    }

    pub fn last_measured_index(&self) -> Option<usize> {
        self.cache.last_measured_index()
    }

    pub fn is_measured(&self, index: usize) -> bool {
        self.cache.is_measured(index)
    }

    /// Predicted total extent of the list (measured prefix plus estimated tail).
    pub fn total_size(&self) -> f64 {
        self.cache.total_size()
    }

    /// Returns the items to render for a viewport of `container_size` scrolled to `offset`,
    /// widened by `overscan` items on each side.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::GeometryError::InvalidSize`] when an item that must be measured has
    /// an invalid size.
    pub fn visible_range(
        &mut self,
        container_size: f64,
        offset: f64,
        overscan: usize,
    ) -> Result<VisibleRange> {
        range::visible_range(&mut self.cache, container_size, offset, overscan)
    }

    /// Returns the scroll offset that brings `target_index` into view with `align`.
    ///
    /// The result is not clamped to the scrollable extent.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::GeometryError::IndexOutOfRange`] for an empty list and with
    /// [`crate::GeometryError::InvalidSize`] when the target cannot be measured.
    pub fn offset_for_index(
        &mut self,
        target_index: usize,
        align: Align,
        container_size: f64,
        current_offset: f64,
    ) -> Result<f64> {
        scroll_to::offset_for_index(
            &mut self.cache,
            target_index,
            align,
            container_size,
            current_offset,
        )
    }
}
