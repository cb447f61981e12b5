use virtual_geometry::ItemMetadata;

use crate::Axis;
use crate::key::IndexMap;

/// Absolute placement of one rendered item along the scroll axis.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStyle {
    pub axis: Axis,
    /// Offset from the start of the scroll content (`top` or `left`).
    pub position: f64,
    /// Extent along the axis (`height` or `width`).
    pub size: f64,
}

impl ItemStyle {
    pub fn new(axis: Axis, item: ItemMetadata) -> Self {
        Self {
            axis,
            position: item.offset,
            size: item.size,
        }
    }

    /// `(property, value)` pairs for hosts that style items by property name.
    pub fn props(&self) -> [(&'static str, f64); 2] {
        [
            (self.axis.position_prop(), self.position),
            (self.axis.size_prop(), self.size),
        ]
    }
}

/// Per-instance cache of item styles, keyed by index.
///
/// Styles are derived from geometry, so the cache must be invalidated together with the
/// geometry it was built from.
#[derive(Clone, Debug, Default)]
pub struct StyleCache {
    styles: IndexMap<ItemStyle>,
}

impl StyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ItemStyle> {
        self.styles.get(&index).copied()
    }

    /// Returns the cached style for `index`, computing it with `f` on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error of `f`; nothing is cached in that case.
    pub fn get_or_try_insert_with<E>(
        &mut self,
        index: usize,
        f: impl FnOnce() -> Result<ItemStyle, E>,
    ) -> Result<ItemStyle, E> {
        if let Some(style) = self.styles.get(&index) {
            return Ok(*style);
        }
        let style = f()?;
        self.styles.insert(index, style);
        Ok(style)
    }

    /// Drops styles at and after `start_index`.
    pub fn invalidate_from(&mut self, start_index: usize) {
        self.styles.retain(|&i, _| i < start_index);
    }

    pub fn clear(&mut self) {
        self.styles.clear();
    }
}
