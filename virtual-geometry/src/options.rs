use alloc::sync::Arc;
use alloc::vec::Vec;

/// A size callback: returns the extent of the item at `index` along the scroll axis.
///
/// The callback must be deterministic for a fixed configuration. Cached offsets are never
/// reconciled against a callback that changes its answer; call `ListGeometry::reset_item` when
/// sizes actually change.
pub type SizeGetter = Arc<dyn Fn(usize) -> f64 + Send + Sync>;

/// Where item sizes come from.
#[derive(Clone)]
pub enum ItemSize {
    /// Every item has the same size.
    Fixed(f64),
    /// One size per index. Indexes past the end of the list have no size.
    List(Arc<[f64]>),
    /// Sizes are computed on demand.
    Getter(SizeGetter),
}

impl ItemSize {
    pub fn from_fn(f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::Getter(Arc::new(f))
    }

    /// Queries the size of `index`.
    ///
    /// A missing list entry is reported as `NaN` so that it fails validation like any other
    /// non-numeric size.
    pub fn size_of(&self, index: usize) -> f64 {
        match self {
            Self::Fixed(size) => *size,
            Self::List(sizes) => sizes.get(index).copied().unwrap_or(f64::NAN),
            Self::Getter(f) => f(index),
        }
    }

    /// The uniform size, if every item shares one.
    pub fn uniform(&self) -> Option<f64> {
        match self {
            Self::Fixed(size) => Some(*size),
            _ => None,
        }
    }
}

impl From<f64> for ItemSize {
    fn from(size: f64) -> Self {
        Self::Fixed(size)
    }
}

impl From<Vec<f64>> for ItemSize {
    fn from(sizes: Vec<f64>) -> Self {
        Self::List(sizes.into())
    }
}

impl From<&[f64]> for ItemSize {
    fn from(sizes: &[f64]) -> Self {
        Self::List(sizes.into())
    }
}

impl core::fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(size) => f.debug_tuple("Fixed").field(size).finish(),
            Self::List(sizes) => f.debug_tuple("List").field(&sizes.len()).finish(),
            Self::Getter(_) => f.write_str("Getter(..)"),
        }
    }
}

/// Configuration for [`crate::ListGeometry`].
///
/// Cheap to clone: list and callback sizes are stored behind `Arc`s.
#[derive(Clone, Debug)]
pub struct GeometryOptions {
    pub item_count: usize,
    pub item_size: ItemSize,
    /// Fallback size for items that have not been measured yet.
    ///
    /// When unset (or not a positive number), the uniform item size is used if there is one,
    /// otherwise [`crate::DEFAULT_ESTIMATED_ITEM_SIZE`].
    pub estimated_item_size: Option<f64>,
}

impl GeometryOptions {
    pub fn new(item_count: usize, item_size: impl Into<ItemSize>) -> Self {
        Self {
            item_count,
            item_size: item_size.into(),
            estimated_item_size: None,
        }
    }

    /// A list where every item has the same size.
    pub fn fixed(item_count: usize, size: f64) -> Self {
        Self::new(item_count, ItemSize::Fixed(size))
    }

    /// A list with one explicit size per item; `item_count` is the number of sizes.
    pub fn from_sizes(sizes: impl Into<Arc<[f64]>>) -> Self {
        let sizes = sizes.into();
        Self::new(sizes.len(), ItemSize::List(sizes))
    }

    /// A list whose sizes are computed by `f`.
    pub fn from_fn(item_count: usize, f: impl Fn(usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::new(item_count, ItemSize::from_fn(f))
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = Some(estimated_item_size);
        self
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }
}

/// A partial configuration change for [`crate::ListGeometry::update_config`].
///
/// Unset fields keep their current value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConfigUpdate {
    pub item_count: Option<usize>,
    pub estimated_item_size: Option<f64>,
}

impl ConfigUpdate {
    pub fn item_count(item_count: usize) -> Self {
        Self {
            item_count: Some(item_count),
            estimated_item_size: None,
        }
    }

    pub fn estimated_item_size(estimated_item_size: f64) -> Self {
        Self {
            item_count: None,
            estimated_item_size: Some(estimated_item_size),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = Some(item_count);
        self
    }

    pub fn with_estimated_item_size(mut self, estimated_item_size: f64) -> Self {
        self.estimated_item_size = Some(estimated_item_size);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.item_count.is_none() && self.estimated_item_size.is_none()
    }
}
