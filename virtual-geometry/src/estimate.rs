use crate::error::{GeometryError, Result};
use crate::options::ItemSize;

/// Estimate used when neither an explicit estimate nor a uniform item size is available.
pub const DEFAULT_ESTIMATED_ITEM_SIZE: f64 = 50.0;

pub(crate) fn is_valid_size(size: f64) -> bool {
    size.is_finite() && size > 0.0
}

/// Fallback size for items that have not been measured yet.
///
/// The estimate only predicts the extent of the unmeasured tail. It never replaces a measured
/// size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Estimator {
    size: f64,
}

impl Estimator {
    /// Creates an estimator from an explicit size.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfig`] when `size` is not a finite, positive number.
    pub fn new(size: f64) -> Result<Self> {
        if !is_valid_size(size) {
            vwarn!(size, "Estimator::new: rejected estimate");
            return Err(GeometryError::InvalidConfig(
                "estimated item size must be a finite, positive number",
            ));
        }
        Ok(Self { size })
    }

    /// Resolves the effective estimate for a configuration.
    ///
    /// Precedence: a positive `explicit` estimate, then a positive uniform item size, then
    /// [`DEFAULT_ESTIMATED_ITEM_SIZE`].
    pub fn resolve(explicit: Option<f64>, item_size: &ItemSize) -> Self {
        let size = explicit
            .filter(|&s| is_valid_size(s))
            .or_else(|| item_size.uniform().filter(|&s| is_valid_size(s)))
            .unwrap_or(DEFAULT_ESTIMATED_ITEM_SIZE);
        Self { size }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Predicted extent of `count` unmeasured items.
    pub fn extent_of(&self, count: usize) -> f64 {
        count as f64 * self.size
    }

    /// Predicted number of unmeasured items needed to cover `distance` (at least one).
    pub fn items_to_cover(&self, distance: f64) -> usize {
        if distance.is_nan() || distance <= 0.0 {
            return 1;
        }
        // Float-to-int casts saturate, so an enormous distance cannot wrap.
        let n = (distance / self.size) as usize;
        n.saturating_add(1)
    }
}

impl Default for Estimator {
    fn default() -> Self {
        Self {
            size: DEFAULT_ESTIMATED_ITEM_SIZE,
        }
    }
}
