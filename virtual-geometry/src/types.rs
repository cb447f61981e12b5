/// Where a target item should land inside the viewport after a programmatic scroll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Keep the current offset when the item is fully visible, otherwise scroll the least
    /// distance that reveals it.
    #[default]
    Auto,
}

/// Geometry of a single item along the scroll axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemMetadata {
    /// Distance from the start of the list to the item's leading edge.
    pub offset: f64,
    /// Extent of the item along the scroll axis.
    pub size: f64,
}

impl ItemMetadata {
    /// Sentinel returned when nothing has been measured yet.
    pub const ZERO: Self = Self {
        offset: 0.0,
        size: 0.0,
    };

    pub fn end(&self) -> f64 {
        self.offset + self.size
    }

    /// Half-open containment: `[offset, offset + size)`.
    pub fn contains(&self, offset: f64) -> bool {
        self.offset <= offset && offset < self.end()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl VisibleRange {
    pub const EMPTY: Self = Self {
        start_index: 0,
        end_index: 0,
    };

    /// Builds a range from an inclusive `stop` index.
    pub fn inclusive(start_index: usize, stop: usize) -> Self {
        Self {
            start_index,
            end_index: stop + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }

    /// The last index of the range, or `None` for an empty range.
    pub fn stop(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end_index - 1)
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index < self.end_index
    }

    pub fn indexes(&self) -> core::ops::Range<usize> {
        self.start_index..self.end_index
    }
}
