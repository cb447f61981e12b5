use virtual_geometry::{Align, GeometryOptions};

use crate::{Axis, PositionBehavior};
use crate::settle::DEFAULT_SETTLE_DELAY_MS;

/// Default number of extra items rendered on each side of the visible range.
pub const DEFAULT_OVERSCAN: usize = 3;

/// Configuration for [`crate::ListController`].
#[derive(Clone, Debug)]
pub struct ControllerOptions {
    pub geometry: GeometryOptions,
    /// Extent of the viewport along `axis`.
    pub viewport_size: f64,
    pub axis: Axis,
    pub position_behavior: PositionBehavior,
    pub overscan: usize,
    pub settle_delay_ms: u64,
    /// Initial scroll offset. Takes precedence over `scroll_to_index`.
    pub scroll_offset: Option<f64>,
    /// Index to keep scrolled into view; re-applied when item properties change.
    pub scroll_to_index: Option<usize>,
    pub scroll_to_alignment: Align,
}

impl ControllerOptions {
    pub fn new(geometry: GeometryOptions, viewport_size: f64) -> Self {
        Self {
            geometry,
            viewport_size,
            axis: Axis::Vertical,
            position_behavior: PositionBehavior::Absolute,
            overscan: DEFAULT_OVERSCAN,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            scroll_offset: None,
            scroll_to_index: None,
            scroll_to_alignment: Align::Auto,
        }
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_position_behavior(mut self, position_behavior: PositionBehavior) -> Self {
        self.position_behavior = position_behavior;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.settle_delay_ms = delay_ms;
        self
    }

    pub fn with_scroll_offset(mut self, scroll_offset: f64) -> Self {
        self.scroll_offset = Some(scroll_offset);
        self
    }

    pub fn with_scroll_to_index(mut self, index: usize, align: Align) -> Self {
        self.scroll_to_index = Some(index);
        self.scroll_to_alignment = align;
        self
    }
}
