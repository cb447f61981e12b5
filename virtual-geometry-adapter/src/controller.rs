use virtual_geometry::{
    Align, ConfigUpdate, GeometryError, ItemMetadata, ItemSize, ListGeometry, VisibleRange,
};

use crate::{
    Axis, ControllerOptions, ItemStyle, PositionBehavior, RenderEdges, ScrollChangeReason, ScrollDirection,
    ScrollSettled, ScrollState, SettleTimer, StyleCache,
};

/// A framework-neutral controller that wraps a [`ListGeometry`] and keeps the scroll state a
/// host needs around it.
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `on_viewport_size` / `on_scroll` when UI events occur
/// - `tick(now_ms)` from a frame/timer loop, to detect when scrolling has settled
/// - `render_range` / `item_style` when rendering
///
/// Requested scrolls (`scroll_to_offset`, `scroll_to_index`) return the clamped offset; the host
/// writes it to the real scroll surface.
///
/// Geometry invalidation and rendered-output invalidation are separate: `recompute_sizes` resets
/// geometry and the style cache derived from it, while a host-owned [`crate::CellCache`] is
/// cleared only on [`ScrollSettled`].
#[derive(Clone, Debug)]
pub struct ListController {
    geometry: ListGeometry,
    axis: Axis,
    position_behavior: PositionBehavior,
    viewport_size: f64,
    overscan: usize,

    scroll_offset: f64,
    reason: ScrollChangeReason,
    is_scrolling: bool,
    scroll_direction: Option<ScrollDirection>,
    settle: SettleTimer,

    scroll_to_index: Option<usize>,
    scroll_to_alignment: Align,

    styles: StyleCache,
    rendered: Option<VisibleRange>,
    edges: Option<RenderEdges>,
}

impl ListController {
    /// Creates a controller and resolves its initial offset.
    ///
    /// An explicit `scroll_offset` wins; otherwise `scroll_to_index` is resolved with
    /// `scroll_to_alignment`; otherwise the list starts at `0`.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from construction or from resolving `scroll_to_index`.
    pub fn new(options: ControllerOptions) -> Result<Self, GeometryError> {
        let geometry = ListGeometry::new(options.geometry)?;
        let mut c = Self {
            geometry,
            axis: options.axis,
            position_behavior: options.position_behavior,
            viewport_size: options.viewport_size,
            overscan: options.overscan,
            scroll_offset: 0.0,
            reason: ScrollChangeReason::Requested,
            is_scrolling: false,
            scroll_direction: None,
            settle: SettleTimer::new(options.settle_delay_ms),
            scroll_to_index: options.scroll_to_index,
            scroll_to_alignment: options.scroll_to_alignment,
            styles: StyleCache::new(),
            rendered: None,
            edges: None,
        };

        if let Some(offset) = options.scroll_offset {
            c.apply_requested(c.clamp_offset(offset));
        } else {
            c.resolve_scroll_to_index()?;
        }
        vdebug!(
            item_count = c.geometry.item_count(),
            viewport_size = c.viewport_size,
            scroll_offset = c.scroll_offset,
            "ListController::new"
        );
        Ok(c)
    }

    pub fn geometry(&self) -> &ListGeometry {
        &self.geometry
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn position_behavior(&self) -> PositionBehavior {
        self.position_behavior
    }

    pub fn viewport_size(&self) -> f64 {
        self.viewport_size
    }

    pub fn overscan(&self) -> usize {
        self.overscan
    }

    pub fn scroll_offset(&self) -> f64 {
        self.scroll_offset
    }

    pub fn change_reason(&self) -> ScrollChangeReason {
        self.reason
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn scroll_direction(&self) -> Option<ScrollDirection> {
        self.scroll_direction
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling,
            reason: self.reason,
        }
    }

    pub fn settle_timer(&self) -> &SettleTimer {
        &self.settle
    }

    pub fn scroll_to_target(&self) -> Option<(usize, Align)> {
        self.scroll_to_index.map(|i| (i, self.scroll_to_alignment))
    }

    /// Edges of the last rendered slice, if anything was rendered.
    pub fn render_edges(&self) -> Option<RenderEdges> {
        self.edges
    }

    /// Predicted extent of the scroll content.
    pub fn content_size(&self) -> f64 {
        self.geometry.total_size()
    }

    /// Largest offset the surface can scroll to, based on the predicted content size.
    pub fn max_scroll_offset(&self) -> f64 {
        let max = self.content_size() - self.viewport_size;
        if max > 0.0 { max } else { 0.0 }
    }

    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_scroll_offset())
    }

    /// Records a new viewport extent. The last rendered slice no longer describes what is
    /// visible, so the next `on_scroll` asks for a render.
    pub fn on_viewport_size(&mut self, viewport_size: f64) {
        if self.viewport_size == viewport_size {
            return;
        }
        self.viewport_size = viewport_size;
        self.clear_rendered();
    }

    pub fn set_overscan(&mut self, overscan: usize) {
        if self.overscan == overscan {
            return;
        }
        self.overscan = overscan;
        self.clear_rendered();
    }

    pub fn set_position_behavior(&mut self, position_behavior: PositionBehavior) {
        self.position_behavior = position_behavior;
    }

    /// Changes the scroll axis; cached styles are rebuilt for the new axis.
    pub fn set_axis(&mut self, axis: Axis) {
        if self.axis == axis {
            return;
        }
        self.axis = axis;
        self.styles.clear();
    }

    pub fn set_settle_delay_ms(&mut self, delay_ms: u64) {
        self.settle.set_delay_ms(delay_ms);
    }

    /// Call this when the surface reports a scroll offset (wheel, drag, keyboard).
    ///
    /// Every call restarts the settle timer. Returns `true` when the host should re-render:
    /// offsets that are `NaN`, negative or unchanged while already scrolling are ignored, and
    /// offsets that stay inside the last rendered slice in the direction of motion are recorded
    /// without asking for a render.
    pub fn on_scroll(&mut self, offset: f64, now_ms: u64) -> bool {
        self.settle.arm(now_ms);
        let was_scrolling = self.is_scrolling;
        if offset.is_nan() || (was_scrolling && (offset < 0.0 || offset == self.scroll_offset)) {
            return false;
        }

        let direction = if offset < self.scroll_offset {
            ScrollDirection::Backward
        } else {
            ScrollDirection::Forward
        };
        self.scroll_offset = offset;
        self.reason = ScrollChangeReason::Observed;
        self.is_scrolling = true;
        self.scroll_direction = Some(direction);
        vtrace!(offset, now_ms, ?direction, "on_scroll");

        let within_rendered = was_scrolling
            && self.edges.is_some_and(|e| match direction {
                ScrollDirection::Forward => offset < e.top_edge,
                ScrollDirection::Backward => offset > e.bottom_edge,
            });
        !within_rendered
    }

    /// Advances the settle timer.
    ///
    /// Returns [`ScrollSettled`] once, when no scroll event arrived for the settle delay.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollSettled> {
        if !self.settle.poll(now_ms) {
            return None;
        }
        self.is_scrolling = false;
        self.scroll_direction = None;
        vtrace!(now_ms, "scroll settled");
        Some(ScrollSettled { at_ms: now_ms })
    }

    /// Ends the current scroll gesture without emitting [`ScrollSettled`].
    pub fn cancel_settle(&mut self) {
        self.settle.cancel();
        self.is_scrolling = false;
        self.scroll_direction = None;
    }

    /// Requests a scroll to `offset` and drops any `scroll_to_index` target.
    ///
    /// Returns the applied (clamped) offset.
    pub fn scroll_to_offset(&mut self, offset: f64) -> f64 {
        self.scroll_to_index = None;
        let offset = self.clamp_offset(offset);
        self.apply_requested(offset);
        offset
    }

    /// Requests a scroll that brings `index` into view with `align`.
    ///
    /// The target is remembered and re-applied when item properties change. Returns the applied
    /// (clamped) offset.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from resolving the target.
    pub fn scroll_to_index(&mut self, index: usize, align: Align) -> Result<f64, GeometryError> {
        self.scroll_to_index = Some(index);
        self.scroll_to_alignment = align;
        self.resolve_scroll_to_index()?;
        Ok(self.scroll_offset)
    }

    fn resolve_scroll_to_index(&mut self) -> Result<(), GeometryError> {
        let Some(index) = self.scroll_to_index else {
            return Ok(());
        };
        if self.geometry.item_count() == 0 {
            return Ok(());
        }
        let target = self.geometry.offset_for_index(
            index,
            self.scroll_to_alignment,
            self.viewport_size,
            self.scroll_offset,
        )?;
        let offset = self.clamp_offset(target);
        self.apply_requested(offset);
        Ok(())
    }

    fn apply_requested(&mut self, offset: f64) {
        if offset != self.scroll_offset {
            self.scroll_direction = Some(if offset < self.scroll_offset {
                ScrollDirection::Backward
            } else {
                ScrollDirection::Forward
            });
        }
        self.scroll_offset = offset;
        self.reason = ScrollChangeReason::Requested;
    }

    /// Changes the number of items.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from re-resolving a `scroll_to_index` target.
    pub fn set_item_count(&mut self, item_count: usize) -> Result<(), GeometryError> {
        if self.geometry.item_count() == item_count {
            return Ok(());
        }
        self.geometry.update_config(ConfigUpdate::item_count(item_count))?;
        self.item_props_changed()
    }

    /// Changes the estimate used for unmeasured items.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidConfig`] for a non-positive estimate.
    pub fn set_estimated_item_size(
        &mut self,
        estimated_item_size: f64,
    ) -> Result<(), GeometryError> {
        self.geometry
            .update_config(ConfigUpdate::estimated_item_size(estimated_item_size))?;
        self.item_props_changed()
    }

    /// Replaces the item size source.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from re-resolving a `scroll_to_index` target.
    pub fn set_item_size(&mut self, item_size: impl Into<ItemSize>) -> Result<(), GeometryError> {
        self.geometry.set_item_size(item_size);
        self.item_props_changed()
    }

    fn item_props_changed(&mut self) -> Result<(), GeometryError> {
        self.recompute_sizes(0);
        self.resolve_scroll_to_index()
    }

    /// Discards geometry at and after `start_index`, along with the styles derived from it.
    ///
    /// Call this when the sizes of items from `start_index` on have changed.
    pub fn recompute_sizes(&mut self, start_index: usize) {
        let start = start_index.min(self.geometry.item_count().saturating_sub(1));
        vdebug!(start, "recompute_sizes");
        self.geometry.reset_item(start);
        self.styles.invalidate_from(start);
        self.clear_rendered();
    }

    fn clear_rendered(&mut self) {
        self.rendered = None;
        self.edges = None;
    }

    /// Offset and size of the item at `index`.
    ///
    /// # Errors
    ///
    /// See [`ListGeometry::size_and_position`].
    pub fn item(&mut self, index: usize) -> Result<ItemMetadata, GeometryError> {
        self.geometry.size_and_position(index)
    }

    /// Cached placement of the item at `index`.
    ///
    /// # Errors
    ///
    /// See [`ListGeometry::size_and_position`].
    pub fn item_style(&mut self, index: usize) -> Result<ItemStyle, GeometryError> {
        let axis = self.axis;
        let geometry = &mut self.geometry;
        self.styles.get_or_try_insert_with(index, || {
            geometry
                .size_and_position(index)
                .map(|item| ItemStyle::new(axis, item))
        })
    }

    /// Computes the overscanned range to render for the current state and records its edges.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from measuring the range.
    pub fn render_range(&mut self) -> Result<VisibleRange, GeometryError> {
        let range = self
            .geometry
            .visible_range(self.viewport_size, self.scroll_offset, self.overscan)?;

        self.edges = match range.stop() {
            Some(stop) => {
                let next = (range.start_index + 1).min(stop);
                Some(RenderEdges {
                    top_edge: self.geometry.size_and_position(stop)?.offset - self.viewport_size,
                    bottom_edge: self.geometry.size_and_position(next)?.offset,
                })
            }
            None => None,
        };
        self.rendered = Some(range);
        Ok(range)
    }

    /// Offset to apply to the content wrapper for [`PositionBehavior::Relative`]: the offset of
    /// the first rendered item. Renders the current range first if nothing is rendered.
    ///
    /// Always `0.0` for [`PositionBehavior::Absolute`], where items carry their own position,
    /// and for an empty list.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from measuring the range.
    pub fn content_offset(&mut self) -> Result<f64, GeometryError> {
        if self.position_behavior == PositionBehavior::Absolute {
            return Ok(0.0);
        }
        let range = match self.rendered {
            Some(range) => range,
            None => self.render_range()?,
        };
        if range.is_empty() {
            return Ok(0.0);
        }
        Ok(self.geometry.size_and_position(range.start_index)?.offset)
    }

    /// Renders the current range: calls `f` with each index and its style, in order.
    ///
    /// With [`PositionBehavior::Relative`] no styles are computed and `f` receives `None`; the
    /// host places the items with [`Self::content_offset`] instead. Returns the rendered range.
    ///
    /// # Errors
    ///
    /// Propagates geometry errors from measuring the range.
    pub fn for_each_rendered_item(
        &mut self,
        mut f: impl FnMut(usize, Option<ItemStyle>),
    ) -> Result<VisibleRange, GeometryError> {
        let range = self.render_range()?;
        for index in range.indexes() {
            let style = match self.position_behavior {
                PositionBehavior::Absolute => Some(self.item_style(index)?),
                PositionBehavior::Relative => None,
            };
            f(index, style);
        }
        Ok(range)
    }
}
