/// The scroll axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

impl Axis {
    /// Name of the style property carrying an item's extent (`height` / `width`).
    pub fn size_prop(self) -> &'static str {
        match self {
            Self::Vertical => "height",
            Self::Horizontal => "width",
        }
    }

    /// Name of the style property carrying an item's offset (`top` / `left`).
    pub fn position_prop(self) -> &'static str {
        match self {
            Self::Vertical => "top",
            Self::Horizontal => "left",
        }
    }

    /// Name of the scroll property of the surface (`scrollTop` / `scrollLeft`).
    pub fn scroll_prop(self) -> &'static str {
        match self {
            Self::Vertical => "scrollTop",
            Self::Horizontal => "scrollLeft",
        }
    }
}

/// How rendered items are placed inside the scroll content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PositionBehavior {
    /// Every item is positioned on its own using its [`crate::ItemStyle`].
    #[default]
    Absolute,
    /// Items flow in order inside a wrapper shifted by
    /// [`crate::ListController::content_offset`]; no per-item styles are computed.
    Relative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Why the scroll offset last changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollChangeReason {
    /// The surface reported a scroll (wheel, drag, keyboard).
    Observed,
    /// The host asked for an offset; it still has to be written to the surface.
    #[default]
    Requested,
}

/// Emitted once when scrolling has been quiet for the settle delay.
///
/// This is the signal for dropping rendered output memoized while scrolling. It never
/// invalidates geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSettled {
    pub at_ms: u64,
}

/// Offsets bounding the last rendered slice.
///
/// While scrolling forward, offsets below `top_edge` stay within rendered items; while scrolling
/// backward, offsets above `bottom_edge` do.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderEdges {
    pub top_edge: f64,
    pub bottom_edge: f64,
}

/// A lightweight, serializable snapshot of the controller's scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub offset: f64,
    pub is_scrolling: bool,
    pub reason: ScrollChangeReason,
}
