//! Host-side utilities for the `virtual-geometry` crate.
//!
//! The `virtual-geometry` crate is UI-agnostic and only answers geometry questions. This crate
//! provides the small, framework-neutral pieces a host layer builds around it:
//!
//! - A scroll controller tracking the live offset, the reason it last changed and a remembered
//!   scroll-to target
//! - An explicit, cancellable settle timer for "scroll ended" detection
//! - Per-instance caches for item styles and rendered output, each with its own invalidation
//!
//! This crate is intentionally framework-agnostic (no DOM or widget bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cells;
mod controller;
mod key;
mod options;
mod settle;
mod style;
mod types;


pub use cells::CellCache;
pub use controller::ListController;
pub use options::{ControllerOptions, DEFAULT_OVERSCAN};
pub use settle::{DEFAULT_SETTLE_DELAY_MS, SettleTimer};
pub use style::{ItemStyle, StyleCache};
pub use types::{
    Axis, PositionBehavior, RenderEdges, ScrollChangeReason, ScrollDirection, ScrollSettled,
    ScrollState,
};
