//! A headless drag-to-reorder engine for virtualized lists.
//!
//! Given a continuous drag position, the engine:
//! - finds which rendered item the dragged item hovers over,
//! - asks the host to reorder its data when that item changes,
//! - requests auto-scroll when the dragged item crosses a viewport edge,
//! - animates the item back to rest when the drag is cancelled.
//!
//! It is UI-agnostic. A host list adapter is expected to provide, on every call:
//! - the currently visible items with their main-axis offsets and sizes ([`ListLayout`])
//! - orientation, reverse-layout and right-to-left flags
//! - frame time for the cancelled-drag animation (`now_ms`)
//!
//! The engine returns scroll deltas and anchor requests; applying them is up to the adapter. For
//! an async scroll applier, see the `reorderable-adapter` crate.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod animation;
mod autoscroll;
mod error;
mod geometry;
mod layout;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use animation::{DragCancelledAnimation, Easing, ReturnAnimation, SpringSpec, TweenSpec};
pub use autoscroll::AutoScroll;
pub use error::{BoxError, ReorderError};
pub use geometry::{Geometry, ItemBounds};
pub use hit_test::HitTester;
pub use layout::{LayoutSnapshot, ListLayout};
pub use options::{
    CanDragOver, DEFAULT_MAX_SCROLL_PER_FRAME, OnDragEnd, OnDragStart, OnMove, OnReturnFinished,
    ReorderOptions,
};
pub use state::{AnimationTick, DragEnd, DragPhase, DragSession, ReorderState};
pub use types::{
    DragOutcome, ItemPosition, Offset, Orientation, ScrollAnchor, ScrollRequest, Viewport,
    VisibleItem,
};
