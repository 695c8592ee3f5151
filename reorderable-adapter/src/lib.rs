//! Async adapter utilities for the `reorderable` crate.
//!
//! `reorderable` is synchronous and UI-agnostic: it computes scroll requests and animation values
//! but never applies them. This crate provides the pieces an async host usually needs:
//!
//! - A single-slot, latest-wins scroll request channel and the loop that applies it
//!   ([`scroll_channel`], [`run_auto_scroll`])
//! - A [`Controller`] that publishes scroll requests as the drag progresses
//! - A timer-driven cancelled-drag animation ([`animate`])
//!
//! Scrolling itself is behind the [`ScrollHost`] trait; no UI framework is assumed.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod animate;
mod controller;
mod scroll;


pub use animate::{FRAME_INTERVAL, animate, animate_with_interval};
pub use controller::Controller;
pub use scroll::{
    ScrollHost, ScrollLoopError, ScrollReceiver, ScrollSender, apply_anchor, run_auto_scroll,
    scroll_channel,
};
