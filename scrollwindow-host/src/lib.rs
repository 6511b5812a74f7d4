//! Host-side controller for the `scrollwindow` crate.
//!
//! The `scrollwindow` crate is pure: it turns a scroll offset into a window of indexes. This
//! crate owns the pieces a host view needs around it, without binding to any UI framework:
//!
//! - The item collection and the list's scroll state
//! - Keyed visible items for the renderer
//! - Edge-triggered end-of-list notifications
//! - Continuation fetches with an in-flight guard, handed to the caller's executor
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod options;
mod trigger;
mod types;

#[cfg(test)]
mod tests;

pub use controller::ListController;
pub use options::{
    FetchFuture, FetchItemsCallback, InitialOffset, ListOptions, OnReachEndCallback,
};
pub use trigger::EndTrigger;
pub use types::{FetchResult, FetchTicket, PendingFetch, ScrollOutcome, VisibleItem};
