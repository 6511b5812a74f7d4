//! Headless windowing for long scrollable lists.
//!
//! For the host-side controller (scroll state ownership, keyed visible items, continuation
//! fetches), see the `scrollwindow-host` crate.
//!
//! Given an item count, a row height (fixed or per index) and a scroll offset, this crate
//! computes which contiguous run of items has to be materialized and where to place it, so a
//! renderer only ever builds the handful of rows that are on screen.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll offset, once per scroll event
//! - the viewport size, or accept the one derived by [`compute_extents`]
//! - row heights via [`HeightSpec`]
//!
//! ```rust
//! use scrollwindow::{HeightSpec, compute_extents, resolve_window};
//!
//! let height = HeightSpec::fixed(20.0);
//! let extents = compute_extents(&height, 100).unwrap();
//! assert_eq!(extents.total_extent, 2000.0);
//!
//! let window = resolve_window(205.0, &height, 100, 200.0).unwrap();
//! assert_eq!(window.start_index, 10);
//! assert_eq!(window.offset_pixels, 200.0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod end;
mod error;
mod extent;
mod height;
mod key;
mod prefix;
mod state;
mod types;
mod window;


#[doc(hidden)]
pub mod __private {
    #[cfg(feature = "tracing")]
    pub use tracing;
}

pub use end::{DEFAULT_END_EPSILON, ScrollMetrics, reached_end};
pub use error::{Dimension, Result, WindowError};
pub use extent::{compute_extents, measured_extents, total_extent};
pub use height::{HeightFn, HeightSpec};
pub use key::{KeyFn, resolve_key};
pub use prefix::PrefixSums;
pub use state::{ScrollSnapshot, ViewportState};
pub use types::{Extents, ResolveMode, WindowResult};
pub use window::{resolve_window, resolve_window_measured};
