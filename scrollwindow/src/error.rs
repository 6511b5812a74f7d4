use core::fmt;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = WindowError> = core::result::Result<T, E>;

/// Which input a [`WindowError::InvalidDimension`] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dimension {
    /// The height reported for the item at `index`.
    ItemHeight { index: usize },
    /// The viewport extent passed to a resolver.
    ViewportExtent,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ItemHeight { index } => write!(f, "height of item {index}"),
            Self::ViewportExtent => f.write_str("viewport extent"),
        }
    }
}

/// Validation failures on the inputs of the windowing functions.
///
/// All of these are local to a single call; nothing is retried or defaulted.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum WindowError {
    /// A height was non-positive or non-finite, or a viewport extent was negative or
    /// non-finite.
    #[error("invalid {what}: {value}")]
    InvalidDimension { what: Dimension, value: f64 },
    /// The scroll offset was negative or non-finite.
    #[error("invalid scroll position: {offset}")]
    InvalidScrollPosition { offset: f64 },
}

pub(crate) fn check_item_height(index: usize, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        wwarn!(index, value, "rejecting item height");
        Err(WindowError::InvalidDimension {
            what: Dimension::ItemHeight { index },
            value,
        })
    }
}

pub(crate) fn check_viewport_extent(value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(WindowError::InvalidDimension {
            what: Dimension::ViewportExtent,
            value,
        })
    }
}

pub(crate) fn check_scroll_offset(offset: f64) -> Result<f64> {
    if offset.is_finite() && offset >= 0.0 {
        Ok(offset)
    } else {
        wwarn!(offset, "rejecting scroll offset");
        Err(WindowError::InvalidScrollPosition { offset })
    }
}
