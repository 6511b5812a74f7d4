use core::ops::Range;

/// The two extents a host needs to size its scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extents {
    /// Inner scrollable extent: the summed height of every item.
    pub total_extent: f64,
    /// Outer container extent.
    pub viewport_extent: f64,
}

/// Which model the resolver uses to map offsets to indexes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolveMode {
    /// Treat every row as if it had the height of item 0, for the viewport extent as well as
    /// the start/end index math. Exact for fixed heights.
    #[default]
    Uniform,
    /// Use the true cumulative heights (see [`crate::PrefixSums`]). The default viewport
    /// extent becomes the true total extent.
    Measured,
}

/// The contiguous run of items to materialize for the current scroll position.
///
/// `end_index` is inclusive. An empty window has `start_index == end_index == 0` and
/// [`WindowResult::is_empty`] returns `true`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowResult {
    pub start_index: usize,
    pub end_index: usize,
    /// Where the first windowed item must be placed inside the scrollable content.
    pub offset_pixels: f64,
    len: usize,
}

impl WindowResult {
    pub(crate) fn new(start_index: usize, end_index: usize, offset_pixels: f64) -> Self {
        debug_assert!(start_index <= end_index, "window start after end");
        Self {
            start_index,
            end_index,
            offset_pixels,
            len: end_index - start_index + 1,
        }
    }

    pub const fn empty() -> Self {
        Self {
            start_index: 0,
            end_index: 0,
            offset_pixels: 0.0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of items in the window.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The windowed indexes as a half-open range, suitable for slicing.
    pub fn indices(&self) -> Range<usize> {
        self.start_index..self.start_index + self.len
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

impl Default for WindowResult {
    fn default() -> Self {
        Self::empty()
    }
}
