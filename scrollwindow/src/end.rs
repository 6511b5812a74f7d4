/// Default tolerance for [`reached_end`], in the list's coordinate space.
pub const DEFAULT_END_EPSILON: f64 = 1.0;

/// Live measurements of the host's scroll container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_offset: f64,
    pub viewport_extent: f64,
    /// Full scrollable height of the content.
    pub content_extent: f64,
}

impl ScrollMetrics {
    /// Distance left to scroll before the viewport's bottom edge meets the content's.
    pub fn remaining(&self) -> f64 {
        self.content_extent - self.scroll_offset - self.viewport_extent
    }
}

/// Returns `true` when the viewport's bottom edge is within `epsilon` of the content's end.
///
/// Overscrolled positions count as reached. Content with no extent never reaches its end.
pub fn reached_end(metrics: ScrollMetrics, epsilon: f64) -> bool {
    metrics.content_extent > 0.0 && metrics.remaining() <= epsilon.max(0.0)
}
