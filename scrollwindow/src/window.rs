use crate::error::{Result, check_scroll_offset, check_viewport_extent};
use crate::{HeightSpec, PrefixSums, WindowResult};

/// Resolves the window for `scroll_offset` treating every row as `height.unit_height()` tall.
///
/// The window starts at the row under `scroll_offset` and ends (inclusive) at the row under
/// `scroll_offset + viewport_extent`, so a viewport that exactly fits `k` rows yields `k + 1`
/// items. Both ends are clamped to `0..number_of_items`; an empty list yields
/// [`WindowResult::empty`]. A fixed height is validated even when the list is empty, as in
/// [`crate::compute_extents`].
///
/// Negative or non-finite offsets are rejected with
/// [`crate::WindowError::InvalidScrollPosition`].
pub fn resolve_window(
    scroll_offset: f64,
    height: &HeightSpec,
    number_of_items: usize,
    viewport_extent: f64,
) -> Result<WindowResult> {
    let scroll_offset = check_scroll_offset(scroll_offset)?;
    let viewport_extent = check_viewport_extent(viewport_extent)?;
    height.validate()?;
    if number_of_items == 0 {
        return Ok(WindowResult::empty());
    }

    let unit = height.unit_height()?;
    let last = number_of_items - 1;

    let start_index = row_at(scroll_offset, unit).min(last);
    let end_index = row_at(scroll_offset + viewport_extent, unit)
        .min(last)
        .max(start_index);

    wtrace!(
        scroll_offset,
        viewport_extent,
        start_index,
        end_index,
        "resolve_window"
    );
    Ok(WindowResult::new(
        start_index,
        end_index,
        unit * start_index as f64,
    ))
}

/// Resolves the window for `scroll_offset` using true cumulative row heights.
///
/// Same boundary rules as [`resolve_window`], but `offset_pixels` is the summed height of the
/// rows before `start_index`.
pub fn resolve_window_measured(
    scroll_offset: f64,
    sums: &PrefixSums,
    viewport_extent: f64,
) -> Result<WindowResult> {
    let scroll_offset = check_scroll_offset(scroll_offset)?;
    let viewport_extent = check_viewport_extent(viewport_extent)?;
    let Some(start_index) = sums.index_at_offset(scroll_offset) else {
        return Ok(WindowResult::empty());
    };
    let end_index = sums
        .index_at_offset(scroll_offset + viewport_extent)
        .unwrap_or(start_index)
        .max(start_index);

    wtrace!(
        scroll_offset,
        viewport_extent,
        start_index,
        end_index,
        "resolve_window_measured"
    );
    Ok(WindowResult::new(
        start_index,
        end_index,
        sums.prefix_sum(start_index),
    ))
}

// Offsets are validated non-negative, so truncation is floor; the cast saturates.
fn row_at(offset: f64, unit: f64) -> usize {
    (offset / unit) as usize
}
