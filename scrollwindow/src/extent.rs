use crate::error::{Result, check_item_height};
use crate::{Extents, HeightSpec, PrefixSums};

/// Summed height of the first `number_of_items` rows.
///
/// `O(1)` for [`HeightSpec::Fixed`]; `O(n)` for [`HeightSpec::Variable`]. Lists with many
/// variable rows should keep a [`PrefixSums`] instead of calling this every frame.
pub fn total_extent(height: &HeightSpec, number_of_items: usize) -> Result<f64> {
    match height {
        HeightSpec::Fixed(h) => {
            height.validate()?;
            Ok(*h * number_of_items as f64)
        }
        HeightSpec::Variable(f) => (0..number_of_items)
            .try_fold(0.0, |acc, i| Ok(acc + check_item_height(i, f(i))?)),
    }
}

/// Computes both extents for a list.
///
/// The viewport extent is `height(0) * number_of_items` whatever the shape of `height`, so it
/// only equals the total extent when every row is as tall as the first one. A variable height
/// function is never called when the list is empty.
pub fn compute_extents(height: &HeightSpec, number_of_items: usize) -> Result<Extents> {
    let total_extent = total_extent(height, number_of_items)?;
    let viewport_extent = if number_of_items == 0 {
        0.0
    } else {
        height.unit_height()? * number_of_items as f64
    };
    wtrace!(
        number_of_items,
        total_extent,
        viewport_extent,
        "compute_extents"
    );
    Ok(Extents {
        total_extent,
        viewport_extent,
    })
}

/// Extents derived from measured cumulative heights; the viewport covers the full content.
pub fn measured_extents(sums: &PrefixSums) -> Extents {
    let total_extent = sums.total();
    Extents {
        total_extent,
        viewport_extent: total_extent,
    }
}
