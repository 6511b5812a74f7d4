// Example: uniform (first-row) math vs measured prefix sums for variable rows.
use scrollwindow::{
    HeightSpec, PrefixSums, compute_extents, resolve_window, resolve_window_measured,
};

fn main() -> Result<(), scrollwindow::WindowError> {
    let height = HeightSpec::variable(|i| if i % 10 == 0 { 60.0 } else { 20.0 });
    let count = 10_000;

    let extents = compute_extents(&height, count)?;
    println!(
        "total_extent={} viewport_extent(first-row model)={}",
        extents.total_extent, extents.viewport_extent
    );

    let mut sums = PrefixSums::from_spec(&height, count)?;
    for offset in [0.0, 500.0, 5_000.0] {
        let uniform = resolve_window(offset, &height, count, 300.0)?;
        let measured = resolve_window_measured(offset, &sums, 300.0)?;
        println!("offset={offset} uniform={uniform:?}");
        println!("offset={offset} measured={measured:?}");
    }

    // Feed a measurement back and append a page.
    sums.set_height(3, 45.0)?;
    sums.extend_from_spec(&height, count + 100)?;
    println!("after update: rows={} total={}", sums.len(), sums.total());
    Ok(())
}
