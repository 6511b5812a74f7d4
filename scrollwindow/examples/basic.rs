// Example: fixed-height rows, the window at a few scroll positions.
use scrollwindow::{HeightSpec, compute_extents, resolve_key, resolve_window};

fn main() -> Result<(), scrollwindow::WindowError> {
    let height = HeightSpec::fixed(20.0);
    let count = 1_000_000;
    let extents = compute_extents(&height, count)?;
    println!("total_extent={}", extents.total_extent);

    for offset in [0.0, 205.0, 1_234_567.0, 1e12] {
        let w = resolve_window(offset, &height, count, 200.0)?;
        println!(
            "offset={offset} window={}..={} at {}px first_key={}",
            w.start_index,
            w.end_index,
            w.offset_pixels,
            resolve_key(w.start_index, None)
        );
    }
    Ok(())
}
