// Example: lazily measured variable sizes, estimates and partial invalidation.
use virtual_geometry::{Align, GeometryOptions, ListGeometry};

fn main() -> Result<(), virtual_geometry::GeometryError> {
    let sizes: Vec<f64> = (0..10_000).map(|i| 20.0 + (i % 4) as f64 * 10.0).collect();
    let mut g = ListGeometry::new(GeometryOptions::from_sizes(sizes).with_estimated_item_size(30.0))?;

    // Nothing is measured yet: the total is a prediction from the estimate.
    println!(
        "before: measured={:?} total={}",
        g.last_measured_index(),
        g.total_size()
    );

    // Querying a range measures only as far as the viewport reaches.
    let range = g.visible_range(400.0, 12_000.0, 2)?;
    println!(
        "range={range:?} measured={:?} total={}",
        g.last_measured_index(),
        g.total_size()
    );

    // Item 100 and everything after it changed size.
    g.set_item_size(virtual_geometry::ItemSize::from_fn(|i| {
        if i >= 100 { 60.0 } else { 20.0 + (i % 4) as f64 * 10.0 }
    }));
    g.reset_item(100);
    println!(
        "after reset: measured={:?} item100={:?}",
        g.last_measured_index(),
        g.size_and_position(100)?
    );

    let to = g.offset_for_index(500, Align::Center, 400.0, 0.0)?;
    println!("center item 500 at offset {to}");
    Ok(())
}
