// Example: minimal usage and scroll-to helper.
use virtual_geometry::{Align, GeometryOptions, ListGeometry};

fn main() -> Result<(), virtual_geometry::GeometryError> {
    let mut g = ListGeometry::new(GeometryOptions::fixed(1_000_000, 20.0))?;

    let range = g.visible_range(600.0, 123_456.0, 3)?;
    println!("total_size={}", g.total_size());
    println!("visible_range={range:?}");
    println!("first_visible={:?}", g.size_and_position(range.start_index)?);

    let off = g.offset_for_index(999_999, Align::End, 600.0, 123_456.0)?;
    println!("offset_for_index(999_999, End)={off}");
    Ok(())
}
