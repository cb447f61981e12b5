use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use virtual_geometry::{GeometryError, GeometryOptions};
use virtual_geometry_adapter::{ControllerOptions, ListController};

fn main() -> Result<(), GeometryError> {
    // Example: an item grows after its content loads; the host asks for sizes to be recomputed
    // from that index on.
    let expanded = Arc::new(AtomicU32::new(u32::MAX));
    let sizes = Arc::clone(&expanded);
    let mut c = ListController::new(
        ControllerOptions::new(
            GeometryOptions::from_fn(200, move |i| {
                if i as u32 == sizes.load(Ordering::Relaxed) { 120.0 } else { 30.0 }
            })
            .with_estimated_item_size(30.0),
            300.0,
        )
        .with_overscan(2),
    )?;

    println!("before: item 6 at {:?}", c.item_style(6)?);
    println!("before: content_size={}", c.content_size());

    expanded.store(4, Ordering::Relaxed);
    c.recompute_sizes(4);

    println!("after: item 4 is {:?}", c.item(4)?);
    println!("after: item 6 at {:?}", c.item_style(6)?);
    println!("after: render_range={:?}", c.render_range()?);
    println!("after: content_size={}", c.content_size());
    Ok(())
}
