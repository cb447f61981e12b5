// Example: geometry diagnostics through `tracing`.
//
// Run with: RUST_LOG=virtual_geometry=trace cargo run --example traced_scroll --features tracing
use tracing_subscriber::EnvFilter;
use virtual_geometry::{ConfigUpdate, GeometryOptions, ListGeometry};

fn main() -> Result<(), virtual_geometry::GeometryError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("virtual_geometry=debug")),
        )
        .init();

    let mut g = ListGeometry::new(GeometryOptions::from_fn(5_000, |i| (i % 9 + 12) as f64))?;
    for offset in [0.0, 800.0, 20_000.0, 400.0] {
        let range = g.visible_range(300.0, offset, 3)?;
        println!("offset={offset} range={range:?}");
    }

    g.update_config(ConfigUpdate::item_count(6_000).with_estimated_item_size(16.0))?;
    g.reset_item(1_000);
    println!("total_size={}", g.total_size());

    if let Err(err) = g.update_config(ConfigUpdate::estimated_item_size(0.0)) {
        println!("rejected: {err}");
    }
    Ok(())
}
