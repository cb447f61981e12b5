use virtual_geometry::{GeometryError, GeometryOptions};
use virtual_geometry_adapter::{ControllerOptions, ListController, PositionBehavior};

fn main() -> Result<(), GeometryError> {
    // Example: relative positioning. Items flow in document order inside one wrapper, and only
    // the wrapper is moved; no per-item styles are computed.
    let mut c = ListController::new(
        ControllerOptions::new(GeometryOptions::fixed(10_000, 24.0), 480.0)
            .with_position_behavior(PositionBehavior::Relative),
    )?;

    for offset in [0.0, 1_000.0, 123_456.0] {
        c.scroll_to_offset(offset);
        let mut rows = Vec::new();
        let range = c.for_each_rendered_item(|index, _| rows.push(index))?;
        println!(
            "scroll={} content_offset={} rendered={range:?} ({} rows)",
            c.scroll_offset(),
            c.content_offset()?,
            rows.len()
        );
    }
    Ok(())
}
