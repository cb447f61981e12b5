use virtual_geometry::{Align, GeometryError, GeometryOptions};
use virtual_geometry_adapter::{CellCache, ControllerOptions, ListController};

fn main() -> Result<(), GeometryError> {
    // Example: a host loop driving a controller without holding any UI objects.
    //
    // A host would:
    // - forward scroll events to on_scroll(offset, now_ms) and re-render when it returns true
    // - call tick(now_ms) from a frame loop / timer and drop rendered cells once scrolling settles
    // - write offsets returned by scroll_to_* to the real scroll surface
    let sizes: Vec<f64> = (0..5_000).map(|i| 18.0 + f64::from(i % 7) * 4.0).collect();
    let mut c = ListController::new(
        ControllerOptions::new(GeometryOptions::from_sizes(sizes), 240.0)
            .with_scroll_to_index(120, Align::Center),
    )?;
    let mut cells: CellCache<String> = CellCache::new();

    render(&mut c, &mut cells)?;

    let mut now_ms = 0u64;
    for step in 1..=20 {
        now_ms += 16;
        let offset = c.scroll_offset() + 9.0;
        if c.on_scroll(offset, now_ms) {
            println!("t={now_ms} step={step} re-render at {offset}");
            render(&mut c, &mut cells)?;
        }
    }

    loop {
        now_ms += 16;
        if let Some(settled) = c.tick(now_ms) {
            println!("settled at {}ms, dropping {} cells", settled.at_ms, cells.len());
            cells.invalidate();
            break;
        }
    }

    let off = c.scroll_to_index(4_999, Align::End)?;
    println!("scroll_to_index(4_999, End) -> {off}");
    render(&mut c, &mut cells)?;
    Ok(())
}

fn render(c: &mut ListController, cells: &mut CellCache<String>) -> Result<(), GeometryError> {
    let range = c.for_each_rendered_item(|index, style| {
        cells.get_or_insert_with(index, |i| format!("row {i}"));
        if let Some(style) = style {
            if index % 4 == 0 {
                let [(pos_prop, pos), (size_prop, size)] = style.props();
                println!("  {index}: {pos_prop}={pos} {size_prop}={size}");
            }
        }
    })?;
    println!("rendered {range:?}, {} cells cached", cells.len());
    Ok(())
}
