use crate::Align;
use crate::cache::MeasurementCache;
use crate::error::{GeometryError, Result};

/// Computes the scroll offset that places `target_index` according to `align`.
///
/// `target_index` is clamped to the last item. The returned offset is not clamped to the
/// scrollable extent: it may be negative or past the end, and the consumer applying it to a
/// real surface clamps against the live rendered extent.
pub(crate) fn offset_for_index(
    cache: &mut MeasurementCache,
    target_index: usize,
    align: Align,
    container_size: f64,
    current_offset: f64,
) -> Result<f64> {
    let count = cache.item_count();
    if count == 0 {
        return Err(GeometryError::IndexOutOfRange {
            index: target_index,
            item_count: 0,
        });
    }

    let index = target_index.min(count - 1);
    let item = cache.size_and_position(index)?;

    let start = item.offset;
    let end = item.offset - container_size + item.size;
    let target = match align {
        Align::Start => start,
        Align::End => end,
        Align::Center => item.offset - (container_size - item.size) / 2.0,
        Align::Auto => {
            if item.offset >= current_offset && item.end() <= current_offset + container_size {
                current_offset
            } else if item.offset < current_offset {
                start
            } else {
                end
            }
        }
    };

    vtrace!(index, ?align, target, "offset_for_index");
    Ok(target)
}
