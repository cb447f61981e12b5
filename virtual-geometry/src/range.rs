use crate::VisibleRange;
use crate::cache::MeasurementCache;
use crate::error::Result;

/// Finds the first item whose interval `[offset, offset + size)` ends past `offset`.
///
/// The measured prefix is binary searched. When `offset` lies past it, measurement is extended
/// one item at a time; a full-range binary search is never attempted over unmeasured indexes.
/// When the list is exhausted the last item is returned.
///
/// `cache.item_count()` must be non-zero.
pub(crate) fn find_start(cache: &mut MeasurementCache, offset: f64) -> Result<usize> {
    let count = cache.item_count();
    debug_assert!(count > 0, "find_start on an empty list");

    if offset.is_nan() || offset <= 0.0 {
        return Ok(0);
    }

    let last = cache.last_measured();
    if cache.last_measured_index().is_some() && last.end() > offset {
        return Ok(cache.measured().partition_point(|m| m.end() <= offset));
    }

    let remaining = offset - last.end();
    let unmeasured = count - cache.measured_len();
    cache.reserve(cache.estimator().items_to_cover(remaining).min(unmeasured));
    vtrace!(
        offset,
        measured = cache.measured_len(),
        "find_start: extending past measured prefix"
    );

    loop {
        let next = cache.measured_len();
        if next == count {
            return Ok(count - 1);
        }
        if cache.size_and_position(next)?.end() > offset {
            return Ok(next);
        }
    }
}

/// Computes the inclusive index range covering `[offset, offset + container_size)`, widened by
/// `overscan` items on each side.
///
/// A non-positive `container_size` is treated as a viewport holding a single item.
pub(crate) fn visible_range(
    cache: &mut MeasurementCache,
    container_size: f64,
    offset: f64,
    overscan: usize,
) -> Result<VisibleRange> {
    let count = cache.item_count();
    if count == 0 {
        return Ok(VisibleRange::EMPTY);
    }

    let start = find_start(cache, offset)?;
    let mut stop = start;
    let mut item = cache.size_and_position(start)?;
    if container_size > 0.0 {
        let max_offset = offset + container_size;
        while item.end() < max_offset && stop + 1 < count {
            stop += 1;
            item = cache.size_and_position(stop)?;
        }
    }

    let first = start.saturating_sub(overscan);
    let last = stop.saturating_add(overscan).min(count - 1);
    vtrace!(
        container_size,
        offset,
        overscan,
        start,
        stop,
        "visible_range"
    );
    Ok(VisibleRange::inclusive(first, last))
}
