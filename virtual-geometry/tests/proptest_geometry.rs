//! Property-based invariant tests for the list geometry engine.
//!
//! These hold for any list of positive item sizes, any warm-up order and any query:
//!
//! 1. Offsets accumulate: `offset[i] == offset[i-1] + size[i-1]`, `offset[0] == 0`.
//! 2. Resets keep the prefix before the reset index untouched.
//! 3. The predicted total never shrinks while items at least as large as the estimate are
//!    measured.
//! 4. The visible range (no overscan) contains the query window.
//! 5. Results do not depend on how much of the list was measured beforehand.
//! 6. Start/end alignment is exact.

use proptest::prelude::*;
use virtual_geometry::{Align, GeometryOptions, ItemMetadata, ListGeometry};

// ── Helpers ─────────────────────────────────────────────────────────────

// Integral sizes keep float sums exact.
fn sizes_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((1u32..=64).prop_map(f64::from), 1..=max_len)
}

fn geometry(sizes: &[f64]) -> ListGeometry {
    ListGeometry::new(GeometryOptions::from_sizes(sizes.to_vec())).unwrap()
}

fn prefix_offsets(sizes: &[f64]) -> Vec<f64> {
    sizes
        .iter()
        .scan(0.0, |acc, &s| {
            let off = *acc;
            *acc += s;
            Some(off)
        })
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Offset accumulation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_accumulate(sizes in sizes_strategy(200), probe in any::<prop::sample::Index>()) {
        let mut g = geometry(&sizes);
        let index = probe.index(sizes.len());
        g.ensure_measured(index).unwrap();

        let measured = g.cache().measured();
        prop_assert_eq!(measured.len(), index + 1);
        prop_assert_eq!(measured[0].offset, 0.0);
        for i in 1..measured.len() {
            prop_assert_eq!(measured[i].offset, measured[i - 1].offset + measured[i - 1].size);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Reset monotonicity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_keeps_prefix(
        sizes in sizes_strategy(120),
        warm in any::<prop::sample::Index>(),
        reset in any::<prop::sample::Index>(),
    ) {
        let mut g = geometry(&sizes);
        g.ensure_measured(warm.index(sizes.len())).unwrap();
        let before: Vec<ItemMetadata> = g.cache().measured().to_vec();
        let last_before = g.last_measured_index();

        let k = reset.index(sizes.len());
        g.reset_item(k);

        let kept = before.len().min(k);
        prop_assert_eq!(g.cache().measured(), &before[..kept]);
        let expected_last = match (k.checked_sub(1), last_before) {
            (Some(a), Some(b)) => Some(a.min(b)),
            _ => None,
        };
        prop_assert_eq!(g.last_measured_index(), expected_last);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Total size floor
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_size_never_shrinks_while_measuring(
        extra in proptest::collection::vec(0u32..=32, 1..=150),
        estimate in 1u32..=16,
    ) {
        let estimate = f64::from(estimate);
        let sizes: Vec<f64> = extra.iter().map(|&e| estimate + f64::from(e)).collect();
        let mut g = ListGeometry::new(
            GeometryOptions::from_sizes(sizes.clone()).with_estimated_item_size(estimate),
        )
        .unwrap();

        let mut prev = g.total_size();
        for i in 0..sizes.len() {
            g.ensure_measured(i).unwrap();
            let total = g.total_size();
            prop_assert!(total >= prev, "total shrank at {}: {} -> {}", i, prev, total);
            prev = total;
        }
        prop_assert_eq!(prev, sizes.iter().sum::<f64>());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Range containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_range_contains_window(
        sizes in sizes_strategy(300),
        offset_frac in 0.0f64..1.0,
        container in 1u32..=400,
        warm in any::<prop::sample::Index>(),
    ) {
        let total: f64 = sizes.iter().sum();
        let offsets = prefix_offsets(&sizes);
        let offset = (offset_frac * total).floor();
        let container = f64::from(container);

        let mut g = geometry(&sizes);
        g.ensure_measured(warm.index(sizes.len())).unwrap();
        let r = g.visible_range(container, offset, 0).unwrap();
        let start = r.start_index;
        let stop = r.stop().unwrap();

        prop_assert!(start <= stop);
        prop_assert!(offsets[start] <= offset && offset < offsets[start] + sizes[start]);
        let window_end = offset + container;
        if window_end <= total {
            prop_assert!(offsets[stop] < window_end);
            prop_assert!(window_end <= offsets[stop] + sizes[stop]);
        } else {
            prop_assert_eq!(stop, sizes.len() - 1);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Warm-up independence and overscan clamping
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn range_is_independent_of_measured_prefix(
        sizes in sizes_strategy(200),
        offset in 0u32..=4_000,
        container in 0u32..=300,
        overscan in 0usize..=8,
        warm in any::<prop::sample::Index>(),
    ) {
        let (offset, container) = (f64::from(offset), f64::from(container));

        let mut cold = geometry(&sizes);
        let mut warm_g = geometry(&sizes);
        warm_g.ensure_measured(warm.index(sizes.len())).unwrap();

        let a = cold.visible_range(container, offset, overscan).unwrap();
        let b = warm_g.visible_range(container, offset, overscan).unwrap();
        prop_assert_eq!(a, b);
        prop_assert!(a.end_index <= sizes.len());
        prop_assert!(!a.is_empty());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Alignment exactness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn start_and_end_alignment_are_exact(
        sizes in sizes_strategy(150),
        target in any::<prop::sample::Index>(),
        container in 1u32..=500,
        current in 0u32..=5_000,
    ) {
        let offsets = prefix_offsets(&sizes);
        let i = target.index(sizes.len());
        let c = f64::from(container);
        let current = f64::from(current);
        let mut g = geometry(&sizes);

        prop_assert_eq!(g.offset_for_index(i, Align::Start, c, current).unwrap(), offsets[i]);
        prop_assert_eq!(
            g.offset_for_index(i, Align::End, c, current).unwrap(),
            offsets[i] - c + sizes[i]
        );

        let auto = g.offset_for_index(i, Align::Auto, c, current).unwrap();
        let fully_visible = offsets[i] >= current && offsets[i] + sizes[i] <= current + c;
        if fully_visible {
            prop_assert_eq!(auto, current);
        } else if offsets[i] < current {
            prop_assert_eq!(auto, offsets[i]);
        } else {
            prop_assert_eq!(auto, offsets[i] - c + sizes[i]);
        }
    }
}
