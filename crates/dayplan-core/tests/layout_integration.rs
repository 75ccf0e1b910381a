//! Property tests for the overlap layout.
//!
//! Random start-sorted interval sets must never put two overlapping
//! intervals in the same column, and each group must use exactly as many
//! columns as its deepest point of overlap.

use dayplan_core::{assign_columns, color_group, group_by_overlap, Interval};
use proptest::prelude::*;
use std::ops::Range;

fn sorted_intervals() -> impl Strategy<Value = Vec<Range<i64>>> {
    prop::collection::vec((0i64..600, 1i64..120), 0..40).prop_map(|raw| {
        let mut items: Vec<Range<i64>> = raw
            .into_iter()
            .map(|(start, length)| start..start + length)
            .collect();
        items.sort_by_key(|r| r.start);
        items
    })
}

/// Largest number of intervals covering a single point.
fn max_depth(items: &[Range<i64>]) -> usize {
    items
        .iter()
        .map(|probe| items.iter().filter(|r| r.start <= probe.start && probe.start < r.end).count())
        .max()
        .unwrap_or(0)
}

#[test]
fn three_block_chain_uses_two_columns() {
    let items = vec![0..30, 10..40, 35..50];
    let placements = assign_columns(&items);
    let columns: Vec<usize> = placements.iter().map(|p| p.column_index).collect();
    assert_eq!(columns, vec![0, 1, 0]);
    assert!(placements.iter().all(|p| p.columns_count == 2));
}

#[test]
fn indirectly_linked_blocks_share_a_group() {
    let items = vec![0..10, 5..20, 15..25];
    assert_eq!(group_by_overlap(&items), vec![0..3]);
    let assignment = color_group(&items);
    assert_eq!(assignment.columns, vec![0, 1, 0]);
}

proptest! {
    #[test]
    fn overlapping_intervals_never_share_a_column(items in sorted_intervals()) {
        let placements = assign_columns(&items);
        prop_assert_eq!(placements.len(), items.len());

        for i in 0..items.len() {
            for j in i + 1..items.len() {
                if items[i].overlaps(&items[j]) {
                    prop_assert_ne!(placements[i].column_index, placements[j].column_index);
                }
            }
        }
    }

    #[test]
    fn columns_are_contiguous_and_minimal(items in sorted_intervals()) {
        for range in group_by_overlap(&items) {
            let group = &items[range];
            let assignment = color_group(group);

            let mut used: Vec<usize> = assignment.columns.clone();
            used.sort_unstable();
            used.dedup();
            prop_assert_eq!(used, (0..assignment.columns_count).collect::<Vec<_>>());
            prop_assert_eq!(assignment.columns_count, max_depth(group));
        }
    }

    #[test]
    fn groups_partition_the_input(items in sorted_intervals()) {
        let groups = group_by_overlap(&items);
        let mut next = 0;
        for range in &groups {
            prop_assert_eq!(range.start, next);
            prop_assert!(range.end > range.start);
            next = range.end;
        }
        prop_assert_eq!(next, items.len());

        // Consecutive groups are separated by a gap.
        for pair in groups.windows(2) {
            let reach = items[pair[0].clone()].iter().map(|r| r.end).max().unwrap();
            prop_assert!(items[pair[1].start].start >= reach);
        }
    }
}
