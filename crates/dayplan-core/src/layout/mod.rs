//! Overlap layout: column assignment for time-overlapping blocks.
//!
//! Works in two passes over a start-sorted sequence:
//! 1. [`group_by_overlap`] cuts the sequence into maximal groups at gaps.
//! 2. [`color_group`] greedily assigns each interval of a group the
//!    leftmost free column, opening a new column only when none is free.
//!
//! The greedy pass uses the minimum number of columns for each group.

mod geometry;

pub use geometry::{BlockRect, HourTick, RenderMetrics};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::ValidationError;
use crate::timeline::TimelineBlock;

/// Half-open time range `[start, end)`.
pub trait Interval {
    type Point: Ord + Copy;

    fn start(&self) -> Self::Point;
    fn end(&self) -> Self::Point;

    fn overlaps<O>(&self, other: &O) -> bool
    where
        O: Interval<Point = Self::Point>,
    {
        self.start() < other.end() && other.start() < self.end()
    }
}

impl<T: Ord + Copy> Interval for Range<T> {
    type Point = T;

    fn start(&self) -> T {
        self.start
    }

    fn end(&self) -> T {
        self.end
    }
}

impl Interval for TimelineBlock {
    type Point = NaiveDateTime;

    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

/// Column assignment for one overlap group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnAssignment {
    /// Column of each interval, in input order.
    pub columns: Vec<usize>,
    pub columns_count: usize,
}

/// Column placement of a single interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub column_index: usize,
    pub columns_count: usize,
}

/// A timeline block annotated with its column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaidOutBlock {
    #[serde(flatten)]
    pub block: TimelineBlock,
    pub column_index: usize,
    pub columns_count: usize,
}

/// Check the layout precondition: every interval ends after it starts.
pub fn check_intervals<I: Interval>(items: &[I]) -> Result<(), ValidationError> {
    match items.iter().position(|item| item.start() >= item.end()) {
        Some(index) => Err(ValidationError::MalformedInterval { index }),
        None => Ok(()),
    }
}

/// Partition start-sorted intervals into maximal overlap groups.
///
/// An interval joins the current group when it starts before the furthest
/// end seen so far in that group. Intervals linked only through a third one
/// still share a group.
pub fn group_by_overlap<I: Interval>(items: &[I]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut i = 0;

    while i < items.len() {
        let mut group_end = items[i].end();
        let mut j = i + 1;
        while j < items.len() && items[j].start() < group_end {
            group_end = group_end.max(items[j].end());
            j += 1;
        }
        groups.push(i..j);
        i = j;
    }

    groups
}

/// Greedy column coloring of one start-sorted group.
///
/// Each column remembers the end of its last interval; an interval goes to
/// the first column whose end is at or before its start.
pub fn color_group<I: Interval>(group: &[I]) -> ColumnAssignment {
    let mut column_ends: Vec<I::Point> = Vec::new();

    let columns: Vec<usize> = group
        .iter()
        .map(|item| match column_ends.iter().position(|&end| end <= item.start()) {
            Some(column) => {
                column_ends[column] = item.end();
                column
            }
            None => {
                column_ends.push(item.end());
                column_ends.len() - 1
            }
        })
        .collect();

    ColumnAssignment {
        columns,
        columns_count: column_ends.len(),
    }
}

/// Column placement for every interval of a start-sorted sequence.
pub fn assign_columns<I: Interval>(items: &[I]) -> Vec<Placement> {
    debug_assert!(check_intervals(items).is_ok(), "malformed interval");

    group_by_overlap(items)
        .into_iter()
        .flat_map(|range| {
            let assignment = color_group(&items[range]);
            let columns_count = assignment.columns_count;
            assignment
                .columns
                .into_iter()
                .map(move |column_index| Placement {
                    column_index,
                    columns_count,
                })
        })
        .collect()
}

/// Lay out a timeline for side-by-side rendering.
///
/// Blocks are sorted by start, then end (stable) before grouping.
pub fn layout(mut blocks: Vec<TimelineBlock>) -> Vec<LaidOutBlock> {
    blocks.sort_by_key(|block| (block.start, block.end));
    let placements = assign_columns(&blocks);

    let laid_out: Vec<LaidOutBlock> = blocks
        .into_iter()
        .zip(placements)
        .map(|(block, placement)| LaidOutBlock {
            block,
            column_index: placement.column_index,
            columns_count: placement.columns_count,
        })
        .collect();

    tracing::debug!(
        blocks = laid_out.len(),
        max_columns = laid_out.iter().map(|b| b.columns_count).max().unwrap_or(0),
        "laid out timeline"
    );
    laid_out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_split_at_gaps() {
        let items = vec![0..10, 5..20, 15..25, 30..40, 40..45];
        assert_eq!(group_by_overlap(&items), vec![0..3, 3..4, 4..5]);
    }

    #[test]
    fn groups_of_empty_input() {
        let items: Vec<Range<i32>> = Vec::new();
        assert!(group_by_overlap(&items).is_empty());
        assert!(assign_columns(&items).is_empty());
    }

    #[test]
    fn chained_group_reuses_columns() {
        let items = vec![0..30, 10..40, 35..50];
        let assignment = color_group(&items);
        assert_eq!(assignment.columns, vec![0, 1, 0]);
        assert_eq!(assignment.columns_count, 2);
    }

    #[test]
    fn nested_intervals_need_three_columns() {
        let items = vec![0..100, 10..50, 20..30, 60..90];
        let assignment = color_group(&items);
        assert_eq!(assignment.columns, vec![0, 1, 2, 1]);
        assert_eq!(assignment.columns_count, 3);
    }

    #[test]
    fn touching_intervals_share_column() {
        let items = vec![0..10, 10..20];
        let placements = assign_columns(&items);
        assert_eq!(
            placements,
            vec![
                Placement { column_index: 0, columns_count: 1 },
                Placement { column_index: 0, columns_count: 1 },
            ]
        );
    }

    #[test]
    fn columns_count_is_per_group() {
        let items = vec![0..10, 5..15, 20..30];
        let placements = assign_columns(&items);
        assert_eq!(placements[0].columns_count, 2);
        assert_eq!(placements[1].column_index, 1);
        assert_eq!(placements[2], Placement { column_index: 0, columns_count: 1 });
    }

    #[test]
    fn malformed_interval_is_reported() {
        let items = vec![0..10, 12..12];
        assert_eq!(
            check_intervals(&items),
            Err(ValidationError::MalformedInterval { index: 1 })
        );
        assert!((0..10).overlaps(&(9..12)));
        assert!(!(0..10).overlaps(&(10..12)));
    }

    #[test]
    fn layout_orders_equal_starts_by_end() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
        let at = |hour| day.and_hms_opt(hour, 0, 0).unwrap();
        let blocks = vec![
            TimelineBlock::new("c", "C", at(9), at(10), false),
            TimelineBlock::new("a", "A", at(8), at(12), false),
            TimelineBlock::new("b", "B", at(8), at(9), false),
        ];

        let laid_out = layout(blocks);
        let ids: Vec<&str> = laid_out.iter().map(|b| b.block.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        let columns: Vec<usize> = laid_out.iter().map(|b| b.column_index).collect();
        assert_eq!(columns, vec![0, 1, 0]);
        assert!(laid_out.iter().all(|b| b.columns_count == 2));
    }
}
