//! Mapping of laid-out blocks onto a vertical day canvas.

use chrono::{Duration, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::LaidOutBlock;

/// Scale and spacing of the day canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderMetrics {
    pub px_per_minute: f64,
    /// Floor for block height so short blocks stay readable.
    pub min_height_px: f64,
    /// Horizontal gap between columns, in percent of the canvas width.
    pub gap_pct: f64,
}

impl Default for RenderMetrics {
    fn default() -> Self {
        Self {
            px_per_minute: 1.2,
            min_height_px: 20.0,
            gap_pct: 2.0,
        }
    }
}

/// Position of one block: vertical in pixels, horizontal in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockRect {
    pub top_px: f64,
    pub height_px: f64,
    pub left_pct: f64,
    pub width_pct: f64,
}

/// Hour line on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourTick {
    pub label: String,
    pub top_px: f64,
}

impl RenderMetrics {
    pub fn rect(&self, block: &LaidOutBlock, work_start: NaiveDateTime) -> BlockRect {
        let offset = (block.block.start - work_start).num_minutes() as f64;
        let duration = block.block.duration_minutes() as f64;
        let column_width = 100.0 / block.columns_count.max(1) as f64;

        BlockRect {
            top_px: offset * self.px_per_minute,
            height_px: (duration * self.px_per_minute).max(self.min_height_px),
            left_pct: block.column_index as f64 * column_width,
            width_pct: column_width - self.gap_pct,
        }
    }

    pub fn canvas_height(&self, total_minutes: i64) -> f64 {
        total_minutes as f64 * self.px_per_minute
    }

    /// One tick per full hour between `work_start` and `work_end`, inclusive.
    pub fn hour_ticks(
        &self,
        work_start: NaiveDateTime,
        work_end: NaiveDateTime,
    ) -> Vec<HourTick> {
        let past_hour = Duration::minutes(i64::from(work_start.minute()))
            + Duration::seconds(i64::from(work_start.second()));
        let mut at = work_start - past_hour;
        if at < work_start {
            at += Duration::hours(1);
        }

        let mut ticks = Vec::new();
        while at <= work_end {
            ticks.push(HourTick {
                label: format!("{:02}:{:02}", at.hour(), at.minute()),
                top_px: (at - work_start).num_minutes() as f64 * self.px_per_minute,
            });
            at += Duration::hours(1);
        }
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::TimelineBlock;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn laid_out(
        start: NaiveDateTime,
        end: NaiveDateTime,
        column_index: usize,
        columns_count: usize,
    ) -> LaidOutBlock {
        LaidOutBlock {
            block: TimelineBlock::new("p1", "Project 1", start, end, false),
            column_index,
            columns_count,
        }
    }

    #[test]
    fn rect_for_single_column_block() {
        let metrics = RenderMetrics::default();
        let rect = metrics.rect(&laid_out(at(8, 10), at(10, 40), 0, 1), at(8, 0));
        assert!((rect.top_px - 12.0).abs() < 1e-9);
        assert!((rect.height_px - 180.0).abs() < 1e-9);
        assert_eq!(rect.left_pct, 0.0);
        assert_eq!(rect.width_pct, 98.0);
    }

    #[test]
    fn short_blocks_get_min_height() {
        let metrics = RenderMetrics::default();
        let rect = metrics.rect(&laid_out(at(8, 0), at(8, 10), 0, 1), at(8, 0));
        assert_eq!(rect.height_px, 20.0);
    }

    #[test]
    fn second_of_two_columns() {
        let metrics = RenderMetrics::default();
        let rect = metrics.rect(&laid_out(at(9, 0), at(10, 0), 1, 2), at(8, 0));
        assert_eq!(rect.left_pct, 50.0);
        assert_eq!(rect.width_pct, 48.0);
    }

    #[test]
    fn ticks_cover_every_hour() {
        let metrics = RenderMetrics::default();
        let ticks = metrics.hour_ticks(at(8, 0), at(18, 0));
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0].label, "08:00");
        assert_eq!(ticks[10].label, "18:00");
        assert!((ticks[10].top_px - metrics.canvas_height(600)).abs() < 1e-9);
    }

    #[test]
    fn ticks_skip_to_first_full_hour() {
        let metrics = RenderMetrics::default();
        let ticks = metrics.hour_ticks(at(8, 30), at(12, 15));
        let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["09:00", "10:00", "11:00", "12:00"]);
        assert!((ticks[0].top_px - 36.0).abs() < 1e-9);
    }
}
