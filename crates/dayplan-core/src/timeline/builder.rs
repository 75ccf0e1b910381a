//! Day timeline builder.
//!
//! Lays out one workday as a sequence of blocks:
//! - daily tasks at the very start of the window
//! - the two fixed slots at their configured clock times
//! - the three project budgets, in weekday rotation order, filling the time
//!   around the fixed slots
//!
//! The builder is a left fold over the project budgets. Each step threads a
//! [`Placement`] (cursor plus emitted blocks) through the consumption loop.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::block::{ProjectId, ProjectNames, TimelineBlock};
use super::plan::{FixedSlot, PlanConfig, WorkWindow};
use super::rotation::rotation_order;
use crate::error::ConfigError;
use crate::layout::{layout, LaidOutBlock};
use crate::settings::Settings;

const DAILY_ID: &str = "daily";
const DAILY_TITLE: &str = "Daily Tasks";

/// Recoverable degradation noticed while building a timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanWarning {
    /// Daily tasks and fixed slots leave no time in the window for projects.
    InsufficientWorkTime { available: i64, reserved: i64 },
    /// The daily block runs into a fixed slot.
    DailyOverlapsSlot { slot: String },
    /// Rounding of the split left a project with a negative budget.
    ProjectBudgetTruncated { project: ProjectId, minutes: i64 },
    /// A block was cut back to the work window.
    BlockClamped { id: String },
    /// A block fell entirely outside the work window.
    BlockDropped { id: String },
}

impl fmt::Display for PlanWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientWorkTime { available, reserved } => write!(
                f,
                "fixed blocks take {reserved} of {available} minutes; projects get no time"
            ),
            Self::DailyOverlapsSlot { slot } => {
                write!(f, "daily block overlaps fixed slot '{slot}'")
            }
            Self::ProjectBudgetTruncated { project, minutes } => {
                write!(f, "{project} budget of {minutes} minutes truncated to 0")
            }
            Self::BlockClamped { id } => write!(f, "block '{id}' clamped to the work window"),
            Self::BlockDropped { id } => write!(f, "block '{id}' lies outside the work window"),
        }
    }
}

/// Minutes allocated to one project for the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectBudget {
    pub id: ProjectId,
    pub title: String,
    pub minutes: i64,
}

/// A built day: the ordered timeline plus its window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    pub timeline: Vec<TimelineBlock>,
    pub work_start: NaiveDateTime,
    pub work_end: NaiveDateTime,
    pub total_minutes: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PlanWarning>,
}

impl DaySchedule {
    /// Column layout of the timeline.
    pub fn layout(&self) -> Vec<LaidOutBlock> {
        layout(self.timeline.clone())
    }
}

/// Fixed slot resolved to absolute instants on the target date.
#[derive(Debug, Clone, Copy)]
struct ResolvedSlot<'a> {
    slot: &'a FixedSlot,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

/// Accumulator threaded through the fold.
struct Placement<'a> {
    cursor: NaiveDateTime,
    slots: Vec<ResolvedSlot<'a>>,
    /// Index of the first slot not yet emitted. Slots are emitted in order.
    next_slot: usize,
    blocks: Vec<TimelineBlock>,
}

impl<'a> Placement<'a> {
    fn new(cursor: NaiveDateTime, slots: Vec<ResolvedSlot<'a>>) -> Self {
        Self {
            cursor,
            slots,
            next_slot: 0,
            blocks: Vec::new(),
        }
    }

    fn emit_fixed(&mut self, id: &str, title: &str, minutes: i64) {
        if minutes <= 0 {
            return;
        }
        let end = self.cursor + Duration::minutes(minutes);
        self.blocks.push(TimelineBlock::new(id, title, self.cursor, end, true));
        self.cursor = end;
    }

    fn emit_next_slot(&mut self) {
        let Some(resolved) = self.slots.get(self.next_slot).copied() else {
            return;
        };
        self.blocks.push(TimelineBlock::new(
            resolved.slot.id.as_str(),
            resolved.slot.title.as_str(),
            resolved.start,
            resolved.end,
            true,
        ));
        self.cursor = self.cursor.max(resolved.end);
        self.next_slot += 1;
    }

    fn emit_project(&mut self, budget: &ProjectBudget, minutes: i64) {
        let end = self.cursor + Duration::minutes(minutes);
        self.blocks.push(TimelineBlock::new(
            budget.id.as_str(),
            budget.title.as_str(),
            self.cursor,
            end,
            false,
        ));
        self.cursor = end;
    }

    /// Spend a project's budget around the pending fixed slots.
    fn consume(mut self, budget: &ProjectBudget) -> Self {
        let mut left = budget.minutes;
        while left > 0 {
            match self.slots.get(self.next_slot).copied() {
                // Cursor already at the slot: place it without spending project time.
                Some(pending) if self.cursor >= pending.start => self.emit_next_slot(),
                Some(pending) => {
                    let until_fixed = (pending.start - self.cursor).num_minutes();
                    let take = left.min(until_fixed);
                    self.emit_project(budget, take);
                    left -= take;
                }
                None => {
                    self.emit_project(budget, left);
                    left = 0;
                }
            }
        }
        self
    }

    /// Emit slots the projects never reached.
    fn finish(mut self) -> Vec<TimelineBlock> {
        while self.next_slot < self.slots.len() {
            self.emit_next_slot();
        }
        self.blocks
    }
}

/// Builds day timelines from a validated [`PlanConfig`].
#[derive(Debug, Clone)]
pub struct TimelineBuilder {
    config: PlanConfig,
}

impl TimelineBuilder {
    /// Create a builder with the default plan.
    pub fn new() -> Self {
        Self {
            config: PlanConfig::default(),
        }
    }

    /// Create with a custom plan.
    ///
    /// # Errors
    /// Returns the first problem found by [`PlanConfig::validate`].
    pub fn with_config(config: PlanConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Split the remaining minutes between the three projects.
    ///
    /// p1 and p2 get their rounded shares, p3 gets whatever is left so the
    /// three always add up to the remaining minutes (or zero when degraded).
    pub fn project_budgets(
        &self,
        total_minutes: i64,
        names: &ProjectNames,
        warnings: &mut Vec<PlanWarning>,
    ) -> [ProjectBudget; 3] {
        let reserved = self.config.reserved_minutes();
        let mut remaining = total_minutes - reserved;
        if remaining <= 0 {
            warnings.push(PlanWarning::InsufficientWorkTime {
                available: total_minutes,
                reserved,
            });
            remaining = 0;
        }

        let p1 = (remaining as f64 * self.config.split.p1).round() as i64;
        let p2 = (remaining as f64 * self.config.split.p2).round() as i64;
        let mut p3 = remaining - p1 - p2;
        if p3 < 0 {
            warnings.push(PlanWarning::ProjectBudgetTruncated {
                project: ProjectId::P3,
                minutes: p3,
            });
            p3 = 0;
        }

        [(ProjectId::P1, p1), (ProjectId::P2, p2), (ProjectId::P3, p3)].map(|(id, minutes)| {
            ProjectBudget {
                id,
                title: names.title(id).to_string(),
                minutes,
            }
        })
    }

    /// Build the timeline for `date`.
    ///
    /// The result is sorted by start and, for a default plan, tiles the
    /// work window exactly.
    pub fn build(&self, date: NaiveDate, names: Option<&ProjectNames>) -> DaySchedule {
        let default_names = ProjectNames::default();
        let names = names.unwrap_or(&default_names);
        let window = WorkWindow::for_date(date, &self.config);
        let total_minutes = window.total_minutes();
        let mut warnings = Vec::new();

        let budgets = self.project_budgets(total_minutes, names, &mut warnings);
        let order = rotation_order(date.weekday());

        let slots = self
            .config
            .fixed_slots()
            .map(|slot| ResolvedSlot {
                slot,
                start: slot.start_on(date),
                end: slot.end_on(date),
            })
            .to_vec();

        let mut placement = Placement::new(window.start, slots);
        placement.emit_fixed(DAILY_ID, DAILY_TITLE, self.config.daily_minutes);
        for pending in &placement.slots {
            if placement.cursor > pending.start {
                warnings.push(PlanWarning::DailyOverlapsSlot {
                    slot: pending.slot.id.clone(),
                });
            }
        }

        let mut timeline = order
            .iter()
            .map(|id| &budgets[id.index()])
            .fold(placement, Placement::consume)
            .finish();

        // Stable: equal starts keep emission order.
        timeline.sort_by_key(|block| block.start);
        let timeline = clamp_to_window(timeline, window, &mut warnings);

        for warning in &warnings {
            tracing::warn!(%date, "{}", warning);
        }
        tracing::debug!(
            %date,
            blocks = timeline.len(),
            first = order[0].as_str(),
            "built day timeline"
        );

        DaySchedule {
            date,
            timeline,
            work_start: window.start,
            work_end: window.end,
            total_minutes,
            warnings,
        }
    }
}

impl Default for TimelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull every block inside the work window, dropping those left empty.
fn clamp_to_window(
    timeline: Vec<TimelineBlock>,
    window: WorkWindow,
    warnings: &mut Vec<PlanWarning>,
) -> Vec<TimelineBlock> {
    timeline
        .into_iter()
        .filter_map(|mut block| {
            if block.start >= window.start && block.end <= window.end {
                return Some(block);
            }
            block.start = block.start.max(window.start);
            block.end = block.end.min(window.end);
            if block.start >= block.end {
                warnings.push(PlanWarning::BlockDropped { id: block.id });
                return None;
            }
            block.minutes = block.duration_minutes();
            warnings.push(PlanWarning::BlockClamped {
                id: block.id.clone(),
            });
            Some(block)
        })
        .collect()
}

/// Build the schedule for `date` with the standard plan.
///
/// `settings` is accepted for forward compatibility; none of its values
/// change the timeline today.
pub fn build_schedule_for_date(
    date: NaiveDate,
    _settings: &Settings,
    project_names: Option<&ProjectNames>,
) -> DaySchedule {
    TimelineBuilder::new().build(date, project_names)
}
