//! Day timeline construction.
//!
//! This module provides:
//! - Work window, fixed slot and project split configuration
//! - Weekday rotation of the project order
//! - The timeline builder that tiles a workday with blocks

mod block;
mod builder;
mod plan;
mod rotation;

pub use block::{ProjectId, ProjectNames, TimelineBlock};
pub use builder::{
    build_schedule_for_date, DaySchedule, PlanWarning, ProjectBudget, TimelineBuilder,
};
pub use plan::{FixedSlot, PlanConfig, ProjectSplit, TimeOfDay, WorkWindow};
pub use rotation::{next_workday, rotation_order, rotation_start};
