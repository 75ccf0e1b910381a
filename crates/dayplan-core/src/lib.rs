//! # dayplan Core Library
//!
//! This library lays out a workday. It is pure and synchronous: every call
//! derives its result from the date, the plan and the project names passed
//! in, and nothing is cached between calls.
//!
//! ## Architecture
//!
//! - **Timeline**: tiles the work window with daily tasks, two fixed breaks
//!   and three project blocks whose order rotates by weekday
//! - **Layout**: assigns overlapping blocks to side-by-side columns
//! - **Storage**: TOML configuration holding settings, project names and
//!   the day plan
//!
//! ## Key Components
//!
//! - [`TimelineBuilder`]: builds a [`DaySchedule`] for a date
//! - [`layout()`]: greedy column assignment over overlap groups
//! - [`Config`]: application configuration management

pub mod error;
pub mod layout;
pub mod settings;
pub mod storage;
pub mod summary;
pub mod timeline;

pub use error::{ConfigError, CoreError, ValidationError};
pub use layout::{
    assign_columns, color_group, group_by_overlap, layout, BlockRect, HourTick, Interval,
    LaidOutBlock, RenderMetrics,
};
pub use settings::Settings;
pub use storage::Config;
pub use summary::{project_shares, ProjectShare};
pub use timeline::{
    build_schedule_for_date, next_workday, DaySchedule, PlanConfig, PlanWarning, ProjectId,
    ProjectNames, TimelineBlock, TimelineBuilder,
};
