//! Day plan configuration: work window, fixed slots and project split.
//!
//! Defaults describe the standard day:
//! - work window 08:00 - 18:00 (600 minutes)
//! - daily tasks: first 10 minutes
//! - afternoon break: 30 minutes at 13:00
//! - lunch: 60 minutes at 15:45
//! - projects: p1 30%, p2 30%, p3 the remainder

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ConfigError, ValidationError};

/// Wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: u32,
    pub minute: u32,
}

impl TimeOfDay {
    pub const fn new(hour: u32, minute: u32) -> Self {
        Self { hour, minute }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.hour > 23 || self.minute > 59 {
            return Err(ValidationError::InvalidTimeOfDay {
                hour: self.hour,
                minute: self.minute,
            });
        }
        Ok(())
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> i64 {
        i64::from(self.hour) * 60 + i64::from(self.minute)
    }

    /// Resolve to an absolute instant on `date`.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::default()) + Duration::minutes(self.minutes_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A block pinned to an absolute time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedSlot {
    pub id: String,
    pub title: String,
    pub duration_minutes: i64,
    pub at: TimeOfDay,
}

impl FixedSlot {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_minutes: i64,
        at: TimeOfDay,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_minutes,
            at,
        }
    }

    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        self.at.on(date)
    }

    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        self.start_on(date) + Duration::minutes(self.duration_minutes)
    }

    fn start_minute(&self) -> i64 {
        self.at.minutes_from_midnight()
    }

    fn end_minute(&self) -> i64 {
        self.start_minute() + self.duration_minutes
    }
}

/// Share of the remaining minutes given to p1 and p2. p3 takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectSplit {
    #[serde(default = "default_share")]
    pub p1: f64,
    #[serde(default = "default_share")]
    pub p2: f64,
}

impl Default for ProjectSplit {
    fn default() -> Self {
        Self {
            p1: default_share(),
            p2: default_share(),
        }
    }
}

/// Configuration for building a day timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_daily_minutes")]
    pub daily_minutes: i64,
    #[serde(default = "default_work_start")]
    pub work_start: TimeOfDay,
    #[serde(default = "default_work_end")]
    pub work_end: TimeOfDay,
    #[serde(default = "default_break_slot")]
    pub afternoon_break: FixedSlot,
    #[serde(default = "default_lunch_slot")]
    pub lunch: FixedSlot,
    #[serde(default)]
    pub split: ProjectSplit,
}

// Default functions
fn default_share() -> f64 {
    0.3
}
fn default_work_start() -> TimeOfDay {
    TimeOfDay::new(8, 0)
}
fn default_work_end() -> TimeOfDay {
    TimeOfDay::new(18, 0)
}
fn default_daily_minutes() -> i64 {
    10
}
fn default_break_slot() -> FixedSlot {
    FixedSlot::new("break", "Afternoon Break", 30, TimeOfDay::new(13, 0))
}
fn default_lunch_slot() -> FixedSlot {
    FixedSlot::new("lunch", "Lunch", 60, TimeOfDay::new(15, 45))
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            daily_minutes: default_daily_minutes(),
            work_start: default_work_start(),
            work_end: default_work_end(),
            afternoon_break: default_break_slot(),
            lunch: default_lunch_slot(),
            split: ProjectSplit::default(),
        }
    }
}

impl PlanConfig {
    /// Both fixed slots ordered by time of day.
    pub fn fixed_slots(&self) -> [&FixedSlot; 2] {
        if self.lunch.at < self.afternoon_break.at {
            [&self.lunch, &self.afternoon_break]
        } else {
            [&self.afternoon_break, &self.lunch]
        }
    }

    /// Length of the work window in minutes.
    pub fn total_minutes(&self) -> i64 {
        self.work_end.minutes_from_midnight() - self.work_start.minutes_from_midnight()
    }

    /// Minutes claimed by daily tasks and the fixed slots.
    pub fn reserved_minutes(&self) -> i64 {
        self.daily_minutes + self.afternoon_break.duration_minutes + self.lunch.duration_minutes
    }

    /// Check the configuration for values the builder cannot honor.
    ///
    /// Durations that merely exceed the window are not rejected here; the
    /// builder degrades to zero project minutes and reports a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, time) in [
            ("plan.work_start", self.work_start),
            ("plan.work_end", self.work_end),
            ("plan.afternoon_break.at", self.afternoon_break.at),
            ("plan.lunch.at", self.lunch.at),
        ] {
            time.validate().map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        }

        if self.total_minutes() <= 0 {
            return Err(ConfigError::EmptyWorkWindow {
                start: self.work_start.to_string(),
                end: self.work_end.to_string(),
            });
        }

        if self.daily_minutes < 0 {
            return Err(ConfigError::InvalidValue {
                key: "plan.daily_minutes".into(),
                message: "must not be negative".into(),
            });
        }

        let window =
            self.work_start.minutes_from_midnight()..=self.work_end.minutes_from_midnight();
        for slot in [&self.afternoon_break, &self.lunch] {
            if slot.duration_minutes <= 0 {
                return Err(ConfigError::InvalidValue {
                    key: format!("plan.{}.duration_minutes", slot.id),
                    message: "must be positive".into(),
                });
            }
            if !window.contains(&slot.start_minute()) || !window.contains(&slot.end_minute()) {
                return Err(ConfigError::SlotOutsideWindow {
                    slot: slot.id.clone(),
                });
            }
        }

        let [first, second] = self.fixed_slots();
        if first.end_minute() > second.start_minute() {
            return Err(ConfigError::OverlappingFixedSlots {
                first: first.id.clone(),
                second: second.id.clone(),
            });
        }

        for (key, share) in [("p1", self.split.p1), ("p2", self.split.p2)] {
            if !(0.0..=1.0).contains(&share) {
                return Err(ConfigError::InvalidSplit(format!(
                    "{key} share {share} is outside 0.0..=1.0"
                )));
            }
        }
        if self.split.p1 + self.split.p2 > 1.0 {
            return Err(ConfigError::InvalidSplit(format!(
                "p1 + p2 shares ({} + {}) exceed 1.0",
                self.split.p1, self.split.p2
            )));
        }

        Ok(())
    }
}

/// The work window of a single date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl WorkWindow {
    pub fn for_date(date: NaiveDate, config: &PlanConfig) -> Self {
        Self {
            start: config.work_start.on(date),
            end: config.work_end.on(date),
        }
    }

    pub fn total_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
