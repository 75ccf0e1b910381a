//! Timeline block and project identity types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Identifier of one of the three rotating projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectId {
    P1,
    P2,
    P3,
}

impl ProjectId {
    /// All projects in canonical order.
    pub const ALL: [ProjectId; 3] = [ProjectId::P1, ProjectId::P2, ProjectId::P3];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P1 => "p1",
            Self::P2 => "p2",
            Self::P3 => "p3",
        }
    }

    /// Position in [`ProjectId::ALL`].
    pub fn index(&self) -> usize {
        match self {
            Self::P1 => 0,
            Self::P2 => 1,
            Self::P3 => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 3]
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            Self::P1 => "Project 1",
            Self::P2 => "Project 2",
            Self::P3 => "Project 3",
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p1" => Ok(Self::P1),
            "p2" => Ok(Self::P2),
            "p3" => Ok(Self::P3),
            other => Err(ValidationError::UnknownProject(other.to_string())),
        }
    }
}

/// Display names for the three projects.
///
/// Renaming only ever changes block titles, never minutes or placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectNames {
    #[serde(default = "default_p1")]
    pub p1: String,
    #[serde(default = "default_p2")]
    pub p2: String,
    #[serde(default = "default_p3")]
    pub p3: String,
}

fn default_p1() -> String {
    ProjectId::P1.default_title().into()
}
fn default_p2() -> String {
    ProjectId::P2.default_title().into()
}
fn default_p3() -> String {
    ProjectId::P3.default_title().into()
}

impl Default for ProjectNames {
    fn default() -> Self {
        Self {
            p1: default_p1(),
            p2: default_p2(),
            p3: default_p3(),
        }
    }
}

impl ProjectNames {
    pub fn title(&self, id: ProjectId) -> &str {
        match id {
            ProjectId::P1 => &self.p1,
            ProjectId::P2 => &self.p2,
            ProjectId::P3 => &self.p3,
        }
    }

    /// Rename a project. A blank name keeps the current one.
    ///
    /// Returns `true` if the title changed.
    pub fn rename(&mut self, id: ProjectId, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let slot = match id {
            ProjectId::P1 => &mut self.p1,
            ProjectId::P2 => &mut self.p2,
            ProjectId::P3 => &mut self.p3,
        };
        if *slot == name {
            return false;
        }
        *slot = name.to_string();
        true
    }
}

/// A single scheduled block on the day timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineBlock {
    /// `daily`, `break`, `lunch`, or a project id (`p1`..`p3`).
    /// Project blocks split by a fixed slot share their id.
    pub id: String,
    pub title: String,
    pub minutes: i64,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// `true` for daily tasks and the fixed breaks.
    pub fixed: bool,
}

impl TimelineBlock {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        fixed: bool,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            minutes: (end - start).num_minutes(),
            start,
            end,
            fixed,
        }
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// The project this block belongs to, if it is a project block.
    pub fn project(&self) -> Option<ProjectId> {
        if self.fixed {
            return None;
        }
        self.id.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn project_id_parses_and_displays() {
        for id in ProjectId::ALL {
            assert_eq!(id.as_str().parse::<ProjectId>().unwrap(), id);
            assert_eq!(ProjectId::from_index(id.index()), id);
        }
        assert_eq!(
            "lunch".parse::<ProjectId>(),
            Err(ValidationError::UnknownProject("lunch".to_string()))
        );
    }

    #[test]
    fn rename_ignores_blank_names() {
        let mut names = ProjectNames::default();
        assert!(!names.rename(ProjectId::P2, "   "));
        assert_eq!(names.p2, "Project 2");

        assert!(names.rename(ProjectId::P2, " Thesis "));
        assert_eq!(names.title(ProjectId::P2), "Thesis");
        assert!(!names.rename(ProjectId::P2, "Thesis"));
    }

    #[test]
    fn partial_names_fill_defaults() {
        let names: ProjectNames = serde_json::from_str(r#"{"p3":"Ops"}"#).unwrap();
        assert_eq!(names.p1, "Project 1");
        assert_eq!(names.p3, "Ops");
    }

    #[test]
    fn block_minutes_follow_its_range() {
        let block = TimelineBlock::new("p1", "Project 1", at(8, 10), at(10, 40), false);
        assert_eq!(block.minutes, 150);
        assert_eq!(block.project(), Some(ProjectId::P1));

        let lunch = TimelineBlock::new("lunch", "Lunch", at(15, 45), at(16, 45), true);
        assert_eq!(lunch.project(), None);
    }
}
