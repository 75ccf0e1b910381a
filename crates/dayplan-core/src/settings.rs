//! Application settings handed to the builder.
//!
//! These belong to the surrounding application (pomodoro timer, theme,
//! project colors). The timeline does not read them; project colors tint
//! the rendered layout.

use serde::{Deserialize, Serialize};

use crate::timeline::ProjectId;

/// Pomodoro timer durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PomodoroSettings {
    #[serde(default = "default_focus")]
    pub focus: u32,
    #[serde(default = "default_short")]
    pub short: u32,
    #[serde(default = "default_long")]
    pub long: u32,
    #[serde(default = "default_cycles_before_long")]
    pub cycles_before_long: u32,
}

/// Accent color per project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectColors {
    #[serde(default = "default_p1_color")]
    pub p1: String,
    #[serde(default = "default_p2_color")]
    pub p2: String,
    #[serde(default = "default_p3_color")]
    pub p3: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub dark: bool,
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default)]
    pub pomodoro: PomodoroSettings,
    #[serde(default)]
    pub project_colors: ProjectColors,
}

// Default functions
fn default_focus() -> u32 {
    25
}
fn default_short() -> u32 {
    5
}
fn default_long() -> u32 {
    15
}
fn default_cycles_before_long() -> u32 {
    4
}
fn default_p1_color() -> String {
    "#60a5fa".into()
}
fn default_p2_color() -> String {
    "#f472b6".into()
}
fn default_p3_color() -> String {
    "#34d399".into()
}
fn default_true() -> bool {
    true
}

impl Default for PomodoroSettings {
    fn default() -> Self {
        Self {
            focus: default_focus(),
            short: default_short(),
            long: default_long(),
            cycles_before_long: default_cycles_before_long(),
        }
    }
}

impl Default for ProjectColors {
    fn default() -> Self {
        Self {
            p1: default_p1_color(),
            p2: default_p2_color(),
            p3: default_p3_color(),
        }
    }
}

impl ProjectColors {
    pub fn color(&self, id: ProjectId) -> &str {
        match id {
            ProjectId::P1 => &self.p1,
            ProjectId::P2 => &self.p2,
            ProjectId::P3 => &self.p3,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark: false,
            sound: true,
            pomodoro: PomodoroSettings::default(),
            project_colors: ProjectColors::default(),
        }
    }
}
