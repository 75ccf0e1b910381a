//! Per-project totals of a built timeline.

use serde::{Deserialize, Serialize};

use crate::timeline::{ProjectId, ProjectNames, TimelineBlock};

/// Minutes a project received and its share of all project time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectShare {
    pub id: ProjectId,
    pub title: String,
    pub minutes: i64,
    /// Percentage of the summed project minutes (0-100).
    pub percent: f64,
}

/// Total each project's blocks, in p1, p2, p3 order.
///
/// Projects without blocks report zero minutes.
pub fn project_shares(timeline: &[TimelineBlock], names: &ProjectNames) -> Vec<ProjectShare> {
    let mut totals = [0i64; 3];
    for block in timeline {
        if let Some(project) = block.project() {
            totals[project.index()] += block.minutes;
        }
    }

    let denominator = totals.iter().sum::<i64>().max(1) as f64;

    ProjectId::ALL
        .iter()
        .map(|&id| ProjectShare {
            id,
            title: names.title(id).to_string(),
            minutes: totals[id.index()],
            percent: totals[id.index()] as f64 / denominator * 100.0,
        })
        .collect()
}
