use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AggregatedAssignment, coursework::due_instant};

/// Counters shown at the top of the dashboard.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub pending: usize,
    pub missing: usize,
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Pending,
    Missing,
    Completed,
}

pub fn is_completed(status: &str) -> bool {
    matches!(status, "TURNED_IN" | "RETURNED")
}

pub fn classify(assignment: &AggregatedAssignment, now: DateTime<Utc>) -> Progress {
    if is_completed(&assignment.status) {
        return Progress::Completed;
    }
    match due_instant(assignment.due_date, assignment.due_time) {
        Some(due) if due < now => Progress::Missing,
        _ => Progress::Pending,
    }
}

pub fn summarize(assignments: &[AggregatedAssignment], now: DateTime<Utc>) -> DashboardSummary {
    assignments
        .iter()
        .fold(DashboardSummary::default(), |mut summary, assignment| {
            match classify(assignment, now) {
                Progress::Pending => summary.pending += 1,
                Progress::Missing => summary.missing += 1,
                Progress::Completed => summary.completed += 1,
            }
            summary.total += 1;
            summary
        })
}
