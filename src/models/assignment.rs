use serde::{Deserialize, Serialize};

use super::{Course, Coursework, DueDate, DueTime, StudentSubmission};

/// Status reported when the user has no submission record for an assignment.
pub const NOT_TURNED_IN: &str = "NOT_TURNED_IN";

/// Flat, UI-ready view of one piece of coursework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedAssignment {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DueDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<DueTime>,
    pub course_name: String,
    pub course_id: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
    pub creation_time: String,
    pub update_time: String,
}

impl AggregatedAssignment {
    /// Combines coursework with its course and the first submission record, if any.
    pub fn assemble(
        course: &Course,
        work: Coursework,
        submission: Option<&StudentSubmission>,
    ) -> Self {
        let (status, submission_id) = match submission {
            Some(s) => (s.state.clone(), s.id.clone()),
            None => (NOT_TURNED_IN.to_string(), None),
        };

        Self {
            id: work.id,
            title: work.title,
            description: work.description,
            due_date: work.due_date,
            due_time: work.due_time,
            course_name: course.name.clone(),
            course_id: course.id.clone(),
            status,
            submission_id,
            creation_time: work.creation_time,
            update_time: work.update_time,
        }
    }
}
