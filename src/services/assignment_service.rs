use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{AccessToken, CredentialContext};
use crate::classroom::ClassroomApi;
use crate::error::AppError;
use crate::models::{AggregatedAssignment, Course};
use crate::upstream::UpstreamError;

/// Result of walking every course in the directory.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AggregationOutcome {
    pub assignments: Vec<AggregatedAssignment>,
    /// Ids of courses whose coursework or submissions could not be loaded.
    pub failed_courses: Vec<String>,
}

pub struct AssignmentService {
    classroom: Arc<dyn ClassroomApi>,
}

impl AssignmentService {
    pub fn new(classroom: Arc<dyn ClassroomApi>) -> Self {
        Self { classroom }
    }

    /// Flattens courses → coursework → submission status into one list,
    /// in directory order then coursework order.
    ///
    /// Only the course directory is fatal. A course whose coursework or
    /// submission lookup fails is left out entirely and recorded in
    /// `failed_courses`.
    pub async fn aggregate(&self, credentials: &CredentialContext) -> Result<AggregationOutcome, AppError> {
        let token = credentials.require()?;

        let courses = self
            .classroom
            .list_courses(token)
            .await
            .map_err(AppError::dependency("Failed to fetch assignments"))?;
        info!("Aggregating assignments across {} courses", courses.len());

        let mut outcome = AggregationOutcome::default();
        for course in &courses {
            match self.collect_course(token, course).await {
                Ok(assignments) => outcome.assignments.extend(assignments),
                Err(e) => {
                    warn!("Skipping course {} ({}): {}", course.id, course.name, e);
                    outcome.failed_courses.push(course.id.clone());
                }
            }
        }

        if !outcome.failed_courses.is_empty() {
            warn!(
                "{} of {} courses could not be loaded",
                outcome.failed_courses.len(),
                courses.len()
            );
        }
        info!("Aggregated {} assignments", outcome.assignments.len());
        Ok(outcome)
    }

    async fn collect_course(
        &self,
        token: &AccessToken,
        course: &Course,
    ) -> Result<Vec<AggregatedAssignment>, UpstreamError> {
        let coursework = self.classroom.list_coursework(token, &course.id).await?;
        let mut assignments = Vec::with_capacity(coursework.len());

        for work in coursework {
            let submissions = self
                .classroom
                .list_submissions(token, &course.id, &work.id)
                .await?;
            assignments.push(AggregatedAssignment::assemble(course, work, submissions.first()));
        }

        Ok(assignments)
    }
}
