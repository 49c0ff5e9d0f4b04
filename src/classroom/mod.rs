pub mod dto;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::auth::AccessToken;
use crate::models::{Course, Coursework, StudentSubmission};
use crate::upstream::{UpstreamError, decode_json};

/// Read access to Google Classroom on behalf of the token's owner.
///
/// Implementations return whole collections in upstream order; paging is
/// their concern.
#[async_trait]
pub trait ClassroomApi: Send + Sync {
    async fn list_courses(&self, token: &AccessToken) -> Result<Vec<Course>, UpstreamError>;

    async fn list_coursework(
        &self,
        token: &AccessToken,
        course_id: &str,
    ) -> Result<Vec<Coursework>, UpstreamError>;

    /// Submissions of the current user (`userId=me`) for one coursework item.
    async fn list_submissions(
        &self,
        token: &AccessToken,
        course_id: &str,
        course_work_id: &str,
    ) -> Result<Vec<StudentSubmission>, UpstreamError>;
}

pub struct ClassroomHttpClient {
    client: Client,
    base_url: String,
}

impl ClassroomHttpClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, UpstreamError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| UpstreamError::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| UpstreamError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("v1")
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    async fn get_page<R: DeserializeOwned>(
        &self,
        token: &AccessToken,
        segments: &[&str],
        query: &[(&str, &str)],
        page_token: Option<&str>,
    ) -> Result<R, UpstreamError> {
        let mut url = self.endpoint(segments, query)?;
        if let Some(page_token) = page_token {
            url.query_pairs_mut().append_pair("pageToken", page_token);
        }

        tracing::debug!("GET {}", url.path());
        let response = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .send()
            .await?;

        decode_json(response).await
    }
}

#[async_trait]
impl ClassroomApi for ClassroomHttpClient {
    async fn list_courses(&self, token: &AccessToken) -> Result<Vec<Course>, UpstreamError> {
        let mut courses = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page: dto::ListCoursesResponse = self
                .get_page(token, &["courses"], &[], page_token.as_deref())
                .await?;
            courses.extend(page.courses.into_iter().map(Course::from));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        Ok(courses)
    }

    async fn list_coursework(
        &self,
        token: &AccessToken,
        course_id: &str,
    ) -> Result<Vec<Coursework>, UpstreamError> {
        let mut coursework = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page: dto::ListCourseWorkResponse = self
                .get_page(
                    token,
                    &["courses", course_id, "courseWork"],
                    &[],
                    page_token.as_deref(),
                )
                .await?;
            coursework.extend(page.course_work.into_iter().map(|w| w.into_model(course_id)));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        Ok(coursework)
    }

    async fn list_submissions(
        &self,
        token: &AccessToken,
        course_id: &str,
        course_work_id: &str,
    ) -> Result<Vec<StudentSubmission>, UpstreamError> {
        let mut submissions = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page: dto::ListStudentSubmissionsResponse = self
                .get_page(
                    token,
                    &["courses", course_id, "courseWork", course_work_id, "studentSubmissions"],
                    &[("userId", "me")],
                    page_token.as_deref(),
                )
                .await?;
            submissions.extend(
                page.student_submissions
                    .into_iter()
                    .map(|s| s.into_model(course_id, course_work_id)),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        Ok(submissions)
    }
}
