#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use classroom_ai::auth::AccessToken;
use classroom_ai::classroom::ClassroomApi;
use classroom_ai::gemini::TextGenerator;
use classroom_ai::gmail::MailApi;
use classroom_ai::models::{Course, Coursework, StudentSubmission};
use classroom_ai::state::AppState;
use classroom_ai::upstream::UpstreamError;

fn upstream_failure() -> UpstreamError {
    UpstreamError::Status {
        status: 503,
        body: "backend unavailable".to_string(),
    }
}

pub fn course(id: &str, name: &str) -> Course {
    Course {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn work(course_id: &str, id: &str, title: &str) -> Coursework {
    Coursework {
        id: id.to_string(),
        course_id: course_id.to_string(),
        title: title.to_string(),
        description: None,
        due_date: None,
        due_time: None,
        creation_time: "2026-09-01T08:00:00Z".to_string(),
        update_time: "2026-09-02T08:00:00Z".to_string(),
    }
}

pub fn submission(course_id: &str, work_id: &str, id: &str, state: &str) -> StudentSubmission {
    StudentSubmission {
        id: Some(id.to_string()),
        state: state.to_string(),
        course_id: course_id.to_string(),
        course_work_id: work_id.to_string(),
    }
}

/// In-memory Classroom with switchable failures and a call counter.
#[derive(Default)]
pub struct FakeClassroom {
    pub courses: Vec<Course>,
    pub coursework: HashMap<String, Vec<Coursework>>,
    pub submissions: HashMap<(String, String), Vec<StudentSubmission>>,
    pub fail_directory: bool,
    pub failing_coursework: HashSet<String>,
    pub failing_submissions: HashSet<(String, String)>,
    pub calls: AtomicUsize,
}

impl FakeClassroom {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            ..Default::default()
        }
    }

    pub fn with_coursework(mut self, course_id: &str, items: Vec<Coursework>) -> Self {
        self.coursework.insert(course_id.to_string(), items);
        self
    }

    pub fn with_submissions(mut self, course_id: &str, work_id: &str, items: Vec<StudentSubmission>) -> Self {
        self.submissions
            .insert((course_id.to_string(), work_id.to_string()), items);
        self
    }

    pub fn failing_coursework_for(mut self, course_id: &str) -> Self {
        self.failing_coursework.insert(course_id.to_string());
        self
    }

    pub fn failing_submissions_for(mut self, course_id: &str, work_id: &str) -> Self {
        self.failing_submissions
            .insert((course_id.to_string(), work_id.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassroomApi for FakeClassroom {
    async fn list_courses(&self, _token: &AccessToken) -> Result<Vec<Course>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_directory {
            return Err(upstream_failure());
        }
        Ok(self.courses.clone())
    }

    async fn list_coursework(
        &self,
        _token: &AccessToken,
        course_id: &str,
    ) -> Result<Vec<Coursework>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_coursework.contains(course_id) {
            return Err(upstream_failure());
        }
        Ok(self.coursework.get(course_id).cloned().unwrap_or_default())
    }

    async fn list_submissions(
        &self,
        _token: &AccessToken,
        course_id: &str,
        course_work_id: &str,
    ) -> Result<Vec<StudentSubmission>, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let key = (course_id.to_string(), course_work_id.to_string());
        if self.failing_submissions.contains(&key) {
            return Err(upstream_failure());
        }
        Ok(self.submissions.get(&key).cloned().unwrap_or_default())
    }
}

/// Records every raw payload it is asked to send.
#[derive(Default)]
pub struct FakeMail {
    pub fail: bool,
    pub sent: Mutex<Vec<String>>,
}

impl FakeMail {
    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl MailApi for FakeMail {
    async fn send_raw(&self, _token: &AccessToken, raw: &str) -> Result<String, UpstreamError> {
        self.sent.lock().unwrap().push(raw.to_string());
        if self.fail {
            return Err(upstream_failure());
        }
        Ok("msg-123".to_string())
    }
}

#[derive(Default)]
pub struct FakeGenerator {
    pub fail: bool,
    pub prompts: Mutex<Vec<String>>,
}

#[async_trait]
impl TextGenerator for FakeGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, UpstreamError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if self.fail {
            return Err(upstream_failure());
        }
        Ok("Think about what happens to water across a membrane.".to_string())
    }
}

pub fn state_with(
    classroom: Arc<FakeClassroom>,
    mail: Arc<FakeMail>,
    generator: Arc<FakeGenerator>,
) -> AppState {
    AppState {
        classroom,
        mail,
        generator,
    }
}

pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub server");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server crashed");
    });
    format!("http://{}", addr)
}
