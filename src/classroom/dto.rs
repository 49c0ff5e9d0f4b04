use serde::Deserialize;

use crate::models::{Course, Coursework, DueDate, DueTime, NOT_TURNED_IN, StudentSubmission};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCoursesResponse {
    #[serde(default)]
    pub courses: Vec<CourseDto>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCourseWorkResponse {
    #[serde(default)]
    pub course_work: Vec<CourseWorkDto>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStudentSubmissionsResponse {
    #[serde(default)]
    pub student_submissions: Vec<StudentSubmissionDto>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CourseDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWorkDto {
    pub id: String,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateDto>,
    #[serde(default)]
    pub due_time: Option<TimeOfDayDto>,
    #[serde(default)]
    pub creation_time: Option<String>,
    #[serde(default)]
    pub update_time: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmissionDto {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub course_id: Option<String>,
    #[serde(default)]
    pub course_work_id: Option<String>,
}

/// Classroom omits zero-valued date and time fields.
#[derive(Debug, Deserialize)]
pub struct DateDto {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct TimeOfDayDto {
    #[serde(default)]
    pub hours: Option<u32>,
    #[serde(default)]
    pub minutes: Option<u32>,
}

impl From<CourseDto> for Course {
    fn from(dto: CourseDto) -> Self {
        Course {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
        }
    }
}

impl CourseWorkDto {
    pub fn into_model(self, course_id: &str) -> Coursework {
        Coursework {
            id: self.id,
            course_id: self.course_id.unwrap_or_else(|| course_id.to_string()),
            title: self.title.unwrap_or_default(),
            description: self.description,
            due_date: self.due_date.and_then(DateDto::into_model),
            due_time: self.due_time.map(|t| DueTime {
                hours: t.hours,
                minutes: t.minutes,
            }),
            creation_time: self.creation_time.unwrap_or_default(),
            update_time: self.update_time.unwrap_or_default(),
        }
    }
}

impl DateDto {
    fn into_model(self) -> Option<DueDate> {
        Some(DueDate {
            year: self.year?,
            month: self.month?,
            day: self.day?,
        })
    }
}

impl StudentSubmissionDto {
    pub fn into_model(self, course_id: &str, course_work_id: &str) -> StudentSubmission {
        StudentSubmission {
            id: self.id,
            state: self
                .state
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| NOT_TURNED_IN.to_string()),
            course_id: self.course_id.unwrap_or_else(|| course_id.to_string()),
            course_work_id: self
                .course_work_id
                .unwrap_or_else(|| course_work_id.to_string()),
        }
    }
}
