use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmission {
    pub id: Option<String>,
    pub state: String,
    pub course_id: String,
    pub course_work_id: String,
}
