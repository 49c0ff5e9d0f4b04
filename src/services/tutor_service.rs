use std::sync::Arc;

use tracing::info;

use crate::error::AppError;
use crate::gemini::TextGenerator;
use crate::models::AiAssistRequest;

const NO_CONTEXT: &str = "No specific assignment context provided";

pub struct TutorService {
    generator: Arc<dyn TextGenerator>,
}

impl TutorService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn answer(&self, req: AiAssistRequest) -> Result<String, AppError> {
        if req.prompt.trim().is_empty() {
            return Err(AppError::BadRequest("prompt must not be empty".to_string()));
        }

        let prompt = tutoring_prompt(&req.prompt, req.assignment_context.as_deref());
        let text = self
            .generator
            .generate(&prompt)
            .await
            .map_err(AppError::dependency("Failed to generate AI response"))?;

        info!("Generated tutoring response ({} chars)", text.len());
        Ok(text)
    }
}

pub fn tutoring_prompt(question: &str, assignment_context: Option<&str>) -> String {
    let context = assignment_context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(NO_CONTEXT);

    format!(
        "You are a tutor helping a student work through an assignment.\n\
         Assignment context: {context}\n\
         \n\
         Student question: {question}\n\
         \n\
         Answer in a way that:\n\
         1. Builds understanding of the underlying concepts\n\
         2. Walks through the reasoning step by step\n\
         3. Guides the student toward the answer instead of handing it over\n\
         4. Respects academic integrity\n\
         \n\
         Response:\n"
    )
}
