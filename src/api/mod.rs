use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use serde::{Deserialize, Serialize};

use crate::auth::CredentialContext;
use crate::error::AppError;
use crate::models::*;
use crate::services::{AssignmentService, DashboardSummary, EmailService, TutorService, summarize};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct AssignmentsResponse {
    pub assignments: Vec<AggregatedAssignment>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/assignments", get(list_assignments))
        .route("/assignments/summary", get(assignment_summary))
        .route("/send-email", post(send_email))
        .route("/ai-assist", post(ai_assist))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_assignments(
    State(state): State<AppState>,
    credentials: CredentialContext,
) -> Result<Json<AssignmentsResponse>, AppError> {
    let service = AssignmentService::new(state.classroom.clone());
    let outcome = service.aggregate(&credentials).await?;
    Ok(Json(AssignmentsResponse {
        assignments: outcome.assignments,
    }))
}

async fn assignment_summary(
    State(state): State<AppState>,
    credentials: CredentialContext,
) -> Result<Json<DashboardSummary>, AppError> {
    let service = AssignmentService::new(state.classroom.clone());
    let outcome = service.aggregate(&credentials).await?;
    Ok(Json(summarize(&outcome.assignments, chrono::Utc::now())))
}

async fn send_email(
    State(state): State<AppState>,
    credentials: CredentialContext,
    payload: Result<Json<SendEmailRequest>, JsonRejection>,
) -> Result<Json<SendEmailResponse>, AppError> {
    // no token is a 401 whatever the body looks like
    credentials.require()?;
    let Json(req) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let service = EmailService::new(state.mail.clone());
    let message_id = service.send(&credentials, req).await?;
    Ok(Json(SendEmailResponse {
        success: true,
        message_id,
    }))
}

async fn ai_assist(
    State(state): State<AppState>,
    Json(req): Json<AiAssistRequest>,
) -> Result<Json<AiAssistResponse>, AppError> {
    let service = TutorService::new(state.generator.clone());
    let response = service.answer(req).await?;
    Ok(Json(AiAssistResponse { response }))
}
