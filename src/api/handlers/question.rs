//! Question CRUD handlers.
//!
//! Successful writes answer `200 OK` with an empty body.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::extractors::{JsonBody, QuestionIdPath};
use crate::api::state::AppState;
use crate::domain::{CreateQuestionRequest, QuestionResponse, UpdateQuestionRequest};
use crate::error::{AppError, Result};

/// `POST /api/v1/questions`
pub async fn create_question(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<CreateQuestionRequest>,
) -> Result<StatusCode> {
    state.question_service.create(request.into()).await?;
    Ok(StatusCode::OK)
}

/// `PATCH /api/v1/questions/{question_id}`
pub async fn update_question(
    State(state): State<AppState>,
    QuestionIdPath(id): QuestionIdPath,
    JsonBody(request): JsonBody<UpdateQuestionRequest>,
) -> Result<StatusCode> {
    state
        .question_service
        .update_where_asked(id, request.where_asked)
        .await?;
    Ok(StatusCode::OK)
}

/// `DELETE /api/v1/questions/{question_id}`
pub async fn delete_question(
    State(state): State<AppState>,
    QuestionIdPath(id): QuestionIdPath,
) -> Result<StatusCode> {
    state.question_service.delete(id).await?;
    Ok(StatusCode::OK)
}

/// `GET /api/v1/questions`
pub async fn list_questions(State(state): State<AppState>) -> Result<Json<Vec<QuestionResponse>>> {
    let questions = state.question_service.list().await?;
    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// PATCH or DELETE without a question id.
pub async fn missing_question_id() -> AppError {
    AppError::BadRequest("questionID path parameter is required".to_string())
}
