//! Question id path extractor.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::domain::QuestionId;
use crate::error::AppError;

/// The `{question_id}` path segment, parsed as an integer.
#[derive(Debug, Clone, Copy)]
pub struct QuestionIdPath(pub QuestionId);

impl<S> FromRequestParts<S> for QuestionIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;

        raw.parse::<QuestionId>()
            .map(Self)
            .map_err(|e| AppError::BadRequest(format!("invalid question id {raw:?}: {e}")))
    }
}
