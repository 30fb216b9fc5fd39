use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use polls_common::{NewQuestion, QuestionId, QuestionText};

use crate::domain::{AppState, polls};
use crate::infrastructure::http::api::{ApiError, ApiSuccess};
use crate::infrastructure::http::handlers::questions::dto::{CreateQuestionRequest, QuestionResponse};

mod dto;

pub async fn list_questions<S: AppState>(
    State(state): State<S>,
) -> Result<ApiSuccess<Vec<QuestionResponse>>, ApiError> {
    let now = Utc::now();
    let result = polls::latest_questions(state.repository(), now)
        .await?
        .iter()
        .map(|question| QuestionResponse::new(question, now))
        .collect::<Vec<_>>();

    Ok(ApiSuccess::new(StatusCode::OK, result))
}

pub async fn find_question_by_id<S: AppState>(
    Path(question_id): Path<String>,
    State(state): State<S>,
) -> Result<ApiSuccess<QuestionResponse>, ApiError> {
    let id = question_id.parse::<QuestionId>().map_err(|_| {
        ApiError::UnprocessableEntity(format!("invalid question id {}", question_id))
    })?;

    let now = Utc::now();
    let question = polls::published_question(state.repository(), id, now).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        QuestionResponse::new(&question, now),
    ))
}

pub async fn create_question<S: AppState>(
    State(state): State<S>,
    Json(request): Json<CreateQuestionRequest>,
) -> Result<ApiSuccess<QuestionResponse>, ApiError> {
    let text = QuestionText::try_new(request.text)
        .map_err(|err| ApiError::UnprocessableEntity(err.to_string()))?;
    let now = Utc::now();
    let question = NewQuestion {
        text,
        publication_time: request.publication_time.unwrap_or(now),
    };

    let created = polls::create_question(state.repository(), question).await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        QuestionResponse::new(&created, now),
    ))
}
