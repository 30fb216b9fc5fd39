use axum::extract::{Path, State};
use axum::response::Html;
use chrono::Utc;
use polls_common::QuestionId;

use crate::domain::{AppState, polls};
use crate::infrastructure::http::api::ApiError;

mod templates;

/// `polls:index`, the latest published questions
pub async fn index<S: AppState>(State(state): State<S>) -> Result<Html<String>, ApiError> {
    let questions = polls::latest_questions(state.repository(), Utc::now()).await?;
    Ok(Html(templates::index_page(&questions)))
}

/// `polls:detail`, one published question
pub async fn detail<S: AppState>(
    Path(question_id): Path<String>,
    State(state): State<S>,
) -> Result<Html<String>, ApiError> {
    // an id that can't reference a row is just an unknown question here
    let id = question_id
        .parse::<QuestionId>()
        .map_err(|_| ApiError::NotFound)?;

    let question = polls::published_question(state.repository(), id, Utc::now()).await?;
    Ok(Html(templates::detail_page(&question)))
}
