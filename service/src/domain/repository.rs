use std::fmt::Debug;
use std::future::Future;

use chrono::{DateTime, Utc};
use polls_common::{NewQuestion, Question, QuestionId};

pub trait QuestionRepository: Clone + Send + Sync + 'static {
    /// Questions published at or before `now`, newest first
    fn find_published(
        &self,
        now: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Question>, RepositoryError>> + Send;

    /// Find single question by ID regardless of its publication time
    fn find_by_id(
        &self,
        id: QuestionId,
    ) -> impl Future<Output = Result<Option<Question>, RepositoryError>> + Send;

    /// Store a new question and return it with its assigned ID
    fn create(
        &self,
        question: NewQuestion,
    ) -> impl Future<Output = Result<Question, RepositoryError>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    NotFound,
    ValidationFailed(String),
    DatabaseError(String),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(value: sqlx::Error) -> Self {
        match value {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::DatabaseError(other.to_string()),
        }
    }
}
