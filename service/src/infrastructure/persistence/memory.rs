use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use polls_common::{NewQuestion, Question, QuestionId, visible_questions};

use crate::domain::repository::{QuestionRepository, RepositoryError};

/// Keeps questions in memory, so handlers can be tested without a database.
#[derive(Clone, Debug, Default)]
pub struct InMemoryQuestionRepository {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionRepository {
    fn read(&self) -> Result<Vec<Question>, RepositoryError> {
        self.questions
            .read()
            .map(|questions| questions.clone())
            .map_err(|err| RepositoryError::DatabaseError(err.to_string()))
    }
}

impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_published(&self, now: DateTime<Utc>) -> Result<Vec<Question>, RepositoryError> {
        Ok(visible_questions(self.read()?, now))
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        Ok(self.read()?.into_iter().find(|question| question.id == id))
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let mut questions = self
            .questions
            .write()
            .map_err(|err| RepositoryError::DatabaseError(err.to_string()))?;

        let next_id = i64::try_from(questions.len() + 1)
            .ok()
            .and_then(|id| QuestionId::try_new(id).ok())
            .ok_or_else(|| RepositoryError::DatabaseError("question ids exhausted".to_string()))?;
        let created = Question::new(next_id, question.text, question.publication_time);
        questions.push(created.clone());

        Ok(created)
    }
}
