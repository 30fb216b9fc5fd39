use chrono::{DateTime, Utc};
use polls_common::{NewQuestion, Question, QuestionId};

use crate::domain::repository::{QuestionRepository, RepositoryError};

/// Questions shown on the index page: already published, newest first
pub async fn latest_questions(
    repository: &impl QuestionRepository,
    now: DateTime<Utc>,
) -> Result<Vec<Question>, RepositoryError> {
    repository.find_published(now).await
}

/// A question for the detail page.
/// Unknown questions and questions scheduled for later are both reported as not found.
pub async fn published_question(
    repository: &impl QuestionRepository,
    id: QuestionId,
    now: DateTime<Utc>,
) -> Result<Question, RepositoryError> {
    repository
        .find_by_id(id)
        .await?
        .filter(|question| question.is_visible_at(now))
        .ok_or(RepositoryError::NotFound)
}

pub async fn create_question(
    repository: &impl QuestionRepository,
    question: NewQuestion,
) -> Result<Question, RepositoryError> {
    let created = repository.create(question).await?;
    tracing::info!(id = %created.id, "question created: {}", created);
    Ok(created)
}

#[cfg(test)]
mod tests {
    use polls_common::test_utils::{create_question as new_question, future_question, past_question};

    use super::*;
    use crate::infrastructure::persistence::memory::InMemoryQuestionRepository;

    fn texts(questions: &[Question]) -> Vec<String> {
        questions.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn no_questions() {
        let repository = InMemoryQuestionRepository::default();
        let latest = latest_questions(&repository, Utc::now()).await.unwrap();
        assert!(latest.is_empty());
    }

    #[tokio::test]
    async fn future_questions_are_not_listed() {
        let repository = InMemoryQuestionRepository::default();
        create_question(&repository, past_question("Past question.")).await.unwrap();
        create_question(&repository, future_question()).await.unwrap();

        let latest = latest_questions(&repository, Utc::now()).await.unwrap();
        assert_eq!(texts(&latest), vec!["Past question."]);
    }

    #[tokio::test]
    async fn latest_questions_are_newest_first() {
        let repository = InMemoryQuestionRepository::default();
        create_question(&repository, new_question("Last week.", -7)).await.unwrap();
        create_question(&repository, new_question("Today.", 0)).await.unwrap();
        create_question(&repository, new_question("Last month.", -30)).await.unwrap();

        let latest = latest_questions(&repository, Utc::now()).await.unwrap();
        assert_eq!(texts(&latest), vec!["Today.", "Last week.", "Last month."]);
    }

    #[tokio::test]
    async fn published_question_is_found() {
        let repository = InMemoryQuestionRepository::default();
        let past = create_question(&repository, past_question("Past question.")).await.unwrap();

        let found = published_question(&repository, past.id, Utc::now()).await.unwrap();
        assert_eq!(found, past);
    }

    #[tokio::test]
    async fn future_question_is_not_found() {
        let repository = InMemoryQuestionRepository::default();
        let future = create_question(&repository, future_question()).await.unwrap();

        let result = published_question(&repository, future.id, Utc::now()).await;
        assert_eq!(result, Err(RepositoryError::NotFound));

        // becomes visible once its publication time is reached
        let later = future.publication_time;
        assert!(published_question(&repository, future.id, later).await.is_ok());
    }

    #[tokio::test]
    async fn unknown_question_is_not_found() {
        let repository = InMemoryQuestionRepository::default();
        let id = QuestionId::try_new(42).unwrap();

        let result = published_question(&repository, id, Utc::now()).await;
        assert_eq!(result, Err(RepositoryError::NotFound));
    }
}
