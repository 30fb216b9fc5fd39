use chrono::{DateTime, Utc};
use polls_common::Question;
use serde::{Deserialize, Serialize};

/// Question as exposed by the JSON api
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    id: i64,
    text: String,
    publication_time: DateTime<Utc>,
    published_recently: bool,
}

impl QuestionResponse {
    pub fn new(question: &Question, now: DateTime<Utc>) -> Self {
        Self {
            id: question.id.into_inner(),
            text: question.text.to_string(),
            publication_time: question.publication_time,
            published_recently: question.was_published_recently_at(now),
        }
    }
}

/// Body of the create question route
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuestionRequest {
    pub text: String,
    #[serde(default)]
    pub publication_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use polls_common::{QuestionId, QuestionText};

    use super::*;

    #[test]
    fn response_fields_are_camel_case() {
        let now = Utc::now();
        let question = Question::new(
            QuestionId::try_new(5).unwrap(),
            QuestionText::try_new("Old news").unwrap(),
            now - TimeDelta::days(3),
        );

        let json = serde_json::to_value(QuestionResponse::new(&question, now)).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["text"], "Old news");
        assert_eq!(json["publishedRecently"], false);
        assert!(json.get("publicationTime").is_some());
    }
}
