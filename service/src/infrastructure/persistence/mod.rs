use chrono::{DateTime, Utc};
use polls_common::database::Database;
use polls_common::{
    ID_FIELD_NAME, NewQuestion, PUBLISHED_FIELD_NAME, QUESTION_TABLE_NAME,
    QUESTION_TEXT_FIELD_NAME, Question, QuestionId, QuestionText,
};
use sqlx::postgres::PgRow;

use crate::domain::repository::{QuestionRepository, RepositoryError};

#[cfg(test)]
pub mod memory;

#[derive(Clone, Debug)]
pub struct PostgresQuestionRepository {
    database: &'static Database,
    table_name: String,
}

/// One row of the questions table as it comes from the database
struct QuestionRow {
    id: i64,
    text: String,
    publication_time: DateTime<Utc>,
}

impl TryFrom<PgRow> for QuestionRow {
    type Error = sqlx::Error;

    fn try_from(value: PgRow) -> Result<Self, Self::Error> {
        use sqlx::Row;

        let id: i64 = value.try_get(ID_FIELD_NAME)?;
        let text: String = value.try_get(QUESTION_TEXT_FIELD_NAME)?;
        let publication_time: DateTime<Utc> = value.try_get(PUBLISHED_FIELD_NAME)?;

        Ok(QuestionRow {
            id,
            text,
            publication_time,
        })
    }
}

impl TryFrom<QuestionRow> for Question {
    type Error = RepositoryError;

    fn try_from(value: QuestionRow) -> Result<Self, Self::Error> {
        let id = QuestionId::try_new(value.id)
            .map_err(|err| RepositoryError::ValidationFailed(err.to_string()))?;
        let text = QuestionText::try_new(value.text)
            .map_err(|err| RepositoryError::ValidationFailed(err.to_string()))?;

        Ok(Question::new(id, text, value.publication_time))
    }
}

impl PostgresQuestionRepository {
    pub fn new(database: &'static Database) -> Self {
        let table_name = database.qualified_table_name(QUESTION_TABLE_NAME);
        Self {
            database,
            table_name,
        }
    }
}

fn select_columns(table_name: &str) -> String {
    format!(
        "SELECT \"{}\", \"{}\", \"{}\" FROM {}",
        ID_FIELD_NAME, QUESTION_TEXT_FIELD_NAME, PUBLISHED_FIELD_NAME, table_name
    )
}

fn find_published_sql(table_name: &str) -> String {
    format!(
        "{} WHERE \"{}\" <= $1 ORDER BY \"{}\" DESC, \"{}\" DESC",
        select_columns(table_name),
        PUBLISHED_FIELD_NAME,
        PUBLISHED_FIELD_NAME,
        ID_FIELD_NAME
    )
}

fn find_by_id_sql(table_name: &str) -> String {
    format!("{} WHERE \"{}\" = $1", select_columns(table_name), ID_FIELD_NAME)
}

fn insert_sql(table_name: &str) -> String {
    format!(
        "INSERT INTO {} (\"{}\", \"{}\") VALUES ($1, $2) RETURNING \"{}\", \"{}\", \"{}\"",
        table_name,
        QUESTION_TEXT_FIELD_NAME,
        PUBLISHED_FIELD_NAME,
        ID_FIELD_NAME,
        QUESTION_TEXT_FIELD_NAME,
        PUBLISHED_FIELD_NAME
    )
}

impl QuestionRepository for PostgresQuestionRepository {
    async fn find_published(&self, now: DateTime<Utc>) -> Result<Vec<Question>, RepositoryError> {
        use futures::TryStreamExt;

        let sql = find_published_sql(&self.table_name);
        let mut db_rows = sqlx::query(&sql)
            .bind(now)
            .fetch(self.database.database_pool());

        let mut questions = Vec::new();
        while let Some(row) = db_rows.try_next().await? {
            let question = Question::try_from(QuestionRow::try_from(row)?)?;
            questions.push(question);
        }

        Ok(questions)
    }

    async fn find_by_id(&self, id: QuestionId) -> Result<Option<Question>, RepositoryError> {
        let sql = find_by_id_sql(&self.table_name);
        let row = sqlx::query(&sql)
            .bind(id.into_inner())
            .fetch_optional(self.database.database_pool())
            .await?;

        match row {
            Some(row) => Ok(Some(Question::try_from(QuestionRow::try_from(row)?)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, question: NewQuestion) -> Result<Question, RepositoryError> {
        let sql = insert_sql(&self.table_name);
        let row = sqlx::query(&sql)
            .bind(question.text.as_ref())
            .bind(question.publication_time)
            .fetch_one(self.database.database_pool())
            .await?;

        Question::try_from(QuestionRow::try_from(row)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\"public\".\"polls_question\"";

    #[test]
    fn published_questions_query_filters_and_orders() {
        assert_eq!(
            find_published_sql(TABLE),
            "SELECT \"id\", \"question_text\", \"pub_date\" FROM \"public\".\"polls_question\" \
             WHERE \"pub_date\" <= $1 ORDER BY \"pub_date\" DESC, \"id\" DESC"
        );
    }

    #[test]
    fn find_by_id_query() {
        assert!(find_by_id_sql(TABLE).ends_with("FROM \"public\".\"polls_question\" WHERE \"id\" = $1"));
    }

    #[test]
    fn insert_query_returns_stored_row() {
        assert_eq!(
            insert_sql(TABLE),
            "INSERT INTO \"public\".\"polls_question\" (\"question_text\", \"pub_date\") VALUES ($1, $2) \
             RETURNING \"id\", \"question_text\", \"pub_date\""
        );
    }

    #[test]
    fn row_with_invalid_text_is_rejected() {
        let row = QuestionRow {
            id: 1,
            text: "  ".to_string(),
            publication_time: Utc::now(),
        };
        assert!(matches!(
            Question::try_from(row),
            Err(RepositoryError::ValidationFailed(_))
        ));
    }

    #[test]
    fn row_becomes_question() {
        let publication_time = Utc::now();
        let row = QuestionRow {
            id: 3,
            text: "What's up?".to_string(),
            publication_time,
        };
        let question = Question::try_from(row).unwrap();
        assert_eq!(question.id.into_inner(), 3);
        assert_eq!(question.text.as_ref(), "What's up?");
        assert_eq!(question.publication_time, publication_time);
    }
}
