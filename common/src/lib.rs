mod domain;

pub mod database;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Persisted questions table and field names

pub const QUESTION_TABLE_NAME: &str = "polls_question";

pub const ID_FIELD_NAME: &str = "id";
pub const QUESTION_TEXT_FIELD_NAME: &str = "question_text";
pub const PUBLISHED_FIELD_NAME: &str = "pub_date";

pub const QUESTION_TEXT_MAX_LEN: usize = 200;

// expose domain module

pub use domain::*;
pub use database::connect as connect_to_database;
