//! Named routes of the polls pages, and their reverse lookup.

use polls_common::QuestionId;

/// `polls:index`
pub const INDEX: &str = "/polls/";
/// `polls:detail`
pub const DETAIL: &str = "/polls/{question_id}/";

pub const API_QUESTIONS: &str = "/polls";
pub const API_QUESTION: &str = "/polls/{question_id}";

pub fn index_url() -> String {
    INDEX.to_string()
}

pub fn detail_url(id: QuestionId) -> String {
    DETAIL.replace("{question_id}", &id.to_string())
}
