use chrono::{TimeDelta, Utc};

use crate::domain::{NewQuestion, QuestionText};

/// Builds a question published `days` away from now (negative for the past).
///
/// Public so that other crates can reuse it for their own tests.
pub fn create_question(text: &str, days: i64) -> NewQuestion {
    NewQuestion {
        text: QuestionText::try_new(text).unwrap(),
        publication_time: Utc::now() + TimeDelta::days(days),
    }
}

/// A question published thirty days ago
pub fn past_question(text: &str) -> NewQuestion {
    create_question(text, -30)
}

/// A question scheduled thirty days ahead
pub fn future_question() -> NewQuestion {
    create_question("Future question.", 30)
}
