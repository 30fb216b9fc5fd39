use std::fmt::{Display, Formatter};

use chrono::{DateTime, TimeDelta, Utc};
use nutype::nutype;
use serde::{Deserialize, Serialize};

/// How far back a publication still counts as recent
pub fn recent_publication_window() -> TimeDelta {
    TimeDelta::days(1)
}

/// Identifier of a persisted question, assigned by a BIGSERIAL column
#[nutype(
    validate(greater = 0),
    derive(
        Clone,
        Copy,
        Debug,
        Display,
        FromStr,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct QuestionId(i64);

/// Free-form question text; the length limit must stay equal to `QUESTION_TEXT_MAX_LEN`
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 200),
    derive(
        Clone,
        Debug,
        Display,
        AsRef,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize
    )
)]
pub struct QuestionText(String);

/// A poll question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: QuestionText,
    pub publication_time: DateTime<Utc>,
}

/// A question that is not stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: QuestionText,
    pub publication_time: DateTime<Utc>,
}

impl Question {
    pub fn new(id: QuestionId, text: QuestionText, publication_time: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            publication_time,
        }
    }

    /// True when published within the last day, both ends inclusive.
    /// Questions scheduled for the future are never recent.
    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        now - recent_publication_window() <= self.publication_time && self.publication_time <= now
    }

    pub fn was_published_recently(&self) -> bool {
        self.was_published_recently_at(Utc::now())
    }

    /// A question becomes visible once its publication time has been reached
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        self.publication_time <= now
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Order in which visible questions are listed: newest publication first,
/// equal publication times fall back to the newest row.
pub fn latest_first(a: &Question, b: &Question) -> std::cmp::Ordering {
    b.publication_time
        .cmp(&a.publication_time)
        .then_with(|| b.id.cmp(&a.id))
}

/// Questions already published at `now`, newest first
pub fn visible_questions(
    questions: impl IntoIterator<Item = Question>,
    now: DateTime<Utc>,
) -> Vec<Question> {
    let mut visible = questions
        .into_iter()
        .filter(|question| question.is_visible_at(now))
        .collect::<Vec<_>>();
    visible.sort_by(latest_first);
    visible
}
