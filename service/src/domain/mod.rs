use crate::domain::repository::QuestionRepository;

pub mod polls;
pub mod repository;

/// The global application state shared between all request handlers.
pub trait AppState: Clone + Send + Sync + 'static {
    type R: QuestionRepository;
    fn repository(&self) -> &Self::R;
}
