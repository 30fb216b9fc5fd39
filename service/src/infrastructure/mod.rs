use crate::domain::{AppState, repository::QuestionRepository};

pub mod http;
pub mod persistence;
pub mod settings;

#[derive(Clone)]
pub struct AppStateImpl<R: QuestionRepository> {
    repository: R,
}

impl<R: QuestionRepository> AppStateImpl<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R: QuestionRepository> AppState for AppStateImpl<R> {
    type R = R;

    fn repository(&self) -> &Self::R {
        &self.repository
    }
}
