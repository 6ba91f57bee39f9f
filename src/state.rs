use std::sync::Arc;

use crate::repo::UserRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn UserRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}
