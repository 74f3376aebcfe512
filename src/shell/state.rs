use crate::modules::matches::core::ports::MatchRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub matches: Arc<dyn MatchRepository>,
}
