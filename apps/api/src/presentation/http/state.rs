use crate::{config::Config, domain::recognition::recognizer::RecognitionClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub recognizer: Arc<dyn RecognitionClient>,
    pub config: Config,
}
