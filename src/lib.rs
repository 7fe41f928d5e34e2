pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod server;
pub mod session;
pub mod transport;
pub mod validation;

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::models::ModelRecord;
use crate::search::{GeminiSearcher, ModelSearcher};
use crate::transport::{GeminiTransport, Transport};

/// Facade wiring the Gemini transport to the searcher.
pub struct AtlasService {
    searcher: Arc<GeminiSearcher>,
}

impl AtlasService {
    pub fn new(cfg: &Config) -> Self {
        let transport = Arc::new(GeminiTransport::new(cfg.gemini.api_key.clone()));

        let searcher = Arc::new(GeminiSearcher::new(
            transport as Arc<dyn Transport>,
            cfg.gemini.model.clone(),
        ));

        Self { searcher }
    }

    pub fn searcher(&self) -> Arc<dyn ModelSearcher> {
        Arc::clone(&self.searcher) as Arc<dyn ModelSearcher>
    }

    pub async fn search(&self, query: &str) -> Result<Vec<ModelRecord>> {
        self.searcher.search(query).await
    }
}
