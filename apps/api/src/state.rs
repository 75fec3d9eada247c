use std::sync::Arc;

use crate::config::Config;
use crate::skills::catalog::SkillCatalog;
use crate::skills::extractor::SkillExtractor;
use crate::skills::recommender::SkillRecommender;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SkillCatalog>,
    pub extractor: Arc<SkillExtractor>,
    /// Optional second opinion on uploads. None when no API key is configured.
    pub recommender: Option<Arc<dyn SkillRecommender>>,
    pub config: Config,
}

impl AppState {
    pub fn new(
        catalog: Arc<SkillCatalog>,
        recommender: Option<Arc<dyn SkillRecommender>>,
        config: Config,
    ) -> Self {
        let extractor = Arc::new(SkillExtractor::new(Arc::clone(&catalog)));
        Self {
            catalog,
            extractor,
            recommender,
            config,
        }
    }
}
