// Adapters layer: concrete implementations of the domain ports (mock data, http, message log).

pub mod http_repository;
pub mod message_log;
pub mod mock_repository;

pub use http_repository::HttpRecipeRepository;
pub use message_log::MessageLog;
pub use mock_repository::{mock_recipes, MockRecipeRepository};

use crate::domain::ports::{ConfigProvider, RecipeRepository, SourceKind};
use crate::utils::error::Result;
use std::sync::Arc;

/// Builds the repository selected by `source_kind()`.
pub fn build_repository(config: &dyn ConfigProvider) -> Result<Arc<dyn RecipeRepository>> {
    match config.source_kind() {
        SourceKind::Mock => {
            tracing::debug!("Using the seeded mock recipe collection");
            Ok(Arc::new(MockRecipeRepository::seeded()))
        }
        SourceKind::Http => {
            tracing::debug!("Using the recipes API at {}", config.api_endpoint());
            let repository =
                HttpRecipeRepository::new(config.api_endpoint(), config.request_timeout())?;
            Ok(Arc::new(repository))
        }
    }
}
