use crate::domain::model::{Recipe, RecipeId};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where recipes come from: the seeded mock collection or the HTTP API.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Recipe>>;
    async fn find(&self, id: RecipeId) -> Result<Option<Recipe>>;
    /// Recipes whose name contains `text`.
    async fn search(&self, text: &str) -> Result<Vec<Recipe>>;
    /// Returns `None` when no recipe with the same id exists.
    async fn update(&self, recipe: &Recipe) -> Result<Option<Recipe>>;
}

/// Collector for the human-readable diagnostic messages shown in the UI.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
    fn messages(&self) -> Vec<String>;
    fn clear(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    Mock,
    Http,
}

pub trait ConfigProvider: Send + Sync {
    fn source_kind(&self) -> SourceKind;
    fn api_endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn app_title(&self) -> &str;
    fn dashboard_size(&self) -> usize;
}
