pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpRecipeRepository, MessageLog, MockRecipeRepository};
pub use app::{ChefApp, History, Route, Screen};
pub use config::TomlConfig;
pub use crate::core::{Recipe, RecipeId, RecipeService};
pub use utils::error::{ChefError, Result};
