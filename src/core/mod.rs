pub mod recipe_service;

pub use crate::domain::model::{Ingredient, Recipe, RecipeId};
pub use crate::domain::ports::{ConfigProvider, MessageSink, RecipeRepository, SourceKind};
pub use crate::utils::error::Result;
pub use recipe_service::RecipeService;
