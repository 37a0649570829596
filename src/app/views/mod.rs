pub mod dashboard;
pub mod detail_page;
pub mod messages;
pub mod recipe_detail;
pub mod recipes;

pub use dashboard::DashboardView;
pub use detail_page::{DetailState, RecipeDetailPage};
pub use messages::MessagesView;
pub use recipe_detail::RecipeDetail;
pub use recipes::RecipesView;
