use crate::app::routing::Route;
use crate::core::RecipeService;
use crate::domain::model::Recipe;

/// Top recipes plus the recipe search box.
#[derive(Debug)]
pub struct DashboardView {
    size: usize,
    top: Vec<Recipe>,
    search: Option<(String, Vec<Recipe>)>,
}

impl DashboardView {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            top: Vec::new(),
            search: None,
        }
    }

    pub async fn load(&mut self, service: &RecipeService) {
        self.top = service
            .list_recipes()
            .await
            .into_iter()
            .take(self.size)
            .collect();
    }

    pub async fn search(&mut self, service: &RecipeService, term: &str) {
        let found = service.search_recipes(term).await;
        self.search = Some((term.to_string(), found));
    }

    pub fn top_recipes(&self) -> &[Recipe] {
        &self.top
    }

    pub fn search_results(&self) -> Option<&[Recipe]> {
        self.search.as_ref().map(|(_, found)| found.as_slice())
    }

    pub fn render(&self) -> String {
        let mut out = String::from("Top Recipes\n");
        for recipe in &self.top {
            out.push_str(&format!("  {} -> {}\n", recipe.name, Route::Detail(recipe.id)));
        }

        if let Some((term, found)) = &self.search {
            out.push_str(&format!("\nRecipe Search: {}\n", term));
            if found.is_empty() {
                out.push_str("  (no matches)\n");
            }
            for recipe in found {
                out.push_str(&format!("  {} -> {}\n", recipe.name, Route::Detail(recipe.id)));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MessageLog, MockRecipeRepository};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_dashboard_shows_first_recipes() {
        let service = RecipeService::new(
            Arc::new(MockRecipeRepository::seeded()),
            Arc::new(MessageLog::new()),
        );
        let mut view = DashboardView::new(4);
        view.load(&service).await;

        let ids: Vec<u32> = view.top_recipes().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert!(view.render().contains("  Pancakes -> /detail/1\n"));
        assert!(view.search_results().is_none());
    }

    #[tokio::test]
    async fn test_search_results_are_rendered_below_top_recipes() {
        let service = RecipeService::new(
            Arc::new(MockRecipeRepository::seeded()),
            Arc::new(MessageLog::new()),
        );
        let mut view = DashboardView::new(2);
        view.load(&service).await;

        view.search(&service, "Curry").await;
        assert_eq!(view.search_results().map(|r| r.len()), Some(1));
        assert!(view
            .render()
            .ends_with("Recipe Search: Curry\n  Chicken Curry -> /detail/8\n"));

        view.search(&service, "Sushi").await;
        assert!(view.render().ends_with("Recipe Search: Sushi\n  (no matches)\n"));
    }
}
