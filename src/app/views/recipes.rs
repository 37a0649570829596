use crate::app::views::recipe_detail::RecipeDetail;
use crate::core::RecipeService;
use crate::domain::model::{Recipe, RecipeId};

/// The recipe list with a single tracked selection.
#[derive(Debug, Default)]
pub struct RecipesView {
    recipes: Vec<Recipe>,
    selected: Option<RecipeId>,
}

impl RecipesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn load(&mut self, service: &RecipeService) {
        self.recipes = service.list_recipes().await;
        if let Some(id) = self.selected {
            if !self.recipes.iter().any(|r| r.id == id) {
                self.selected = None;
            }
        }
        tracing::debug!("Recipe list loaded with {} entries", self.recipes.len());
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Returns false (and leaves the selection alone) when `id` is not listed.
    pub fn select(&mut self, id: RecipeId) -> bool {
        if self.recipes.iter().any(|r| r.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn selected(&self) -> Option<&Recipe> {
        let id = self.selected?;
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Edits the name of the selected recipe in this view only.
    pub fn rename_selected(&mut self, name: impl Into<String>) -> bool {
        let Some(id) = self.selected else {
            return false;
        };
        match self.recipes.iter_mut().find(|r| r.id == id) {
            Some(recipe) => {
                recipe.name = name.into();
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::from("My Recipes\n");
        for recipe in &self.recipes {
            let marker = if Some(recipe.id) == self.selected { ">" } else { " " };
            out.push_str(&format!("{} [{}] {}\n", marker, recipe.id, recipe.name));
        }

        let detail = RecipeDetail::new(self.selected()).render();
        if !detail.is_empty() {
            out.push('\n');
            out.push_str(&detail);
            out.push('\n');
        }
        out
    }
}
