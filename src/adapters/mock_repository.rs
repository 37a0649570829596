use crate::domain::model::{Ingredient, Recipe, RecipeId};
use crate::domain::ports::RecipeRepository;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};

fn ingredient(id: u32, name: &str, quantity: f64, unit: &str) -> Ingredient {
    Ingredient {
        id,
        name: name.to_string(),
        quantity,
        unit: unit.to_string(),
    }
}

/// The hard-coded collection the app starts with while there is no backend.
pub fn mock_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(1, "Pancakes").with_ingredients(vec![
            ingredient(1, "flour", 1.5, "cups"),
            ingredient(2, "milk", 1.25, "cups"),
            ingredient(3, "egg", 1.0, "whole"),
        ]),
        Recipe::new(2, "Tomato Soup").with_ingredients(vec![
            ingredient(4, "tomatoes", 800.0, "g"),
            ingredient(5, "onion", 1.0, "whole"),
        ]),
        Recipe::new(3, "Caesar Salad"),
        Recipe::new(4, "Beef Stew"),
        Recipe::new(5, "Margherita Pizza").with_ingredients(vec![
            ingredient(6, "pizza dough", 1.0, "ball"),
            ingredient(7, "mozzarella", 125.0, "g"),
            ingredient(8, "basil", 6.0, "leaves"),
        ]),
        Recipe::new(6, "Pad Thai"),
        Recipe::new(7, "Ratatouille"),
        Recipe::new(8, "Chicken Curry"),
        Recipe::new(9, "Banana Bread"),
        Recipe::new(10, "Guacamole"),
    ]
}

/// In-memory repository seeded from [`mock_recipes`].
///
/// Updates replace the stored record in place and live for the process lifetime.
pub struct MockRecipeRepository {
    recipes: Mutex<Vec<Recipe>>,
}

impl MockRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Mutex::new(recipes),
        }
    }

    pub fn seeded() -> Self {
        Self::new(mock_recipes())
    }

    fn recipes(&self) -> MutexGuard<'_, Vec<Recipe>> {
        self.recipes.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for MockRecipeRepository {
    fn default() -> Self {
        Self::seeded()
    }
}

#[async_trait]
impl RecipeRepository for MockRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        Ok(self.recipes().clone())
    }

    async fn find(&self, id: RecipeId) -> Result<Option<Recipe>> {
        Ok(self.recipes().iter().find(|r| r.id == id).cloned())
    }

    async fn search(&self, text: &str) -> Result<Vec<Recipe>> {
        Ok(self
            .recipes()
            .iter()
            .filter(|r| r.name.contains(text))
            .cloned()
            .collect())
    }

    async fn update(&self, recipe: &Recipe) -> Result<Option<Recipe>> {
        let mut recipes = self.recipes();
        match recipes.iter_mut().find(|r| r.id == recipe.id) {
            Some(stored) => {
                *stored = recipe.clone();
                tracing::debug!("Mock store updated recipe id={}", recipe.id);
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_ids_are_unique() {
        let recipes = mock_recipes();
        let ids: HashSet<RecipeId> = recipes.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), recipes.len());
        assert!(ids.contains(&7));
    }

    #[tokio::test]
    async fn test_find_every_seeded_id() {
        let repo = MockRecipeRepository::seeded();
        for recipe in mock_recipes() {
            let found = repo.find(recipe.id).await.unwrap().unwrap();
            assert_eq!(found.id, recipe.id);
        }
        assert!(repo.find(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_search_is_substring_match() {
        let repo = MockRecipeRepository::seeded();
        let found = repo.search("Bread").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Banana Bread");

        // case-sensitive like the API
        assert!(repo.search("bread").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let repo = MockRecipeRepository::seeded();
        let mut recipe = repo.find(3).await.unwrap().unwrap();
        recipe.name = "Greek Salad".to_string();

        let updated = repo.update(&recipe).await.unwrap();
        assert_eq!(updated, Some(recipe.clone()));

        let all = repo.list().await.unwrap();
        assert_eq!(all[2], recipe);
        assert_eq!(all.len(), mock_recipes().len());
    }

    #[test]
    fn test_update_unknown_id_returns_none() {
        let repo = MockRecipeRepository::new(vec![Recipe::new(1, "Only")]);
        let result = tokio_test::block_on(repo.update(&Recipe::new(2, "Ghost"))).unwrap();
        assert!(result.is_none());
    }
}
