use crate::domain::model::{Recipe, RecipeId};
use crate::domain::ports::{MessageSink, RecipeRepository};
use crate::utils::error::{ChefError, Result};
use std::sync::Arc;

/// Mediates between the views and whichever repository backs the app.
///
/// Every call records a `RecipeService: ...` line in the message sink. Listing
/// and searching are fail-soft: a repository failure is recorded once and the
/// caller gets an empty list. Lookups and updates return their errors so the
/// view can decide how to degrade.
pub struct RecipeService {
    repository: Arc<dyn RecipeRepository>,
    messages: Arc<dyn MessageSink>,
}

impl RecipeService {
    pub fn new(repository: Arc<dyn RecipeRepository>, messages: Arc<dyn MessageSink>) -> Self {
        Self {
            repository,
            messages,
        }
    }

    fn log(&self, message: impl AsRef<str>) {
        self.messages
            .add(format!("RecipeService: {}", message.as_ref()));
    }

    /// Record a failed operation and let the app continue with `fallback`.
    fn handle_error<T>(&self, operation: &str, error: ChefError, fallback: T) -> T {
        tracing::warn!("{} failed: {}", operation, error);
        self.log(format!("{} failed: {}", operation, error));
        fallback
    }

    pub async fn list_recipes(&self) -> Vec<Recipe> {
        match self.repository.list().await {
            Ok(recipes) => {
                self.log(format!("fetched {} recipes", recipes.len()));
                recipes
            }
            Err(e) => self.handle_error("list_recipes", e, Vec::new()),
        }
    }

    pub async fn get_recipe(&self, id: RecipeId) -> Result<Recipe> {
        match self.repository.find(id).await {
            Ok(Some(recipe)) => {
                self.log(format!("fetched recipe id={}", id));
                Ok(recipe)
            }
            Ok(None) => {
                self.log(format!("no recipe found with id={}", id));
                Err(ChefError::RecipeNotFound { id })
            }
            Err(e) => {
                self.log(format!("get_recipe id={} failed: {}", id, e));
                Err(e)
            }
        }
    }

    pub async fn update_recipe(&self, recipe: &Recipe) -> Result<Recipe> {
        match self.repository.update(recipe).await {
            Ok(Some(updated)) => {
                self.log(format!("updated recipe id={}", recipe.id));
                Ok(updated)
            }
            Ok(None) => {
                self.log(format!("cannot update missing recipe id={}", recipe.id));
                Err(ChefError::RecipeNotFound { id: recipe.id })
            }
            Err(e) => {
                self.log(format!("update_recipe id={} failed: {}", recipe.id, e));
                Err(e)
            }
        }
    }

    pub async fn search_recipes(&self, term: &str) -> Vec<Recipe> {
        if term.trim().is_empty() {
            self.log("empty search term, nothing to look up");
            return Vec::new();
        }

        match self.repository.search(term).await {
            Ok(found) if found.is_empty() => {
                self.log(format!("no recipes matching \"{}\"", term));
                found
            }
            Ok(found) => {
                self.log(format!("found {} recipes matching \"{}\"", found.len(), term));
                found
            }
            Err(e) => self.handle_error("search_recipes", e, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{mock_recipes, MessageLog, MockRecipeRepository};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Repository whose every call fails, counting how often it was hit.
    #[derive(Default)]
    struct FailingRepository {
        calls: AtomicUsize,
    }

    impl FailingRepository {
        fn fail(&self) -> ChefError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            ChefError::UnexpectedStatus {
                status: 503,
                url: "http://test.invalid/api/recipes".to_string(),
            }
        }
    }

    #[async_trait]
    impl RecipeRepository for FailingRepository {
        async fn list(&self) -> Result<Vec<Recipe>> {
            Err(self.fail())
        }
        async fn find(&self, _id: RecipeId) -> Result<Option<Recipe>> {
            Err(self.fail())
        }
        async fn search(&self, _text: &str) -> Result<Vec<Recipe>> {
            Err(self.fail())
        }
        async fn update(&self, _recipe: &Recipe) -> Result<Option<Recipe>> {
            Err(self.fail())
        }
    }

    fn seeded_service() -> (RecipeService, MessageLog) {
        let log = MessageLog::new();
        let service = RecipeService::new(
            Arc::new(MockRecipeRepository::seeded()),
            Arc::new(log.clone()),
        );
        (service, log)
    }

    fn failing_service() -> (RecipeService, Arc<FailingRepository>, MessageLog) {
        let log = MessageLog::new();
        let repo = Arc::new(FailingRepository::default());
        let service = RecipeService::new(repo.clone(), Arc::new(log.clone()));
        (service, repo, log)
    }

    #[tokio::test]
    async fn test_list_matches_mock_source_order() {
        let (service, log) = seeded_service();

        let recipes = service.list_recipes().await;

        assert_eq!(recipes, mock_recipes());
        assert_eq!(log.messages(), vec!["RecipeService: fetched 10 recipes"]);
    }

    #[tokio::test]
    async fn test_list_failure_is_fail_soft() {
        let (service, repo, log) = failing_service();

        let recipes = service.list_recipes().await;

        assert!(recipes.is_empty());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
        let messages = log.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("list_recipes"));
        assert!(messages[0].contains("503"));
    }

    #[tokio::test]
    async fn test_get_recipe_for_every_seeded_id() {
        let (service, log) = seeded_service();

        for expected in mock_recipes() {
            let recipe = service.get_recipe(expected.id).await.unwrap();
            assert_eq!(recipe.id, expected.id);
        }
        assert_eq!(log.len(), mock_recipes().len());
        assert_eq!(log.messages()[6], "RecipeService: fetched recipe id=7");
    }

    #[tokio::test]
    async fn test_get_missing_recipe_is_not_found() {
        let (service, log) = seeded_service();

        let err = service.get_recipe(404).await.unwrap_err();

        assert!(matches!(err, ChefError::RecipeNotFound { id: 404 }));
        assert_eq!(
            log.messages(),
            vec!["RecipeService: no recipe found with id=404"]
        );
    }

    #[tokio::test]
    async fn test_get_recipe_propagates_repository_failure() {
        let (service, _repo, log) = failing_service();

        let err = service.get_recipe(1).await.unwrap_err();

        assert!(matches!(err, ChefError::UnexpectedStatus { .. }));
        assert!(log.messages()[0].contains("get_recipe id=1 failed"));
    }

    #[tokio::test]
    async fn test_update_is_visible_to_later_lookups() {
        let (service, log) = seeded_service();
        let mut recipe = service.get_recipe(7).await.unwrap();
        recipe.name = "Confit Byaldi".to_string();

        let updated = service.update_recipe(&recipe).await.unwrap();

        assert_eq!(updated.name, "Confit Byaldi");
        assert_eq!(service.get_recipe(7).await.unwrap().name, "Confit Byaldi");
        assert!(log
            .messages()
            .contains(&"RecipeService: updated recipe id=7".to_string()));
    }

    #[tokio::test]
    async fn test_update_missing_recipe_is_not_found() {
        let (service, _log) = seeded_service();

        let err = service
            .update_recipe(&Recipe::new(77, "Phantom"))
            .await
            .unwrap_err();
        assert!(matches!(err, ChefError::RecipeNotFound { id: 77 }));
    }

    #[tokio::test]
    async fn test_search_blank_term_skips_repository() {
        let (service, repo, log) = failing_service();

        assert!(service.search_recipes("   ").await.is_empty());
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn test_search_finds_by_substring() {
        let (service, log) = seeded_service();

        let found = service.search_recipes("Pizza").await;

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 5);
        assert_eq!(
            log.messages(),
            vec!["RecipeService: found 1 recipes matching \"Pizza\""]
        );
    }

    #[tokio::test]
    async fn test_search_failure_is_fail_soft() {
        let (service, _repo, log) = failing_service();

        assert!(service.search_recipes("Soup").await.is_empty());
        assert!(log.messages()[0].starts_with("RecipeService: search_recipes failed"));
    }
}
