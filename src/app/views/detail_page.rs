use crate::app::history::Navigator;
use crate::app::views::recipe_detail::RecipeDetail;
use crate::core::RecipeService;
use crate::domain::model::{Recipe, RecipeId};
use std::sync::Arc;

/// Lifecycle of the routed detail page.
///
/// `Loading -> Ready -> (Editing)* -> Saved | Cancelled`. A failed lookup
/// lands in `Missing`, from which only `go_back` is possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailState {
    Loading,
    Ready,
    Editing,
    Missing,
    Saved,
    Cancelled,
}

impl DetailState {
    pub fn is_terminal(self) -> bool {
        matches!(self, DetailState::Saved | DetailState::Cancelled)
    }

    fn is_editable(self) -> bool {
        matches!(self, DetailState::Ready | DetailState::Editing)
    }
}

pub struct RecipeDetailPage {
    service: Arc<RecipeService>,
    navigator: Arc<dyn Navigator>,
    id: RecipeId,
    recipe: Option<Recipe>,
    state: DetailState,
}

impl RecipeDetailPage {
    pub fn new(service: Arc<RecipeService>, navigator: Arc<dyn Navigator>, id: RecipeId) -> Self {
        Self {
            service,
            navigator,
            id,
            recipe: None,
            state: DetailState::Loading,
        }
    }

    pub async fn open(
        service: Arc<RecipeService>,
        navigator: Arc<dyn Navigator>,
        id: RecipeId,
    ) -> Self {
        let mut page = Self::new(service, navigator, id);
        page.load().await;
        page
    }

    pub async fn load(&mut self) {
        if self.state != DetailState::Loading {
            return;
        }
        match self.service.get_recipe(self.id).await {
            Ok(recipe) => {
                self.recipe = Some(recipe);
                self.state = DetailState::Ready;
            }
            Err(e) => {
                tracing::warn!("Detail page for id={} has nothing to show: {}", self.id, e);
                self.state = DetailState::Missing;
            }
        }
    }

    pub fn id(&self) -> RecipeId {
        self.id
    }

    pub fn state(&self) -> DetailState {
        self.state
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        if !self.state.is_editable() {
            return false;
        }
        match self.recipe.as_mut() {
            Some(recipe) => {
                recipe.name = name.into();
                self.state = DetailState::Editing;
                true
            }
            None => false,
        }
    }

    /// Persists the recipe and navigates back. Navigation happens whether or
    /// not the update succeeded.
    pub async fn save(&mut self) -> bool {
        if !self.state.is_editable() {
            return false;
        }
        if let Some(recipe) = &self.recipe {
            if let Err(e) = self.service.update_recipe(recipe).await {
                tracing::warn!("Saving recipe id={} failed: {}", recipe.id, e);
            }
        }
        self.state = DetailState::Saved;
        self.navigator.back();
        true
    }

    pub fn go_back(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        self.state = DetailState::Cancelled;
        self.navigator.back();
        true
    }

    pub fn render(&self) -> String {
        match self.state {
            DetailState::Loading => format!("Loading recipe {}...\n", self.id),
            DetailState::Missing => format!("No recipe with id={}\n[back]\n", self.id),
            _ => format!(
                "{}\n[save] [back]\n",
                RecipeDetail::new(self.recipe.as_ref()).render()
            ),
        }
    }
}
