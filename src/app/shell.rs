use crate::app::history::{History, Navigator};
use crate::app::routing::{self, Route};
use crate::app::views::{DashboardView, MessagesView, RecipeDetailPage, RecipesView};
use crate::core::RecipeService;
use crate::domain::model::RecipeId;
use crate::domain::ports::MessageSink;
use crate::utils::error::Result;
use std::sync::Arc;

pub enum Screen {
    Blank,
    Dashboard(DashboardView),
    Recipes(RecipesView),
    Detail(RecipeDetailPage),
}

/// Root composition: owns the current screen and keeps it in step with the
/// navigation history.
pub struct ChefApp {
    title: String,
    service: Arc<RecipeService>,
    history: Arc<History>,
    messages: MessagesView,
    dashboard_size: usize,
    route: Option<Route>,
    screen: Screen,
}

impl ChefApp {
    pub fn new(
        title: impl Into<String>,
        service: Arc<RecipeService>,
        messages: Arc<dyn MessageSink>,
        history: Arc<History>,
        dashboard_size: usize,
    ) -> Self {
        Self {
            title: title.into(),
            service,
            history,
            messages: MessagesView::new(messages),
            dashboard_size,
            route: None,
            screen: Screen::Blank,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub async fn navigate(&mut self, path: &str) -> Result<Route> {
        let route = routing::resolve(path)?;
        tracing::info!("🧭 {} -> {}", path, route);
        self.history.navigate_to(route);
        self.show(route).await;
        Ok(route)
    }

    async fn show(&mut self, route: Route) {
        self.screen = match route {
            Route::Dashboard => {
                let mut view = DashboardView::new(self.dashboard_size);
                view.load(&self.service).await;
                Screen::Dashboard(view)
            }
            Route::Recipes => {
                let mut view = RecipesView::new();
                view.load(&self.service).await;
                Screen::Recipes(view)
            }
            Route::Detail(id) => {
                let navigator: Arc<dyn Navigator> = self.history.clone();
                Screen::Detail(RecipeDetailPage::open(self.service.clone(), navigator, id).await)
            }
        };
        self.route = Some(route);
    }

    /// Reload the screen if a view moved the history elsewhere.
    async fn sync_with_history(&mut self) {
        match self.history.current() {
            Some(route) if Some(route) != self.route => self.show(route).await,
            Some(_) => {}
            None => {
                self.route = None;
                self.screen = Screen::Blank;
            }
        }
    }

    pub fn select_recipe(&mut self, id: RecipeId) -> bool {
        match &mut self.screen {
            Screen::Recipes(view) => view.select(id),
            _ => false,
        }
    }

    pub async fn search(&mut self, term: &str) -> bool {
        match &mut self.screen {
            Screen::Dashboard(view) => {
                view.search(&self.service, term).await;
                true
            }
            _ => false,
        }
    }

    pub fn edit_name(&mut self, name: impl Into<String>) -> bool {
        match &mut self.screen {
            Screen::Recipes(view) => view.rename_selected(name),
            Screen::Detail(page) => page.set_name(name),
            _ => false,
        }
    }

    pub async fn save(&mut self) -> bool {
        let saved = match &mut self.screen {
            Screen::Detail(page) => page.save().await,
            _ => false,
        };
        if saved {
            self.sync_with_history().await;
        }
        saved
    }

    pub async fn back(&mut self) {
        let handled = match &mut self.screen {
            Screen::Detail(page) => page.go_back(),
            _ => false,
        };
        if !handled {
            self.history.back();
        }
        self.sync_with_history().await;
    }

    pub fn clear_messages(&self) {
        self.messages.clear();
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "{}\n[{}] [{}]\n\n",
            self.title,
            Route::Dashboard,
            Route::Recipes
        );
        match &self.screen {
            Screen::Blank => {}
            Screen::Dashboard(view) => out.push_str(&view.render()),
            Screen::Recipes(view) => out.push_str(&view.render()),
            Screen::Detail(page) => out.push_str(&page.render()),
        }

        let messages = self.messages.render();
        if !messages.is_empty() {
            out.push('\n');
            out.push_str(&messages);
        }
        out
    }
}
