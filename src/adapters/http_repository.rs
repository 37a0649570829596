use crate::domain::model::{Recipe, RecipeId};
use crate::domain::ports::RecipeRepository;
use crate::utils::error::{ChefError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Talks to the recipes API (`GET`/`PUT` on a configured endpoint).
pub struct HttpRecipeRepository {
    client: Client,
    endpoint: String,
}

impl HttpRecipeRepository {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn recipe_url(&self, id: RecipeId) -> String {
        format!("{}/{}", self.endpoint, id)
    }

    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            tracing::error!("❌ API request failed with status: {}", status);
            Err(ChefError::UnexpectedStatus {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let body = Self::check_status(response)?.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl RecipeRepository for HttpRecipeRepository {
    async fn list(&self) -> Result<Vec<Recipe>> {
        tracing::debug!("📡 GET {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        tracing::debug!("📡 API response status: {}", response.status());

        let recipes: Vec<Recipe> = Self::read_json(response).await?;
        tracing::info!("📡 Fetched {} recipes from API", recipes.len());
        Ok(recipes)
    }

    async fn find(&self, id: RecipeId) -> Result<Option<Recipe>> {
        let url = self.recipe_url(id);
        tracing::debug!("📡 GET {}", url);
        let response = self.client.get(&url).send().await?;

        // 404 代表找不到該食譜
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let recipe = Self::read_json(response).await?;
        Ok(Some(recipe))
    }

    async fn search(&self, text: &str) -> Result<Vec<Recipe>> {
        let url = format!("{}/", self.endpoint);
        tracing::debug!("📡 GET {}?name={}", url, text);
        let response = self.client.get(&url).query(&[("name", text)]).send().await?;

        let recipes = Self::read_json(response).await?;
        Ok(recipes)
    }

    async fn update(&self, recipe: &Recipe) -> Result<Option<Recipe>> {
        tracing::debug!("📡 PUT {} (id={})", self.endpoint, recipe.id);
        let response = self.client.put(&self.endpoint).json(recipe).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let updated = Self::read_json(response).await?;
        Ok(Some(updated))
    }
}
