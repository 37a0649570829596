use crate::config::{
    DEFAULT_API_ENDPOINT, DEFAULT_DASHBOARD_SIZE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TITLE,
};
use crate::core::{ConfigProvider, SourceKind};
use crate::domain::model::RecipeId;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "chef")]
#[command(about = "Browse and edit recipes from the terminal")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where recipes come from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    #[arg(long)]
    pub api_endpoint: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Number of recipes on the dashboard
    #[arg(long)]
    pub dashboard_size: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Hide the messages panel")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show the dashboard with the top recipes
    Dashboard,
    /// List all recipes
    List,
    /// List all recipes and select one
    Select { id: RecipeId },
    /// Open the detail page of a recipe
    Show { id: RecipeId },
    /// Rename a recipe and save it
    Rename { id: RecipeId, name: String },
    /// Search recipes by name from the dashboard
    Search { term: String },
    /// Navigate to an arbitrary app path, e.g. /detail/7
    Open { path: String },
}

impl ConfigProvider for CliConfig {
    fn source_kind(&self) -> SourceKind {
        self.source.unwrap_or_default()
    }

    fn api_endpoint(&self) -> &str {
        self.api_endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn app_title(&self) -> &str {
        DEFAULT_TITLE
    }

    fn dashboard_size(&self) -> usize {
        self.dashboard_size.unwrap_or(DEFAULT_DASHBOARD_SIZE)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.source_kind() == SourceKind::Http {
            validation::validate_url("--api-endpoint", self.api_endpoint())?;
        }
        validation::validate_positive_number("--dashboard-size", self.dashboard_size(), 1)?;
        validation::validate_range(
            "--timeout-seconds",
            self.request_timeout().as_secs(),
            1,
            300,
        )?;
        Ok(())
    }
}
