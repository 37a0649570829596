use crate::domain::model::RecipeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChefError {
    #[error("API request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("No recipe found with id={id}")]
    RecipeNotFound { id: RecipeId },

    #[error("No route matches '{path}'")]
    RouteNotFound { path: String },

    #[error("Invalid route parameter '{param}': {value}")]
    InvalidRouteParameter { param: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Navigation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ChefError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChefError::HttpError(_) | ChefError::UnexpectedStatus { .. } => ErrorCategory::Network,
            ChefError::SerializationError(_) | ChefError::RecipeNotFound { .. } => {
                ErrorCategory::Data
            }
            ChefError::TomlParseError(_)
            | ChefError::ConfigError { .. }
            | ChefError::InvalidConfigValueError { .. }
            | ChefError::MissingConfigError { .. } => ErrorCategory::Configuration,
            ChefError::RouteNotFound { .. } | ChefError::InvalidRouteParameter { .. } => {
                ErrorCategory::Navigation
            }
            ChefError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Navigation => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ChefError::HttpError(_) | ChefError::UnexpectedStatus { .. } => {
                "Check that the recipes API is reachable, or run with --source mock"
            }
            ChefError::RecipeNotFound { .. } => "Run `chef list` to see the available recipe ids",
            ChefError::RouteNotFound { .. } | ChefError::InvalidRouteParameter { .. } => {
                "Valid paths are /dashboard, /recipes and /detail/<id>"
            }
            ChefError::TomlParseError(_)
            | ChefError::ConfigError { .. }
            | ChefError::InvalidConfigValueError { .. }
            | ChefError::MissingConfigError { .. } => {
                "Review the configuration file and command line flags"
            }
            ChefError::SerializationError(_) => "The API returned data that does not match the recipe format",
            ChefError::IoError(_) => "Check file permissions and paths",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ChefError::HttpError(_) | ChefError::UnexpectedStatus { .. } => {
                format!("Could not talk to the recipes API ({})", self)
            }
            ChefError::RecipeNotFound { id } => format!("Recipe {} does not exist", id),
            ChefError::RouteNotFound { path } => format!("Page '{}' not found", path),
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ChefError>;
