#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub const DEFAULT_API_ENDPOINT: &str = "http://localhost:8080/recipes";
pub const DEFAULT_TITLE: &str = "Chef";
pub const DEFAULT_DASHBOARD_SIZE: usize = 4;
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::TomlConfig;
