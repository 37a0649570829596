use chef::adapters;
use chef::config::toml_config::LogFormat;
use chef::config::Command;
use chef::core::ConfigProvider;
use chef::utils::error::ErrorSeverity;
use chef::utils::{logger, validation::Validate};
use chef::{ChefApp, ChefError, CliConfig, History, MessageLog, RecipeService, Route, TomlConfig};
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置（如有指定）
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                apply_overrides(&mut config, &cli);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    // 初始化日誌
    let verbose = cli.verbose || file_config.as_ref().is_some_and(|c| c.verbose_logging());
    let json_logs = cli.json_logs
        || file_config
            .as_ref()
            .is_some_and(|c| c.log_format() == LogFormat::Json);
    if json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("Starting chef");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let config: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    // 組裝服務與畫面
    let messages = MessageLog::new();
    let repository = match adapters::build_repository(config) {
        Ok(repository) => repository,
        Err(e) => exit_with(e),
    };
    let service = Arc::new(RecipeService::new(repository, Arc::new(messages.clone())));
    let mut app = ChefApp::new(
        config.app_title(),
        service,
        Arc::new(messages),
        Arc::new(History::new()),
        config.dashboard_size(),
    );

    if let Err(e) = run_command(&mut app, &cli.command).await {
        exit_with(e);
    }

    if cli.quiet {
        app.clear_messages();
    }
    println!("{}", app.render());

    Ok(())
}

fn apply_overrides(config: &mut TomlConfig, cli: &CliConfig) {
    if let Some(source) = cli.source {
        config.source.r#type = source;
    }
    if let Some(endpoint) = &cli.api_endpoint {
        config.source.endpoint = Some(endpoint.clone());
    }
    if let Some(timeout) = cli.timeout_seconds {
        config.source.timeout_seconds = Some(timeout);
    }
    if let Some(size) = cli.dashboard_size {
        config.app.dashboard_size = Some(size);
    }
}

async fn run_command(app: &mut ChefApp, command: &Command) -> chef::Result<()> {
    match command {
        Command::Dashboard => {
            app.navigate("/dashboard").await?;
        }
        Command::List => {
            app.navigate("/recipes").await?;
        }
        Command::Select { id } => {
            app.navigate("/recipes").await?;
            if !app.select_recipe(*id) {
                return Err(ChefError::RecipeNotFound { id: *id });
            }
        }
        Command::Show { id } => {
            app.navigate(&Route::Detail(*id).path()).await?;
        }
        Command::Rename { id, name } => {
            app.navigate("/recipes").await?;
            app.navigate(&Route::Detail(*id).path()).await?;
            if !app.edit_name(name.clone()) {
                return Err(ChefError::RecipeNotFound { id: *id });
            }
            app.save().await;
        }
        Command::Search { term } => {
            app.navigate("/dashboard").await?;
            app.search(term).await;
        }
        Command::Open { path } => {
            app.navigate(path).await?;
        }
    }
    Ok(())
}

fn exit_with(e: ChefError) -> ! {
    tracing::error!(
        "❌ chef failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 2,
        ErrorSeverity::Medium => 3,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 4,
    };
    std::process::exit(exit_code);
}
