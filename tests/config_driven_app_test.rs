use anyhow::Result;
use chef::adapters::build_repository;
use chef::core::ConfigProvider;
use chef::domain::ports::MessageSink;
use chef::utils::validation::Validate;
use chef::{ChefApp, History, MessageLog, RecipeService, Screen, TomlConfig};
use httpmock::prelude::*;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn build_app(config: &TomlConfig) -> Result<(ChefApp, MessageLog)> {
    config.validate()?;
    let log = MessageLog::new();
    let repository = build_repository(config)?;
    let service = Arc::new(RecipeService::new(repository, Arc::new(log.clone())));
    let app = ChefApp::new(
        config.app_title(),
        service,
        Arc::new(log.clone()),
        Arc::new(History::new()),
        config.dashboard_size(),
    );
    Ok((app, log))
}

#[tokio::test]
async fn test_mock_config_dashboard_and_search() -> Result<()> {
    let mut temp_file = NamedTempFile::new()?;
    temp_file.write_all(
        br#"
[app]
title = "Test Kitchen"
dashboard_size = 2

[source]
type = "mock"
"#,
    )?;

    let config = TomlConfig::from_file(temp_file.path())?;
    let (mut app, log) = build_app(&config)?;

    app.navigate("").await?;
    match app.screen() {
        Screen::Dashboard(view) => assert_eq!(view.top_recipes().len(), 2),
        _ => panic!("root should redirect to the dashboard"),
    }

    assert!(app.search("Soup").await);
    let rendered = app.render();
    assert!(rendered.starts_with("Test Kitchen\n"));
    assert!(rendered.contains("Recipe Search: Soup\n  Tomato Soup -> /detail/2\n"));
    assert_eq!(
        log.messages(),
        vec![
            "RecipeService: fetched 10 recipes",
            "RecipeService: found 1 recipes matching \"Soup\"",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_http_config_save_puts_recipe() -> Result<()> {
    let server = MockServer::start();
    let get_mock = server.mock(|when, then| {
        when.method(GET).path("/api/recipes/5");
        then.status(200)
            .json_body(serde_json::json!({"id": 5, "name": "Margherita Pizza"}));
    });
    let put_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/recipes")
            .json_body(serde_json::json!({"id": 5, "name": "Marinara Pizza", "ingredients": []}));
        then.status(200)
            .json_body(serde_json::json!({"id": 5, "name": "Marinara Pizza"}));
    });

    let toml_content = format!(
        "[source]\ntype = \"http\"\nendpoint = \"{}\"\ntimeout_seconds = 5\n",
        server.url("/api/recipes")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;
    let (mut app, log) = build_app(&config)?;

    app.navigate("/detail/5").await?;
    assert!(app.edit_name("Marinara Pizza"));
    assert!(app.save().await);

    get_mock.assert();
    put_mock.assert();
    assert_eq!(app.history().back_calls(), 1);
    assert!(log
        .messages()
        .contains(&"RecipeService: updated recipe id=5".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_http_save_failure_still_navigates_back() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/recipes/5");
        then.status(200)
            .json_body(serde_json::json!({"id": 5, "name": "Margherita Pizza"}));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/api/recipes");
        then.status(500);
    });

    let toml_content = format!(
        "[source]\ntype = \"http\"\nendpoint = \"{}\"\n",
        server.url("/api/recipes")
    );
    let config = TomlConfig::from_toml_str(&toml_content)?;
    let (mut app, log) = build_app(&config)?;

    app.navigate("/detail/5").await?;
    app.edit_name("Marinara Pizza");
    assert!(app.save().await);

    assert_eq!(app.history().back_calls(), 1);
    assert!(log
        .messages()
        .iter()
        .any(|m| m.starts_with("RecipeService: update_recipe id=5 failed")));
    Ok(())
}
