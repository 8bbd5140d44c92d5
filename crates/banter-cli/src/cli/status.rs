//! Backend status command.

use anyhow::Result;
use console::style;

use banter_infra::filesystem::config_path;
use banter_infra::generate::hf::client::TOKEN_ENV_VAR;

use crate::state::AppState;

/// Display the configured backend and data locations.
///
/// Shows version, generation endpoint, model, token presence, and where
/// configuration is read from.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let config_file = config_path(&state.data_dir);
    let has_config = tokio::fs::try_exists(&config_file).await.unwrap_or(false);
    let has_token = state.generator.has_token();

    if json {
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "config_path": config_file.display().to_string(),
            "config_present": has_config,
            "generator": {
                "endpoint": state.config.generator.base_url,
                "model": state.config.generator.model,
                "request_timeout_secs": state.config.generator.request_timeout_secs,
                "token_present": has_token,
            },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!(
        "  {} Banter v{}",
        style("💬").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!();

    // Generation backend
    println!("  {}", style("── Generator ──").dim());
    println!("  Endpoint: {}", state.config.generator.base_url);
    println!(
        "  Model:    {}",
        style(&state.config.generator.model).bold()
    );
    println!(
        "  Timeout:  {}s",
        state.config.generator.request_timeout_secs
    );
    if has_token {
        println!("  Token:    {}", style("present").green());
    } else {
        println!(
            "  Token:    {}",
            style(format!("not set (export {TOKEN_ENV_VAR} to raise rate limits)")).yellow()
        );
    }
    println!();

    // System
    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    if has_config {
        println!("  Config:   {}", style(config_file.display()).dim());
    } else {
        println!(
            "  Config:   {} {}",
            style(config_file.display()).dim(),
            style("(missing, defaults in use)").dim()
        );
    }
    println!();

    Ok(())
}
