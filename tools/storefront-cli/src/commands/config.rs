//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use storefront_data::FetchClient;
use tracing_subscriber::EnvFilter;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{find_config_path, Context};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match find_config_path(&ctx.cwd) {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.line("");
    ctx.output.line("[api]");
    ctx.output.kv("base_url", &ctx.config.api.base_url);

    ctx.output.line("");
    ctx.output.line("[checkout]");
    ctx.output.kv("delay_ms", &ctx.config.checkout.delay_ms.to_string());

    ctx.output.line("");
    ctx.output.line("[submit]");
    ctx.output.kv("delay_ms", &ctx.config.submit.delay_ms.to_string());

    ctx.output.line("");
    ctx.output.line("[log]");
    ctx.output.kv("level", &ctx.config.log.level);

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

/// Errors and warnings for a loaded config.
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if let Err(e) = FetchClient::new(&config.api.base_url) {
        errors.push(format!("api.base_url: {}", e));
    } else if config.api.base_url.starts_with("http://") {
        warnings.push("api.base_url is not using https".to_string());
    }

    if EnvFilter::try_new(&config.log.level).is_err() {
        errors.push(format!("log.level '{}' is not a valid filter", config.log.level));
    }

    for (key, delay_ms) in [
        ("checkout.delay_ms", config.checkout.delay_ms),
        ("submit.delay_ms", config.submit.delay_ms),
    ] {
        if delay_ms > 60_000 {
            warnings.push(format!("{} is over a minute ({} ms)", key, delay_ms));
        }
    }

    (errors, warnings)
}
