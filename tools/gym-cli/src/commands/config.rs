//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { file, force } => init_config(&file, force, ctx),
        ConfigCommand::Validate { ping } => validate_config(ping, ctx).await,
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let config = &ctx.config;
    ctx.output.info("[api]");
    ctx.output.kv("base_url", &config.api.base_url);
    ctx.output.kv("timeout_secs", &config.api.timeout_secs.to_string());

    ctx.output.info("[catalog]");
    ctx.output.kv("page_size", &config.catalog.page_size.to_string());
    ctx.output.kv("price_ceiling", &config.catalog.price_ceiling.to_string());
    ctx.output.kv(
        "default_price_range",
        &format!(
            "{} - {}",
            config.catalog.default_price_range.from, config.catalog.default_price_range.to
        ),
    );
    ctx.output.kv("mobile_breakpoint", &config.catalog.mobile_breakpoint.to_string());

    ctx.output.info("[log]");
    ctx.output.kv("level", config.log.level.as_directive());
    ctx.output.kv("format", &format!("{:?}", config.log.format).to_lowercase());

    Ok(())
}

fn init_config(file: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(file);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let path = config_path.to_string_lossy();
    if file.ends_with(".json") {
        CliConfig::default().save(&path)?;
    } else {
        std::fs::write(&config_path, generate_default_config())?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

/// Problems found in a configuration: (errors, warnings).
fn check(config: &CliConfig) -> (Vec<String>, Vec<String>) {
    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let base_url = &config.api.base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        errors.push(format!("api.base_url '{}' must be an http(s) URL", base_url));
    }
    if config.api.timeout_secs == 0 {
        errors.push("api.timeout_secs must be greater than 0".to_string());
    }

    let limits = &config.catalog;
    if limits.page_size == 0 {
        errors.push("catalog.page_size must be greater than 0".to_string());
    }
    if !(limits.price_ceiling.is_finite() && limits.price_ceiling > 0.0) {
        errors.push("catalog.price_ceiling must be a positive number".to_string());
    }

    let range = limits.default_price_range;
    if !limits.is_valid_price(range.from) || !limits.is_valid_price(range.to) {
        errors.push(format!(
            "catalog.default_price_range must lie within 0 - {}",
            limits.price_ceiling
        ));
    } else if range.from > range.to {
        warnings.push("catalog.default_price_range starts above its end".to_string());
    }

    (errors, warnings)
}

async fn validate_config(ping: bool, ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = check(&ctx.config);

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }
    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    if ping {
        let spinner = ctx.output.spinner(&format!("Contacting {}...", ctx.config.api.base_url));
        let result = ctx.catalog_api().ping().await;
        spinner.finish_and_clear();

        match result {
            Ok(status) if status < 500 => {
                ctx.output.success(&format!("Catalog service answered with HTTP {}", status))
            }
            Ok(status) => bail!("Catalog service answered with HTTP {}", status),
            Err(e) => bail!("Catalog service unreachable: {}", e),
        }
    }

    if warnings.is_empty() {
        ctx.output.success("Configuration is valid");
    } else {
        ctx.output.success("Configuration is valid (with warnings)");
    }

    Ok(())
}
