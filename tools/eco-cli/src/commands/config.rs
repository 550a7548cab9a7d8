//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::write_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force, format } => init_config(force, &format, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "config_path": ctx.config_path,
            "data_dir": ctx.data_dir(),
            "config": ctx.config,
        }));
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("data_dir", &ctx.data_dir().display().to_string());

    ctx.output.info("");
    ctx.output.info("[storefront]");
    ctx.output.kv("currency", ctx.config.storefront.currency.code());
    ctx.output.kv("per_page", &ctx.config.storefront.per_page.to_string());

    ctx.output.info("");
    ctx.output.info("[search]");
    ctx.output.kv("max_price", &ctx.config.search.max_price.to_string());
    ctx.output.kv("default_sort", &ctx.config.search.default_sort);

    ctx.output.info("");
    ctx.output.info("[rewards]");
    ctx.output.kv(
        "floor_negative_points",
        &ctx.config.rewards.floor_negative_points.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, format: &str, ctx: &Context) -> Result<()> {
    let name = if format == "json" { CONFIG_NAMES[2] } else { CONFIG_NAMES[0] };
    let config_path = ctx.cwd.join(name);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    write_default_config(&config_path)?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
