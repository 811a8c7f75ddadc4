//! Gym CLI - Terminal storefront for the Gym Service catalog.
//!
//! Commands:
//! - `gym catalog` - Load a catalog URL and print the page
//! - `gym filter` - Drive the filter panel interactively
//! - `gym part` - Show one part
//! - `gym dashboard` - Show bestsellers and new arrivals
//! - `gym config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gym_observability::LogLevel;

use commands::{CatalogArgs, ConfigArgs, DashboardArgs, FilterArgs, PartArgs};

/// Gym CLI - Browse and filter the Gym Service catalog
#[derive(Parser)]
#[command(name = "gym")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a catalog URL and print the resulting page
    Catalog(CatalogArgs),

    /// Open the filter panel for a catalog URL
    Filter(FilterArgs),

    /// Show a single part
    Part(PartArgs),

    /// Show bestsellers and new arrivals
    Dashboard(DashboardArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let mut log = ctx.config.log;
    if cli.verbose {
        log.level = log.level.min(LogLevel::Debug);
    }
    match gym_observability::init(log) {
        Ok(session) => tracing::debug!(session = %session, "Session started"),
        Err(e) => ctx.output.warn(&e.to_string()),
    }

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Filter(args) => commands::filter::run(args, &ctx).await,
        Commands::Part(args) => commands::part::run(args, &ctx).await,
        Commands::Dashboard(args) => commands::dashboard::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
