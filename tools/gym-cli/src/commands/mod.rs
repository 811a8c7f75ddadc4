//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod part;

use clap::{Args, Subcommand, ValueEnum};
use gym_catalog::prelude::{PartId, SortMode};

/// Sort mode accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortArg {
    Cheap,
    Expensive,
    Popular,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Cheap => SortMode::Cheap,
            SortArg::Expensive => SortMode::Expensive,
            SortArg::Popular => SortMode::Popular,
        }
    }
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog URL, e.g. `/catalog?offset=2&priceFrom=1500&priceTo=3000`.
    #[arg(default_value = "/catalog")]
    pub url: String,

    /// Go to this page (1-based) after loading.
    #[arg(short, long)]
    pub page: Option<u32>,

    /// Re-sort the loaded page.
    #[arg(short, long, value_enum)]
    pub sort: Option<SortArg>,
}

/// Arguments for the filter command.
#[derive(Args)]
pub struct FilterArgs {
    /// Catalog URL to start from.
    #[arg(default_value = "/catalog")]
    pub url: String,

    /// Viewport width in pixels; picks the desktop or mobile panel.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,
}

/// Arguments for the part command.
#[derive(Args)]
pub struct PartArgs {
    /// Part ID.
    pub id: PartId,
}

/// Arguments for the dashboard command.
#[derive(Args)]
pub struct DashboardArgs {
    /// Show at most N parts per section.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// File to create (`.json` writes JSON).
        #[arg(default_value = "gym.toml")]
        file: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate {
        /// Also check that the catalog service answers.
        #[arg(long)]
        ping: bool,
    },
}
