//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use gym_catalog::prelude::*;
use gym_data::{FetchClient, HttpCatalogApi};

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::{Output, TerminalNotifier};

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration came from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((path, config)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(PathBuf, CliConfig)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config_path, config));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// HTTP client pointed at the configured service.
    pub fn http_client(&self) -> FetchClient {
        FetchClient::new()
            .with_base_url(self.config.api.base_url.clone())
            .with_timeout(self.config.api.timeout())
            .with_default_header("Accept-Language", "ru")
    }

    pub fn catalog_api(&self) -> HttpCatalogApi {
        HttpCatalogApi::new(self.http_client())
    }

    /// Notifier printing toasts through the output handler.
    pub fn notifier(&self) -> Arc<TerminalNotifier> {
        Arc::new(TerminalNotifier::new(self.output.clone()))
    }

    /// A catalog page wired to the service, the given router and the terminal.
    pub fn catalog_page(&self, router: Arc<dyn Router>) -> CatalogPage {
        CatalogPage::new(
            Arc::new(self.catalog_api()),
            router,
            self.notifier(),
            self.config.catalog,
        )
    }
}
