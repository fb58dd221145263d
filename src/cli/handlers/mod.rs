mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BlogConfig;
use crate::graphql::{BlogSchema, build_schema, share};
use crate::storage::Store;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BlogConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: BlogConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Loads `config_path` if given, otherwise searches upward from the working directory.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let (config, root) = match config_path {
            Some(path) => BlogConfig::load(path),
            None => BlogConfig::discover(&std::env::current_dir()?),
        }
        .context("Failed to load blogql configuration")?;
        Ok(Self::new(config, root))
    }

    /// Schema over a freshly seeded store.
    pub fn schema(&self) -> Result<BlogSchema> {
        let store = Store::from_config(&self.config, &self.root)
            .context("Failed to seed the store")?;
        Ok(build_schema(share(store), &self.config.graphql))
    }
}
