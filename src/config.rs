use crate::error::{BlogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".blogql.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub graphql: GraphqlSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    4000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Load sample data at startup.
    #[serde(default = "default_seed")]
    pub seed: bool,

    /// YAML file replacing the built-in sample data, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<String>,

    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

fn default_seed() -> bool {
    true
}

fn default_id_length() -> usize {
    21
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            seed_file: None,
            id_length: default_id_length(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphqlSettings {
    /// Serve the GraphiQL IDE on `GET /`.
    #[serde(default = "default_graphiql")]
    pub graphiql: bool,

    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

fn default_graphiql() -> bool {
    true
}

fn default_max_depth() -> usize {
    32
}

impl Default for GraphqlSettings {
    fn default() -> Self {
        Self {
            graphiql: default_graphiql(),
            max_depth: default_max_depth(),
        }
    }
}

impl BlogConfig {
    /// Loads the nearest `.blogql.yml` at or above `start_path`.
    ///
    /// Falls back to defaults rooted at `start_path` when there is none.
    pub fn discover(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => Self::load(&config_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn load(config_path: &Path) -> Result<(Self, PathBuf)> {
        let content = std::fs::read_to_string(config_path).map_err(|e| {
            BlogError::Config(format!("Cannot read {}: {}", config_path.display(), e))
        })?;
        let config: BlogConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| BlogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.store.id_length == 0 {
            return Err(BlogError::Config(
                "store.id_length must be greater than zero".to_string(),
            ));
        }
        if self.graphql.max_depth == 0 {
            return Err(BlogError::Config(
                "graphql.max_depth must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn seed_path(&self, project_root: &Path) -> Option<PathBuf> {
        self.store
            .seed_file
            .as_ref()
            .map(|file| project_root.join(file))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let (config, root) = BlogConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(root, temp_dir.path());
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.store.seed);
        assert_eq!(config.store.id_length, 21);
        assert!(config.graphql.graphiql);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "server:\n  port: 8080\nstore:\n  seed: false\n",
        )
        .unwrap();

        let (config, _) = BlogConfig::discover(temp_dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(!config.store.seed);
        assert_eq!(config.graphql.max_depth, 32);
    }

    #[test]
    fn test_discover_searches_upward() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        BlogConfig::default()
            .save(&temp_dir.path().join(CONFIG_FILE_NAME))
            .unwrap();

        let (_, root) = BlogConfig::discover(&nested).unwrap();
        assert_eq!(root, temp_dir.path());
    }

    #[test]
    fn test_seed_path_is_relative_to_root() {
        let mut config = BlogConfig::default();
        assert!(config.seed_path(Path::new("/srv")).is_none());
        config.store.seed_file = Some("seed.yml".to_string());
        assert_eq!(
            config.seed_path(Path::new("/srv")),
            Some(PathBuf::from("/srv/seed.yml"))
        );
    }

    #[test]
    fn test_zero_id_length_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "store:\n  id_length: 0\n").unwrap();
        assert!(matches!(
            BlogConfig::load(&path),
            Err(BlogError::Config(_))
        ));
    }
}
