use async_graphql::ErrorExtensions;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BlogError {
    /// Machine-readable kind, exposed to GraphQL clients as the `code` extension.
    pub fn code(&self) -> &'static str {
        match self {
            BlogError::Validation(_) => "VALIDATION_ERROR",
            BlogError::NotFound(_) => "NOT_FOUND",
            _ => "INTERNAL",
        }
    }
}

impl ErrorExtensions for BlogError {
    fn extend(&self) -> async_graphql::Error {
        let code = self.code();
        async_graphql::Error::new(self.to_string()).extend_with(|_, ext| ext.set("code", code))
    }
}

pub type Result<T> = std::result::Result<T, BlogError>;
