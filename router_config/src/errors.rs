use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterConfigError {
    #[error("manifest file not found")]
    ConfigNotFound,
    #[error("package.metadata.orders-router section missing from manifest")]
    ConfigSectionNotFound,
    #[error("environment variable {0} is not valid unicode")]
    EnvError(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for RouterConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}
