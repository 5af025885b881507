use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("Invalid color '{input}': {reason}")]
    ColorFormat { input: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration file error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Resolver error: {message}")]
    ResolverError { message: String },
}

pub type Result<T> = std::result::Result<T, KitError>;
