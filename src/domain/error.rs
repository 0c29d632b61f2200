use thiserror::Error;

/// Top-level error type for the facade.
#[derive(Error, Debug)]
pub enum FacadeError {
    #[error("Missing backend: {0} must be supplied before building the adapter")]
    MissingBackend(&'static str),

    #[error("Invalid log level '{input}'. Valid levels: {valid_levels:?}")]
    InvalidLogLevel {
        input: String,
        valid_levels: Vec<String>,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
