use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("`:not` container under `{prefix}` holds no rules")]
    EmptyNegation { prefix: String },
    #[error("`@media ({query})` container holds no rules")]
    EmptyMedia { query: String },
    #[error("Failed to read config file: {0}")]
    ReadConfig(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseConfig(#[from] toml::de::Error),
}
