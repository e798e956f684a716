use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatusError {
    #[error("failed to parse status hook JSON: {0}")]
    HookParse(#[from] serde_json::Error),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}
