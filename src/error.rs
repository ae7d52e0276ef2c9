use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageScoreError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid signals document: {0}")]
    InvalidSignals(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PageScoreError {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration(_) | Self::ConfigParse(_) | Self::Toml(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PageScoreError>;
