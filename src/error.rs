use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    #[error("Invalid content: {message}")]
    InvalidContent { message: String },
}

impl FolioError {
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig { message: message.into() }
    }

    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
