use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Duplicate property file in portfolio: {0}")]
    DuplicateFile(String),

    #[error("No API key found: set GEMINI_API_KEY, GOOGLE_API_KEY or API_KEY")]
    MissingApiKey,

    #[error("Message is required")]
    EmptyPrompt,

    #[error("AI service error: {0}")]
    AiService(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "gemini")]
impl From<reqwest::Error> for LedgerError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
