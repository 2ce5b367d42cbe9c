
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecognizerError {
    #[error("Malformed time expression: {}", tokens.join(" "))]
    MalformedTimeExpression { tokens: Vec<String> },
    #[error("Grammar configuration error: {0}")]
    GrammarConfiguration(String),
    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RecognizerError>;

// Helper conversions
impl From<config::ConfigError> for RecognizerError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
