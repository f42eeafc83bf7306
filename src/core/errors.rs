//! Shared error types for the application

use super::language::Language;
use thiserror::Error;

/// Main error type for codesniff operations
#[derive(Debug, Error)]
pub enum Error {
    /// A language name outside the supported set
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// A catalog rule whose pattern does not compile
    #[error("Invalid pattern for {language}: {pattern}")]
    InvalidPattern {
        language: Language,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A supported language without any signature
    #[error("Signature catalog has no entry for {0}")]
    IncompleteCatalog(Language),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an unknown-language error from a caller-supplied name
    pub fn unknown_language(name: impl Into<String>) -> Self {
        Self::UnknownLanguage(name.into())
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }

    /// Whether the caller can fix this by changing its input
    pub fn is_user_fixable(&self) -> bool {
        matches!(self, Self::UnknownLanguage(_) | Self::Configuration(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
