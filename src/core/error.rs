use thiserror::Error;

/// Core error types for itemtrack
#[derive(Debug, Error)]
pub enum Error {
    /// Sort field name not recognized
    #[error("Unknown sort field: {0}")]
    InvalidField(String),

    /// Sort direction name not recognized
    #[error("Unknown sort direction: {0}")]
    InvalidDirection(String),

    /// Only one of durability / max durability was supplied
    #[error("Durability and max durability must both be set or both be empty")]
    IncompleteDurability,

    /// Durability below zero or max durability not positive
    #[error(
        "Invalid durability range: durability {durability} must be >= 0 and max durability {max_durability} must be > 0"
    )]
    InvalidDurabilityRange { durability: i64, max_durability: i64 },

    /// I/O operation failed (shell only, the core never performs I/O)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Represents a translated error with helpful context
#[derive(Debug, Clone)]
pub struct ErrorTranslation {
    pub user_message: String,
    pub suggestions: Vec<String>,
}

impl ErrorTranslation {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            user_message: message.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl Error {
    /// Converts the error into a message the shell can show in a dialog.
    pub fn translate(&self) -> ErrorTranslation {
        match self {
            Error::InvalidField(field) => {
                ErrorTranslation::new(format!("Cannot sort by '{field}'"))
                    .with_suggestion("Valid fields: Name, Unit Price, Price per Stack, Price per kg")
            }
            Error::InvalidDirection(direction) => {
                ErrorTranslation::new(format!("Unknown sort order '{direction}'"))
                    .with_suggestion("Use Ascending or Descending")
            }
            Error::IncompleteDurability => ErrorTranslation::new("Durability is incomplete")
                .with_suggestion("Fill in both durability and max durability")
                .with_suggestion("Or clear both fields for items without wear"),
            Error::InvalidDurabilityRange {
                durability,
                max_durability,
            } => ErrorTranslation::new(format!(
                "Durability {durability}/{max_durability} is out of range"
            ))
            .with_suggestion("Durability cannot be negative")
            .with_suggestion("Max durability must be greater than zero"),
            Error::Io(e) => ErrorTranslation::new(format!("File error: {e}"))
                .with_suggestion("Check that the file exists and is readable"),
            Error::Serialization(e) => ErrorTranslation::new(format!("Invalid item data: {e}"))
                .with_suggestion("The catalog file must be a JSON array of items"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
