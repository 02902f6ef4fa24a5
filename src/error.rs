use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    #[error("{field} cannot be blank")]
    BlankField { field: String },

    #[error("Phone number must be exactly 10 digits: {0}")]
    InvalidPhone(String),

    #[error("Invalid date format. Use DD.MM.YYYY: {0}")]
    InvalidDate(String),

    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("'{command}' expects {expected}")]
    MissingArgs { command: String, expected: String },

    #[error("Invalid value for {var}: {reason}")]
    Config { var: String, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BotError {
    pub fn not_found(entity_type: &str, id: &str) -> Self {
        BotError::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Malformed input: a bad phone, date, or blank field.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BotError::BlankField { .. } | BotError::InvalidPhone(_) | BotError::InvalidDate(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BotError::NotFound { .. })
    }
}

pub type BotResult<T> = Result<T, BotError>;
