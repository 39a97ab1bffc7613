/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main error type for commission processing
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Business rule violations on construction or update
    #[error("Validation error: {0}")]
    Validation(String),

    /// Required configuration is missing or malformed
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Stored data contradicts itself (e.g. installment schedules that do not line up)
    #[error("Data inconsistency: {0}")]
    DataInconsistency(String),

    /// Database operation errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration errors
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Configuration problems that block line materialization or startup
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("There is no product defined for commissions. Please define one in sale configuration.")]
    NoProductConfig,

    #[error("Product \"{product}\" used to generate commissions misses an expense account.")]
    MissingExpenseAccount { product: String },

    #[error("{0}")]
    Invalid(String),
}

impl ConfigurationError {
    /// Stable identifier of the error kind
    pub fn code(&self) -> &'static str {
        match self {
            ConfigurationError::NoProductConfig => "no_product_config",
            ConfigurationError::MissingExpenseAccount { .. } => "missing_expense_account",
            ConfigurationError::Invalid(_) => "invalid_configuration",
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn inconsistency(msg: impl Into<String>) -> Self {
        AppError::DataInconsistency(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        AppError::Configuration(ConfigurationError::Invalid(msg.into()))
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Returns the configuration error if this is one
    pub fn as_configuration(&self) -> Option<&ConfigurationError> {
        match self {
            AppError::Configuration(e) => Some(e),
            _ => None,
        }
    }
}
