/// Crate-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main engine error type
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Validation errors for line items and jurisdiction inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// A computed breakup failed an internal consistency check
    #[error("Calculation error: {0}")]
    Calculation(String),

    /// State name not present in the GST state-code registry
    #[error("Unknown state: {0}")]
    UnknownState(String),
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn calculation(msg: impl Into<String>) -> Self {
        AppError::Calculation(msg.into())
    }

    pub fn unknown_state(name: impl Into<String>) -> Self {
        AppError::UnknownState(name.into())
    }
}
