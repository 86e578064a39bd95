//! Error types for the storefront.

/// Repository-level errors (data access failures).
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Database(String),

    #[error("Transaction error: {0}")]
    Transaction(String),
}

/// Payment processor errors.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Payment processor unreachable: {0}")]
    Unavailable(String),

    #[error("Payment processor rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unexpected payment processor response: {0}")]
    InvalidResponse(String),

    #[error("Payment configuration error: {0}")]
    Config(String),
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// The request is well formed but a business rule refuses it
    /// (duplicate review, item already in cart, ...).
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Payment error: {0}")]
    Payment(String),
}

impl AppError {
    /// The message shown to the caller, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            AppError::BadRequest(msg)
            | AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::Database(msg)
            | AppError::Payment(msg) => msg,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Database(e) => AppError::Database(e),
            RepoError::Transaction(e) => AppError::Database(e),
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        match err {
            PaymentError::Rejected { message, .. } => AppError::Payment(message),
            e => AppError::Payment(e.to_string()),
        }
    }
}
