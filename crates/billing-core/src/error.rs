//! Billing Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, BillingError>;

/// Billing-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// Price is neither a non-negative amount nor the "Contact Us" sentinel
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Plan record violates a catalog invariant
    #[error("Invalid plan '{plan}': {reason}")]
    InvalidPlan { plan: String, reason: String },

    /// Two plans share a name
    #[error("Duplicate plan name: {0}")]
    DuplicatePlan(String),

    /// Catalog table could not be parsed
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Account data source failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BillingError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, BillingError::Fetch(_))
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> &str {
        match self {
            BillingError::InvalidPrice(_)
            | BillingError::InvalidPlan { .. }
            | BillingError::DuplicatePlan(_)
            | BillingError::Catalog(_) => "Pricing is temporarily unavailable.",
            BillingError::Fetch(_) => "Could not load your account. Please refresh.",
            BillingError::Config(_) => "Service configuration error.",
        }
    }
}

impl From<serde_json::Error> for BillingError {
    fn from(err: serde_json::Error) -> Self {
        BillingError::Catalog(err.to_string())
    }
}
