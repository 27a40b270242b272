//! Error types for adminweb-core
//!
//! List view transitions never fail; these errors cover lookups made on
//! behalf of the HTTP layer and are logged through `ErrorLogger`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::RecordId;
use crate::resource::ResourceKind;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found
    RecordNotFound,
    /// Unknown resource kind
    UnknownResource,
    /// Invalid request data
    InvalidInput,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::RecordNotFound => write!(f, "RECORD_NOT_FOUND"),
            ErrorCode::UnknownResource => write!(f, "UNKNOWN_RESOURCE"),
            ErrorCode::InvalidInput => write!(f, "INVALID_INPUT"),
        }
    }
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Suggestions for resolution
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl ErrorDetails {
    pub fn new(code: ErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            suggestions: vec![],
        }
    }

    pub fn with_suggestion(mut self, suggestion: String) -> Self {
        self.suggestions.push(suggestion);
        self
    }
}

impl std::fmt::Display for ErrorDetails {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if !self.suggestions.is_empty() {
            write!(f, "\nSuggestions:")?;
            for suggestion in &self.suggestions {
                write!(f, "\n  - {}", suggestion)?;
            }
        }
        Ok(())
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    Info,
    Warning,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "info"),
            ErrorSeverity::Warning => write!(f, "warning"),
        }
    }
}

/// Main error type for adminweb-core
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("{kind} record not found: {id}")]
    RecordNotFound { kind: ResourceKind, id: RecordId },

    #[error("Unknown resource: {name}")]
    UnknownResource { name: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl CoreError {
    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::RecordNotFound { .. } => ErrorCode::RecordNotFound,
            CoreError::UnknownResource { .. } => ErrorCode::UnknownResource,
            CoreError::InvalidInput { .. } => ErrorCode::InvalidInput,
        }
    }

    /// Get the severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CoreError::RecordNotFound { .. } => ErrorSeverity::Info,
            CoreError::UnknownResource { .. } => ErrorSeverity::Info,
            CoreError::InvalidInput { .. } => ErrorSeverity::Warning,
        }
    }

    /// Convert to detailed error info
    pub fn to_details(&self) -> ErrorDetails {
        let details = ErrorDetails::new(self.code(), self.to_string());

        match self {
            CoreError::RecordNotFound { kind, .. } => details
                .with_suggestion("The record may already have been deleted.".to_string())
                .with_suggestion(format!("Use the /api/{} endpoint to list current records.", kind.slug())),
            CoreError::UnknownResource { .. } => details.with_suggestion(
                "Valid resources are: users, subscriptions, transactions.".to_string(),
            ),
            CoreError::InvalidInput { .. } => details,
        }
    }
}

/// Result type with CoreError
pub type CoreResult<T> = Result<T, CoreError>;

/// Error context for reporting
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation being performed
    pub operation: String,
    /// Resource the operation targeted
    pub resource: Option<ResourceKind>,
}

impl ErrorContext {
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            resource: None,
        }
    }

    pub fn with_resource(mut self, resource: ResourceKind) -> Self {
        self.resource = Some(resource);
        self
    }
}

/// Error logger trait
pub trait ErrorLogger {
    /// Log an error
    fn log_error(&self, error: &CoreError, context: &ErrorContext);
    /// Log a warning
    fn log_warning(&self, message: &str, context: &ErrorContext);
}

/// Default error logger using log crate
#[derive(Default)]
pub struct DefaultErrorLogger;

impl ErrorLogger for DefaultErrorLogger {
    fn log_error(&self, error: &CoreError, context: &ErrorContext) {
        match error.severity() {
            ErrorSeverity::Warning => log::warn!(
                target: "adminweb::error",
                "{} - Operation: {} - Resource: {:?}",
                error.to_details(),
                context.operation,
                context.resource
            ),
            ErrorSeverity::Info => log::info!(
                target: "adminweb::error",
                "[{}] {} - Operation: {} - Resource: {:?}",
                error.code(),
                error,
                context.operation,
                context.resource
            ),
        }
    }

    fn log_warning(&self, message: &str, context: &ErrorContext) {
        log::warn!(
            target: "adminweb::error",
            "WARNING: {} - Operation: {} - Resource: {:?}",
            message,
            context.operation,
            context.resource
        );
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::RecordNotFound.to_string(), "RECORD_NOT_FOUND");
        assert_eq!(ErrorCode::UnknownResource.to_string(), "UNKNOWN_RESOURCE");
    }

    #[test]
    fn test_record_not_found_message() {
        let error = CoreError::RecordNotFound {
            kind: ResourceKind::Users,
            id: 42,
        };
        assert_eq!(error.to_string(), "users record not found: 42");
        assert_eq!(error.code(), ErrorCode::RecordNotFound);
        assert_eq!(error.severity(), ErrorSeverity::Info);
    }

    #[test]
    fn test_error_details_suggestions() {
        let error = CoreError::RecordNotFound {
            kind: ResourceKind::Transactions,
            id: 3,
        };
        let details = error.to_details();
        assert_eq!(details.suggestions.len(), 2);
        assert!(details.suggestions[1].contains("/api/transactions"));

        let error = CoreError::InvalidInput {
            message: "page must be a positive integer, got \"abc\"".to_string(),
        };
        let details = error.to_details();
        assert!(details.suggestions.is_empty());
        assert_eq!(details.code, ErrorCode::InvalidInput);
        assert_eq!(error.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_error_context() {
        let context = ErrorContext::new("delete").with_resource(ResourceKind::Subscriptions);
        assert_eq!(context.operation, "delete");
        assert_eq!(context.resource, Some(ResourceKind::Subscriptions));
    }

    #[test]
    fn test_details_serialize_code() {
        let details = CoreError::UnknownResource {
            name: "ledgers".to_string(),
        }
        .to_details();
        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(json["code"], "UNKNOWN_RESOURCE");
    }
}
