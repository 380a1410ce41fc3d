//! Error types for EVT Core
//!
//! Every rejected action surfaces as [`ContractError::Validation`]; store
//! failures surface as [`ContractError::TokenDb`].

use serde::Serialize;
use thiserror::Error;

/// Rejection of an action as submitted.
///
/// `payload` holds the JSON rendering of the offending action and is only
/// meant for diagnostics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[{action}] {message}")]
pub struct ActionValidationError {
    pub action: String,
    pub message: String,
    pub payload: Option<String>,
}

impl ActionValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            action: String::new(),
            message: message.into(),
            payload: None,
        }
    }

    /// Attach the action name and payload, keeping the original message
    pub fn with_action<A: Serialize>(mut self, action: &str, payload: &A) -> Self {
        self.action = action.to_string();
        self.payload = serde_json::to_string(payload).ok();
        self
    }
}

/// Token database errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenDbError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Contract errors returned by every action handler
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContractError {
    #[error("Action validation error: {0}")]
    Validation(#[from] ActionValidationError),

    #[error("Token database error: {0}")]
    TokenDb(#[from] TokenDbError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ContractError {
    /// Shorthand for a validation failure with no action context yet
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(ActionValidationError::new(message))
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Attach action context to validation failures; other errors pass through
    pub fn with_action<A: Serialize>(self, action: &str, payload: &A) -> Self {
        match self {
            Self::Validation(e) => Self::Validation(e.with_action(action, payload)),
            other => other,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Human readable message of a validation failure
    pub fn message(&self) -> String {
        match self {
            Self::Validation(e) => e.message.clone(),
            Self::TokenDb(e) => e.to_string(),
            Self::Config(message) => message.clone(),
        }
    }
}

/// Result type alias for token database operations
pub type TokenDbResult<T> = Result<T, TokenDbError>;

/// Result type alias for action handlers
pub type ContractResult<T> = Result<T, ContractError>;

/// Fail with a validation error unless `cond` holds.
///
/// The message is only built on failure.
pub fn ensure<F, S>(cond: bool, message: F) -> ContractResult<()>
where
    F: FnOnce() -> S,
    S: Into<String>,
{
    if cond {
        Ok(())
    } else {
        Err(ContractError::validation(message()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Payload {
        name: &'static str,
    }

    #[test]
    fn test_with_action_captures_payload() {
        let err = ContractError::validation("Domain d1 already existed")
            .with_action("newdomain", &Payload { name: "d1" });

        match err {
            ContractError::Validation(e) => {
                assert_eq!(e.action, "newdomain");
                assert_eq!(e.message, "Domain d1 already existed");
                assert_eq!(e.payload.as_deref(), Some(r#"{"name":"d1"}"#));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_with_action_keeps_store_errors() {
        let err = ContractError::from(TokenDbError::Storage("lock poisoned".to_string()))
            .with_action("transfer", &Payload { name: "t1" });
        assert!(!err.is_validation());
        assert!(err.to_string().contains("lock poisoned"));
    }

    #[test]
    fn test_ensure() {
        assert!(ensure(true, || "never built").is_ok());
        let err = ensure(false, || format!("Owner cannot be {}", "empty")).unwrap_err();
        assert_eq!(err.message(), "Owner cannot be empty");
    }

    #[test]
    fn test_config_error_is_not_a_rejection() {
        let err = ContractError::config("System account name cannot be empty")
            .with_action("newaccount", &Payload { name: "alice" });
        assert!(!err.is_validation());
        assert_eq!(
            err.to_string(),
            "Configuration error: System account name cannot be empty"
        );
    }
}
