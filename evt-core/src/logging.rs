//! Logging Standards and Conventions
//!
//! All handlers log through `tracing` with structured fields.
//!
//! # Log Levels
//!
//! | Level | Usage | Examples |
//! |-------|-------|----------|
//! | ERROR | Store failure during commit | Lock poisoned, write rejected after validation |
//! | WARN  | Rejected action | Authorization missing, invariant violated |
//! | INFO  | Committed action | Domain created, balance moved |
//! | DEBUG | Handler entry, intermediate decisions | Group resolution, record reads |
//! | TRACE | Full payloads | Action JSON |
//!
//! # Structured Logging Fields
//!
//! Always use structured fields for key information:
//! - `action`: Action name (`newdomain`, `transferevt`, ...)
//! - `domain`: Domain name
//! - `account`: Account name
//! - `group_id`: Group identifier
//! - `count`: Item count
//! - `amount`: Asset amount
//! - `error`: Error message
//!
//! # Examples
//!
//! ```ignore
//! use tracing::{info, warn};
//!
//! // Good: Structured logging with context
//! info!(action = "issuetoken", domain = %act.domain, count = act.names.len(), "Tokens issued");
//!
//! // Good: Rejection with context
//! warn!(action = "transferevt", error = %e, "Action rejected");
//!
//! // Bad: Unstructured logging
//! info!("Issued {} tokens in {}", act.names.len(), act.domain);
//! ```

use serde::{Deserialize, Serialize};

/// Log level enumeration matching tracing levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Parse from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            "trace" => Some(Self::Trace),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Action names used as the `action` field
pub mod actions {
    pub const NEW_DOMAIN: &str = "newdomain";
    pub const UPDATE_DOMAIN: &str = "updatedomain";
    pub const ISSUE_TOKEN: &str = "issuetoken";
    pub const TRANSFER: &str = "transfer";
    pub const UPDATE_GROUP: &str = "updategroup";
    pub const NEW_ACCOUNT: &str = "newaccount";
    pub const UPDATE_OWNER: &str = "updateowner";
    pub const TRANSFER_EVT: &str = "transferevt";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::parse("error"), Some(LogLevel::Error));
        assert_eq!(LogLevel::parse("INFO"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
        assert_eq!(LogLevel::parse("invalid"), None);
    }

    #[test]
    fn test_log_level_serde_lowercase() {
        assert_eq!(serde_json::to_string(&LogLevel::Warn).unwrap(), r#""warn""#);
        let level: LogLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(level, LogLevel::Debug);
        assert_eq!(LogLevel::default().to_string(), "info");
    }
}
