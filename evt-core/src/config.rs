//! Contract Configuration
//!
//! Values injected into the action handlers instead of global state.
//! Supports loading from environment variables with the EVT_ prefix.

use serde::{Deserialize, Serialize};
use std::env;

use crate::constants::{DEFAULT_INITIAL_BALANCE, DEFAULT_SYSTEM_ACCOUNT};
use crate::error::{ContractError, ContractResult};
use crate::logging::LogLevel;
use crate::types::{Asset, Name};

/// Contract configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Account recorded as creator of every new account
    #[serde(default = "default_system_account")]
    pub system_account: Name,
    /// Balance granted to every new account
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Asset,
    /// Level used when logging rejected actions
    #[serde(default = "default_rejection_log_level")]
    pub rejection_log_level: LogLevel,
}

fn default_system_account() -> Name {
    Name::new(DEFAULT_SYSTEM_ACCOUNT)
}

fn default_initial_balance() -> Asset {
    Asset::new(DEFAULT_INITIAL_BALANCE)
}

fn default_rejection_log_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            system_account: default_system_account(),
            initial_balance: default_initial_balance(),
            rejection_log_level: default_rejection_log_level(),
        }
    }
}

impl ContractConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - EVT_SYSTEM_ACCOUNT: Creator name for new accounts
    /// - EVT_INITIAL_BALANCE: Starting balance of new accounts
    /// - EVT_REJECTION_LOG_LEVEL: Level for rejected action logs
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            system_account: env::var("EVT_SYSTEM_ACCOUNT")
                .ok()
                .map(Name::new)
                .unwrap_or(defaults.system_account),
            initial_balance: env::var("EVT_INITIAL_BALANCE")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Asset::new)
                .unwrap_or(defaults.initial_balance),
            rejection_log_level: env::var("EVT_REJECTION_LOG_LEVEL")
                .ok()
                .and_then(|s| LogLevel::parse(&s))
                .unwrap_or(defaults.rejection_log_level),
        }
    }

    pub fn with_system_account(mut self, name: impl Into<String>) -> Self {
        self.system_account = Name::new(name);
        self
    }

    pub fn with_initial_balance(mut self, amount: i64) -> Self {
        self.initial_balance = Asset::new(amount);
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ContractResult<()> {
        if self.system_account.is_empty() {
            return Err(ContractError::config("System account name cannot be empty"));
        }
        if self.initial_balance.amount() < 0 {
            return Err(ContractError::config(format!(
                "Initial balance cannot be negative, got {}",
                self.initial_balance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ContractConfig::default();
        assert_eq!(config.system_account.as_str(), "evt");
        assert_eq!(config.initial_balance, Asset::new(10_000));
        assert_eq!(config.rejection_log_level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let config = ContractConfig::default().with_initial_balance(-1);
        assert!(matches!(config.validate(), Err(ContractError::Config(_))));

        let config = ContractConfig::default().with_system_account("");
        let err = config.validate().unwrap_err();
        assert!(!err.is_validation());
        assert_eq!(err.message(), "System account name cannot be empty");

        assert!(ContractConfig::default().with_initial_balance(0).validate().is_ok());
    }

    // The only test touching EVT_* variables, so no other test races on them.
    #[test]
    fn test_config_from_env() {
        env::set_var("EVT_SYSTEM_ACCOUNT", "genesis");
        env::set_var("EVT_INITIAL_BALANCE", "2500");
        env::set_var("EVT_REJECTION_LOG_LEVEL", "DEBUG");
        let config = ContractConfig::from_env();
        assert_eq!(config.system_account.as_str(), "genesis");
        assert_eq!(config.initial_balance, Asset::new(2500));
        assert_eq!(config.rejection_log_level, LogLevel::Debug);

        // unparseable values fall back to defaults
        env::set_var("EVT_INITIAL_BALANCE", "lots");
        env::set_var("EVT_REJECTION_LOG_LEVEL", "loud");
        let config = ContractConfig::from_env();
        assert_eq!(config.system_account.as_str(), "genesis");
        assert_eq!(config.initial_balance, Asset::new(DEFAULT_INITIAL_BALANCE));
        assert_eq!(config.rejection_log_level, LogLevel::Warn);

        env::remove_var("EVT_SYSTEM_ACCOUNT");
        env::remove_var("EVT_INITIAL_BALANCE");
        env::remove_var("EVT_REJECTION_LOG_LEVEL");
        assert_eq!(ContractConfig::from_env(), ContractConfig::default());
    }

    #[test]
    fn test_config_deserialize_with_defaults() {
        let config: ContractConfig =
            serde_json::from_str(r#"{"initial_balance": 500}"#).unwrap();
        assert_eq!(config.initial_balance, Asset::new(500));
        assert_eq!(config.system_account.as_str(), "evt");
    }
}
