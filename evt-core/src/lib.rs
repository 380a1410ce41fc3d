//! EVT Core - token ledger primitives
//!
//! This crate provides the core types and interfaces shared by the evt
//! action handlers:
//! - Domains, groups, tokens and fungible accounts
//! - Weighted permission and group definitions
//! - Action payload schemas
//! - The `TokenDb` store interface and the `AuthorizationOracle` interface
//!
//! The store engine, signature verification and action dispatch live outside
//! this crate. Handlers built on top of it only rely on the traits in
//! [`ledger`].

pub mod config;
pub mod constants;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod types;

pub use config::ContractConfig;
pub use constants::*;
pub use error::*;
pub use ledger::{AuthorizationOracle, AuthorizationScope, AuthorizedScopes, TokenDb};
pub use types::*;
