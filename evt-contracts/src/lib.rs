//! EVT Contracts - action handlers of the token ledger
//!
//! Deterministic state transitions for domains, groups, non-fungible tokens
//! and fungible accounts.
//!
//! # Handlers
//!
//! | Action | Authorization scope | Effect |
//! |--------|---------------------|--------|
//! | `newdomain` | `("domain", name)` | Domain and its inline groups created |
//! | `updatedomain` | `(name, "manage")` | Supplied permissions replaced, inline groups created |
//! | `issuetoken` | `(domain, "issue")` | Tokens created, all or none |
//! | `transfer` | `(domain, token)` | Token owner replaced |
//! | `updategroup` | `("group", id)` | Group threshold and keys replaced |
//! | `newaccount` | `("account", name)` | Account created with the configured balance |
//! | `updateowner` | `("account", name)` | Account owner replaced |
//! | `transferevt` | `("account", from)` | Balance moved between two accounts |
//!
//! # Usage
//!
//! ```ignore
//! use evt_contracts::{apply_transferevt, ApplyContext};
//!
//! let mut ctx = ApplyContext::new(&mut tokendb, &authority, block_time, &config);
//! apply_transferevt(&mut ctx, &act)?;
//! ```

pub mod context;
pub mod contracts;
pub mod resolver;
pub mod validation;

pub use context::ApplyContext;
pub use contracts::*;
pub use resolver::{check_inline_groups, check_inline_groups_absent, check_permission_groups};
pub use validation::{validate_group, validate_members, validate_permission};
