//! Action handlers
//!
//! Each `apply_*` function checks authorization first, validates the whole
//! action against the token database, and only then writes. The matching
//! `validate_*` function is public so callers can dry-run an action.

mod account;
mod domain;
mod group;
mod token;

pub use account::*;
pub use domain::*;
pub use group::*;
pub use token::*;
