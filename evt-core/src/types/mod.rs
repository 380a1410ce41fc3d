//! Core types for the evt token ledger

pub mod action;
pub mod common;
pub mod permission;
pub mod records;

pub use action::*;
pub use common::*;
pub use permission::*;
pub use records::*;
