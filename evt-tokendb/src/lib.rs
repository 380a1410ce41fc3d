//! EVT Token Database
//!
//! In-memory [`TokenDb`] implementation, mainly used for tests and for
//! embedders that need a reference store. Records are kept in ordered maps
//! so iteration is deterministic.
//!
//! # Example
//!
//! ```ignore
//! use evt_tokendb::MemoryTokenDb;
//!
//! let mut db = MemoryTokenDb::new();
//! // pass `&mut db` to an `ApplyContext`
//! ```

mod memory;

pub use memory::MemoryTokenDb;

pub use evt_core::{TokenDb, TokenDbError, TokenDbResult};
