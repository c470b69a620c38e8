//! Collaborator errors and the in-memory store.

mod error;
pub mod memory;

pub use error::{Collaborator, StoreError};
pub use memory::{InMemoryStore, LedgerSnapshot};
