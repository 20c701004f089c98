//! Content store contract for the pelagic seeder.
//!
//! The seed engine only talks to the content platform through
//! [`ContentStore`]. Two stores ship with the crate: [`MemoryStore`] for tests
//! and dry runs, and [`FileStore`], which keeps everything in a local
//! directory.

pub mod error;
pub mod file;
pub mod memory;
mod state;
pub mod store;

pub use error::StoreError;
pub use file::{FileStore, StoreSummary};
pub use memory::MemoryStore;
pub use store::ContentStore;
