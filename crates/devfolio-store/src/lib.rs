// Devfolio Store
//
// Trait-based store abstraction over the profile, identity, and post
// collections, plus the in-memory document store implementation used by
// the server binary and the test suite.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{MemoryPostStore, MemoryProfileStore, MemoryUserStore};
pub use traits::{PostStore, ProfileStore, UserStore};
