//! Store traits consumed by the API layer.
//!
//! Each collection is reached through an async trait behind
//! `Arc<dyn …>`, so handlers can be exercised against any backend.
//! Every method is atomic per document; no trait offers a multi-document
//! transaction, and the account-removal cascade is a sequence of
//! independent calls.

use async_trait::async_trait;
use devfolio_commons::{Post, Profile, ProfileUpdate, User, UserId};

use crate::error::StoreResult;

/// Abstraction over identity persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user record by id.
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>>;

    /// Insert a new user record.
    async fn insert(&self, user: User) -> StoreResult<User>;

    /// Delete a user record. Returns whether a record was removed.
    async fn delete(&self, id: &UserId) -> StoreResult<bool>;
}

/// Abstraction over profile document persistence.
///
/// The collection enforces the one-profile-per-identity constraint.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Look up the profile owned by the given identity.
    async fn find_by_user(&self, user: &UserId) -> StoreResult<Option<Profile>>;

    /// Return all profiles.
    async fn find_all(&self) -> StoreResult<Vec<Profile>>;

    /// Insert a new profile. Fails with [`StoreError::Duplicate`] when a
    /// profile already exists for the same identity.
    ///
    /// [`StoreError::Duplicate`]: crate::error::StoreError::Duplicate
    async fn insert(&self, profile: Profile) -> StoreResult<Profile>;

    /// Apply a sparse merge to the profile owned by the given identity
    /// and return the updated document, or `None` when no profile
    /// exists. The merge is atomic with respect to the document.
    async fn find_and_update(
        &self,
        user: &UserId,
        update: ProfileUpdate,
    ) -> StoreResult<Option<Profile>>;

    /// Persist a full profile document, replacing any existing document
    /// for the same identity (last write wins).
    async fn replace(&self, profile: Profile) -> StoreResult<Profile>;

    /// Delete the profile owned by the given identity. Returns whether a
    /// document was removed.
    async fn delete_by_user(&self, user: &UserId) -> StoreResult<bool>;
}

/// Abstraction over post persistence.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post.
    async fn insert(&self, post: Post) -> StoreResult<Post>;

    /// Return all posts authored by the given identity.
    async fn find_by_author(&self, user: &UserId) -> StoreResult<Vec<Post>>;

    /// Delete every post authored by the given identity. Returns the
    /// number of posts removed.
    async fn delete_by_author(&self, user: &UserId) -> StoreResult<u64>;
}
