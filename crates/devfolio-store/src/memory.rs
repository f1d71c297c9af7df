//! In-memory document store.
//!
//! Each collection is a `RwLock<HashMap>` keyed by its identifier, which
//! gives exactly the per-document atomicity the API layer is allowed to
//! rely on: a single trait call takes the lock once and either completes
//! or fails as a unit. Nothing here coordinates across collections.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use devfolio_commons::{Post, PostId, Profile, ProfileUpdate, User, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{PostStore, ProfileStore, UserStore};

fn poisoned(which: &str) -> StoreError {
    StoreError::LockPoisoned(format!("{} lock poisoned", which))
}

/// In-memory identity collection.
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<UserId, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &UserId) -> StoreResult<Option<User>> {
        let users = self.users.read().map_err(|_| poisoned("users"))?;
        Ok(users.get(id).cloned())
    }

    async fn insert(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().map_err(|_| poisoned("users"))?;
        if users.contains_key(&user.id) {
            return Err(StoreError::Duplicate(format!(
                "user '{}' already exists",
                user.id
            )));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> StoreResult<bool> {
        let mut users = self.users.write().map_err(|_| poisoned("users"))?;
        Ok(users.remove(id).is_some())
    }
}

/// In-memory profile collection.
///
/// Keying the map on the owning [`UserId`] is what enforces the
/// one-profile-per-identity constraint.
#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn find_by_user(&self, user: &UserId) -> StoreResult<Option<Profile>> {
        let profiles = self.profiles.read().map_err(|_| poisoned("profiles"))?;
        Ok(profiles.get(user).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Profile>> {
        let profiles = self.profiles.read().map_err(|_| poisoned("profiles"))?;
        Ok(profiles.values().cloned().collect())
    }

    async fn insert(&self, profile: Profile) -> StoreResult<Profile> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned("profiles"))?;
        if profiles.contains_key(&profile.user) {
            return Err(StoreError::Duplicate(format!(
                "profile for user '{}' already exists",
                profile.user
            )));
        }
        profiles.insert(profile.user.clone(), profile.clone());
        Ok(profile)
    }

    async fn find_and_update(
        &self,
        user: &UserId,
        update: ProfileUpdate,
    ) -> StoreResult<Option<Profile>> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned("profiles"))?;
        match profiles.get_mut(user) {
            Some(profile) => {
                update.apply(profile);
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }

    async fn replace(&self, profile: Profile) -> StoreResult<Profile> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned("profiles"))?;
        profiles.insert(profile.user.clone(), profile.clone());
        Ok(profile)
    }

    async fn delete_by_user(&self, user: &UserId) -> StoreResult<bool> {
        let mut profiles = self.profiles.write().map_err(|_| poisoned("profiles"))?;
        Ok(profiles.remove(user).is_some())
    }
}

/// In-memory post collection.
#[derive(Default)]
pub struct MemoryPostStore {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, post: Post) -> StoreResult<Post> {
        let mut posts = self.posts.write().map_err(|_| poisoned("posts"))?;
        posts.insert(post.id.clone(), post.clone());
        Ok(post)
    }

    async fn find_by_author(&self, user: &UserId) -> StoreResult<Vec<Post>> {
        let posts = self.posts.read().map_err(|_| poisoned("posts"))?;
        Ok(posts
            .values()
            .filter(|p| &p.user == user)
            .cloned()
            .collect())
    }

    async fn delete_by_author(&self, user: &UserId) -> StoreResult<u64> {
        let mut posts = self.posts.write().map_err(|_| poisoned("posts"))?;
        let before = posts.len();
        posts.retain(|_, p| &p.user != user);
        Ok((before - posts.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use devfolio_commons::{EntryId, Experience};

    fn profile_for(user: &UserId) -> Profile {
        let mut profile = Profile::new(user.clone());
        profile.status = "Developer".to_string();
        profile.skills = vec!["Rust".to_string()];
        profile
    }

    fn experience(title: &str) -> Experience {
        Experience {
            id: EntryId::generate(),
            title: title.to_string(),
            company: "Initech".to_string(),
            location: None,
            from: "2020-01-01".to_string(),
            to: None,
            current: true,
            description: None,
        }
    }

    #[tokio::test]
    async fn insert_rejects_second_profile_for_same_user() {
        let store = MemoryProfileStore::new();
        let user = UserId::new("usr_1");
        store.insert(profile_for(&user)).await.unwrap();

        let err = store.insert(profile_for(&user)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)));
    }

    #[tokio::test]
    async fn find_and_update_applies_sparse_merge() {
        let store = MemoryProfileStore::new();
        let user = UserId::new("usr_1");
        store.insert(profile_for(&user)).await.unwrap();

        let update = ProfileUpdate {
            status: Some("Architect".to_string()),
            ..Default::default()
        };
        let updated = store.find_and_update(&user, update).await.unwrap().unwrap();
        assert_eq!(updated.status, "Architect");
        assert_eq!(updated.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn find_and_update_on_missing_profile_returns_none() {
        let store = MemoryProfileStore::new();
        let user = UserId::new("usr_1");
        let result = store
            .find_and_update(&user, ProfileUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn replace_persists_entry_mutations() {
        let store = MemoryProfileStore::new();
        let user = UserId::new("usr_1");
        store.insert(profile_for(&user)).await.unwrap();

        let mut profile = store.find_by_user(&user).await.unwrap().unwrap();
        profile.experience.insert(0, experience("Engineer"));
        store.replace(profile).await.unwrap();

        let fetched = store.find_by_user(&user).await.unwrap().unwrap();
        assert_eq!(fetched.experience.len(), 1);
        assert_eq!(fetched.experience[0].title, "Engineer");
    }

    #[tokio::test]
    async fn delete_by_author_removes_only_that_authors_posts() {
        let store = MemoryPostStore::new();
        let alice = UserId::new("usr_alice");
        let bob = UserId::new("usr_bob");
        store
            .insert(Post::new(alice.clone(), "hello", "Alice"))
            .await
            .unwrap();
        store
            .insert(Post::new(alice.clone(), "again", "Alice"))
            .await
            .unwrap();
        store
            .insert(Post::new(bob.clone(), "hi", "Bob"))
            .await
            .unwrap();

        let removed = store.delete_by_author(&alice).await.unwrap();
        assert_eq!(removed, 2);
        assert_eq!(store.find_by_author(&alice).await.unwrap().len(), 0);
        assert_eq!(store.find_by_author(&bob).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn user_store_round_trip() {
        let store = MemoryUserStore::new();
        let user = User::new("Alice", "alice@example.com", None);
        let id = user.id.clone();
        store.insert(user).await.unwrap();

        assert!(store.find_by_id(&id).await.unwrap().is_some());
        assert!(store.delete(&id).await.unwrap());
        assert!(store.find_by_id(&id).await.unwrap().is_none());
        assert!(!store.delete(&id).await.unwrap());
    }
}
