use async_trait::async_trait;

use super::domain::User;
use super::errors::StoreError;

/// Keyed persistence for user records, keyed by username.
///
/// The trait does not make `exists` followed by `insert` atomic. Implementations
/// that can insert conditionally should reject a taken key with
/// [`StoreError::AlreadyExists`]; the service reports that as a conflict.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn exists(&self, username: &str) -> Result<bool, StoreError>;
    async fn insert(&self, user: User) -> Result<(), StoreError>;
    /// Returns [`StoreError::NotFound`] when no such user is stored.
    async fn get(&self, username: &str) -> Result<User, StoreError>;
}

/// Process-local store used by default and in tests.
pub mod memory {
    use super::*;
    use dashmap::{mapref::entry::Entry, DashMap};

    #[derive(Default)]
    pub struct MemoryCredentialStore {
        users: DashMap<String, User>, // key: username
    }

    impl MemoryCredentialStore {
        pub fn new() -> Self { Self::default() }

        pub fn len(&self) -> usize { self.users.len() }

        pub fn is_empty(&self) -> bool { self.users.is_empty() }
    }

    #[async_trait]
    impl CredentialStore for MemoryCredentialStore {
        async fn exists(&self, username: &str) -> Result<bool, StoreError> {
            Ok(self.users.contains_key(username))
        }

        async fn insert(&self, user: User) -> Result<(), StoreError> {
            match self.users.entry(user.username.clone()) {
                Entry::Occupied(_) => Err(StoreError::AlreadyExists),
                Entry::Vacant(slot) => {
                    slot.insert(user);
                    Ok(())
                }
            }
        }

        async fn get(&self, username: &str) -> Result<User, StoreError> {
            self.users
                .get(username)
                .map(|u| u.value().clone())
                .ok_or(StoreError::NotFound)
        }
    }

}
