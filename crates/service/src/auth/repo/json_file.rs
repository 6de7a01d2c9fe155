use std::{collections::hash_map::Entry, path::PathBuf, sync::Arc};

use async_trait::async_trait;

use crate::auth::domain::User;
use crate::auth::errors::StoreError;
use crate::auth::repository::CredentialStore;
use crate::errors::ServiceError;
use crate::storage::json_map_store::JsonMapStore;

/// Credential store persisted as a `username -> User` JSON map on disk.
pub struct JsonFileCredentialStore {
    map: Arc<JsonMapStore<String, User>>,
}

impl JsonFileCredentialStore {
    pub async fn open<P: Into<PathBuf>>(path: P) -> Result<Self, StoreError> {
        let map = JsonMapStore::new(path).await.map_err(unavailable)?;
        Ok(Self { map })
    }
}

fn unavailable(e: ServiceError) -> StoreError {
    StoreError::Unavailable(e.to_string())
}

#[async_trait]
impl CredentialStore for JsonFileCredentialStore {
    async fn exists(&self, username: &str) -> Result<bool, StoreError> {
        Ok(self.map.contains_key(username).await)
    }

    async fn insert(&self, user: User) -> Result<(), StoreError> {
        let inserted = self
            .map
            .update_map(|m| match m.entry(user.username.clone()) {
                Entry::Occupied(_) => Ok(false),
                Entry::Vacant(slot) => {
                    slot.insert(user);
                    Ok(true)
                }
            })
            .await
            .map_err(unavailable)?;
        if inserted { Ok(()) } else { Err(StoreError::AlreadyExists) }
    }

    async fn get(&self, username: &str) -> Result<User, StoreError> {
        self.map.get(username).await.ok_or(StoreError::NotFound)
    }
}
