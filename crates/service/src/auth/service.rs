use std::sync::Arc;

use tokio::task;
use tracing::{debug, error, info, instrument, warn};

use super::domain::{LoginRequest, RegistrationRequest, User};
use super::errors::{AuthError, StoreError};
use super::password::Argon2Hasher;
use super::repository::CredentialStore;

/// Registration and login over an injected [`CredentialStore`].
///
/// Stateless between calls; clones share the same store.
pub struct AuthService<S: CredentialStore + ?Sized> {
    store: Arc<S>,
    hasher: Argon2Hasher,
}

impl<S: CredentialStore + ?Sized> Clone for AuthService<S> {
    fn clone(&self) -> Self {
        Self { store: Arc::clone(&self.store), hasher: self.hasher.clone() }
    }
}

impl<S: CredentialStore + ?Sized> AuthService<S> {
    pub fn new(store: Arc<S>, hasher: Argon2Hasher) -> Self { Self { store, hasher } }

    /// Register a new user with a hashed password.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, MemoryCredentialStore, password::Argon2Hasher};
    /// use service::auth::domain::RegistrationRequest;
    /// use std::sync::Arc;
    /// let store = Arc::new(MemoryCredentialStore::new());
    /// let svc = AuthService::new(store.clone(), Argon2Hasher::default());
    /// tokio_test::block_on(svc.register(RegistrationRequest::new("alice", "s3cret"))).unwrap();
    /// assert_eq!(store.len(), 1);
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn register(&self, input: RegistrationRequest) -> Result<(), AuthError> {
        if input.username.is_empty() {
            return Err(AuthError::InvalidInput("username must not be empty".into()));
        }
        if input.password.is_empty() {
            return Err(AuthError::InvalidInput("password must not be empty".into()));
        }

        match self.store.exists(&input.username).await {
            Ok(false) => {}
            Ok(true) => {
                debug!("username already registered");
                return Err(AuthError::Conflict);
            }
            Err(e) => return Err(store_failure(e, "exists")),
        }

        let RegistrationRequest { username, password } = input;
        let hasher = self.hasher.clone();
        let password_hash = task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AuthError::InternalError(format!("hashing task failed: {e}")))??;

        match self.store.insert(User { username, password_hash }).await {
            Ok(()) => {}
            Err(StoreError::AlreadyExists) => {
                warn!("username taken between exists check and insert");
                return Err(AuthError::Conflict);
            }
            Err(e) => return Err(store_failure(e, "insert")),
        }

        info!("user_registered");
        Ok(())
    }

    /// Verify a user's credentials. No token or session is issued.
    ///
    /// Unknown users and wrong passwords both fail with
    /// [`AuthError::InvalidCredentials`].
    ///
    /// # Examples
    /// ```
    /// use service::auth::{AuthService, AuthError, MemoryCredentialStore, password::Argon2Hasher};
    /// use service::auth::domain::{RegistrationRequest, LoginRequest};
    /// use std::sync::Arc;
    /// let svc = AuthService::new(Arc::new(MemoryCredentialStore::new()), Argon2Hasher::default());
    /// tokio_test::block_on(svc.register(RegistrationRequest::new("bob", "pw1"))).unwrap();
    /// assert!(tokio_test::block_on(svc.login(LoginRequest::new("bob", "pw1"))).is_ok());
    /// let wrong = tokio_test::block_on(svc.login(LoginRequest::new("bob", "pw2")));
    /// assert_eq!(wrong, Err(AuthError::InvalidCredentials));
    /// ```
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub async fn login(&self, input: LoginRequest) -> Result<(), AuthError> {
        if input.username.is_empty() || input.password.is_empty() {
            debug!("empty credentials rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let LoginRequest { username, password } = input;
        let hasher = self.hasher.clone();
        let user = match self.store.get(&username).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                // Spend one hash so an unknown user costs the same as a wrong password.
                if let Err(e) = task::spawn_blocking(move || hasher.hash(&password)).await {
                    debug!(error = %e, "decoy hash task failed");
                }
                warn!("login rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(store_failure(e, "get")),
        };

        let verified = task::spawn_blocking(move || hasher.verify(&user.password_hash, &password))
            .await
            .map_err(|e| AuthError::InternalError(format!("verification task failed: {e}")))?;

        match verified {
            Ok(true) => {
                info!("user_logged_in");
                Ok(())
            }
            Ok(false) => {
                warn!("login rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(e) => {
                error!(error = %e, "stored password hash is malformed");
                Err(AuthError::StoreUnavailable(format!("malformed password hash: {e}")))
            }
        }
    }
}

fn store_failure(e: StoreError, op: &'static str) -> AuthError {
    error!(error = %e, op, "credential store failure");
    AuthError::StoreUnavailable(e.to_string())
}
