//! Auth module: domain types, credential store contract, password hashing
//! and the registration/login service.

pub mod domain;
pub mod errors;
pub mod password;
pub mod repo;
pub mod repository;
pub mod service;

pub use errors::{AuthError, StoreError};
pub use repository::{memory::MemoryCredentialStore, CredentialStore};
pub use service::AuthService;
