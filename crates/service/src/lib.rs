//! Service layer for the authentication workflow.
//! - `auth` holds registration/login and the credential store contract.
//! - `storage` holds reusable file-backed key-value stores.

pub mod errors;
pub mod auth;
pub mod storage;
