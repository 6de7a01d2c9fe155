//! Durable [`CredentialStore`](super::repository::CredentialStore) backends.

pub mod json_file;
