//! Salted password hashing (argon2id) and verification.

use argon2::{
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use super::errors::AuthError;

/// Argon2 cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasherConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordHasherConfig {
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

/// argon2id v0x13 hasher with a fresh random salt per hash.
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Default for Argon2Hasher {
    fn default() -> Self { Self { params: Params::default() } }
}

impl Argon2Hasher {
    pub fn new(cfg: PasswordHasherConfig) -> Result<Self, AuthError> {
        let params = Params::new(cfg.memory_kib, cfg.iterations, cfg.parallelism, None)
            .map_err(|e| AuthError::InternalError(format!("invalid argon2 parameters: {e}")))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash `plain` into a PHC string.
    pub fn hash(&self, plain: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| AuthError::InternalError(format!("password hashing failed: {e}")))?
            .to_string();
        Ok(hash)
    }

    /// Check `plain` against a stored PHC string.
    ///
    /// A mismatch is `Ok(false)`. `Err` means the stored hash itself is unusable.
    /// Cost parameters are read from the stored hash, so hashes made under an
    /// older configuration still verify.
    pub fn verify(&self, hash: &str, plain: &str) -> Result<bool, password_hash::Error> {
        let parsed = PasswordHash::new(hash)?;
        match self.argon2().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast() -> Argon2Hasher {
        Argon2Hasher::new(PasswordHasherConfig { memory_kib: 256, iterations: 1, parallelism: 1 }).unwrap()
    }

    #[test]
    fn hash_is_salted_phc_string() {
        let hasher = fast();
        let a = hasher.hash("s3cret").unwrap();
        let b = hasher.hash("s3cret").unwrap();
        assert!(a.starts_with("$argon2id$v=19$"));
        assert_ne!(a, b, "salt must differ per call");
        assert_ne!(a, "s3cret");
        assert!(!a.contains("s3cret"));
    }

    #[test]
    fn verify_accepts_only_the_hashed_password() {
        let hasher = fast();
        let hash = hasher.hash("pw1").unwrap();
        assert!(hasher.verify(&hash, "pw1").unwrap());
        assert!(!hasher.verify(&hash, "pw2").unwrap());
        assert!(!hasher.verify(&hash, "PW1").unwrap());
    }

    #[test]
    fn verify_honours_parameters_of_stored_hash() {
        let old = fast();
        let hash = old.hash("carry-over").unwrap();
        let newer = Argon2Hasher::new(PasswordHasherConfig { memory_kib: 512, iterations: 2, parallelism: 1 }).unwrap();
        assert!(newer.verify(&hash, "carry-over").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(fast().verify("not-a-phc-string", "x").is_err());
    }

    #[test]
    fn rejects_invalid_parameters() {
        let err = Argon2Hasher::new(PasswordHasherConfig { memory_kib: 1, iterations: 0, parallelism: 1 });
        assert!(matches!(err, Err(AuthError::InternalError(_))));
    }
}
