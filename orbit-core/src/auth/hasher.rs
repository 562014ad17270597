//! Deterministic password digests.

use sha2::Sha256;

use crate::config::AuthConfig;
use crate::error::{OrbitError, Result};

/// PBKDF2-HMAC-SHA256 with one application-wide salt.
///
/// The same plaintext always yields the same lowercase hex digest, which is
/// what lets [`verify`](Self::verify) work against digests stored in
/// `players.json`.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    salt: Vec<u8>,
    iterations: u32,
    key_length: usize,
}

impl CredentialHasher {
    /// Build a hasher from explicit parameters.
    ///
    /// # Errors
    ///
    /// [`OrbitError::Config`] for an empty salt, zero iterations or a zero
    /// key length.
    pub fn new(salt: &str, iterations: u32, key_length: usize) -> Result<Self> {
        if salt.is_empty() {
            return Err(OrbitError::Config("auth.salt must not be empty".into()));
        }
        if iterations == 0 {
            return Err(OrbitError::Config("auth.iterations must be positive".into()));
        }
        if key_length == 0 {
            return Err(OrbitError::Config("auth.key_length must be positive".into()));
        }
        Ok(Self {
            salt: salt.as_bytes().to_vec(),
            iterations,
            key_length,
        })
    }

    /// Build a hasher from the `[auth]` config section.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        Self::new(&config.salt, config.iterations, config.key_length)
    }

    /// Digest `plaintext`.
    #[must_use]
    pub fn hash(&self, plaintext: &str) -> String {
        let mut key = vec![0u8; self.key_length];
        pbkdf2::pbkdf2_hmac::<Sha256>(plaintext.as_bytes(), &self.salt, self.iterations, &mut key);
        hex::encode(key)
    }

    /// Whether `plaintext` hashes to `digest`.
    #[must_use]
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        self.hash(plaintext) == digest
    }
}
