use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;
use super::PasswordAuthenticator;

/// Salted password hashing (internally uses Argon2id).
pub struct Argon2Authenticator;

impl Argon2Authenticator {
    /// Create a new authenticator configured with Argon2 defaults.
    pub fn new() -> Self {
        Self
    }

    /// Verify a password against a PHC string, reporting malformed digests.
    ///
    /// # Errors
    /// * `VerificationFailed` - Hash format is invalid
    pub fn check(&self, secret: &str, digest: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(digest).map_err(|e| {
            PasswordError::VerificationFailed(format!("Invalid password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(secret.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for Argon2Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordAuthenticator for Argon2Authenticator {
    /// Hash with a fresh random salt.
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        self.check(secret, digest).unwrap_or(false)
    }
}
