use std::sync::Arc;

use crate::password::PasswordAuthenticator;
use crate::password::PasswordError;
use crate::password::PasswordScheme;
use crate::token::Sha256TokenGenerator;
use crate::token::TokenGenerator;

/// Authentication coordinator combining password verification and token generation.
///
/// Provides high-level authentication operations by coordinating
/// a password authenticator and a session token generator.
pub struct Authenticator {
    password_authenticator: Arc<dyn PasswordAuthenticator>,
    token_generator: Arc<dyn TokenGenerator>,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// Opaque session token
    pub token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create a new authenticator for the given password scheme.
    ///
    /// # Arguments
    /// * `scheme` - Format of the stored password digests
    ///
    /// # Returns
    /// Authenticator using SHA-256 session tokens
    pub fn new(scheme: PasswordScheme) -> Self {
        Self::with_parts(scheme.authenticator(), Arc::new(Sha256TokenGenerator::new()))
    }

    /// Create an authenticator from explicit components.
    pub fn with_parts(
        password_authenticator: Arc<dyn PasswordAuthenticator>,
        token_generator: Arc<dyn TokenGenerator>,
    ) -> Self {
        Self {
            password_authenticator,
            token_generator,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_authenticator.hash(password)
    }

    /// Verify credentials and generate a session token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `identity` - Identity the token is derived from (the user's login)
    ///
    /// # Returns
    /// AuthenticationResult with the fresh token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match, or the stored hash is unusable
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        identity: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_authenticator.verify(password, stored_hash) {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(AuthenticationResult {
            token: self.token_generator.generate(identity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedTokenGenerator;

    impl TokenGenerator for FixedTokenGenerator {
        fn generate(&self, seed_identity: &str) -> String {
            format!("token-for-{}", seed_identity)
        }
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(PasswordScheme::Argon2);

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "alice")
            .expect("Authentication failed");

        assert_eq!(result.token.len(), Sha256TokenGenerator::TOKEN_LENGTH);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(PasswordScheme::Argon2);

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_with_malformed_hash_is_invalid_credentials() {
        let authenticator = Authenticator::new(PasswordScheme::Argon2);

        let result = authenticator.authenticate("password", "not-a-phc-string", "alice");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_legacy_scheme() {
        let authenticator = Authenticator::new(PasswordScheme::Md5);

        let result = authenticator
            .authenticate("password", "5f4dcc3b5aa765d61d8327deb882cf99", "alice")
            .expect("Authentication failed");
        assert!(!result.token.is_empty());
    }

    #[test]
    fn test_with_parts_uses_injected_generator() {
        let authenticator = Authenticator::with_parts(
            PasswordScheme::Md5.authenticator(),
            Arc::new(FixedTokenGenerator),
        );

        let hash = authenticator.hash_password("secret").unwrap();
        let result = authenticator.authenticate("secret", &hash, "bob").unwrap();
        assert_eq!(result.token, "token-for-bob");
    }
}
