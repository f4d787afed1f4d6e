pub mod argon2;
pub mod errors;
pub mod legacy;
pub mod scheme;

pub use self::argon2::Argon2Authenticator;
pub use errors::PasswordError;
pub use legacy::Md5Authenticator;
pub use scheme::PasswordScheme;

/// One-way credential hashing and verification.
///
/// Implementations are interchangeable so the stored digest format can be
/// changed without touching callers.
pub trait PasswordAuthenticator: Send + Sync + 'static {
    /// Hash a plaintext secret for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - The underlying hash primitive failed
    fn hash(&self, secret: &str) -> Result<String, PasswordError>;

    /// Check a plaintext secret against a stored digest.
    ///
    /// Returns false on mismatch and on any internal error, so callers
    /// cannot tell a wrong password from a malformed digest.
    fn verify(&self, secret: &str, digest: &str) -> bool;
}
