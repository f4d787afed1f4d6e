use md5::Digest;
use md5::Md5;

use super::errors::PasswordError;
use super::PasswordAuthenticator;

/// Unsalted MD5 hex digests, as stored by older deployments.
///
/// Weak: only use it to keep existing `users.password_hash` rows valid.
pub struct Md5Authenticator;

impl Md5Authenticator {
    pub fn new() -> Self {
        Self
    }

    fn digest(secret: &str) -> String {
        format!("{:x}", Md5::digest(secret.as_bytes()))
    }
}

impl Default for Md5Authenticator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordAuthenticator for Md5Authenticator {
    fn hash(&self, secret: &str) -> Result<String, PasswordError> {
        Ok(Self::digest(secret))
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        let computed = Self::digest(secret);
        let stored = digest.to_ascii_lowercase();

        if computed.len() != stored.len() {
            return false;
        }

        // Compare every byte; no early exit on the first difference.
        computed
            .bytes()
            .zip(stored.bytes())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
