use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::Argon2Authenticator;
use super::Md5Authenticator;
use super::PasswordAuthenticator;

/// Stored password digest format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    /// Salted Argon2id PHC strings
    #[default]
    Argon2,
    /// Unsalted MD5 hex digests
    Md5,
}

impl PasswordScheme {
    /// Build the authenticator for this scheme.
    pub fn authenticator(self) -> Arc<dyn PasswordAuthenticator> {
        match self {
            PasswordScheme::Argon2 => Arc::new(Argon2Authenticator::new()),
            PasswordScheme::Md5 => Arc::new(Md5Authenticator::new()),
        }
    }
}

impl fmt::Display for PasswordScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordScheme::Argon2 => f.write_str("argon2"),
            PasswordScheme::Md5 => f.write_str("md5"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_config_value() {
        assert_eq!(PasswordScheme::Argon2.to_string(), "argon2");
        assert_eq!(PasswordScheme::Md5.to_string(), "md5");
    }

    #[test]
    fn test_authenticator_matches_scheme() {
        let md5 = PasswordScheme::Md5.authenticator();
        assert_eq!(md5.hash("password").unwrap().len(), 32);

        let argon2 = PasswordScheme::Argon2.authenticator();
        assert!(argon2.hash("password").unwrap().starts_with("$argon2"));
    }
}
