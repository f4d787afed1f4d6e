//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing behind a pluggable trait (Argon2id, legacy MD5)
//! - Opaque session token generation
//! - Authentication coordination
//!
//! Services own their session storage; this crate only produces and checks
//! secrets.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::{Argon2Authenticator, PasswordAuthenticator};
//!
//! let authenticator = Argon2Authenticator::new();
//! let hash = authenticator.hash("my_password").unwrap();
//! assert!(authenticator.verify("my_password", &hash));
//! ```
//!
//! ## Session Tokens
//! ```
//! use auth::{Sha256TokenGenerator, TokenGenerator};
//!
//! let generator = Sha256TokenGenerator::new();
//! let token = generator.generate("alice");
//! assert_eq!(token.len(), 64);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, PasswordScheme};
//!
//! let auth = Authenticator::new(PasswordScheme::Argon2);
//!
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let result = auth.authenticate("password123", &hash, "alice").unwrap();
//! println!("Token: {}", result.token);
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::Argon2Authenticator;
pub use password::Md5Authenticator;
pub use password::PasswordAuthenticator;
pub use password::PasswordError;
pub use password::PasswordScheme;
pub use token::Sha256TokenGenerator;
pub use token::TokenGenerator;
