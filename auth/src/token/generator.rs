use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use chrono::Utc;
use sha2::Digest;
use sha2::Sha256;
use uuid::Uuid;

use super::TokenGenerator;

/// Hex-encoded SHA-256 session tokens.
///
/// The digest input is the identity, the wall-clock time in nanoseconds,
/// a per-process counter and 128 random bits, so two calls never collide
/// even when the clock does not advance between them.
#[derive(Debug, Default)]
pub struct Sha256TokenGenerator {
    counter: AtomicU64,
}

impl Sha256TokenGenerator {
    /// Length of every generated token in characters.
    pub const TOKEN_LENGTH: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenGenerator for Sha256TokenGenerator {
    fn generate(&self, seed_identity: &str) -> String {
        let now = Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        let sequence = self.counter.fetch_add(1, Ordering::Relaxed);

        let mut hasher = Sha256::new();
        hasher.update(seed_identity.as_bytes());
        hasher.update(nanos.to_be_bytes());
        hasher.update(sequence.to_be_bytes());
        hasher.update(Uuid::new_v4().as_bytes());

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_token_shape() {
        let generator = Sha256TokenGenerator::new();
        let token = generator.generate("alice");

        assert_eq!(token.len(), Sha256TokenGenerator::TOKEN_LENGTH);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_tokens_do_not_repeat_for_same_identity() {
        let generator = Sha256TokenGenerator::new();

        let tokens: HashSet<String> = (0..1_000).map(|_| generator.generate("alice")).collect();
        assert_eq!(tokens.len(), 1_000);
    }

    #[test]
    fn test_tokens_differ_across_identities() {
        let generator = Sha256TokenGenerator::new();
        assert_ne!(generator.generate("alice"), generator.generate("bob"));
    }
}
