pub mod generator;

pub use generator::Sha256TokenGenerator;

/// Producer of opaque session identifiers.
pub trait TokenGenerator: Send + Sync + 'static {
    /// Generate a fresh token for the given identity.
    fn generate(&self, seed_identity: &str) -> String;
}
