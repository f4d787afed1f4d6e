pub mod asset;
pub mod health;
pub mod memory;
pub mod session;
pub mod user;

pub use asset::PostgresAssetRepository;
pub use health::PostgresHealthCheck;
pub use memory::InMemoryStore;
pub use session::PostgresSessionRepository;
pub use user::PostgresUserRepository;
