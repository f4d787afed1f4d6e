pub mod asset;
pub mod health;
pub mod login;
pub mod session;
pub mod user;
