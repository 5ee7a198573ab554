pub mod auth;
pub mod config;
pub mod error;
pub mod scoring;
pub mod server;
pub mod store;

pub use auth::{LoginForm, Outcome, SignupForm, View, authenticate, register};
pub use config::Config;
pub use error::UdaanError;
pub use store::{AnyStore, KeyValueStore, MemoryStore, SqliteStore};
