//! Readings Core Library
//!
//! Provides the non-UI half of the readings CLI:
//! - Read-through cache service over a local store and a remote source
//! - SQLite article repository
//! - Notion remote source client
//! - Configuration loading and persistence
//!
//! The storage and remote layers are abstracted through traits so the
//! service can be exercised against mocks in tests and swapped out by
//! other frontends.

pub mod config;
pub mod error;
pub mod notion;
pub mod services;
pub mod storage;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use config::Config;
pub use error::{CoreError, CoreResult};
pub use services::ReadingsService;
pub use traits::{RemoteSource, Repository};
pub use types::{Article, Week};
