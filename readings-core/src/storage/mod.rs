//! Local persistence layer

mod sqlite;

pub use sqlite::SqliteRepository;
