//! Storage and remote source abstraction traits

mod remote_source;
mod repository;

pub use remote_source::RemoteSource;
pub use repository::Repository;
