//! Notion remote source
//!
//! Implements the [`RemoteSource`](crate::traits::RemoteSource) contract
//! over the Notion HTTP API: one database holds the reading list, another
//! holds the weekly schedule records.

mod client;
mod types;

pub use client::NotionClient;
