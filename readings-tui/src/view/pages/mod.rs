pub mod detail;
pub mod filter;
pub mod list;
